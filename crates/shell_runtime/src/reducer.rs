//! Reducer actions, side-effect intents, and transition logic for the window shell.

use thiserror::Error;

use crate::model::{ShellState, WindowKind, WindowRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by [`reduce_shell`] to mutate [`ShellState`].
pub enum ShellAction {
    /// Open a window and raise it to the top of the stack.
    OpenWindow {
        /// Window to open.
        kind: WindowKind,
    },
    /// Close a window, leaving its stacking value untouched.
    CloseWindow {
        /// Window to close.
        kind: WindowKind,
    },
    /// Raise an open window to the top of the stack.
    FocusWindow {
        /// Window to focus.
        kind: WindowKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_shell`] for the shell to execute
/// after the state change has been published.
pub enum RuntimeEffect {
    /// Replay the one-shot appearance transition for a window that just
    /// flipped from closed to open.
    PlayOpenTransition(WindowKind),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions referencing a window the registry never seeded.
pub enum ReducerError {
    /// The target window kind is not managed by this store.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`ShellAction`] to the shell state and collects resulting side effects.
///
/// Stacking values come from a strictly increasing counter: the Nth successful
/// open/focus across the store's lifetime receives a greater `z_index` than the
/// (N-1)th, and closed windows keep their last value so a reopen always lands
/// back on top. Focus requests for closed windows are ignored without error.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when the action references an
/// unregistered window; the state is left untouched.
pub fn reduce_shell(
    state: &mut ShellState,
    action: ShellAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        ShellAction::OpenWindow { kind } => {
            let raised = state.next_z_index;
            let window = find_window_mut(state, kind)?;
            let was_open = window.is_open;
            window.is_open = true;
            window.z_index = raised;
            state.next_z_index = raised.saturating_add(1);
            if !was_open {
                effects.push(RuntimeEffect::PlayOpenTransition(kind));
            }
        }
        ShellAction::CloseWindow { kind } => {
            let window = find_window_mut(state, kind)?;
            window.is_open = false;
        }
        ShellAction::FocusWindow { kind } => {
            let raised = state.next_z_index;
            let window = find_window_mut(state, kind)?;
            if !window.is_open {
                return Ok(effects);
            }
            window.z_index = raised;
            state.next_z_index = raised.saturating_add(1);
        }
    }

    Ok(effects)
}

fn find_window_mut(
    state: &mut ShellState,
    kind: WindowKind,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.kind == kind)
        .ok_or(ReducerError::WindowNotFound)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowRegistry, WindowSeed, INITIAL_Z_INDEX};

    fn two_window_state() -> ShellState {
        ShellState::from_registry(&WindowRegistry::new(vec![
            WindowSeed::new(WindowKind::Terminal),
            WindowSeed::new(WindowKind::Finder),
        ]))
    }

    fn open(state: &mut ShellState, kind: WindowKind) -> Vec<RuntimeEffect> {
        reduce_shell(state, ShellAction::OpenWindow { kind }).expect("open window")
    }

    #[test]
    fn open_window_sets_flag_and_takes_the_next_stacking_value() {
        let mut state = two_window_state();
        let expected_z = state.next_z_index();

        open(&mut state, WindowKind::Terminal);

        let terminal = state.window(WindowKind::Terminal).unwrap();
        assert!(terminal.is_open);
        assert_eq!(terminal.z_index, expected_z);
        assert_eq!(state.next_z_index(), expected_z + 1);
    }

    #[test]
    fn close_window_clears_flag_and_keeps_stacking_value() {
        let mut state = two_window_state();
        open(&mut state, WindowKind::Terminal);
        let z_before = state.window(WindowKind::Terminal).unwrap().z_index;
        let counter_before = state.next_z_index();

        reduce_shell(
            &mut state,
            ShellAction::CloseWindow {
                kind: WindowKind::Terminal,
            },
        )
        .expect("close window");

        let terminal = state.window(WindowKind::Terminal).unwrap();
        assert!(!terminal.is_open);
        assert_eq!(terminal.z_index, z_before);
        assert_eq!(state.next_z_index(), counter_before);
    }

    #[test]
    fn focus_raises_an_open_window_above_later_opens() {
        let mut state = two_window_state();
        open(&mut state, WindowKind::Terminal);
        open(&mut state, WindowKind::Finder);

        assert_eq!(
            state.window(WindowKind::Terminal).unwrap().z_index,
            INITIAL_Z_INDEX + 1
        );
        assert_eq!(
            state.window(WindowKind::Finder).unwrap().z_index,
            INITIAL_Z_INDEX + 2
        );
        assert_eq!(state.next_z_index(), INITIAL_Z_INDEX + 3);

        reduce_shell(
            &mut state,
            ShellAction::FocusWindow {
                kind: WindowKind::Terminal,
            },
        )
        .expect("focus window");

        assert_eq!(
            state.window(WindowKind::Terminal).unwrap().z_index,
            INITIAL_Z_INDEX + 3
        );
        assert_eq!(state.next_z_index(), INITIAL_Z_INDEX + 4);
        assert_eq!(state.topmost_open(), Some(WindowKind::Terminal));
    }

    #[test]
    fn focusing_a_closed_window_changes_nothing() {
        let mut state = two_window_state();
        let before = state.clone();

        let effects = reduce_shell(
            &mut state,
            ShellAction::FocusWindow {
                kind: WindowKind::Terminal,
            },
        )
        .expect("focus closed window");

        assert_eq!(effects, Vec::new());
        assert_eq!(state, before);
    }

    #[test]
    fn unregistered_window_is_rejected_without_touching_state() {
        let mut state = two_window_state();
        let before = state.clone();

        for action in [
            ShellAction::OpenWindow {
                kind: WindowKind::Contact,
            },
            ShellAction::CloseWindow {
                kind: WindowKind::Contact,
            },
            ShellAction::FocusWindow {
                kind: WindowKind::Contact,
            },
        ] {
            assert_eq!(
                reduce_shell(&mut state, action),
                Err(ReducerError::WindowNotFound)
            );
            assert_eq!(state, before);
        }
    }

    #[test]
    fn reopening_never_reuses_an_old_stacking_value() {
        let mut state = two_window_state();
        open(&mut state, WindowKind::Terminal);
        let first_z = state.window(WindowKind::Terminal).unwrap().z_index;

        reduce_shell(
            &mut state,
            ShellAction::CloseWindow {
                kind: WindowKind::Terminal,
            },
        )
        .expect("close window");
        open(&mut state, WindowKind::Terminal);

        let reopened_z = state.window(WindowKind::Terminal).unwrap().z_index;
        assert!(reopened_z > first_z);
    }

    #[test]
    fn closing_an_already_closed_window_is_idempotent() {
        let mut state = two_window_state();
        open(&mut state, WindowKind::Terminal);
        reduce_shell(
            &mut state,
            ShellAction::CloseWindow {
                kind: WindowKind::Terminal,
            },
        )
        .expect("first close");
        let after_first = state.clone();

        reduce_shell(
            &mut state,
            ShellAction::CloseWindow {
                kind: WindowKind::Terminal,
            },
        )
        .expect("second close");

        assert_eq!(state, after_first);
    }

    #[test]
    fn open_transition_effect_fires_only_on_the_closed_to_open_flip() {
        let mut state = two_window_state();

        let effects = open(&mut state, WindowKind::Finder);
        assert_eq!(
            effects,
            vec![RuntimeEffect::PlayOpenTransition(WindowKind::Finder)]
        );

        let effects = open(&mut state, WindowKind::Finder);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn counter_increments_by_one_per_successful_open_or_focus() {
        let mut state = two_window_state();
        let start = state.next_z_index();

        open(&mut state, WindowKind::Terminal);
        open(&mut state, WindowKind::Finder);
        reduce_shell(
            &mut state,
            ShellAction::FocusWindow {
                kind: WindowKind::Terminal,
            },
        )
        .expect("focus");
        reduce_shell(
            &mut state,
            ShellAction::CloseWindow {
                kind: WindowKind::Finder,
            },
        )
        .expect("close");

        assert_eq!(state.next_z_index(), start + 3);
    }
}
