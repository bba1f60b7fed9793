//! Runtime provider and context wiring for the portfolio shell.
//!
//! This module owns the long-lived store signal and the dispatch path every UI
//! surface funnels through. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    effect_executor,
    model::{ShellState, WindowRegistry},
    reducer::{reduce_shell, RuntimeEffect, ShellAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`] values.
pub struct ShellRuntimeContext {
    /// Reactive window-manager state signal.
    pub state: RwSignal<ShellState>,
    /// Queue of runtime effects emitted by the reducer and drained by the
    /// effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl ShellRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components.
///
/// The store is constructed here, once, from the injected registry, and lives
/// for the lifetime of the provider. All mutation goes through the dispatch
/// callback; subscribers observe every state change synchronously via the
/// state signal before the next UI event is processed.
pub fn ShellProvider(
    /// Static window registry assembled by the entry layer.
    registry: WindowRegistry,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(ShellState::from_registry(&registry));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: ShellAction| {
        let mut shell = state.get_untracked();
        let previous = shell.clone();

        match reduce_shell(&mut shell, action) {
            Ok(new_effects) => {
                if shell != previous {
                    state.set(shell);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("shell reducer error: {err}"),
        }
    });

    let runtime = ShellRuntimeContext {
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
