use super::*;
use crate::{model::ShellState, registry::DockEntry};

/// Extra scale a tile gains when the cursor sits exactly over its center.
pub(crate) const MAGNIFY_MAX_BOOST: f64 = 0.25;
/// Upward lift (px) a tile gains at full magnification intensity.
pub(crate) const MAGNIFY_MAX_LIFT_PX: f64 = 6.0;
const MAGNIFY_FALLOFF: f64 = 20_000.0;

/// Magnification intensity in `[0, 1]` for a cursor this many px from a tile center.
pub(crate) fn magnify_intensity(distance_px: f64) -> f64 {
    (-(distance_px.abs().powf(2.5)) / MAGNIFY_FALLOFF).exp()
}

/// Tile scale for a cursor this many px from the tile center.
pub(crate) fn magnify_scale(distance_px: f64) -> f64 {
    1.0 + MAGNIFY_MAX_BOOST * magnify_intensity(distance_px)
}

/// Tile vertical lift (negative: up) for a cursor this many px from the tile center.
pub(crate) fn magnify_lift_px(distance_px: f64) -> f64 {
    -MAGNIFY_MAX_LIFT_PX * magnify_intensity(distance_px)
}

/// Dock click decision: open when closed, close when open.
pub(crate) fn toggle_action(state: &ShellState, kind: WindowKind) -> ShellAction {
    if state.is_open(kind) {
        ShellAction::CloseWindow { kind }
    } else {
        ShellAction::OpenWindow { kind }
    }
}

fn dock_tile_class(is_open: bool, inert: bool) -> &'static str {
    match (inert, is_open) {
        (true, _) => "dock-tile inert",
        (false, true) => "dock-tile open",
        (false, false) => "dock-tile",
    }
}

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        dom::magnify_dock_tiles("dock-tiles", ev.client_x() as f64);
    };
    let on_mouseleave = move |_| {
        dom::reset_dock_tiles("dock-tiles");
    };

    view! {
        <footer class="dock" role="toolbar" aria-label="Application dock">
            <ul
                id="dock-tiles"
                class="dock-tiles"
                on:mousemove=on_mousemove
                on:mouseleave=on_mouseleave
            >
                <For
                    each=move || registry::dock_entries().to_vec()
                    key=|entry| entry.id
                    let:entry
                >
                    <DockTile entry=entry state=state />
                </For>
            </ul>
        </footer>
    }
}

#[component]
fn DockTile(entry: DockEntry, state: RwSignal<ShellState>) -> impl IntoView {
    let runtime = use_shell_runtime();
    let is_open = move || {
        entry
            .window
            .map(|kind| state.get().is_open(kind))
            .unwrap_or(false)
    };

    view! {
        <li class=move || dock_tile_class(is_open(), !entry.can_open())>
            <button
                class="dock-tile-button"
                title=entry.label
                aria-label=entry.label
                aria-disabled=(!entry.can_open()).then_some("true")
                aria-pressed=is_open
                on:click=move |_| {
                    let Some(kind) = entry.window else {
                        return;
                    };
                    let action = toggle_action(&state.get_untracked(), kind);
                    runtime.dispatch_action(action);
                }
            >
                <span class="dock-tile-icon" aria-hidden="true">
                    <Icon icon=entry.icon size=IconSize::Lg />
                </span>
                <span class="visually-hidden">{entry.label}</span>
            </button>
            <span class="dock-tile-dot" aria-hidden="true"></span>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowRegistry, WindowSeed};
    use crate::reducer::reduce_shell;

    #[test]
    fn magnification_peaks_at_the_tile_center_and_decays() {
        assert_eq!(magnify_intensity(0.0), 1.0);
        assert_eq!(magnify_scale(0.0), 1.0 + MAGNIFY_MAX_BOOST);
        assert_eq!(magnify_lift_px(0.0), -MAGNIFY_MAX_LIFT_PX);

        let mut previous = magnify_intensity(0.0);
        for distance in [10.0, 50.0, 100.0, 400.0] {
            let intensity = magnify_intensity(distance);
            assert!(intensity < previous);
            previous = intensity;
        }
        assert!(magnify_intensity(1000.0) < 0.01);
    }

    #[test]
    fn magnification_is_symmetric_around_the_center() {
        assert_eq!(magnify_intensity(-50.0), magnify_intensity(50.0));
        assert_eq!(magnify_scale(-120.0), magnify_scale(120.0));
    }

    #[test]
    fn dock_click_toggles_between_open_and_close() {
        let mut state = ShellState::from_registry(&WindowRegistry::new(vec![WindowSeed::new(
            WindowKind::Terminal,
        )]));

        let first = toggle_action(&state, WindowKind::Terminal);
        assert_eq!(
            first,
            ShellAction::OpenWindow {
                kind: WindowKind::Terminal
            }
        );
        reduce_shell(&mut state, first).expect("open");

        let second = toggle_action(&state, WindowKind::Terminal);
        assert_eq!(
            second,
            ShellAction::CloseWindow {
                kind: WindowKind::Terminal
            }
        );
    }

    #[test]
    fn tile_classes_track_open_and_inert_states() {
        assert_eq!(dock_tile_class(false, false), "dock-tile");
        assert_eq!(dock_tile_class(true, false), "dock-tile open");
        assert_eq!(dock_tile_class(false, true), "dock-tile inert");
    }
}
