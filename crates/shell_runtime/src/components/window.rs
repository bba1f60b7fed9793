use super::*;
use window_contract::WindowContentContext;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragSession {
    pointer_start: (i32, i32),
    origin: (i32, i32),
}

fn dragged_offset(session: DragSession, pointer: (i32, i32)) -> (i32, i32) {
    (
        session.origin.0 + pointer.0 - session.pointer_start.0,
        session.origin.1 + pointer.1 - session.pointer_start.1,
    )
}

#[component]
/// Frame around one managed window: always mounted, hidden while closed,
/// stacked by the store's z value, and draggable as a whole. Pressing the
/// frame raises it before any drag movement is processed; the window's
/// position is frame-local and never enters the store.
pub(super) fn WindowFrame(kind: WindowKind) -> impl IntoView {
    let runtime = use_shell_runtime();

    let record = Signal::derive(move || runtime.state.get().window(kind).cloned());
    let offset = create_rw_signal((0i32, 0i32));
    let drag = create_rw_signal(None::<DragSession>);

    let begin_drag = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(ShellAction::FocusWindow { kind });
        drag.set(Some(DragSession {
            pointer_start: (ev.client_x(), ev.client_y()),
            origin: offset.get_untracked(),
        }));
    };

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if let Some(session) = drag.get_untracked() {
            offset.set(dragged_offset(session, (ev.client_x(), ev.client_y())));
        }
    });
    on_cleanup(move || move_listener.remove());

    let release_listener = window_event_listener(ev::pointerup, move |_| {
        if drag.get_untracked().is_some() {
            drag.set(None);
        }
    });
    on_cleanup(move || release_listener.remove());

    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        if drag.get_untracked().is_some() {
            drag.set(None);
        }
    });
    on_cleanup(move || cancel_listener.remove());

    // Content mounts once and stays mounted across close/reopen; the payload
    // is fixed at registry time.
    let payload = runtime
        .state
        .get_untracked()
        .window(kind)
        .map(|w| w.payload.clone())
        .unwrap_or(serde_json::Value::Null);
    let content = apps::window_module(kind).mount(WindowContentContext::new(kind.token(), payload));

    let frame_style = move || {
        let (x, y) = offset.get();
        match record.get() {
            Some(window) => format!(
                "display:{};z-index:{};transform:translate3d({}px,{}px,0);",
                if window.is_open { "block" } else { "none" },
                window.z_index,
                x,
                y
            ),
            None => "display:none;".to_string(),
        }
    };

    view! {
        <section
            id=kind.token()
            class="shell-window"
            style=frame_style
            role="dialog"
            aria-label=kind.title()
            on:pointerdown=begin_drag
        >
            <header class="window-header">
                <WindowControls target=kind />
                <h2>{kind.title()}</h2>
            </header>
            <div class="window-body">{content}</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dragged_offset_accumulates_from_the_session_origin() {
        let session = DragSession {
            pointer_start: (10, 10),
            origin: (5, -3),
        };
        assert_eq!(dragged_offset(session, (10, 10)), (5, -3));
        assert_eq!(dragged_offset(session, (35, 50)), (30, 37));
        assert_eq!(dragged_offset(session, (-5, 0)), (-10, -13));
    }
}
