use super::*;

#[component]
/// The traffic-light control cluster rendered in every window header. Only the
/// close control reaches the store; the other two are ornamental.
pub fn WindowControls(
    /// Window the close control targets.
    target: WindowKind,
) -> impl IntoView {
    let runtime = use_shell_runtime();

    let stop_press = move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };
    let close = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(ShellAction::CloseWindow { kind: target });
    };

    view! {
        <div class="window-controls">
            <button
                class="control close"
                aria-label=format!("Close {}", target.title())
                on:pointerdown=stop_press
                on:click=close
            ></button>
            <button class="control minimize" aria-label="Minimize" disabled=true></button>
            <button class="control zoom" aria-label="Zoom" disabled=true></button>
        </div>
    }
}
