//! Shell UI composition and interaction surfaces.

mod controls;
mod dock;
pub(crate) mod dom;
mod navbar;
mod window;

use leptos::*;
use shell_ui::{Icon, IconName, IconSize};

use self::{dock::Dock, navbar::MenuBar, window::WindowFrame};
use crate::{
    apps,
    model::WindowKind,
    reducer::ShellAction,
    registry,
    runtime_context::use_shell_runtime,
};

pub use self::controls::WindowControls;
pub use crate::runtime_context::{ShellProvider, ShellRuntimeContext};

#[component]
/// Renders the full desktop shell: menu bar, desktop layer with every managed
/// window mounted, and the dock.
///
/// `children` become the desktop backdrop content rendered beneath the windows
/// (the site drops its welcome hero in here). Which windows exist is read once:
/// the managed set is fixed after the provider builds the store.
pub fn DesktopShell(children: Children) -> impl IntoView {
    let runtime = use_shell_runtime();
    let kinds: Vec<WindowKind> = runtime
        .state
        .get_untracked()
        .windows()
        .iter()
        .map(|w| w.kind)
        .collect();

    view! {
        <MenuBar />
        <section class="desktop-backdrop">{children()}</section>
        <section class="desktop-window-layer">
            {kinds
                .into_iter()
                .map(|kind| view! { <WindowFrame kind=kind /> })
                .collect_view()}
        </section>
        <Dock />
    }
}
