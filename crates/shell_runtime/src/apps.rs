//! Window content registry mapping each managed window kind to its content crate.

use window_contract::WindowModule;

use crate::model::WindowKind;

/// Returns the content module mounted inside a window of the given kind.
pub fn window_module(kind: WindowKind) -> WindowModule {
    match kind {
        WindowKind::Terminal => shell_app_terminal::module(),
        WindowKind::Finder => shell_app_finder::module(),
        WindowKind::Safari => shell_app_safari::module(),
        WindowKind::Resume => shell_app_resume::module(),
        WindowKind::Text => shell_app_text::module(),
        WindowKind::Image => shell_app_image::module(),
        WindowKind::Contact => shell_app_contact::module(),
    }
}
