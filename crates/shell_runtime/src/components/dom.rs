//! Internal DOM helpers for window transitions and dock magnification.

use wasm_bindgen::JsCast;

use super::dock::{magnify_lift_px, magnify_scale};

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Restarts the one-shot appearance transition on a window frame element.
pub(crate) fn replay_open_transition(dom_id: &str) {
    let Some(element) = element_by_id(dom_id) else {
        return;
    };
    let class_list = element.class_list();
    let _ = class_list.remove_1("window-opening");
    if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
        // Reading layout between the class toggles restarts the CSS animation.
        let _ = html.offset_width();
    }
    let _ = class_list.add_1("window-opening");
}

/// Applies proximity scale/lift to every dock tile for the given cursor x position.
pub(crate) fn magnify_dock_tiles(container_id: &str, cursor_x: f64) {
    let Some(container) = element_by_id(container_id) else {
        return;
    };
    let tiles = container.children();
    for index in 0..tiles.length() {
        let Some(tile) = tiles.item(index) else {
            continue;
        };
        let rect = tile.get_bounding_client_rect();
        let center = rect.left() + rect.width() / 2.0;
        let distance = cursor_x - center;
        let Ok(tile) = tile.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let _ = tile.style().set_property(
            "transform",
            &format!(
                "translateY({:.1}px) scale({:.3})",
                magnify_lift_px(distance),
                magnify_scale(distance)
            ),
        );
    }
}

/// Clears proximity scale/lift from every dock tile.
pub(crate) fn reset_dock_tiles(container_id: &str) {
    let Some(container) = element_by_id(container_id) else {
        return;
    };
    let tiles = container.children();
    for index in 0..tiles.length() {
        let Some(tile) = tiles.item(index) else {
            continue;
        };
        let Ok(tile) = tile.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let _ = tile.style().remove_property("transform");
    }
}
