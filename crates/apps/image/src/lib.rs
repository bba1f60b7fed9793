//! Photo viewer window content, fed from the opaque registry payload.
//!
//! The shell passes the registry payload through untouched; this crate is the
//! only place that gives it a shape (`src`, `alt`, optional `caption`).

use leptos::*;
use window_contract::{WindowContentContext, WindowModule};

const FALLBACK_SRC: &str = "/images/placeholder.jpg";
const FALLBACK_ALT: &str = "Placeholder photo";

#[derive(Debug, Clone, PartialEq, Eq)]
struct PhotoSource {
    src: String,
    alt: String,
    caption: Option<String>,
}

fn photo_source(context: &WindowContentContext) -> PhotoSource {
    PhotoSource {
        src: context
            .payload_str("src")
            .unwrap_or(FALLBACK_SRC)
            .to_string(),
        alt: context
            .payload_str("alt")
            .unwrap_or(FALLBACK_ALT)
            .to_string(),
        caption: context.payload_str("caption").map(str::to_string),
    }
}

fn mount(context: WindowContentContext) -> View {
    let photo = photo_source(&context);
    view! { <ImageWindow photo=photo /> }.into_view()
}

/// Content module registered for the photo viewer window.
pub fn module() -> WindowModule {
    WindowModule::new(mount)
}

#[component]
fn ImageWindow(photo: PhotoSource) -> impl IntoView {
    view! {
        <figure class="app app-image">
            <img class="image-photo" src=photo.src alt=photo.alt />
            {photo
                .caption
                .map(|caption| view! { <figcaption class="image-caption">{caption}</figcaption> })}
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn payload_fields_drive_the_photo_source() {
        let context = WindowContentContext::new(
            "image",
            json!({ "src": "/images/desk.jpg", "alt": "Desk", "caption": "My desk" }),
        );
        let photo = photo_source(&context);
        assert_eq!(photo.src, "/images/desk.jpg");
        assert_eq!(photo.alt, "Desk");
        assert_eq!(photo.caption.as_deref(), Some("My desk"));
    }

    #[test]
    fn null_payload_falls_back_to_the_placeholder() {
        let context = WindowContentContext::new("image", Value::Null);
        let photo = photo_source(&context);
        assert_eq!(photo.src, FALLBACK_SRC);
        assert_eq!(photo.alt, FALLBACK_ALT);
        assert_eq!(photo.caption, None);
    }

    #[test]
    fn caption_is_optional() {
        let context = WindowContentContext::new("image", json!({ "src": "/images/desk.jpg" }));
        assert_eq!(photo_source(&context).caption, None);
    }
}
