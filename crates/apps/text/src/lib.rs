//! Notes window content: the README-style about document.

use leptos::*;
use window_contract::{WindowContentContext, WindowModule};

const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Hi, I'm Adrian. This site is a small desktop operating system that runs \
     entirely in your browser tab: the dock launches windows, windows drag \
     and stack, and nothing survives a reload on purpose.",
    "Under the hood it is a Rust workspace compiled to WebAssembly. A single \
     reducer owns which windows are open and how they stack; everything else \
     subscribes and redraws.",
    "If something here breaks, the Trash icon is decorative and will not \
     help. The Contact window will.",
];

fn mount(_context: WindowContentContext) -> View {
    view! { <TextWindow /> }.into_view()
}

/// Content module registered for the notes window.
pub fn module() -> WindowModule {
    WindowModule::new(mount)
}

#[component]
fn TextWindow() -> impl IntoView {
    view! {
        <div class="app app-text">
            <h3>"README.md"</h3>
            {ABOUT_PARAGRAPHS
                .iter()
                .map(|paragraph| view! { <p>{*paragraph}</p> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_document_is_populated() {
        for paragraph in &ABOUT_PARAGRAPHS {
            assert!(!paragraph.trim().is_empty());
        }
    }
}
