//! Safari window content: a reading list of writing and talks.

use leptos::*;
use shell_ui::{Icon, IconName, IconSize};
use window_contract::{WindowContentContext, WindowModule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Article {
    id: &'static str,
    title: &'static str,
    source: &'static str,
    minutes: u32,
    url: &'static str,
    blurb: &'static str,
}

const READING_LIST: [Article; 4] = [
    Article {
        id: "borrowed-time",
        title: "Borrowed Time: Lifetimes for Web People",
        source: "adrianmercer.dev",
        minutes: 12,
        url: "https://adrianmercer.dev/writing/borrowed-time",
        blurb: "A gentle mapping from component props to borrow semantics.",
    },
    Article {
        id: "signals-not-magic",
        title: "Signals Are Not Magic",
        source: "adrianmercer.dev",
        minutes: 9,
        url: "https://adrianmercer.dev/writing/signals-not-magic",
        blurb: "Tracing one click through a fine-grained reactive runtime.",
    },
    Article {
        id: "wasm-first-year",
        title: "A Year of Shipping WASM to Production",
        source: "conference talk",
        minutes: 25,
        url: "https://adrianmercer.dev/talks/wasm-first-year",
        blurb: "What broke, what did not, and what surprised the team.",
    },
    Article {
        id: "desktop-web",
        title: "Building Desktop Metaphors on the Web",
        source: "adrianmercer.dev",
        minutes: 7,
        url: "https://adrianmercer.dev/writing/desktop-web",
        blurb: "Notes from building the window manager behind this site.",
    },
];

fn reading_minutes_total() -> u32 {
    READING_LIST.iter().map(|article| article.minutes).sum()
}

fn mount(_context: WindowContentContext) -> View {
    view! { <SafariWindow /> }.into_view()
}

/// Content module registered for the browser window.
pub fn module() -> WindowModule {
    WindowModule::new(mount)
}

#[component]
fn SafariWindow() -> impl IntoView {
    view! {
        <div class="app app-safari">
            <div class="safari-toolbar">
                <span class="safari-toolbar-icon" aria-hidden="true">
                    <Icon icon=IconName::Globe size=IconSize::Sm />
                </span>
                <span class="safari-address">"adrianmercer.dev/reading"</span>
            </div>
            <div class="safari-page">
                <h3>"Reading List"</h3>
                <p class="safari-summary">
                    {format!(
                        "{} pieces, about {} minutes of reading.",
                        READING_LIST.len(),
                        reading_minutes_total()
                    )}
                </p>
                <ul class="safari-articles">
                    {READING_LIST
                        .iter()
                        .map(|article| {
                            view! {
                                <li class="safari-article">
                                    <a
                                        href=article.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        title=article.title
                                    >
                                        {article.title}
                                    </a>
                                    <span class="safari-article-meta">
                                        {format!("{} - {} min", article.source, article.minutes)}
                                    </span>
                                    <p class="safari-article-blurb">{article.blurb}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_ids_are_unique() {
        for (i, a) in READING_LIST.iter().enumerate() {
            for b in READING_LIST.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_article_links_over_https() {
        for article in &READING_LIST {
            assert!(article.url.starts_with("https://"), "{}", article.id);
        }
    }

    #[test]
    fn total_reading_time_sums_the_list() {
        assert_eq!(reading_minutes_total(), 12 + 9 + 25 + 7);
    }
}
