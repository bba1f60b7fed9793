//! Finder window content: portfolio folders behind a location sidebar.

use leptos::*;
use shell_ui::{Icon, IconName, IconSize};
use window_contract::{WindowContentContext, WindowModule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FinderEntry {
    name: &'static str,
    kind: &'static str,
    detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Location {
    id: &'static str,
    label: &'static str,
    entries: &'static [FinderEntry],
}

const DEFAULT_LOCATION_ID: &str = "work";

const LOCATIONS: [Location; 3] = [
    Location {
        id: "work",
        label: "Work",
        entries: &[
            FinderEntry {
                name: "orbit-analytics",
                kind: "Folder",
                detail: "Streaming analytics dashboard, 2023-2025",
            },
            FinderEntry {
                name: "ledgerline",
                kind: "Folder",
                detail: "Invoicing platform for freelancers, 2021-2023",
            },
            FinderEntry {
                name: "fieldnotes-api",
                kind: "Folder",
                detail: "Offline-first sync backend, 2020-2021",
            },
        ],
    },
    Location {
        id: "projects",
        label: "Side Projects",
        entries: &[
            FinderEntry {
                name: "tiny-tracer",
                kind: "Rust",
                detail: "Weekend path tracer that got out of hand",
            },
            FinderEntry {
                name: "keyswitch",
                kind: "Rust",
                detail: "Cross-platform hotkey daemon",
            },
            FinderEntry {
                name: "this-site",
                kind: "Rust",
                detail: "The desktop shell you are looking at",
            },
        ],
    },
    Location {
        id: "about",
        label: "About",
        entries: &[
            FinderEntry {
                name: "bio.md",
                kind: "Doc",
                detail: "Short professional biography",
            },
            FinderEntry {
                name: "talks.md",
                kind: "Doc",
                detail: "Conference and meetup appearances",
            },
        ],
    },
];

fn locations() -> &'static [Location] {
    &LOCATIONS
}

fn location_by_id(id: &str) -> Option<&'static Location> {
    locations().iter().find(|location| location.id == id)
}

fn default_location() -> &'static Location {
    location_by_id(DEFAULT_LOCATION_ID).unwrap_or(&locations()[0])
}

fn mount(_context: WindowContentContext) -> View {
    view! { <FinderWindow /> }.into_view()
}

/// Content module registered for the finder window.
pub fn module() -> WindowModule {
    WindowModule::new(mount)
}

#[component]
fn FinderWindow() -> impl IntoView {
    let active_location = create_rw_signal(DEFAULT_LOCATION_ID);
    let current = move || location_by_id(active_location.get()).unwrap_or_else(default_location);

    view! {
        <div class="app app-finder">
            <aside class="finder-sidebar">
                <ul role="listbox" aria-label="Locations">
                    {locations()
                        .iter()
                        .copied()
                        .map(|location| {
                            view! {
                                <li>
                                    <button
                                        class=move || {
                                            if active_location.get() == location.id {
                                                "finder-location selected"
                                            } else {
                                                "finder-location"
                                            }
                                        }
                                        role="option"
                                        aria-selected=move || active_location.get() == location.id
                                        on:click=move |_| active_location.set(location.id)
                                    >
                                        <Icon icon=IconName::Folder size=IconSize::Sm />
                                        <span>{location.label}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </aside>
            <div class="finder-listing">
                <h3>{move || current().label}</h3>
                <ul class="finder-entries">
                    {move || {
                        current()
                            .entries
                            .iter()
                            .map(|entry| {
                                view! {
                                    <li class="finder-entry">
                                        <span class="finder-entry-name">{entry.name}</span>
                                        <span class="finder-entry-kind">{entry.kind}</span>
                                        <span class="finder-entry-detail">{entry.detail}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_location_exists_in_the_table() {
        assert_eq!(default_location().id, DEFAULT_LOCATION_ID);
    }

    #[test]
    fn unknown_location_lookup_is_none() {
        assert!(location_by_id("downloads").is_none());
    }

    #[test]
    fn every_location_has_a_unique_id_and_entries() {
        for (i, a) in LOCATIONS.iter().enumerate() {
            assert!(!a.entries.is_empty());
            for b in LOCATIONS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
