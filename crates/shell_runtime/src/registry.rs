//! Static shell configuration: the default window registry and the dock table.
//!
//! Both tables are plain data consumed read-only by the runtime. The site crate
//! injects the registry into [`crate::ShellProvider`]; the dock reads its table
//! directly since dock entries carry no mutable state.

use serde_json::json;
use shell_ui::IconName;

use crate::model::{WindowKind, WindowRegistry, WindowSeed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One dock tile: an activation control for a window, or an inert ornament.
pub struct DockEntry {
    /// Stable entry id, used as the render key.
    pub id: &'static str,
    /// Tooltip / accessible label.
    pub label: &'static str,
    /// Dock tile icon.
    pub icon: IconName,
    /// Window this tile toggles; `None` marks a permanently inert tile.
    pub window: Option<WindowKind>,
}

impl DockEntry {
    /// Whether clicking this tile reaches the window store at all.
    pub const fn can_open(self) -> bool {
        self.window.is_some()
    }
}

const DOCK_ENTRIES: [DockEntry; 8] = [
    DockEntry {
        id: "terminal",
        label: "Terminal",
        icon: IconName::Terminal,
        window: Some(WindowKind::Terminal),
    },
    DockEntry {
        id: "finder",
        label: "Finder",
        icon: IconName::Folder,
        window: Some(WindowKind::Finder),
    },
    DockEntry {
        id: "safari",
        label: "Safari",
        icon: IconName::Globe,
        window: Some(WindowKind::Safari),
    },
    DockEntry {
        id: "resume",
        label: "Resume",
        icon: IconName::DocumentText,
        window: Some(WindowKind::Resume),
    },
    DockEntry {
        id: "text",
        label: "Notes",
        icon: IconName::Notepad,
        window: Some(WindowKind::Text),
    },
    DockEntry {
        id: "image",
        label: "Photos",
        icon: IconName::Photo,
        window: Some(WindowKind::Image),
    },
    DockEntry {
        id: "contact",
        label: "Contact",
        icon: IconName::Mail,
        window: Some(WindowKind::Contact),
    },
    DockEntry {
        id: "trash",
        label: "Trash",
        icon: IconName::Trash,
        window: None,
    },
];

/// The static dock table, in render order.
pub fn dock_entries() -> &'static [DockEntry] {
    &DOCK_ENTRIES
}

/// Default window registry for the portfolio shell: every launchable dock
/// window, with the photo viewer fed through the opaque payload channel.
pub fn default_window_registry() -> WindowRegistry {
    WindowRegistry::new(vec![
        WindowSeed::new(WindowKind::Terminal),
        WindowSeed::new(WindowKind::Finder),
        WindowSeed::new(WindowKind::Safari),
        WindowSeed::new(WindowKind::Resume),
        WindowSeed::new(WindowKind::Text),
        WindowSeed::with_payload(
            WindowKind::Image,
            json!({
                "src": "/images/workspace.jpg",
                "alt": "Home office workspace",
                "caption": "Where most of this site was written."
            }),
        ),
        WindowSeed::new(WindowKind::Contact),
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ShellState;

    #[test]
    fn dock_entry_ids_are_unique() {
        for (i, a) in DOCK_ENTRIES.iter().enumerate() {
            for b in DOCK_ENTRIES.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_launchable_dock_entry_targets_a_registered_window() {
        let state = ShellState::from_registry(&default_window_registry());
        for entry in dock_entries() {
            if let Some(kind) = entry.window {
                assert!(
                    state.window(kind).is_some(),
                    "dock entry `{}` targets an unregistered window",
                    entry.id
                );
            }
        }
    }

    #[test]
    fn trash_is_the_only_inert_entry() {
        let inert: Vec<_> = dock_entries().iter().filter(|e| !e.can_open()).collect();
        assert_eq!(inert.len(), 1);
        assert_eq!(inert[0].id, "trash");
    }
}
