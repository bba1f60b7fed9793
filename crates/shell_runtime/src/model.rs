use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stacking value every registered window starts from; the store hands out
/// strictly greater values from the first open onwards.
pub const INITIAL_Z_INDEX: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Fixed set of windows the shell can manage. Kinds are never created or
/// destroyed at runtime; which of them exist is decided by the registry.
pub enum WindowKind {
    Terminal,
    Finder,
    Safari,
    Resume,
    Text,
    Image,
    Contact,
}

impl WindowKind {
    /// Display title shown in the window header.
    pub fn title(self) -> &'static str {
        match self {
            Self::Terminal => "Terminal",
            Self::Finder => "Finder",
            Self::Safari => "Safari",
            Self::Resume => "Resume",
            Self::Text => "README.md",
            Self::Image => "Photos",
            Self::Contact => "Contact Me",
        }
    }

    /// Stable lowercase token, also used as the frame's DOM id.
    pub fn token(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Finder => "finder",
            Self::Safari => "safari",
            Self::Resume => "resume",
            Self::Text => "text",
            Self::Image => "image",
            Self::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Per-window managed state.
pub struct WindowRecord {
    /// Which window this record tracks.
    pub kind: WindowKind,
    /// Whether the window is currently visible.
    pub is_open: bool,
    /// Stacking order; higher draws on top.
    pub z_index: i32,
    /// Opaque registry payload passed through to the content crate.
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One registry entry: a window the shell should manage, plus its content payload.
pub struct WindowSeed {
    /// Window to register.
    pub kind: WindowKind,
    /// Opaque payload handed to the content crate at mount time.
    pub payload: Value,
}

impl WindowSeed {
    /// Seeds a window with no payload.
    pub fn new(kind: WindowKind) -> Self {
        Self {
            kind,
            payload: Value::Null,
        }
    }

    /// Seeds a window with a content payload.
    pub fn with_payload(kind: WindowKind, payload: Value) -> Self {
        Self { kind, payload }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
/// Static window registry consumed once at store construction.
pub struct WindowRegistry {
    /// Ordered window seeds; duplicates are collapsed to the first occurrence.
    pub seeds: Vec<WindowSeed>,
}

impl WindowRegistry {
    /// Creates a registry from an ordered seed list.
    pub fn new(seeds: Vec<WindowSeed>) -> Self {
        Self { seeds }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Authoritative window-manager state. The record list is fixed at
/// construction and only the reducer mutates it.
pub struct ShellState {
    pub(crate) windows: Vec<WindowRecord>,
    pub(crate) next_z_index: i32,
}

impl ShellState {
    /// Builds the initial state from a registry: every seeded window exists
    /// exactly once, closed, at [`INITIAL_Z_INDEX`].
    pub fn from_registry(registry: &WindowRegistry) -> Self {
        let mut windows: Vec<WindowRecord> = Vec::with_capacity(registry.seeds.len());
        for seed in &registry.seeds {
            if windows.iter().any(|w| w.kind == seed.kind) {
                continue;
            }
            windows.push(WindowRecord {
                kind: seed.kind,
                is_open: false,
                z_index: INITIAL_Z_INDEX,
                payload: seed.payload.clone(),
            });
        }
        Self {
            windows,
            next_z_index: INITIAL_Z_INDEX.saturating_add(1),
        }
    }

    /// Read-only view of all managed windows, in registry order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Next stacking value the store will assign.
    pub fn next_z_index(&self) -> i32 {
        self.next_z_index
    }

    /// Looks up the record for a window kind.
    pub fn window(&self, kind: WindowKind) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.kind == kind)
    }

    /// Whether a window is currently open; unregistered kinds read as closed.
    pub fn is_open(&self, kind: WindowKind) -> bool {
        self.window(kind).map(|w| w.is_open).unwrap_or(false)
    }

    /// The open window currently stacked on top, if any.
    pub fn topmost_open(&self) -> Option<WindowKind> {
        self.windows
            .iter()
            .filter(|w| w.is_open)
            .max_by_key(|w| w.z_index)
            .map(|w| w.kind)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn registry_builds_one_closed_record_per_seed() {
        let registry = WindowRegistry::new(vec![
            WindowSeed::new(WindowKind::Terminal),
            WindowSeed::new(WindowKind::Finder),
            WindowSeed::with_payload(WindowKind::Image, json!({ "src": "/images/desk.jpg" })),
        ]);
        let state = ShellState::from_registry(&registry);

        assert_eq!(state.windows().len(), 3);
        for window in state.windows() {
            assert!(!window.is_open);
            assert_eq!(window.z_index, INITIAL_Z_INDEX);
        }
        assert_eq!(state.next_z_index(), INITIAL_Z_INDEX + 1);
        assert_eq!(
            state.window(WindowKind::Image).unwrap().payload["src"],
            "/images/desk.jpg"
        );
    }

    #[test]
    fn duplicate_seeds_collapse_to_the_first() {
        let registry = WindowRegistry::new(vec![
            WindowSeed::with_payload(WindowKind::Text, json!({ "v": 1 })),
            WindowSeed::with_payload(WindowKind::Text, json!({ "v": 2 })),
        ]);
        let state = ShellState::from_registry(&registry);

        assert_eq!(state.windows().len(), 1);
        assert_eq!(state.window(WindowKind::Text).unwrap().payload["v"], 1);
    }

    #[test]
    fn unregistered_kind_reads_as_absent_and_closed() {
        let registry = WindowRegistry::new(vec![WindowSeed::new(WindowKind::Terminal)]);
        let state = ShellState::from_registry(&registry);

        assert_eq!(state.window(WindowKind::Contact), None);
        assert!(!state.is_open(WindowKind::Contact));
        assert_eq!(state.topmost_open(), None);
    }
}
