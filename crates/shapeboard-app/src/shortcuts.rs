//! Keyboard and pointer shortcut registry.

/// A shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, description: &'static str) -> Self {
        Self { key, description }
    }
}

/// Registry of all shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Click", "Toggle circle selection"),
            Shortcut::new("Drag", "Move selected circles"),
            Shortcut::new("Backspace", "Delete selected circles"),
        ]
    }

    /// One-line hint for the toolbar.
    pub fn hint() -> String {
        Self::all()
            .iter()
            .map(|s| format!("{}: {}", s.key, s.description.to_lowercase()))
            .collect::<Vec<_>>()
            .join("  ·  ")
    }

    /// Log all shortcuts.
    pub fn log_all() {
        for shortcut in Self::all() {
            log::info!("  {:10} {}", shortcut.key, shortcut.description);
        }
    }
}
