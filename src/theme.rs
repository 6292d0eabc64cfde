use crate::storage::{PreferenceStore, StorageError};
use crate::types::ThemeMode;

pub const THEME_KEY: &str = "theme";

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_label: "Chuyển sang giao diện tối",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_label: "Chuyển sang giao diện sáng",
        },
    }
}

/// Read the saved theme; anything missing or unrecognized falls back to light.
pub fn load_theme(store: &dyn PreferenceStore) -> ThemeMode {
    store
        .get(THEME_KEY)
        .and_then(|raw| ThemeMode::parse(&raw))
        .unwrap_or_default()
}

pub fn save_theme(store: &dyn PreferenceStore, mode: ThemeMode) -> Result<(), StorageError> {
    store.set(THEME_KEY, mode.as_str())
}

pub fn toggle_theme(store: &dyn PreferenceStore, current: ThemeMode) -> ThemeMode {
    let next = current.toggle();
    if let Err(err) = save_theme(store, next) {
        tracing::error!("Failed to save theme preference: {}", err);
    }
    next
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f7f9fc;
    --color-bg-secondary: #ffffff;
    --color-bg-overlay: rgba(255, 255, 255, 0.85);
    --color-text-primary: #1a2433;
    --color-text-muted: #5b6778;
    --color-accent: #005a9e;
    --color-accent-contrast: #ffffff;
    --color-border: #d8dee8;
    --color-navbar-bg: rgba(247, 249, 252, 0.9);
    --color-card-bg: #ffffff;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #005a9e;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #eef2f7;
    --color-chat-bot-text: #1a2433;
    --color-footer-bg: #eef2f7;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0d1117;
    --color-bg-secondary: #161b22;
    --color-bg-overlay: rgba(13, 17, 23, 0.88);
    --color-text-primary: #e6edf3;
    --color-text-muted: #9aa6b2;
    --color-accent: #4ea3e6;
    --color-accent-contrast: #0d1117;
    --color-border: #30363d;
    --color-navbar-bg: rgba(13, 17, 23, 0.9);
    --color-card-bg: #161b22;
    --color-input-bg: #0d1117;
    --color-chat-user-bg: #4ea3e6;
    --color-chat-user-text: #0d1117;
    --color-chat-bot-bg: #1c232c;
    --color-chat-bot-text: #e6edf3;
    --color-footer-bg: #161b22;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;
