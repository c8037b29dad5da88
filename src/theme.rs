use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub root_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            root_class: "theme-light",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            root_class: "theme-dark",
        },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #fafafa;
    --color-bg-secondary: #ffffff;
    --color-bg-overlay: rgba(255, 255, 255, 0.85);
    --color-text-primary: #18181b;
    --color-text-muted: #71717a;
    --color-border: #e4e4e7;
    --color-surface-muted: #f4f4f5;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #18181b;
    --color-chat-user-text: #fafafa;
    --color-chat-assistant-bg: #ffffff;
    --color-chat-assistant-text: #18181b;
    --color-accent: #10b981;
    --color-danger: #ef4444;
    --color-mesh: #71717a;
    --color-timestamp: #a1a1aa;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.banner, .dock { background: var(--color-bg-overlay); border-color: var(--color-border); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-border); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #09090b;
    --color-bg-secondary: #18181b;
    --color-bg-overlay: rgba(9, 9, 11, 0.85);
    --color-text-primary: #fafafa;
    --color-text-muted: #a1a1aa;
    --color-border: #27272a;
    --color-surface-muted: #27272a;
    --color-input-bg: #18181b;
    --color-chat-user-bg: #fafafa;
    --color-chat-user-text: #09090b;
    --color-chat-assistant-bg: #18181b;
    --color-chat-assistant-text: #fafafa;
    --color-accent: #34d399;
    --color-danger: #f87171;
    --color-mesh: #a1a1aa;
    --color-timestamp: #71717a;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.banner, .dock { background: var(--color-bg-overlay); border-color: var(--color-border); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-border); }
"#;
