// Toolbar colours and the stylesheet derived from them
use serde::{Deserialize, Serialize};

use crate::state::app_state::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub disabled: String,
}

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::default_dark(),
            Theme::Light => Self::default_light(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            primary: "#007acc".to_string(),
            secondary: "#565656".to_string(),
            accent: "#26a69a".to_string(),
            disabled: "#3a3a3a".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#000000".to_string(),
            primary: "#007acc".to_string(),
            secondary: "#e0e0e0".to_string(),
            accent: "#009688".to_string(),
            disabled: "#f0f0f0".to_string(),
        }
    }

    pub fn stylesheet(&self) -> String {
        format!(
            r#"
body {{ margin: 0; background: {bg}; color: {fg}; font-family: sans-serif; }}
.grid {{ display: flex; flex-wrap: wrap; justify-content: space-between; padding: 8px; }}
.grid.twoRow {{ flex-direction: column; gap: 8px; }}
.buttons {{ display: inline-flex; margin-left: 6px; }}
.editortools-btn {{ background: {secondary}; color: {fg}; border: none; border-radius: 4px; margin: 2px; padding: 6px 10px; cursor: pointer; }}
.editortools-btn.large {{ padding: 10px 14px; }}
.editortools-btn.huge {{ padding: 12px 20px; font-size: 1.2em; }}
.editortools-btn.download, .editortools-btn.runmenubtn {{ background: {primary}; }}
.editortools-btn.save {{ background: {accent}; }}
.editortools-btn.disabled {{ background: {disabled}; cursor: default; opacity: 0.6; }}
.editortools-btn.loading::after {{ content: " …"; }}
.projectname-input input {{ padding: 6px; border-radius: 4px; border: 1px solid {secondary}; }}
.accessible-hidden {{ position: absolute; left: -9999px; }}
"#,
            bg = self.background,
            fg = self.foreground,
            primary = self.primary,
            secondary = self.secondary,
            accent = self.accent,
            disabled = self.disabled,
        )
    }
}
