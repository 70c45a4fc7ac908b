use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout class derived from the viewport width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Desktop,
    Tablet,
    Mobile,
}

impl ViewportClass {
    /// Lowercase name reported in telemetry attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportClass::Desktop => "desktop",
            ViewportClass::Tablet => "tablet",
            ViewportClass::Mobile => "mobile",
        }
    }
}

impl fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SimRunState {
    #[default]
    Idle,
    Starting,
    Running,
}

/// Snapshot of host editor/session state, taken fresh for every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarState {
    pub home: bool,
    pub editor_active: bool,
    pub saving: bool,
    pub compiling: bool,
    pub controller: bool,
    pub read_only: bool,
    pub tutorial: bool,
    pub debugging: bool,
    pub sim_state: SimRunState,
    /// Host's "collapse editor tools" flag, before tutorial/headless adjustment.
    pub collapsed: bool,
    pub hide_editor_floats: bool,
    pub tracing: bool,
    pub has_undo: bool,
    pub has_redo: bool,
    /// Host is running on iOS or macOS.
    pub apple_platform: bool,
    pub project_name: Option<String>,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self {
            home: false,
            editor_active: true,
            saving: false,
            compiling: false,
            controller: false,
            read_only: false,
            tutorial: false,
            debugging: false,
            sim_state: SimRunState::Idle,
            collapsed: false,
            hide_editor_floats: false,
            tracing: false,
            has_undo: false,
            has_redo: false,
            apple_platform: false,
            project_name: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadTargets {
    pub hex: bool,
    pub png: bool,
    pub uf2: bool,
}

impl DownloadTargets {
    pub fn any(&self) -> bool {
        self.hex || self.png || self.uf2
    }
}

/// Theme and target capabilities. Passed into the layout explicitly so the
/// toolbar never reaches for global configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarCapabilities {
    /// False when the theme moves saving into the menu.
    pub can_save: bool,
    pub hide_project_rename: bool,
    pub download: DownloadTargets,
    pub download_icon: String,
    pub use_upload_message: bool,
    pub board_name: String,
    /// The compile configuration declares a hardware target.
    pub hardware_select: bool,
    pub hardware_name: Option<String>,
    pub big_run_button: bool,
    pub trace: bool,
    pub debugger: bool,
    pub github: bool,
    pub headless_simulator: bool,
    pub disable_file_access_on_apple: bool,
}

impl Default for ToolbarCapabilities {
    fn default() -> Self {
        Self {
            can_save: true,
            hide_project_rename: false,
            download: DownloadTargets {
                hex: true,
                png: false,
                uf2: false,
            },
            download_icon: "download".to_string(),
            use_upload_message: false,
            board_name: "device".to_string(),
            hardware_select: false,
            hardware_name: None,
            big_run_button: false,
            trace: false,
            debugger: false,
            github: false,
            headless_simulator: false,
            disable_file_access_on_apple: false,
        }
    }
}

/// What a toolbar control asks the host to do when activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolbarAction {
    Rename(String),
    Compile,
    Save,
    Undo,
    Redo,
    ZoomIn,
    ZoomOut,
    ToggleRun,
    ToggleTrace,
    ToggleDebug,
    ChooseHardware,
    OpenGithub,
}
