//! Declarative description of a rendered toolbar.
//!
//! A `ToolbarLayout` is what the layout function hands to a renderer: which
//! controls exist, how large they are, whether they can be activated, and the
//! action each one emits. Renderers never decide visibility on their own.

use serde::{Deserialize, Serialize};

use crate::models::{ToolbarAction, ViewportClass};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Download,
    Hardware,
    Save,
    Github,
    Undo,
    Redo,
    ZoomOut,
    ZoomIn,
    Trace,
    Debug,
    Run,
}

impl ControlKind {
    /// The control kind that emits `action`. Renames come from the name
    /// input rather than a button, so they have none.
    pub fn for_action(action: &ToolbarAction) -> Option<Self> {
        match action {
            ToolbarAction::Rename(_) => None,
            ToolbarAction::Compile => Some(ControlKind::Download),
            ToolbarAction::Save => Some(ControlKind::Save),
            ToolbarAction::Undo => Some(ControlKind::Undo),
            ToolbarAction::Redo => Some(ControlKind::Redo),
            ToolbarAction::ZoomIn => Some(ControlKind::ZoomIn),
            ToolbarAction::ZoomOut => Some(ControlKind::ZoomOut),
            ToolbarAction::ToggleRun => Some(ControlKind::Run),
            ToolbarAction::ToggleTrace => Some(ControlKind::Trace),
            ToolbarAction::ToggleDebug => Some(ControlKind::Debug),
            ToolbarAction::ChooseHardware => Some(ControlKind::Hardware),
            ToolbarAction::OpenGithub => Some(ControlKind::Github),
        }
    }

    /// Stable key for keyed rendering.
    pub fn key(&self) -> &'static str {
        match self {
            ControlKind::Download => "download",
            ControlKind::Hardware => "hwbtn",
            ControlKind::Save => "save",
            ControlKind::Github => "githubbtn",
            ControlKind::Undo => "undo",
            ControlKind::Redo => "redo",
            ControlKind::ZoomOut => "minus",
            ControlKind::ZoomIn => "plus",
            ControlKind::Trace => "trace",
            ControlKind::Debug => "debug",
            ControlKind::Run => "runmenubtn",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ControlSize {
    Small,
    Large,
    Huge,
}

impl ControlSize {
    pub fn as_class(&self) -> &'static str {
        match self {
            ControlSize::Small => "small",
            ControlSize::Large => "large",
            ControlSize::Huge => "huge",
        }
    }
}

/// A single activatable toolbar button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub kind: ControlKind,
    pub action: ToolbarAction,
    pub icon: String,
    pub text: Option<String>,
    pub tooltip: String,
    pub aria_label: Option<String>,
    pub size: ControlSize,
    pub enabled: bool,
    pub loading: bool,
}

impl Control {
    pub fn new(kind: ControlKind, action: ToolbarAction, icon: &str, tooltip: &str) -> Self {
        Self {
            kind,
            action,
            icon: icon.to_string(),
            text: None,
            tooltip: tooltip.to_string(),
            aria_label: None,
            size: ControlSize::Small,
            enabled: true,
            loading: false,
        }
    }

    pub fn with_size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.enabled = !disabled;
        self
    }

    /// Loading controls are always disabled.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        if loading {
            self.enabled = false;
        }
        self
    }
}

/// Project name text field. Edits emit `ToolbarAction::Rename`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameInput {
    pub id: String,
    pub value: String,
    pub placeholder: String,
    pub label: String,
}

/// The rename area: name input, save button and the github control.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectArea {
    pub name_input: Option<NameInput>,
    pub save: Option<Control>,
    pub github: Option<Control>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolbarLayout {
    pub viewport: ViewportClass,
    pub two_row: bool,
    /// Effective collapse, after tutorial and headless adjustment.
    pub collapsed: bool,
    pub button_group_size: ControlSize,
    pub download: Option<Control>,
    pub hardware: Option<Control>,
    pub project_area: Option<ProjectArea>,
    pub undo: Option<Control>,
    pub redo: Option<Control>,
    pub zoom_out: Option<Control>,
    pub zoom_in: Option<Control>,
    pub trace: Option<Control>,
    pub debug: Option<Control>,
    pub run: Option<Control>,
}

impl ToolbarLayout {
    /// A toolbar with nothing on it, used on the home screen and outside editors.
    pub fn empty(viewport: ViewportClass) -> Self {
        Self {
            viewport,
            two_row: false,
            collapsed: false,
            button_group_size: ControlSize::Small,
            download: None,
            hardware: None,
            project_area: None,
            undo: None,
            redo: None,
            zoom_out: None,
            zoom_in: None,
            trace: None,
            debug: None,
            run: None,
        }
    }

    /// All buttons in render order.
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        let project = self
            .project_area
            .iter()
            .flat_map(|area| area.save.iter().chain(area.github.iter()));

        self.download
            .iter()
            .chain(self.hardware.iter())
            .chain(project)
            .chain(self.undo.iter())
            .chain(self.redo.iter())
            .chain(self.zoom_out.iter())
            .chain(self.zoom_in.iter())
            .chain(self.trace.iter())
            .chain(self.debug.iter())
            .chain(self.run.iter())
    }

    pub fn control(&self, kind: ControlKind) -> Option<&Control> {
        self.controls().find(|c| c.kind == kind)
    }

    pub fn name_input(&self) -> Option<&NameInput> {
        self.project_area.as_ref().and_then(|area| area.name_input.as_ref())
    }

    /// Number of visible controls, the name input included.
    pub fn visible_count(&self) -> usize {
        self.controls().count() + usize::from(self.name_input().is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.visible_count() == 0
    }
}
