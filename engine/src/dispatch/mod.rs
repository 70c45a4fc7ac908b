//! Turns toolbar activations into telemetry plus a collaborator call.
//!
//! Every forwarded action records exactly one [`TelemetryEvent`] first and
//! only then calls into the editor or session. Actions whose control is
//! hidden or disabled in the current layout are dropped without either.

pub mod collaborators;

use shared::layout::{ControlKind, ToolbarLayout};
use shared::models::{ToolbarAction, ToolbarState};
use shared::telemetry::TelemetryEvent;

use crate::telemetry::TelemetrySink;
pub use collaborators::{Editor, SessionController, SimulatorOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// The control is not part of the current layout.
    Hidden,
    /// The control is shown but disabled, e.g. while saving or compiling.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Dispatched,
    Suppressed(SuppressReason),
}

pub struct ToolbarDispatcher<'a> {
    editor: &'a mut dyn Editor,
    session: &'a mut dyn SessionController,
    telemetry: &'a mut dyn TelemetrySink,
    headless: bool,
}

impl<'a> ToolbarDispatcher<'a> {
    pub fn new(
        editor: &'a mut dyn Editor,
        session: &'a mut dyn SessionController,
        telemetry: &'a mut dyn TelemetrySink,
    ) -> Self {
        Self {
            editor,
            session,
            telemetry,
            headless: false,
        }
    }

    /// Whether the simulator runs headless; reported on run/trace/debug events.
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn dispatch(&mut self, state: &ToolbarState, layout: &ToolbarLayout, action: ToolbarAction) -> DispatchOutcome {
        if let Err(reason) = check_available(layout, &action) {
            tracing::debug!("Suppressed toolbar action {:?}: {:?}", action, reason);
            return DispatchOutcome::Suppressed(reason);
        }

        let event = self.event_for(&action, state, layout);
        self.telemetry.record(&event);

        match action {
            ToolbarAction::Rename(name) => self.session.update_project_name(&name),
            ToolbarAction::Compile => self.session.compile(),
            ToolbarAction::Save => self.session.save_and_compile(),
            ToolbarAction::Undo => self.editor.undo(),
            ToolbarAction::Redo => self.editor.redo(),
            ToolbarAction::ZoomIn => self.editor.zoom_in(),
            ToolbarAction::ZoomOut => self.editor.zoom_out(),
            ToolbarAction::ToggleRun => self
                .session
                .start_stop_simulator(SimulatorOptions { click_trigger: true }),
            ToolbarAction::ToggleTrace => self.session.toggle_trace(),
            ToolbarAction::ToggleDebug => self.session.toggle_debugging(),
            ToolbarAction::ChooseHardware => self.session.show_hardware_dialog(),
            ToolbarAction::OpenGithub => self.session.open_github(),
        }

        DispatchOutcome::Dispatched
    }

    fn event_for(&self, action: &ToolbarAction, state: &ToolbarState, layout: &ToolbarLayout) -> TelemetryEvent {
        let event = TelemetryEvent::new(event_name(action)).with_attribute("view", layout.viewport.as_str());

        // Renames report the view only.
        if matches!(action, ToolbarAction::Rename(_)) {
            return event;
        }

        let event = event.with_attribute("collapsed", state.collapsed.to_string());
        match action {
            ToolbarAction::ToggleRun | ToolbarAction::ToggleTrace | ToolbarAction::ToggleDebug => {
                event.with_attribute("headless", self.headless.to_string())
            }
            _ => event,
        }
    }
}

pub fn event_name(action: &ToolbarAction) -> &'static str {
    match action {
        ToolbarAction::Rename(_) => "editortools.projectrename",
        ToolbarAction::Compile => "editortools.download",
        ToolbarAction::Save => "editortools.save",
        ToolbarAction::Undo => "editortools.undo",
        ToolbarAction::Redo => "editortools.redo",
        ToolbarAction::ZoomIn => "editortools.zoomIn",
        ToolbarAction::ZoomOut => "editortools.zoomOut",
        ToolbarAction::ToggleRun => "editortools.startStopSimulator",
        ToolbarAction::ToggleTrace => "editortools.trace",
        ToolbarAction::ToggleDebug => "editortools.debug",
        ToolbarAction::ChooseHardware => "editortools.chooseHardware",
        ToolbarAction::OpenGithub => "editortools.github",
    }
}

fn check_available(layout: &ToolbarLayout, action: &ToolbarAction) -> Result<(), SuppressReason> {
    let Some(kind) = ControlKind::for_action(action) else {
        return layout.name_input().map(|_| ()).ok_or(SuppressReason::Hidden);
    };
    match layout.control(kind) {
        None => Err(SuppressReason::Hidden),
        Some(control) if !control.enabled => Err(SuppressReason::Disabled),
        Some(_) => Ok(()),
    }
}
