// Host-side state for the desktop shell.
// The demo editor and session stand in for the real editor and build pipeline
// so the toolbar can be exercised end to end. Busy work (compiles, saves,
// simulator boot) is queued as `PendingJob`s that the app finishes on a timer.

use serde::{Deserialize, Serialize};
use shared::models::{SimRunState, ToolbarState};
use toolbar_engine::config::ToolbarConfig;
use toolbar_engine::dispatch::{Editor, SessionController, SimulatorOptions};
use toolbar_engine::telemetry::TracingTelemetry;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingJob {
    Compile,
    Save,
    SimulatorBoot,
}

#[derive(Debug, Clone, Default)]
pub struct DemoEditor {
    pub text: String,
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
    pub zoom: i32,
}

impl DemoEditor {
    pub fn edit(&mut self, text: impl Into<String>) {
        let previous = std::mem::replace(&mut self.text, text.into());
        self.undo_stack.push(previous);
        self.redo_stack.clear();
    }
}

impl Editor for DemoEditor {
    fn undo(&mut self) {
        if let Some(previous) = self.undo_stack.pop() {
            let current = std::mem::replace(&mut self.text, previous);
            self.redo_stack.push(current);
        }
    }

    fn redo(&mut self) {
        if let Some(next) = self.redo_stack.pop() {
            let current = std::mem::replace(&mut self.text, next);
            self.undo_stack.push(current);
        }
    }

    fn has_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    fn has_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn zoom_in(&mut self) {
        self.zoom += 1;
    }

    fn zoom_out(&mut self) {
        self.zoom -= 1;
    }
}

#[derive(Debug, Clone, Default)]
pub struct DemoSession {
    pub project_name: Option<String>,
    pub saving: bool,
    pub compiling: bool,
    pub sim_state: SimRunState,
    pub tracing: bool,
    pub debugging: bool,
    pub hardware_dialog_open: bool,
    pub github_dialog_open: bool,
    pending: Vec<PendingJob>,
}

impl DemoSession {
    pub fn take_pending(&mut self) -> Vec<PendingJob> {
        std::mem::take(&mut self.pending)
    }

    pub fn finish(&mut self, job: PendingJob) {
        match job {
            PendingJob::Compile => self.compiling = false,
            PendingJob::Save => self.saving = false,
            PendingJob::SimulatorBoot => {
                if self.sim_state == SimRunState::Starting {
                    self.sim_state = SimRunState::Running;
                }
            }
        }
    }
}

impl SessionController for DemoSession {
    fn update_project_name(&mut self, name: &str) {
        self.project_name = Some(name.to_string());
    }

    fn compile(&mut self) {
        self.compiling = true;
        self.pending.push(PendingJob::Compile);
    }

    fn save_and_compile(&mut self) {
        self.saving = true;
        self.pending.push(PendingJob::Save);
    }

    fn start_stop_simulator(&mut self, opts: SimulatorOptions) {
        tracing::debug!("start/stop simulator (click_trigger={})", opts.click_trigger);
        match self.sim_state {
            SimRunState::Idle => {
                self.sim_state = SimRunState::Starting;
                self.pending.push(PendingJob::SimulatorBoot);
            }
            SimRunState::Running => self.sim_state = SimRunState::Idle,
            SimRunState::Starting => {}
        }
    }

    fn toggle_trace(&mut self) {
        self.tracing = !self.tracing;
    }

    fn toggle_debugging(&mut self) {
        self.debugging = !self.debugging;
    }

    fn show_hardware_dialog(&mut self) {
        self.hardware_dialog_open = true;
    }

    fn open_github(&mut self) {
        self.github_dialog_open = true;
    }
}

pub struct AppState {
    pub current_theme: Theme,
    pub home: bool,
    pub collapse_editor_tools: bool,
    pub hide_editor_floats: bool,
    pub read_only: bool,
    pub editor: DemoEditor,
    pub session: DemoSession,
    pub telemetry: TracingTelemetry,
}

impl AppState {
    pub fn new(config: &ToolbarConfig) -> Self {
        let mut editor = DemoEditor::default();
        editor.edit("basic.forever(() => {})");

        Self {
            current_theme: Theme::Dark,
            home: false,
            collapse_editor_tools: false,
            hide_editor_floats: false,
            read_only: false,
            editor,
            session: DemoSession {
                project_name: Some("Untitled".to_string()),
                ..DemoSession::default()
            },
            telemetry: TracingTelemetry::new(&config.telemetry),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current_theme = theme;
    }

    /// Snapshot handed to the layout function on every render.
    pub fn toolbar_state(&self) -> ToolbarState {
        ToolbarState {
            home: self.home,
            editor_active: true,
            saving: self.session.saving,
            compiling: self.session.compiling,
            read_only: self.read_only,
            debugging: self.session.debugging,
            sim_state: self.session.sim_state,
            collapsed: self.collapse_editor_tools,
            hide_editor_floats: self.hide_editor_floats,
            tracing: self.session.tracing,
            has_undo: self.editor.has_undo(),
            has_redo: self.editor.has_redo(),
            apple_platform: cfg!(any(target_os = "macos", target_os = "ios")),
            project_name: self.session.project_name.clone(),
            ..ToolbarState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_editor_history() {
        let mut editor = DemoEditor::default();
        assert!(!editor.has_undo());
        editor.edit("a");
        editor.edit("b");
        editor.undo();
        assert_eq!(editor.text, "a");
        assert!(editor.has_redo());
        editor.redo();
        assert_eq!(editor.text, "b");
        editor.edit("c");
        assert!(!editor.has_redo());
    }

    #[test]
    fn test_compile_queues_job_until_finished() {
        let mut session = DemoSession::default();
        session.compile();
        assert!(session.compiling);
        let jobs = session.take_pending();
        assert_eq!(jobs, vec![PendingJob::Compile]);
        assert!(session.take_pending().is_empty());
        session.finish(PendingJob::Compile);
        assert!(!session.compiling);
    }

    #[test]
    fn test_simulator_boot_cycle() {
        let mut session = DemoSession::default();
        let click = SimulatorOptions { click_trigger: true };
        session.start_stop_simulator(click);
        assert_eq!(session.sim_state, SimRunState::Starting);
        session.finish(PendingJob::SimulatorBoot);
        assert_eq!(session.sim_state, SimRunState::Running);
        session.start_stop_simulator(click);
        assert_eq!(session.sim_state, SimRunState::Idle);
    }

    #[test]
    fn test_toolbar_state_reflects_session() {
        let config = ToolbarConfig::load_default().unwrap();
        let mut app = AppState::new(&config);
        app.session.save_and_compile();
        let state = app.toolbar_state();
        assert!(state.saving);
        assert!(state.has_undo);
        assert!(!state.has_redo);
        assert_eq!(state.project_name.as_deref(), Some("Untitled"));
    }
}
