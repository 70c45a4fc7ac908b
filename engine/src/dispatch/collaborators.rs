// Interfaces of the collaborators the toolbar forwards to.
// The editor, session and simulator live in the host; the toolbar only calls them.

/// Code editor surface.
pub trait Editor {
    fn undo(&mut self);
    fn redo(&mut self);
    fn has_undo(&self) -> bool;
    fn has_redo(&self) -> bool;
    fn zoom_in(&mut self);
    fn zoom_out(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulatorOptions {
    /// The request came from a user click rather than an automatic restart.
    pub click_trigger: bool,
}

/// Project session: naming, build pipeline, simulator and dialogs.
pub trait SessionController {
    fn update_project_name(&mut self, name: &str);
    fn compile(&mut self);
    fn save_and_compile(&mut self);
    fn start_stop_simulator(&mut self, opts: SimulatorOptions);
    fn toggle_trace(&mut self);
    fn toggle_debugging(&mut self);
    fn show_hardware_dialog(&mut self);
    fn open_github(&mut self);
}
