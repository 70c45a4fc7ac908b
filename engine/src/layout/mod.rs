//! Responsive toolbar layout.
//!
//! `layout` maps a state snapshot, the injected capabilities and the current
//! viewport width to a [`ToolbarLayout`]. It has no side effects and keeps no
//! state between calls, so hosts can call it on every resize or state change.

pub mod viewport;

use shared::layout::{Control, ControlKind, ControlSize, NameInput, ProjectArea, ToolbarLayout};
use shared::models::{SimRunState, ToolbarAction, ToolbarCapabilities, ToolbarState, ViewportClass};

pub use viewport::classify;

/// DOM id shared by the name input and its label.
pub const NAME_INPUT_ID: &str = "fileNameInput2";

/// Compact single-row mode. Tutorials keep the full toolbar unless the
/// simulator is headless.
pub fn effectively_collapsed(state: &ToolbarState, capabilities: &ToolbarCapabilities) -> bool {
    (state.hide_editor_floats || state.collapsed) && (!state.tutorial || capabilities.headless_simulator)
}

pub fn layout(state: &ToolbarState, capabilities: &ToolbarCapabilities, viewport_width: f64) -> ToolbarLayout {
    let view = classify(viewport_width);

    if state.home || !state.editor_active {
        return ToolbarLayout::empty(view);
    }

    let collapsed = effectively_collapsed(state, capabilities);
    let two_row = view != ViewportClass::Desktop && !collapsed;

    let show_undo_redo = !state.read_only && !state.debugging;
    let button_group_size = if view == ViewportClass::Desktop || collapsed {
        ControlSize::Small
    } else {
        ControlSize::Large
    };

    ToolbarLayout {
        viewport: view,
        two_row,
        collapsed,
        button_group_size,
        download: download_button(state, capabilities, view, two_row),
        hardware: capabilities.hardware_select.then(|| hardware_button(capabilities, view)),
        project_area: project_area(state, capabilities, view),
        undo: show_undo_redo.then(|| history_button(ControlKind::Undo, state.has_undo)),
        redo: show_undo_redo.then(|| history_button(ControlKind::Redo, state.has_redo)),
        zoom_out: Some(Control::new(ControlKind::ZoomOut, ToolbarAction::ZoomOut, "minus circle", "Zoom Out")),
        zoom_in: Some(Control::new(ControlKind::ZoomIn, ToolbarAction::ZoomIn, "plus circle", "Zoom In")),
        trace: capabilities.trace.then(|| trace_button(state)),
        debug: (capabilities.debugger && !state.read_only).then(|| debug_button(state)),
        run: capabilities.big_run_button.then(|| run_button(state.sim_state)),
    }
}

fn download_button(
    state: &ToolbarState,
    capabilities: &ToolbarCapabilities,
    view: ViewportClass,
    two_row: bool,
) -> Option<Control> {
    if !capabilities.download.any() {
        return None;
    }

    let size = if view == ViewportClass::Desktop { ControlSize::Huge } else { ControlSize::Large };
    let label = if capabilities.use_upload_message { "Upload" } else { "Download" };
    let text = (view == ViewportClass::Desktop || two_row).then(|| label.to_string());
    let tooltip = format!("Download your code to the {}", capabilities.board_name);

    // Saving wins over compiling; the two never show loading together.
    let (disabled, loading) = if state.saving {
        (true, false)
    } else if state.compiling {
        (true, true)
    } else {
        (false, false)
    };

    Some(
        Control::new(ControlKind::Download, ToolbarAction::Compile, &capabilities.download_icon, &tooltip)
            .with_size(size)
            .with_text(text)
            .disabled(disabled)
            .loading(loading),
    )
}

fn hardware_button(capabilities: &ToolbarCapabilities, view: ViewportClass) -> Control {
    let size = if view == ViewportClass::Mobile { ControlSize::Small } else { ControlSize::Large };
    let tooltip = capabilities
        .hardware_name
        .as_deref()
        .unwrap_or("Click to select hardware");

    Control::new(ControlKind::Hardware, ToolbarAction::ChooseHardware, "microchip", tooltip).with_size(size)
}

fn project_area(state: &ToolbarState, capabilities: &ToolbarCapabilities, view: ViewportClass) -> Option<ProjectArea> {
    let show_rename = !state.tutorial
        && !state.read_only
        && !state.controller
        && !capabilities.hide_project_rename
        && !state.debugging;
    if !show_rename {
        return None;
    }

    let name_input = (view != ViewportClass::Mobile).then(|| NameInput {
        id: NAME_INPUT_ID.to_string(),
        value: state.project_name.clone().unwrap_or_default(),
        placeholder: "Pick a name...".to_string(),
        label: "Type a name for your project".to_string(),
    });

    let file_access_blocked = capabilities.disable_file_access_on_apple && state.apple_platform;
    let show_save = !state.read_only
        && !state.controller
        && capabilities.can_save
        && !state.tutorial
        && !state.debugging
        && !file_access_blocked;

    let save = show_save.then(|| {
        let size = if view == ViewportClass::Desktop { ControlSize::Small } else { ControlSize::Large };
        let (disabled, loading) = if state.saving {
            (true, true)
        } else if state.compiling {
            (true, false)
        } else {
            (false, false)
        };
        Control::new(ControlKind::Save, ToolbarAction::Save, "save", "Save")
            .with_size(size)
            .with_aria_label("Save the project")
            .disabled(disabled)
            .loading(loading)
    });

    let github = capabilities
        .github
        .then(|| Control::new(ControlKind::Github, ToolbarAction::OpenGithub, "github", "GitHub"));

    Some(ProjectArea { name_input, save, github })
}

fn history_button(kind: ControlKind, available: bool) -> Control {
    let (action, icon, title) = match kind {
        ControlKind::Redo => (ToolbarAction::Redo, "xicon redo", "Redo"),
        _ => (ToolbarAction::Undo, "xicon undo", "Undo"),
    };
    let aria = if available { title.to_string() } else { format!("{}, Disabled", title) };

    Control::new(kind, action, icon, title)
        .with_aria_label(aria)
        .disabled(!available)
}

fn trace_button(state: &ToolbarState) -> Control {
    let tooltip = if state.tracing { "Disable Slow-Mo" } else { "Slow-Mo" };
    Control::new(ControlKind::Trace, ToolbarAction::ToggleTrace, "xicon turtle", tooltip)
}

fn debug_button(state: &ToolbarState) -> Control {
    let tooltip = if state.debugging { "Disable Debugging" } else { "Debugging" };
    Control::new(ControlKind::Debug, ToolbarAction::ToggleDebug, "xicon bug", tooltip)
}

fn run_button(sim_state: SimRunState) -> Control {
    let (icon, tooltip) = match sim_state {
        SimRunState::Running => ("stop", "Stop"),
        SimRunState::Starting => ("play", "Starting"),
        SimRunState::Idle => ("play", "Run Code"),
    };
    Control::new(ControlKind::Run, ToolbarAction::ToggleRun, icon, tooltip)
        .with_size(ControlSize::Huge)
        .disabled(sim_state == SimRunState::Starting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DownloadTargets;

    const DESKTOP: f64 = 1280.0;
    const TABLET: f64 = 900.0;
    const MOBILE: f64 = 700.0;

    fn full_capabilities() -> ToolbarCapabilities {
        ToolbarCapabilities {
            hardware_select: true,
            big_run_button: true,
            trace: true,
            debugger: true,
            github: true,
            ..ToolbarCapabilities::default()
        }
    }

    fn editing_state() -> ToolbarState {
        ToolbarState {
            has_undo: true,
            has_redo: true,
            project_name: Some("blinky".to_string()),
            ..ToolbarState::default()
        }
    }

    #[test]
    fn test_home_screen_has_no_controls() {
        let state = ToolbarState { home: true, ..editing_state() };
        for width in [MOBILE, TABLET, DESKTOP] {
            let layout = layout(&state, &full_capabilities(), width);
            assert!(layout.is_empty());
        }
    }

    #[test]
    fn test_inactive_editor_has_no_controls() {
        let state = ToolbarState { editor_active: false, ..editing_state() };
        assert!(layout(&state, &full_capabilities(), DESKTOP).is_empty());
    }

    #[test]
    fn test_desktop_shows_everything() {
        let layout = layout(&editing_state(), &full_capabilities(), DESKTOP);
        assert_eq!(layout.viewport, ViewportClass::Desktop);
        assert!(!layout.two_row);
        assert_eq!(layout.button_group_size, ControlSize::Small);

        let input = layout.name_input().unwrap();
        assert_eq!(input.value, "blinky");
        assert_eq!(input.id, NAME_INPUT_ID);

        for kind in [
            ControlKind::Download,
            ControlKind::Hardware,
            ControlKind::Save,
            ControlKind::Github,
            ControlKind::Undo,
            ControlKind::Redo,
            ControlKind::ZoomOut,
            ControlKind::ZoomIn,
            ControlKind::Trace,
            ControlKind::Debug,
            ControlKind::Run,
        ] {
            let control = layout.control(kind);
            assert!(control.is_some(), "{:?} missing", kind);
            assert!(control.unwrap().enabled, "{:?} disabled", kind);
        }

        let download = layout.control(ControlKind::Download).unwrap();
        assert_eq!(download.size, ControlSize::Huge);
        assert_eq!(download.text.as_deref(), Some("Download"));
        assert_eq!(download.tooltip, "Download your code to the device");
        assert_eq!(layout.control(ControlKind::Save).unwrap().size, ControlSize::Small);
    }

    #[test]
    fn test_mobile_omits_name_input_but_keeps_save() {
        let layout = layout(&ToolbarState::default(), &ToolbarCapabilities::default(), MOBILE);
        assert_eq!(layout.viewport, ViewportClass::Mobile);
        assert!(layout.two_row);
        assert!(layout.project_area.is_some());
        assert!(layout.name_input().is_none());
        let save = layout.control(ControlKind::Save).unwrap();
        assert_eq!(save.size, ControlSize::Large);
        assert!(save.enabled);
    }

    #[test]
    fn test_mobile_without_can_save_has_no_save() {
        let capabilities = ToolbarCapabilities { can_save: false, ..ToolbarCapabilities::default() };
        let layout = layout(&ToolbarState::default(), &capabilities, MOBILE);
        assert!(layout.control(ControlKind::Save).is_none());
    }

    #[test]
    fn test_tablet_two_row_shows_download_text() {
        let layout = layout(&editing_state(), &full_capabilities(), TABLET);
        assert_eq!(layout.viewport, ViewportClass::Tablet);
        assert!(layout.two_row);
        assert_eq!(layout.button_group_size, ControlSize::Large);
        let download = layout.control(ControlKind::Download).unwrap();
        assert_eq!(download.size, ControlSize::Large);
        assert_eq!(download.text.as_deref(), Some("Download"));
    }

    #[test]
    fn test_collapsed_tablet_is_single_row_without_download_text() {
        let state = ToolbarState { collapsed: true, ..editing_state() };
        let layout = layout(&state, &full_capabilities(), TABLET);
        assert!(layout.collapsed);
        assert!(!layout.two_row);
        assert_eq!(layout.button_group_size, ControlSize::Small);
        assert_eq!(layout.control(ControlKind::Download).unwrap().text, None);
    }

    #[test]
    fn test_tutorial_ignores_collapse_unless_headless() {
        let state = ToolbarState { hide_editor_floats: true, tutorial: true, ..editing_state() };
        assert!(!effectively_collapsed(&state, &full_capabilities()));

        let headless = ToolbarCapabilities { headless_simulator: true, ..full_capabilities() };
        assert!(effectively_collapsed(&state, &headless));
    }

    #[test]
    fn test_read_only_hides_rename_save_and_history() {
        let state = ToolbarState { read_only: true, ..editing_state() };
        let layout = layout(&state, &full_capabilities(), DESKTOP);
        assert!(layout.project_area.is_none());
        assert!(layout.control(ControlKind::Save).is_none());
        assert!(layout.control(ControlKind::Undo).is_none());
        assert!(layout.control(ControlKind::Redo).is_none());
        assert!(layout.control(ControlKind::Debug).is_none());
        assert!(layout.control(ControlKind::ZoomIn).is_some());
    }

    #[test]
    fn test_restricted_sessions_hide_save() {
        let states = [
            ToolbarState { controller: true, ..editing_state() },
            ToolbarState { tutorial: true, ..editing_state() },
            ToolbarState { debugging: true, ..editing_state() },
        ];
        for state in states {
            let layout = layout(&state, &full_capabilities(), DESKTOP);
            assert!(layout.control(ControlKind::Save).is_none(), "{:?}", state);
            assert!(layout.name_input().is_none(), "{:?}", state);
        }
    }

    #[test]
    fn test_hide_project_rename_hides_area() {
        let capabilities = ToolbarCapabilities { hide_project_rename: true, ..full_capabilities() };
        let layout = layout(&editing_state(), &capabilities, DESKTOP);
        assert!(layout.project_area.is_none());
        assert!(layout.control(ControlKind::Github).is_none());
    }

    #[test]
    fn test_apple_file_access_hides_save_only_on_apple() {
        let capabilities = ToolbarCapabilities { disable_file_access_on_apple: true, ..full_capabilities() };
        let apple = ToolbarState { apple_platform: true, ..editing_state() };
        assert!(layout(&apple, &capabilities, DESKTOP).control(ControlKind::Save).is_none());
        assert!(layout(&editing_state(), &capabilities, DESKTOP).control(ControlKind::Save).is_some());
    }

    #[test]
    fn test_debugging_hides_undo_redo() {
        let state = ToolbarState { debugging: true, ..editing_state() };
        let layout = layout(&state, &full_capabilities(), DESKTOP);
        assert!(layout.undo.is_none());
        assert!(layout.redo.is_none());
        assert_eq!(layout.control(ControlKind::Debug).unwrap().tooltip, "Disable Debugging");
    }

    #[test]
    fn test_undo_redo_disabled_independently() {
        let state = ToolbarState { has_undo: false, has_redo: true, ..editing_state() };
        let layout = layout(&state, &full_capabilities(), DESKTOP);
        let undo = layout.control(ControlKind::Undo).unwrap();
        let redo = layout.control(ControlKind::Redo).unwrap();
        assert!(!undo.enabled);
        assert_eq!(undo.aria_label.as_deref(), Some("Undo, Disabled"));
        assert!(redo.enabled);
        assert_eq!(redo.aria_label.as_deref(), Some("Redo"));
    }

    #[test]
    fn test_saving_locks_save_and_download() {
        let state = ToolbarState { saving: true, ..editing_state() };
        let layout = layout(&state, &full_capabilities(), DESKTOP);
        let save = layout.control(ControlKind::Save).unwrap();
        let download = layout.control(ControlKind::Download).unwrap();
        assert!(save.loading && !save.enabled);
        assert!(!download.loading && !download.enabled);
    }

    #[test]
    fn test_compiling_locks_download_and_save() {
        let state = ToolbarState { compiling: true, ..editing_state() };
        let layout = layout(&state, &full_capabilities(), DESKTOP);
        let save = layout.control(ControlKind::Save).unwrap();
        let download = layout.control(ControlKind::Download).unwrap();
        assert!(download.loading && !download.enabled);
        assert!(!save.loading && !save.enabled);
    }

    #[test]
    fn test_saving_and_compiling_never_both_loading() {
        let state = ToolbarState { saving: true, compiling: true, ..editing_state() };
        let layout = layout(&state, &full_capabilities(), DESKTOP);
        let save = layout.control(ControlKind::Save).unwrap();
        let download = layout.control(ControlKind::Download).unwrap();
        assert!(!(save.loading && download.loading));
        assert!(!save.enabled && !download.enabled);
    }

    #[test]
    fn test_run_button_tracks_sim_state() {
        let starting = ToolbarState { sim_state: SimRunState::Starting, ..editing_state() };
        let run = layout(&starting, &full_capabilities(), DESKTOP).run.unwrap();
        assert_eq!(run.icon, "play");
        assert!(!run.enabled);

        let running = ToolbarState { sim_state: SimRunState::Running, ..editing_state() };
        let run = layout(&running, &full_capabilities(), DESKTOP).run.unwrap();
        assert_eq!(run.icon, "stop");
        assert_eq!(run.tooltip, "Stop");
        assert!(run.enabled);
    }

    #[test]
    fn test_theme_gated_controls_absent_by_default() {
        let layout = layout(&editing_state(), &ToolbarCapabilities::default(), DESKTOP);
        assert!(layout.hardware.is_none());
        assert!(layout.run.is_none());
        assert!(layout.trace.is_none());
        assert!(layout.debug.is_none());
        assert!(layout.control(ControlKind::Github).is_none());
    }

    #[test]
    fn test_no_download_targets_hides_download() {
        let capabilities = ToolbarCapabilities { download: DownloadTargets::default(), ..full_capabilities() };
        assert!(layout(&editing_state(), &capabilities, DESKTOP).download.is_none());
    }

    #[test]
    fn test_upload_message_and_hardware_name() {
        let capabilities = ToolbarCapabilities {
            use_upload_message: true,
            hardware_name: Some("Arcade Shield".to_string()),
            ..full_capabilities()
        };
        let layout = layout(&editing_state(), &capabilities, MOBILE);
        assert_eq!(layout.control(ControlKind::Download).unwrap().text.as_deref(), Some("Upload"));
        let hardware = layout.control(ControlKind::Hardware).unwrap();
        assert_eq!(hardware.tooltip, "Arcade Shield");
        assert_eq!(hardware.size, ControlSize::Small);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let state = editing_state();
        let capabilities = full_capabilities();
        assert_eq!(layout(&state, &capabilities, TABLET), layout(&state, &capabilities, TABLET));
    }
}
