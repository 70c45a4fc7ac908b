#![allow(non_snake_case)]
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_desktop::tao::event::{Event, WindowEvent};
use dioxus_desktop::{use_window, use_wry_event_handler, DesktopContext};

use shared::models::{ToolbarAction, ToolbarCapabilities};
use toolbar_engine::config::ToolbarConfig;
use toolbar_engine::dispatch::ToolbarDispatcher;
use toolbar_engine::layout::layout;

use crate::components::EditorToolbar;
use crate::config::theme::ThemePalette;
use crate::state::app_state::{AppState, PendingJob, Theme};

fn logical_width(window: &DesktopContext) -> f64 {
    window
        .window
        .inner_size()
        .to_logical::<f64>(window.window.scale_factor())
        .width
}

fn job_duration(job: PendingJob) -> Duration {
    match job {
        PendingJob::Compile => Duration::from_millis(1500),
        PendingJob::Save => Duration::from_millis(800),
        PendingJob::SimulatorBoot => Duration::from_millis(600),
    }
}

/// Forwards a toolbar activation to the host collaborators, then schedules
/// completion of whatever busy work it started.
fn dispatch_action(
    mut app_state: Signal<AppState>,
    viewport_width: Signal<f64>,
    capabilities: &ToolbarCapabilities,
    action: ToolbarAction,
) {
    let jobs = {
        let mut host = app_state.write();
        let state = host.toolbar_state();
        let current = layout(&state, capabilities, *viewport_width.peek());

        let AppState { editor, session, telemetry, .. } = &mut *host;
        let outcome = ToolbarDispatcher::new(editor, session, telemetry)
            .headless(capabilities.headless_simulator)
            .dispatch(&state, &current, action);
        tracing::debug!("Toolbar dispatch outcome: {:?}", outcome);

        session.take_pending()
    };

    for job in jobs {
        spawn(async move {
            tokio::time::sleep(job_duration(job)).await;
            tracing::debug!("Finished {:?}", job);
            app_state.write().session.finish(job);
        });
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<ToolbarConfig>();
    let capabilities = config.capabilities.clone();
    let mut app_state = use_signal(|| AppState::new(&config));

    let window = use_window();
    let mut viewport_width = use_signal({
        let window = window.clone();
        move || logical_width(&window)
    });

    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent { event: WindowEvent::Resized(size), .. } = event {
            let width = size.to_logical::<f64>(window.window.scale_factor()).width;
            if width != *viewport_width.peek() {
                tracing::trace!("Viewport resized to {}", width);
                viewport_width.set(width);
            }
        }
    });

    let host = app_state.read();
    let current_layout = layout(&host.toolbar_state(), &capabilities, viewport_width());
    let palette = ThemePalette::for_theme(host.current_theme);
    let css = palette.stylesheet();
    let text = host.editor.text.clone();
    let status = format!(
        "view: {} | zoom: {} | simulator: {:?} | slow-mo: {} | debugging: {} | hardware dialog: {} | github dialog: {}",
        current_layout.viewport,
        host.editor.zoom,
        host.session.sim_state,
        host.session.tracing,
        host.session.debugging,
        host.session.hardware_dialog_open,
        host.session.github_dialog_open,
    );
    let (home, collapsed, read_only) = (host.home, host.collapse_editor_tools, host.read_only);
    let dark = host.current_theme == Theme::Dark;
    drop(host);

    rsx! {
        style { "{css}" }
        EditorToolbar {
            layout: current_layout,
            on_action: move |action: ToolbarAction| dispatch_action(app_state, viewport_width, &capabilities, action),
        }
        div { class: "host-controls",
            label {
                input { r#type: "checkbox", checked: home, onchange: move |_| { let mut s = app_state.write(); s.home = !s.home; } }
                "Home screen"
            }
            label {
                input { r#type: "checkbox", checked: collapsed, onchange: move |_| { let mut s = app_state.write(); s.collapse_editor_tools = !s.collapse_editor_tools; } }
                "Collapse editor tools"
            }
            label {
                input { r#type: "checkbox", checked: read_only, onchange: move |_| { let mut s = app_state.write(); s.read_only = !s.read_only; } }
                "Read only"
            }
            label {
                input {
                    r#type: "checkbox",
                    checked: dark,
                    onchange: move |_| {
                        let next = if dark { Theme::Light } else { Theme::Dark };
                        app_state.write().set_theme(next);
                    }
                }
                "Dark theme"
            }
        }
        textarea {
            class: "host-editor",
            rows: "12",
            cols: "80",
            value: "{text}",
            oninput: move |evt: FormEvent| app_state.write().editor.edit(evt.value()),
        }
        p { class: "host-status", "{status}" }
    }
}
