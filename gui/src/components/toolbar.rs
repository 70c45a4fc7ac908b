// Editor toolbar component
// Renders a `ToolbarLayout`; every activation is reported through `on_action`.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use shared::layout::{Control, NameInput, ProjectArea, ToolbarLayout};
use shared::models::ToolbarAction;

/// CSS classes for a toolbar button.
pub fn button_classes(control: &Control) -> String {
    let mut classes = vec!["ui", control.size.as_class(), "editortools-btn", control.kind.key()];
    if control.loading {
        classes.push("loading");
    }
    if !control.enabled {
        classes.push("disabled");
    }
    classes.join(" ")
}

#[component]
pub fn EditorToolbar(layout: ToolbarLayout, on_action: EventHandler<ToolbarAction>) -> Element {
    if layout.is_empty() {
        return rsx! { div {} };
    }

    let grid_class = if layout.two_row { "ui equal width grid padded twoRow" } else { "ui equal width grid padded" };
    let project_column = if layout.two_row { "column" } else { "ui grid" };
    let group_class = format!("ui icon {} buttons", layout.button_group_size.as_class());

    let button = move |control: &Option<Control>| {
        control.clone().map(|control| {
            let key = control.kind.key();
            rsx! { ToolbarButton { key: "{key}", control, on_action } }
        })
    };

    let project_area = layout
        .project_area
        .clone()
        .map(|area| rsx! { ProjectNameArea { area, on_action } });

    rsx! {
        div { class: "{grid_class}", role: "menubar",
            div { id: "editorProjectArea", class: "{project_column}",
                div { id: "downloadArea",
                    div { class: "ui input",
                        {button(&layout.download)}
                        {button(&layout.hardware)}
                    }
                }
                {project_area}
            }
            div { id: "editorToolbarArea", class: "column right aligned",
                if layout.undo.is_some() || layout.redo.is_some() {
                    div { class: "{group_class}",
                        {button(&layout.undo)}
                        {button(&layout.redo)}
                    }
                }
                div { class: "{group_class}",
                    {button(&layout.zoom_out)}
                    {button(&layout.zoom_in)}
                }
                if layout.trace.is_some() || layout.debug.is_some() {
                    div { class: "{group_class}",
                        {button(&layout.trace)}
                        {button(&layout.debug)}
                    }
                }
                if layout.run.is_some() {
                    div { class: "big-play-button-wrapper",
                        {button(&layout.run)}
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectNameArea(area: ProjectArea, on_action: EventHandler<ToolbarAction>) -> Element {
    let input_class = if area.save.is_some() { "ui right labeled input projectname-input" } else { "ui right input projectname-input" };
    let name_input = area.name_input.map(|input| rsx! { ProjectNameInput { input, on_action } });
    let save = area.save.map(|control| rsx! { ToolbarButton { control, on_action } });
    let github = area.github.map(|control| rsx! { ToolbarButton { control, on_action } });

    rsx! {
        div { id: "projectNameArea", class: "column",
            div { class: "{input_class}", title: "Pick a name for your project",
                {name_input}
                {save}
                {github}
            }
        }
    }
}

#[component]
fn ProjectNameInput(input: NameInput, on_action: EventHandler<ToolbarAction>) -> Element {
    rsx! {
        label { r#for: "{input.id}", class: "accessible-hidden", "{input.label}" }
        input {
            id: "{input.id}",
            r#type: "text",
            aria_labelledby: "{input.id}",
            placeholder: "{input.placeholder}",
            value: "{input.value}",
            autocomplete: "off",
            spellcheck: "false",
            oninput: move |evt: FormEvent| on_action.call(ToolbarAction::Rename(evt.value())),
        }
    }
}

#[component]
fn ToolbarButton(control: Control, on_action: EventHandler<ToolbarAction>) -> Element {
    let classes = button_classes(&control);
    let aria = control.aria_label.clone().unwrap_or_else(|| control.tooltip.clone());
    let action = control.action.clone();
    let text = control.text.clone().map(|text| rsx! { span { class: "ui text", "{text}" } });

    rsx! {
        button {
            class: "{classes}",
            title: "{control.tooltip}",
            aria_label: "{aria}",
            disabled: !control.enabled,
            onclick: move |_| on_action.call(action.clone()),
            i { class: "{control.icon} icon" }
            {text}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::layout::{ControlKind, ControlSize};

    #[test]
    fn test_button_classes_reflect_busy_state() {
        let control = Control::new(ControlKind::Save, ToolbarAction::Save, "save", "Save")
            .with_size(ControlSize::Large)
            .loading(true);
        assert_eq!(button_classes(&control), "ui large editortools-btn save loading disabled");
    }

    #[test]
    fn test_button_classes_enabled() {
        let control = Control::new(ControlKind::Undo, ToolbarAction::Undo, "xicon undo", "Undo");
        assert_eq!(button_classes(&control), "ui small editortools-btn undo");
    }
}
