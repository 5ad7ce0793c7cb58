use dioxus::prelude::*;

/// One field of a data-driven form.
///
/// `input_type` is an HTML input type (`text`, `number`, `date`,
/// `password`) or `select`, in which case `options` fill a native select
/// behind an empty "Select {label}" placeholder. Required fields get a red
/// asterisk after the label.
#[component]
pub fn FormInput(
    label: String,
    name: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] value: String,
    #[props(default = false)] required: bool,
    #[props(default)] options: Vec<String>,
    #[props(default)] on_input: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-input",
            label { class: "form-input-label", r#for: "{name}",
                "{label}"
                if required {
                    span { class: "form-input-required", " *" }
                }
            }
            if input_type == "select" {
                select {
                    class: "input form-input-control",
                    id: "{name}",
                    name: "{name}",
                    required: required,
                    value: value,
                    onchange: move |evt| on_input.call(evt),
                    option { value: "", "Select {label}" }
                    for opt in options.iter() {
                        option { value: "{opt}", "{opt}" }
                    }
                }
            } else {
                input {
                    class: "input form-input-control",
                    id: "{name}",
                    name: "{name}",
                    r#type: "{input_type}",
                    required: required,
                    value: value,
                    oninput: move |evt| on_input.call(evt),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;
    use pretty_assertions::assert_eq;

    #[test]
    fn required_fields_are_marked() {
        fn app() -> Element {
            rsx! {
                FormInput { label: "Class Name", name: "name", required: true }
                FormInput { label: "Teacher ID", name: "teacher" }
            }
        }
        let html = render(app);
        assert_eq!(html.matches("form-input-required").count(), 1);
    }

    #[test]
    fn select_lists_placeholder_then_options() {
        fn app() -> Element {
            rsx! {
                FormInput {
                    label: "Gender",
                    name: "gender",
                    input_type: "select",
                    options: vec!["Male".to_string(), "Female".to_string()],
                }
            }
        }
        let html = render(app);
        let placeholder = html.find("Select Gender").expect("placeholder option");
        let male = html.find(">Male<").expect("male option");
        let female = html.find(">Female<").expect("female option");
        assert!(placeholder < male && male < female);
        assert!(!html.contains("<input"));
    }

    #[test]
    fn other_kinds_render_a_typed_input() {
        fn app() -> Element {
            rsx! {
                FormInput { label: "Date of Birth", name: "dob", input_type: "date" }
            }
        }
        let html = render(app);
        assert!(html.contains("type=\"date\""), "{html}");
        assert!(!html.contains("<select"));
    }
}
