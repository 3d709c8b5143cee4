use dioxus::prelude::*;

/// A labeled single-line input.
///
/// When `error` is set the control is flagged invalid and the message is
/// rendered on its own line beneath the input.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    /// Validation message shown beneath the input, if any.
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                class: if error.is_some() { "input input-invalid" } else { "input" },
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
            }
            {error.as_ref().map(|message| rsx! {
                p { class: "field-error", "{message}" }
            })}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_label_and_value() {
        fn app() -> Element {
            rsx! {
                Input { label: "Name", value: "Pen" }
            }
        }

        let html = render(app);
        assert!(html.contains("Name"));
        assert!(html.contains("Pen"));
        assert_eq!(html.matches("field-error").count(), 0);
    }

    #[test]
    fn renders_error_line_when_present() {
        fn app() -> Element {
            rsx! {
                Input {
                    label: "Price",
                    value: "-1",
                    error: Some("Price must be a positive number.".to_string()),
                }
            }
        }

        let html = render(app);
        assert_eq!(html.matches("field-error").count(), 1);
        assert!(html.contains("Price must be a positive number."));
        assert!(html.contains("input-invalid"));
    }
}
