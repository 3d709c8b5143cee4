use dioxus::prelude::*;

/// A labeled multi-line text input with an optional inline error message.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = 4)] rows: i64,
    #[props(default = false)] disabled: bool,
    /// Validation message shown beneath the textarea, if any.
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label { class: "textarea-label", "{label}" }
            }
            textarea {
                class: if error.is_some() { "textarea textarea-invalid" } else { "textarea" },
                value: value,
                placeholder: placeholder,
                rows: rows,
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

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_value_and_error() {
        fn app() -> Element {
            rsx! {
                Textarea {
                    label: "Description",
                    value: "short",
                    error: Some("Description must be at least 10 characters.".to_string()),
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Description"));
        assert!(html.contains("short"));
        assert!(html.contains("Description must be at least 10 characters."));
        assert!(html.contains("textarea-invalid"));
    }
}
