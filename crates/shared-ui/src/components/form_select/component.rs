use dioxus::prelude::*;

/// A themed native select element for fixed option sets.
///
/// Children should be `option { value: "...", "Label" }` elements. When
/// `error` is set the message is rendered beneath the select.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Optional label displayed above the select.
    #[props(default)]
    label: String,
    /// Whether the select is disabled.
    #[props(default = false)]
    disabled: bool,
    /// Validation message shown beneath the select, if any.
    #[props(default)]
    error: Option<String>,
    /// Option elements to render inside the select.
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: if error.is_some() { "form-select form-select-invalid" } else { "form-select" },
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            {error.as_ref().map(|message| rsx! {
                p { class: "field-error", "{message}" }
            })}
        }
    }
}
