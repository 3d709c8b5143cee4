use dioxus::prelude::*;

/// A form wrapper that intercepts native submission and forwards the event
/// to the caller's handler instead.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            class: "form",
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            {children}
        }
    }
}
