use dioxus::prelude::*;
use shared_types::{FieldErrors, NewProduct, Product, ProductDraft, ProductField, VALID_CATEGORIES};
use shared_ui::components::{Form, FormSelect, Input, Textarea};

/// Create/edit form for a product record.
///
/// The draft is held as component state while the user edits; a submit
/// attempt validates every field in one pass and replaces the displayed
/// errors wholesale. `on_submit` fires exactly once per successful
/// validation, with price and quantity already coerced to numbers, and
/// never fires on failure.
#[component]
pub fn ProductForm(initial: Option<Product>, on_submit: EventHandler<NewProduct>) -> Element {
    // --- Draft + error state ---
    let seed = initial.clone();
    let mut draft = use_signal(move || {
        seed.as_ref()
            .map(ProductDraft::from_product)
            .unwrap_or_default()
    });
    let mut errors = use_signal(FieldErrors::new);

    // --- Hydration ---
    let initial_id = initial.as_ref().map(|p| p.id);
    let mut hydrated_id = use_signal(move || initial_id);
    let initial_for_hydration = initial.clone();

    use_effect(move || {
        // Re-seed when the record being edited changes while the form
        // stays mounted.
        let id = initial_for_hydration.as_ref().map(|p| p.id);
        if *hydrated_id.read() != id {
            hydrated_id.set(id);
            match &initial_for_hydration {
                Some(product) => draft.set(ProductDraft::from_product(product)),
                None => draft.set(ProductDraft::default()),
            }
            errors.set(FieldErrors::new());
        }
    });

    // --- Submit ---
    let handle_save = move |_: FormEvent| match draft.read().submit() {
        Ok(data) => {
            errors.set(FieldErrors::new());
            on_submit.call(data);
        }
        Err(failed) => errors.set(failed),
    };

    let submit_label = if initial.is_some() {
        "Save Changes"
    } else {
        "Create Product"
    };

    rsx! {
        Form {
            onsubmit: handle_save,

            Input {
                label: "Name",
                value: draft.read().name.clone(),
                on_input: move |e: FormEvent| draft.write().set(ProductField::Name, e.value()),
                placeholder: "e.g., Bàn phím cơ",
                error: errors.read().get(&ProductField::Name).cloned(),
            }

            FormSelect {
                label: "Category",
                value: draft.read().category.clone(),
                onchange: move |e: Event<FormData>| draft.write().set(ProductField::Category, e.value()),
                error: errors.read().get(&ProductField::Category).cloned(),
                option { value: "", "-- Select a category --" }
                for category in VALID_CATEGORIES.iter() {
                    option { value: *category, "{category}" }
                }
            }

            Input {
                label: "Price",
                input_type: "number",
                value: draft.read().price.clone(),
                on_input: move |e: FormEvent| draft.write().set(ProductField::Price, e.value()),
                placeholder: "e.g., 19.99",
                error: errors.read().get(&ProductField::Price).cloned(),
            }

            Input {
                label: "Quantity",
                input_type: "number",
                value: draft.read().quantity.clone(),
                on_input: move |e: FormEvent| draft.write().set(ProductField::Quantity, e.value()),
                placeholder: "e.g., 5",
                error: errors.read().get(&ProductField::Quantity).cloned(),
            }

            Textarea {
                label: "Description",
                value: draft.read().description.clone(),
                on_input: move |e: FormEvent| draft.write().set(ProductField::Description, e.value()),
                error: errors.read().get(&ProductField::Description).cloned(),
            }

            button {
                class: "button",
                "data-style": "primary",
                r#type: "submit",
                "{submit_label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn create_mode_renders_empty_fields_and_all_categories() {
        fn app() -> Element {
            rsx! {
                ProductForm { initial: None, on_submit: move |_| {} }
            }
        }

        let html = render(app);
        assert!(html.contains("Create Product"));
        assert!(html.contains("-- Select a category --"));
        for category in VALID_CATEGORIES {
            assert!(html.contains(category), "missing option {category:?}");
        }
        assert_eq!(html.matches("field-error").count(), 0);
    }

    #[test]
    fn edit_mode_prefills_from_the_initial_record() {
        fn app() -> Element {
            let product = Product {
                id: Uuid::nil(),
                name: "Bàn phím cơ".into(),
                category: "Điện tử".into(),
                price: 120.5,
                quantity: 7,
                description: "Bàn phím cơ switch đỏ".into(),
            };
            rsx! {
                ProductForm { initial: Some(product), on_submit: move |_| {} }
            }
        }

        let html = render(app);
        assert!(html.contains("Save Changes"));
        assert!(html.contains("Bàn phím cơ"));
        assert!(html.contains("120.5"));
        assert!(html.contains("7"));
        assert!(html.contains("Bàn phím cơ switch đỏ"));
        assert_eq!(html.matches("field-error").count(), 0);
    }
}
