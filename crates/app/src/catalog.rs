use dioxus::prelude::*;
use shared_types::{NewProduct, Product};
use uuid::Uuid;

use crate::product_form::ProductForm;

/// In-memory product catalog page.
///
/// Owns the product list and the form's open/edit state. Products live
/// only as long as the page does; there is no persistence behind it.
#[component]
pub fn Catalog() -> Element {
    let mut products = use_signal(Vec::<Product>::new);
    let mut editing = use_signal(|| Option::<Product>::None);
    let mut show_form = use_signal(|| false);

    let open_create = move |_| {
        editing.set(None);
        show_form.set(true);
    };

    let close_form = move |_| {
        editing.set(None);
        show_form.set(false);
    };

    let handle_submit = move |data: NewProduct| {
        match editing() {
            Some(existing) => {
                let updated = data.with_id(existing.id);
                tracing::info!(id = %updated.id, name = %updated.name, "product updated");
                if let Some(slot) = products.write().iter_mut().find(|p| p.id == existing.id) {
                    *slot = updated;
                }
            }
            None => {
                let product = data.with_id(Uuid::new_v4());
                tracing::info!(id = %product.id, name = %product.name, "product created");
                products.write().push(product);
            }
        }
        editing.set(None);
        show_form.set(false);
    };

    let open_edit = move |product: Product| {
        editing.set(Some(product));
        show_form.set(true);
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { "Products" }
                button {
                    class: "button",
                    "data-style": "primary",
                    onclick: open_create,
                    "New Product"
                }
            }

            if products.read().is_empty() {
                p { class: "empty-state", "No products yet." }
            } else {
                ul { class: "product-list",
                    for product in products.read().iter().cloned() {
                        ProductRow {
                            key: "{product.id}",
                            product,
                            on_edit: open_edit,
                        }
                    }
                }
            }

            if show_form() {
                div { class: "card",
                    ProductForm {
                        initial: editing(),
                        on_submit: handle_submit,
                    }
                    button {
                        class: "button",
                        onclick: close_form,
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
fn ProductRow(product: Product, on_edit: EventHandler<Product>) -> Element {
    let product_for_edit = product.clone();

    rsx! {
        li { class: "card product-row",
            div {
                strong { "{product.name}" }
                p { class: "product-meta",
                    "{product.category} · {product.price} · {product.quantity} in stock"
                }
            }
            button {
                class: "button",
                onclick: move |_| on_edit.call(product_for_edit.clone()),
                "Edit"
            }
        }
    }
}
