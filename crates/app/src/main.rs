use dioxus::prelude::*;

mod catalog;
mod product_form;

use catalog::Catalog;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Catalog {}
    }
}
