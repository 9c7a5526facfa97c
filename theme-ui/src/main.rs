use dioxus::launch;
use dioxus::prelude::*;

use theme_ui::{init_logging, ThemeToggle};

fn main() {
    init_logging();

    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; padding: 1rem;",
            nav {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;",
                h1 { "Blog" }
                ThemeToggle {}
            }
            p { "The theme choice is remembered across visits." }
        }
    }
}
