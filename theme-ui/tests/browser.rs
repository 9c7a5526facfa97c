//! Browser adapters against a real DOM. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use theme_types::{ThemeMarkers, ThemePreference};
use theme_ui::{
    load_page_config, mount_theme_toggle, BrowserStore, DocumentSurface, PreferenceStore, PresentationSurface,
    ThemeController,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const TEST_KEY: &str = "theme-browser-test";

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn reset_page(control_id: &str) {
    let document = document();
    let body = document.body().unwrap();
    body.set_class_name("bg-light text-dark");
    if document.get_element_by_id(control_id).is_none() {
        let button = document.create_element("button").unwrap();
        button.set_id(control_id);
        body.append_child(&button).unwrap();
    }
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let mut store = BrowserStore::local();
    assert!(store.is_available());
    store.set(TEST_KEY, "dark").unwrap();
    assert_eq!(store.get(TEST_KEY).unwrap().as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
fn document_surface_swaps_body_classes() {
    reset_page("surface-toggle");
    let mut surface = DocumentSurface::from_window("surface-toggle").unwrap();

    surface
        .apply_theme(ThemePreference::Dark, &ThemeMarkers::default())
        .unwrap();
    surface.set_control_label("Toggle Light Mode").unwrap();

    let document = document();
    let classes = document.body().unwrap().class_list();
    assert!(classes.contains("bg-dark"));
    assert!(classes.contains("text-white"));
    assert!(!classes.contains("bg-light"));
    assert!(!classes.contains("text-dark"));
    assert_eq!(
        document.document_element().unwrap().get_attribute("data-theme").as_deref(),
        Some("dark")
    );
    assert_eq!(
        document
            .get_element_by_id("surface-toggle")
            .unwrap()
            .text_content()
            .as_deref(),
        Some("Toggle Light Mode")
    );
}

#[wasm_bindgen_test]
fn controller_drives_live_page() {
    reset_page("controller-toggle");
    let mut store = BrowserStore::local();
    store.set(TEST_KEY, "light").unwrap();

    let mut config = load_page_config(&document());
    config.storage_key = TEST_KEY.to_string();
    config.control_id = "controller-toggle".to_string();

    let surface = DocumentSurface::from_window("controller-toggle").unwrap();
    let mut ctl = ThemeController::with_config(store, surface, config);
    assert_eq!(ctl.initialize(), ThemePreference::Light);
    assert_eq!(ctl.toggle_theme().unwrap(), ThemePreference::Dark);

    assert_eq!(
        BrowserStore::local().get(TEST_KEY).unwrap().as_deref(),
        Some("dark")
    );
    assert!(document().body().unwrap().class_list().contains("bg-dark"));
}

#[wasm_bindgen_test]
fn missing_control_is_reported() {
    let mut surface = DocumentSurface::from_window("no-such-control").unwrap();
    assert!(surface.set_control_label("Toggle Dark Mode").is_err());
}

#[wasm_bindgen_test]
fn mounted_toggle_flips_on_click() {
    reset_page("theme-toggle");
    BrowserStore::local().set("theme", "light").unwrap();

    mount_theme_toggle().unwrap();
    let button: web_sys::HtmlElement = document()
        .get_element_by_id("theme-toggle")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(button.text_content().as_deref(), Some("Toggle Dark Mode"));

    button.click();

    assert_eq!(
        BrowserStore::local().get("theme").unwrap().as_deref(),
        Some("dark")
    );
    assert!(document().body().unwrap().class_list().contains("bg-dark"));
    assert_eq!(button.text_content().as_deref(), Some("Toggle Light Mode"));
}
