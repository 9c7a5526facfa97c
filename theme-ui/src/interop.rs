//! Browser entry point for server-rendered pages

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use dioxus_logger::tracing::{info, warn, Level};
use theme_types::{ThemeConfig, THEME_CONFIG_ELEMENT_ID};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

use crate::controller::ThemeController;
use crate::storage::BrowserStore;
use crate::surface::DocumentSurface;

type PageController = ThemeController<BrowserStore, DocumentSurface>;

static LOGGING: Once = Once::new();

/// Initialize logging for WASM. Safe to call more than once.
pub fn init_logging() {
    LOGGING.call_once(|| {
        wasm_logger::init(wasm_logger::Config::default());
        dioxus_logger::init(Level::INFO).ok();
    });
}

/// Wire the theme toggle into a server-rendered page.
///
/// Runs once the page's structure is parsed: immediately if the document
/// has finished loading, otherwise on `DOMContentLoaded`.
#[wasm_bindgen]
pub fn mount_theme_toggle() -> Result<(), JsValue> {
    init_logging();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document on window"))?;

    if document.ready_state() == "loading" {
        let ready_document = document.clone();
        let on_ready = Closure::once_into_js(move |_e: Event| {
            if let Err(e) = bind_theme_toggle(&ready_document) {
                warn!("Failed to mount theme toggle: {:?}", e);
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }

    bind_theme_toggle(&document)
}

/// Read the optional `<script type="application/json" id="theme-config">`
/// element. Falls back to the default config when absent or invalid.
pub fn load_page_config(document: &Document) -> ThemeConfig {
    let Some(text) = document
        .get_element_by_id(THEME_CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return ThemeConfig::default();
    };

    ThemeConfig::from_json(&text).unwrap_or_else(|e| {
        warn!("Ignoring page theme config: {}", e);
        ThemeConfig::default()
    })
}

fn bind_theme_toggle(document: &Document) -> Result<(), JsValue> {
    let config = load_page_config(document);
    let surface = DocumentSurface::new(document.clone(), config.control_id.clone());
    let control = surface.control();

    let controller: Rc<RefCell<PageController>> = Rc::new(RefCell::new(
        ThemeController::with_config(BrowserStore::local(), surface, config),
    ));
    let theme = controller.borrow_mut().initialize();

    let Some(control) = control else {
        warn!(
            "Theme toggle control #{} not found; applied {} theme without a toggle",
            controller.borrow().config().control_id,
            theme
        );
        return Ok(());
    };

    let click_controller = controller.clone();
    let on_click = Closure::wrap(Box::new(move |_e: Event| {
        if let Err(e) = click_controller.borrow_mut().toggle_theme() {
            warn!("Theme toggle incomplete: {}", e);
        }
    }) as Box<dyn FnMut(Event)>);

    control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

    // The listener lives as long as the page
    on_click.forget();

    info!("Theme toggle mounted ({} theme)", theme);
    Ok(())
}
