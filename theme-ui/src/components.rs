use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use theme_types::{ThemeConfig, ThemeMarkers, ThemePreference};

use crate::controller::ThemeController;
use crate::storage::BrowserStore;
use crate::surface::{DocumentSurface, PresentationSurface, SurfaceError};

/// Surface for Dioxus-rendered controls: markers go to the live document,
/// the label goes through a signal the component renders.
pub struct SignalSurface {
    document: Option<DocumentSurface>,
    label: Signal<String>,
}

impl SignalSurface {
    pub fn new(document: Option<DocumentSurface>, label: Signal<String>) -> Self {
        Self { document, label }
    }
}

impl PresentationSurface for SignalSurface {
    fn apply_theme(
        &mut self,
        theme: ThemePreference,
        markers: &ThemeMarkers,
    ) -> Result<(), SurfaceError> {
        match self.document.as_mut() {
            Some(document) => document.apply_theme(theme, markers),
            None => Err(SurfaceError::MissingElement("document".to_string())),
        }
    }

    fn set_control_label(&mut self, label: &str) -> Result<(), SurfaceError> {
        self.label.set(label.to_string());
        Ok(())
    }
}

type ToggleController = ThemeController<BrowserStore, SignalSurface>;

#[component]
pub fn ThemeToggle(#[props(default)] config: ThemeConfig) -> Element {
    let control_id = config.control_id.clone();
    let label = use_signal(|| config.default_theme.action_label().to_string());

    let controller = use_hook(move || {
        let document = match DocumentSurface::from_window(config.control_id.clone()) {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("Theme markers disabled: {}", e);
                None
            }
        };
        let surface = SignalSurface::new(document, label);
        Rc::new(RefCell::new(ToggleController::with_config(
            BrowserStore::local(),
            surface,
            config,
        )))
    });

    let init_controller = controller.clone();
    use_effect(move || {
        init_controller.borrow_mut().initialize();
    });

    rsx! {
        button {
            id: "{control_id}",
            class: "btn btn-outline-secondary theme-toggle",
            r#type: "button",
            onclick: move |_| {
                if let Err(e) = controller.borrow_mut().toggle_theme() {
                    warn!("Theme toggle incomplete: {}", e);
                }
            },
            "{label}"
        }
    }
}
