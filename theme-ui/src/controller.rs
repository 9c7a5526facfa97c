//! Theme controller - two-state light/dark machine
//!
//! Owns the active theme and keeps the presentation surface and the
//! persisted preference in step. All calls run to completion on the UI
//! thread; nothing here suspends.

use dioxus_logger::tracing::{debug, warn};
use theme_types::{ThemeConfig, ThemePreference};

use crate::storage::{PreferenceStore, StorageError};
use crate::surface::{PresentationSurface, SurfaceError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("theme storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("theme surface error: {0}")]
    Surface(#[from] SurfaceError),
}

pub struct ThemeController<S, P> {
    store: S,
    surface: P,
    config: ThemeConfig,
    active: ThemePreference,
}

impl<S, P> ThemeController<S, P>
where
    S: PreferenceStore,
    P: PresentationSurface,
{
    pub fn new(store: S, surface: P) -> Self {
        Self::with_config(store, surface, ThemeConfig::default())
    }

    pub fn with_config(store: S, surface: P, config: ThemeConfig) -> Self {
        let active = config.default_theme;
        Self {
            store,
            surface,
            config,
            active,
        }
    }

    /// Load the persisted preference and present it.
    ///
    /// Absent, unreadable or unrecognized preferences fall back to the
    /// configured default, whose markers are applied explicitly. Never
    /// writes to the store.
    pub fn initialize(&mut self) -> ThemePreference {
        let theme = self.load_preference();

        if let Err(e) = self.surface.apply_theme(theme, &self.config.markers) {
            warn!("Failed to apply {} theme: {}", theme, e);
        }
        if let Err(e) = self.surface.set_control_label(theme.action_label()) {
            warn!("Failed to label theme toggle: {}", e);
        }

        self.active = theme;
        debug!("Theme initialized: {}", theme);
        theme
    }

    /// Switch to the other theme and persist it.
    ///
    /// A failure to apply the markers leaves the active theme and the store
    /// untouched. A label failure is logged and the toggle completes.
    /// A store failure is reported after the page already shows the new
    /// theme.
    pub fn toggle_theme(&mut self) -> Result<ThemePreference, ThemeError> {
        let next = self.active.toggled();

        self.surface.apply_theme(next, &self.config.markers)?;
        // Markers are applied from here on
        if let Err(e) = self.surface.set_control_label(next.action_label()) {
            warn!("Failed to label theme toggle: {}", e);
        }
        self.active = next;
        debug!("Theme toggled to {}", next);

        self.store.set(&self.config.storage_key, next.as_str())?;
        Ok(next)
    }

    pub fn active_theme(&self) -> ThemePreference {
        self.active
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }

    pub fn into_parts(self) -> (S, P) {
        (self.store, self.surface)
    }

    fn load_preference(&self) -> ThemePreference {
        let default = self.config.default_theme;
        match self.store.get(&self.config.storage_key) {
            Ok(Some(raw)) => raw.parse::<ThemePreference>().unwrap_or_else(|e| {
                warn!("Ignoring stored theme preference, using {}: {}", default, e);
                default
            }),
            Ok(None) => default,
            Err(e) => {
                warn!("Failed to read theme preference, using {}: {}", default, e);
                default
            }
        }
    }
}
