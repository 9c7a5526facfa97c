//! Presentation surface: where theme markers and the control label land

use std::collections::BTreeSet;

use theme_types::{ThemeMarkers, ThemePreference};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("missing page element: {0}")]
    MissingElement(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub trait PresentationSurface {
    /// Replace the page root's markers with the ones for `theme`.
    /// Markers of the other theme must be gone afterwards.
    fn apply_theme(
        &mut self,
        theme: ThemePreference,
        markers: &ThemeMarkers,
    ) -> Result<(), SurfaceError>;

    fn set_control_label(&mut self, label: &str) -> Result<(), SurfaceError>;
}

/// Records presentation state without a rendering environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    markers: BTreeSet<String>,
    data_theme: Option<ThemePreference>,
    label: Option<String>,
    applied: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose root already carries `markers`, like a server-rendered
    /// page with hardcoded classes.
    pub fn with_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn markers(&self) -> &BTreeSet<String> {
        &self.markers
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    pub fn data_theme(&self) -> Option<ThemePreference> {
        self.data_theme
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of successful `apply_theme` calls
    pub fn applied(&self) -> usize {
        self.applied
    }
}

impl PresentationSurface for MemorySurface {
    fn apply_theme(
        &mut self,
        theme: ThemePreference,
        markers: &ThemeMarkers,
    ) -> Result<(), SurfaceError> {
        for stale in markers.for_theme(theme.toggled()) {
            self.markers.remove(stale);
        }
        self.markers
            .extend(markers.for_theme(theme).iter().cloned());
        self.data_theme = Some(theme);
        self.applied += 1;
        Ok(())
    }

    fn set_control_label(&mut self, label: &str) -> Result<(), SurfaceError> {
        self.label = Some(label.to_string());
        Ok(())
    }
}

/// Live page: markers on `<body>`, `data-theme` on `<html>`, label on the
/// control element.
#[derive(Debug, Clone)]
pub struct DocumentSurface {
    document: web_sys::Document,
    control_id: String,
}

impl DocumentSurface {
    pub fn new(document: web_sys::Document, control_id: impl Into<String>) -> Self {
        Self {
            document,
            control_id: control_id.into(),
        }
    }

    pub fn from_window(control_id: impl Into<String>) -> Result<Self, SurfaceError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SurfaceError::MissingElement("document".to_string()))?;
        Ok(Self::new(document, control_id))
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    pub fn control(&self) -> Option<web_sys::Element> {
        self.document.get_element_by_id(&self.control_id)
    }
}

impl PresentationSurface for DocumentSurface {
    fn apply_theme(
        &mut self,
        theme: ThemePreference,
        markers: &ThemeMarkers,
    ) -> Result<(), SurfaceError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| SurfaceError::MissingElement("body".to_string()))?;
        let classes = body.class_list();

        for stale in markers.for_theme(theme.toggled()) {
            classes
                .remove_1(stale)
                .map_err(|e| SurfaceError::Dom(format!("{e:?}")))?;
        }
        for marker in markers.for_theme(theme) {
            classes
                .add_1(marker)
                .map_err(|e| SurfaceError::Dom(format!("{e:?}")))?;
        }

        if let Some(root) = self.document.document_element() {
            root.set_attribute("data-theme", theme.as_str())
                .map_err(|e| SurfaceError::Dom(format!("{e:?}")))?;
        }
        Ok(())
    }

    fn set_control_label(&mut self, label: &str) -> Result<(), SurfaceError> {
        let control = self
            .control()
            .ok_or_else(|| SurfaceError::MissingElement(format!("#{}", self.control_id)))?;
        control.set_text_content(Some(label));
        Ok(())
    }
}
