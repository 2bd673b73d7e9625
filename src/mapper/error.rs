//! Errors raised while mapping a config.

/// Mapping error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapError {
    /// Type of mapping error
    pub kind: MapErrorKind,
    /// Layer index where the error occurred
    pub layer: Option<usize>,
    /// Human-readable error message
    pub message: String,
}

impl MapError {
    /// Creates a new mapping error.
    pub fn new(kind: MapErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            layer: None,
            message: message.into(),
        }
    }

    /// Sets the layer context.
    #[must_use]
    pub const fn with_layer(mut self, layer: usize) -> Self {
        self.layer = Some(layer);
        self
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(layer) = self.layer {
            write!(f, "[Layer {}] {}: {}", layer, self.kind, self.message)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for MapError {}

/// Types of mapping errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapErrorKind {
    /// The config has no `layers` array
    MissingLayers,
    /// `layers` is not an array of keycode arrays
    MalformedLayers,
    /// A layer has fewer keycodes than the source board has positions
    LayerTooShort,
}

impl std::fmt::Display for MapErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLayers => write!(f, "Missing Layers"),
            Self::MalformedLayers => write!(f, "Malformed Layers"),
            Self::LayerTooShort => write!(f, "Layer Too Short"),
        }
    }
}
