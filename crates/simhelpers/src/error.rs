use std::fmt;

use crate::drawable::DrawableId;

/// Errors surfaced by worlds, drawables and their collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A drawable has neither a forced unit size nor a loaded asset.
    NoDimension,
    /// The drawable is not a member of this world's scene.
    NotInScene(DrawableId),
    /// An image failed to load or decode.
    Asset { source: String, message: String },
    /// The key-value store could not be read or written.
    Store(String),
    /// The render surface was dropped before it signalled readiness.
    SurfaceClosed,
}

impl SimError {
    pub(crate) fn asset(source: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Asset { source: source.into(), message: message.to_string() }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NoDimension => {
                write!(f, "no dimension available: force a size or wait for the asset to load")
            }
            SimError::NotInScene(id) => write!(f, "drawable {id} is not in the scene"),
            SimError::Asset { source, message } => {
                write!(f, "failed to load asset {source}: {message}")
            }
            SimError::Store(message) => write!(f, "key-value store error: {message}"),
            SimError::SurfaceClosed => write!(f, "render surface closed before becoming ready"),
        }
    }
}

impl std::error::Error for SimError {}
