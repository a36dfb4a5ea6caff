//! JSON scene files.

use std::path::Path;

use crate::foundation::core::Viewport;
use crate::foundation::error::{MotionError, MotionResult};
use crate::particles::field::ParticleFieldConfig;
use crate::scenes::story::StoryConfig;
use crate::scenes::topography::TopographyConfig;

/// One scene description, tagged by `"kind"`.
///
/// Every config inside is `#[serde(default)]`, so a file only lists what it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneFile {
    /// Horizontal story section.
    Story {
        /// Scene config.
        #[serde(default)]
        config: StoryConfig,
        /// Host viewport; omitted means the server-side default.
        #[serde(default)]
        viewport: Option<Viewport>,
    },
    /// Particle text field.
    Particles {
        /// Scene config.
        #[serde(default)]
        config: ParticleFieldConfig,
        /// Host viewport.
        #[serde(default)]
        viewport: Option<Viewport>,
    },
    /// Topography portrait.
    Topography {
        /// Scene config.
        #[serde(default)]
        config: TopographyConfig,
        /// Host viewport.
        #[serde(default)]
        viewport: Option<Viewport>,
    },
}

impl SceneFile {
    /// Parse and validate scene JSON.
    pub fn from_json(text: &str) -> MotionResult<Self> {
        let file: Self = serde_json::from_str(text).map_err(|e| MotionError::serde(e.to_string()))?;
        file.validate()?;
        Ok(file)
    }

    /// Read, parse and validate a scene file.
    pub fn load_json(path: &Path) -> MotionResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            MotionError::asset(format!("failed to read scene '{}': {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    /// Validate the contained config.
    pub fn validate(&self) -> MotionResult<()> {
        match self {
            Self::Story { config, .. } => config.validate(),
            Self::Particles { config, .. } => config.validate(),
            Self::Topography { config, .. } => config.validate(),
        }
    }

    /// Host viewport, if the file pins one.
    pub fn viewport(&self) -> Option<Viewport> {
        match *self {
            Self::Story { viewport, .. }
            | Self::Particles { viewport, .. }
            | Self::Topography { viewport, .. } => viewport,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
