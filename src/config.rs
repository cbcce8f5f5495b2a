use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{TrivistaError, TrivistaResult},
    layers::diamonds::DiamondParams,
    layers::panels::{PanelSpec, default_panels},
    layers::spiral::SpiralParams,
    serialize::paths::normalize_rel_path,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Shared texture declaration.
pub struct TextureConfig {
    pub id: String,
    /// Image path relative to the project root.
    pub path: String,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            id: "map".to_string(),
            path: "svg/texmap/pexels_scene.png".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Tunable scene parameters. Omitted JSON fields fall back to the reference scene.
pub struct SceneConfig {
    pub texture: TextureConfig,
    pub spiral: SpiralParams,
    pub diamonds: DiamondParams,
    pub panels: Vec<PanelSpec>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            texture: TextureConfig::default(),
            spiral: SpiralParams::default(),
            diamonds: DiamondParams::default(),
            panels: default_panels(),
        }
    }
}

impl SceneConfig {
    pub fn from_json_str(s: &str) -> TrivistaResult<Self> {
        serde_json::from_str(s).map_err(|e| TrivistaError::serde(format!("scene config: {e}")))
    }

    pub fn from_path(path: &Path) -> TrivistaResult<Self> {
        let f = File::open(path).map_err(|e| TrivistaError::io(path, e))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            TrivistaError::serde(format!("parse scene config '{}': {e}", path.display()))
        })?;
        Ok(cfg)
    }

    pub fn validate(&self) -> TrivistaResult<()> {
        if self.texture.id.trim().is_empty() {
            return Err(TrivistaError::validation("texture id must be non-empty"));
        }
        normalize_rel_path(&self.texture.path)?;
        self.spiral.validate()?;
        self.diamonds.validate()?;
        for (i, panel) in self.panels.iter().enumerate() {
            panel
                .validate()
                .map_err(|e| TrivistaError::validation(format!("panel {i}: {e}")))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
