use serde::Deserialize;
use thiserror::Error;

use crate::color::{Color, ColorParseError, DEFAULT_COLOR, DEFAULT_PALETTE};
use crate::settings::DEFAULT_BRUSH_SIZE;

pub const DEFAULT_PAGE_NAME_PREFIX: &str = "Papír";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed board config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("palette entry {index}: {source}")]
    PaletteColor {
        index: usize,
        #[source]
        source: ColorParseError,
    },
    #[error("brush color: {0}")]
    BrushColor(#[source] ColorParseError),
    #[error("palette must not be empty")]
    EmptyPalette,
    #[error("brush size must be a positive number, got {0}")]
    BrushSize(f64),
}

/// Host-page configuration. Every field is optional in the JSON.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub palette: Vec<String>,
    pub brush_color: String,
    pub brush_size: f64,
    pub page_name_prefix: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|value| value.to_string()).collect(),
            brush_color: DEFAULT_COLOR.to_string(),
            brush_size: DEFAULT_BRUSH_SIZE,
            page_name_prefix: DEFAULT_PAGE_NAME_PREFIX.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub palette: Vec<Color>,
    pub brush_color: Color,
    pub brush_size: f64,
    pub page_name_prefix: String,
}

impl BoardConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let palette = self
            .palette
            .iter()
            .enumerate()
            .map(|(index, value)| {
                Color::parse_hex(value).map_err(|source| ConfigError::PaletteColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let brush_color = Color::parse_hex(&self.brush_color).map_err(ConfigError::BrushColor)?;
        if !self.brush_size.is_finite() || self.brush_size <= 0.0 {
            return Err(ConfigError::BrushSize(self.brush_size));
        }
        Ok(ResolvedConfig {
            palette,
            brush_color,
            brush_size: self.brush_size,
            page_name_prefix: self.page_name_prefix.clone(),
        })
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            palette: crate::color::default_palette(),
            brush_color: Color::rgb(0x2d, 0x34, 0x36),
            brush_size: DEFAULT_BRUSH_SIZE,
            page_name_prefix: DEFAULT_PAGE_NAME_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_uses_defaults() {
        let config = BoardConfig::from_json("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.resolve().unwrap(), ResolvedConfig::default());
    }

    #[test]
    fn partial_override() {
        let config =
            BoardConfig::from_json(r##"{"brushSize": 12, "palette": ["#000", "#ffffff"], "pageNamePrefix": "Sheet"}"##)
                .unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.brush_size, 12.0);
        assert_eq!(resolved.palette, vec![Color::rgb(0, 0, 0), Color::rgb(255, 255, 255)]);
        assert_eq!(resolved.page_name_prefix, "Sheet");
        assert_eq!(resolved.brush_color.to_hex(), DEFAULT_COLOR);
    }

    #[test]
    fn bad_palette_entry_is_reported_with_index() {
        let config = BoardConfig::from_json(r##"{"palette": ["#000", "red"]}"##).unwrap();
        let error = config.resolve().unwrap_err();
        assert!(matches!(error, ConfigError::PaletteColor { index: 1, .. }));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            BoardConfig::from_json("{\"brushSize\": "),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn non_positive_brush_size_is_rejected() {
        let config = BoardConfig {
            brush_size: 0.0,
            ..BoardConfig::default()
        };
        assert!(matches!(config.resolve(), Err(ConfigError::BrushSize(_))));
    }
}
