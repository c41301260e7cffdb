//! Viewer configuration
//!
//! Read from an optional TOML file. Every key is optional; a missing
//! `[highlight.*]` table keeps its default, a present one replaces it whole.

use crate::mdace::{CodeSystem, GroupOrder};
use anyhow::{Context, Result, anyhow};
use log::info;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_DESCRIPTION_WIDTH: usize = 50;

/// Colors for one kind of highlighted span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightStyle {
    /// Foreground color: a name ("yellow"), an index ("208") or "#RRGGBB"
    pub fg: Option<String>,
    /// Background color, same syntax as `fg`
    pub bg: Option<String>,
    #[serde(default)]
    pub bold: bool,
}

impl HighlightStyle {
    fn new(fg: &str, bg: &str) -> Self {
        Self {
            fg: Some(fg.to_string()),
            bg: Some(bg.to_string()),
            bold: true,
        }
    }

    /// Convert to a ratatui style, rejecting unknown colors
    pub fn to_style(&self) -> Result<Style> {
        let mut style = Style::default();
        if let Some(fg) = &self.fg {
            style = style.fg(parse_color(fg)?);
        }
        if let Some(bg) = &self.bg {
            style = style.bg(parse_color(bg)?);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        Ok(style)
    }
}

fn parse_color(value: &str) -> Result<Color> {
    Color::from_str(value).map_err(|_| anyhow!("Invalid color '{}'", value))
}

/// Highlight styles keyed by code system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// ICD-10-CM spans
    pub diagnosis: HighlightStyle,
    /// ICD-10-PCS spans
    pub procedure: HighlightStyle,
    /// Spans of any other code system
    pub other: HighlightStyle,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            diagnosis: HighlightStyle::new("#8B0000", "#FFB6C1"),
            procedure: HighlightStyle::new("#006400", "#90EE90"),
            other: HighlightStyle::new("yellow", "blue"),
        }
    }
}

/// Resolved highlight styles, ready for drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub diagnosis: Style,
    pub procedure: Style,
    pub other: Style,
}

impl Palette {
    pub fn style_for(&self, system: CodeSystem) -> Style {
        match system {
            CodeSystem::Diagnosis => self.diagnosis,
            CodeSystem::Procedure => self.procedure,
            CodeSystem::Other => self.other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Listing order of the annotation panel
    pub group_order: GroupOrder,
    /// Characters of the code description shown before truncation
    pub description_width: usize,
    pub highlight: HighlightConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            group_order: GroupOrder::Code,
            description_width: DEFAULT_DESCRIPTION_WIDTH,
            highlight: HighlightConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Load from `path`, or return defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded viewer config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ViewerConfig = toml::from_str(content)?;
        config.palette()?;
        Ok(config)
    }

    pub fn palette(&self) -> Result<Palette> {
        let h = &self.highlight;
        Ok(Palette {
            diagnosis: h.diagnosis.to_style().context("highlight.diagnosis")?,
            procedure: h.procedure.to_style().context("highlight.procedure")?,
            other: h.other.to_style().context("highlight.other")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ViewerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.description_width, 50);
        assert_eq!(config.group_order, GroupOrder::Code);
    }

    #[test]
    fn test_partial_config_overrides_only_given_keys() {
        let config = ViewerConfig::from_toml_str(
            r#"
group_order = "first_seen"

[highlight.procedure]
fg = "black"
bg = "lightgreen"
"#,
        )
        .unwrap();
        assert_eq!(config.group_order, GroupOrder::FirstSeen);
        assert_eq!(config.description_width, DEFAULT_DESCRIPTION_WIDTH);
        assert_eq!(config.highlight.diagnosis, HighlightConfig::default().diagnosis);
        assert!(!config.highlight.procedure.bold);

        let palette = config.palette().unwrap();
        assert_eq!(palette.procedure, Style::default().fg(Color::Black).bg(Color::LightGreen));
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let err = ViewerConfig::from_toml_str("[highlight.other]\nfg = \"not-a-color\"\n")
            .unwrap_err();
        assert!(format!("{:#}", err).contains("not-a-color"));
    }

    #[test]
    fn test_load_without_path_is_default() {
        assert_eq!(ViewerConfig::load(None).unwrap(), ViewerConfig::default());
    }
}
