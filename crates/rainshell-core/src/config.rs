#![forbid(unsafe_code)]

//! Widget configuration.
//!
//! Every field carries a default, so an empty JSON object (or no options at
//! all) yields the canonical widget: a resize-aware rain over a half-width
//! katakana alphabet and the stock portfolio shell.

use serde::Deserialize;

use crate::color::Rgba;
use crate::error::{RainshellError, Result};

/// Accepted range for the trail overlay alpha.
pub const TRAIL_ALPHA_RANGE: core::ops::RangeInclusive<f32> = 0.04..=0.15;

/// Default glyph alphabet: half-width katakana, Latin capitals and digits.
pub const DEFAULT_ALPHABET: &str = concat!(
    "ｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜﾝ",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
);

/// Top-level options for both components.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub rain: RainConfig,
    pub terminal: TerminalConfig,
}

impl WidgetConfig {
    /// Parse and validate options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every nested section.
    pub fn validate(&self) -> Result<()> {
        self.rain.validate()?;
        self.terminal.validate()
    }
}

/// Rain renderer settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Glyph cell pitch in CSS pixels; also the font size.
    pub cell_size: u16,
    /// Repeat interval of the host timer driving `tick`.
    pub tick_interval_ms: u32,
    /// Overlay painted over the whole surface before each frame.
    pub trail_color: Rgba,
    pub glyph_color: Rgba,
    pub font_family: String,
    pub alphabet: String,
    /// Chance that an off-screen column restarts at the top on a given tick.
    pub reset_probability: f64,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            cell_size: 14,
            tick_interval_ms: 50,
            trail_color: Rgba::BLACK.with_alpha(0.05),
            glyph_color: Rgba::rgb(0x00, 0xff, 0x95),
            font_family: "monospace".to_owned(),
            alphabet: DEFAULT_ALPHABET.to_owned(),
            reset_probability: 0.025,
        }
    }
}

impl RainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(RainshellError::invalid("rain.cell_size", "must be at least 1"));
        }
        if self.tick_interval_ms == 0 {
            return Err(RainshellError::invalid(
                "rain.tick_interval_ms",
                "must be at least 1",
            ));
        }
        if !TRAIL_ALPHA_RANGE.contains(&self.trail_color.a) {
            return Err(RainshellError::invalid(
                "rain.trail_color.a",
                format!(
                    "{} is outside {}..={}",
                    self.trail_color.a,
                    TRAIL_ALPHA_RANGE.start(),
                    TRAIL_ALPHA_RANGE.end()
                ),
            ));
        }
        if self.alphabet.chars().next().is_none() {
            return Err(RainshellError::invalid("rain.alphabet", "must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.reset_probability) {
            return Err(RainshellError::invalid(
                "rain.reset_probability",
                "must be within 0..=1",
            ));
        }
        Ok(())
    }

    /// CSS font shorthand used for glyphs, e.g. `14px monospace`.
    #[must_use]
    pub fn font(&self) -> String {
        format!("{}px {}", self.cell_size, self.font_family)
    }
}

/// Simulated shell settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Token shown before every echoed input line.
    pub prompt: String,
    pub targets: NavigationTargets,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "guest@portfolio:~$".to_owned(),
            targets: NavigationTargets::default(),
        }
    }
}

impl TerminalConfig {
    pub fn validate(&self) -> Result<()> {
        self.targets.validate()
    }
}

/// Relative destinations for the `cd` commands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationTargets {
    pub projects: String,
    pub resume: String,
    pub contact: String,
}

impl Default for NavigationTargets {
    fn default() -> Self {
        Self {
            projects: "projects.html".to_owned(),
            resume: "resume.html".to_owned(),
            contact: "contact.html".to_owned(),
        }
    }
}

impl NavigationTargets {
    fn validate(&self) -> Result<()> {
        for (field, target) in [
            ("terminal.targets.projects", &self.projects),
            ("terminal.targets.resume", &self.resume),
            ("terminal.targets.contact", &self.contact),
        ] {
            if target.trim().is_empty() {
                return Err(RainshellError::invalid(field, "must not be empty"));
            }
        }
        Ok(())
    }
}
