//! Media query builder for the `media` attribute.

use std::{fmt, sync::LazyLock};

use htmlprop_core::{BuildError, Result};
use regex::Regex;
use serde::Deserialize;

static RESOLUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(dpi|dpcm)$").unwrap());

/// Value of the `orientation` media feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationCase {
    Landscape,
    Portrait,
}

impl OrientationCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

impl fmt::Display for OrientationCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the `scan` media feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanCase {
    Progressive,
    Interlace,
}

impl ScanCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Progressive => "progressive",
            Self::Interlace => "interlace",
        }
    }
}

impl fmt::Display for ScanCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fluent accumulator for a CSS media query.
///
/// Every token is appended followed by a single space and nothing is ever
/// trimmed, so a finished query ends with a space. Reading the query does
/// not reset it.
///
/// # Example
///
/// ```
/// use htmlprop_builders::media::{MediaQuery, OrientationCase};
///
/// let mut query = MediaQuery::new();
/// query
///     .not()
///     .print()
///     .comma()
///     .screen()
///     .and()
///     .orientation(OrientationCase::Portrait);
/// assert_eq!(query.as_str(), "not print , screen and (orientation: portrait) ");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaQuery {
    buffer: String,
}

impl MediaQuery {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_token(&mut self, token: &str) -> &mut Self {
        self.buffer.push_str(token);
        self.buffer.push(' ');
        self
    }

    fn push_feature(&mut self, feature: &str, value: impl fmt::Display) -> &mut Self {
        self.push_token(&format!("({}: {})", feature, value))
    }

    // =========================================================================
    // Keywords
    // =========================================================================

    pub fn and(&mut self) -> &mut Self {
        self.push_token("and")
    }

    /// Separate two queries; a comma list matches if any query matches.
    pub fn comma(&mut self) -> &mut Self {
        self.buffer.push_str(", ");
        self
    }

    pub fn not(&mut self) -> &mut Self {
        self.push_token("not")
    }

    pub fn all(&mut self) -> &mut Self {
        self.push_token("all")
    }

    // =========================================================================
    // Media types
    // =========================================================================

    pub fn aural(&mut self) -> &mut Self {
        self.push_token("aural")
    }

    pub fn braille(&mut self) -> &mut Self {
        self.push_token("braille")
    }

    pub fn handheld(&mut self) -> &mut Self {
        self.push_token("handheld")
    }

    pub fn projection(&mut self) -> &mut Self {
        self.push_token("projection")
    }

    pub fn print(&mut self) -> &mut Self {
        self.push_token("print")
    }

    pub fn screen(&mut self) -> &mut Self {
        self.push_token("screen")
    }

    pub fn tty(&mut self) -> &mut Self {
        self.push_token("tty")
    }

    pub fn tv(&mut self) -> &mut Self {
        self.push_token("tv")
    }

    // =========================================================================
    // Features
    // =========================================================================

    /// `(width: Npx)`
    pub fn width(&mut self, value: i64) -> &mut Self {
        self.push_feature("width", format_args!("{}px", value))
    }

    /// `(height: Npx)`
    pub fn height(&mut self, value: i64) -> &mut Self {
        self.push_feature("height", format_args!("{}px", value))
    }

    /// `(device-width: Npx)`
    pub fn device_width(&mut self, value: i64) -> &mut Self {
        self.push_feature("device-width", format_args!("{}px", value))
    }

    /// `(device-height: Npx)`
    pub fn device_height(&mut self, value: i64) -> &mut Self {
        self.push_feature("device-height", format_args!("{}px", value))
    }

    pub fn orientation(&mut self, value: OrientationCase) -> &mut Self {
        self.push_feature("orientation", value)
    }

    /// `(aspect-ratio: W/H)`
    pub fn aspect_ratio(&mut self, width: i64, height: i64) -> &mut Self {
        self.push_feature("aspect-ratio", format_args!("{}/{}", width, height))
    }

    /// `(device-aspect-ratio: W/H)`
    pub fn device_aspect_ratio(&mut self, width: i64, height: i64) -> &mut Self {
        self.push_feature("device-aspect-ratio", format_args!("{}/{}", width, height))
    }

    pub fn color(&mut self, value: i64) -> &mut Self {
        self.push_feature("color", value)
    }

    pub fn color_index(&mut self, value: i64) -> &mut Self {
        self.push_feature("color-index", value)
    }

    pub fn monochrome(&mut self, value: i64) -> &mut Self {
        self.push_feature("monochrome", value)
    }

    /// `(resolution: value)`, where value is digits followed by `dpi` or `dpcm`.
    ///
    /// # Panics
    ///
    /// Panics with "unknown dimension" when the unit is anything else.
    #[track_caller]
    pub fn resolution(&mut self, value: &str) -> &mut Self {
        match self.try_resolution(value) {
            Ok(query) => query,
            Err(e) => e.fail(),
        }
    }

    /// Fallible form of [`MediaQuery::resolution`]. Leaves the query untouched on error.
    pub fn try_resolution(&mut self, value: &str) -> Result<&mut Self> {
        if !RESOLUTION.is_match(value) {
            return Err(BuildError::UnknownDimension {
                value: value.to_string(),
            });
        }
        Ok(self.push_feature("resolution", value))
    }

    pub fn scan(&mut self, value: ScanCase) -> &mut Self {
        self.push_feature("scan", value)
    }

    /// `(grid: 1)` for grid devices, `(grid: 0)` otherwise.
    pub fn grid(&mut self, value: bool) -> &mut Self {
        self.push_feature("grid", u8::from(value))
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// The query accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Copy out the accumulated query.
    pub fn build(&self) -> String {
        self.buffer.clone()
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
