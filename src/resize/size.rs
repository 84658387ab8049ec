//! Size specifications and their resolution against the viewport

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid size configuration
///
/// These are contract violations by whoever wrote the configuration; they are
/// reported to the caller and never coerced into a usable size.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResizeError {
    #[error("invalid size {0:?}: expected a positive number of pixels or a percentage like \"50%\"")]
    Malformed(String),
    #[error("invalid size {0}: sizes must be finite and greater than zero")]
    OutOfRange(f64),
    #[error("invalid bounds: max size {max} is smaller than min size {min}")]
    InvertedBounds { min: SizeSpec, max: SizeSpec },
}

/// Axis along which a container's size is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Width (left/right resizers)
    Horizontal,
    /// Height (top/bottom resizers)
    Vertical,
}

/// Current viewport (window inner) dimensions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Dimension along the given axis
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Raw size as written in configuration or persisted layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    Number(f64),
    Text(String),
}

/// A validated size: fixed pixels or a share of the viewport
///
/// Percentages are resolved on every read, so a viewport change is picked up
/// without re-parsing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SizeValue", into = "SizeValue")]
pub enum SizeSpec {
    Pixels(f64),
    Percent(f64),
}

impl SizeSpec {
    pub fn px(value: f64) -> Result<Self, ResizeError> {
        check_range(value).map(SizeSpec::Pixels)
    }

    pub fn percent(value: f64) -> Result<Self, ResizeError> {
        check_range(value).map(SizeSpec::Percent)
    }

    /// Parse a percentage string such as `"50%"`
    ///
    /// Text is only ever a percentage; pixel sizes are numbers (see [`SizeSpec::px`]).
    pub fn parse(input: &str) -> Result<Self, ResizeError> {
        let trimmed = input.trim();
        let Some(number) = trimmed.strip_suffix('%') else {
            return Err(ResizeError::Malformed(input.to_string()));
        };
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| ResizeError::Malformed(input.to_string()))?;
        Self::percent(value)
    }

    /// Re-check a spec that may have been built directly from the variants
    pub fn validate(self) -> Result<Self, ResizeError> {
        match self {
            SizeSpec::Pixels(v) | SizeSpec::Percent(v) => check_range(v).map(|_| self),
        }
    }

    /// Resolve to pixels against the current viewport
    pub fn resolve(&self, axis: Axis, viewport: Viewport) -> f64 {
        match *self {
            SizeSpec::Pixels(px) => px,
            SizeSpec::Percent(pct) => viewport.extent(axis) * pct / 100.0,
        }
    }
}

fn check_range(value: f64) -> Result<f64, ResizeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ResizeError::OutOfRange(value))
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSpec::Pixels(px) => write!(f, "{}px", px),
            SizeSpec::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

impl TryFrom<SizeValue> for SizeSpec {
    type Error = ResizeError;

    fn try_from(value: SizeValue) -> Result<Self, Self::Error> {
        match value {
            SizeValue::Number(n) => SizeSpec::px(n),
            SizeValue::Text(s) => SizeSpec::parse(&s),
        }
    }
}

impl From<SizeSpec> for SizeValue {
    fn from(spec: SizeSpec) -> Self {
        match spec {
            SizeSpec::Pixels(px) => SizeValue::Number(px),
            SizeSpec::Percent(pct) => SizeValue::Text(format!("{}%", pct)),
        }
    }
}

/// Clamping bounds for a resizable container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeBounds {
    pub min: SizeSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<SizeSpec>,
}

impl ResizeBounds {
    pub fn new(min: SizeSpec, max: Option<SizeSpec>) -> Result<Self, ResizeError> {
        let min = min.validate()?;
        let max = max.map(SizeSpec::validate).transpose()?;
        // Mixed units can only be compared once a viewport is known
        if let (SizeSpec::Pixels(lo), Some(SizeSpec::Pixels(hi))) = (min, max) {
            if hi < lo {
                return Err(ResizeError::InvertedBounds {
                    min,
                    max: SizeSpec::Pixels(hi),
                });
            }
        }
        if let (SizeSpec::Percent(lo), Some(SizeSpec::Percent(hi))) = (min, max) {
            if hi < lo {
                return Err(ResizeError::InvertedBounds {
                    min,
                    max: SizeSpec::Percent(hi),
                });
            }
        }
        Ok(Self { min, max })
    }

    pub fn min_px(&self, axis: Axis, viewport: Viewport) -> f64 {
        self.min.resolve(axis, viewport)
    }

    pub fn max_px(&self, axis: Axis, viewport: Viewport) -> Option<f64> {
        self.max.map(|max| max.resolve(axis, viewport))
    }

    /// Clamp up to min, then down to max
    pub fn clamp(&self, size: f64, axis: Axis, viewport: Viewport) -> f64 {
        let size = size.max(self.min_px(axis, viewport));
        match self.max_px(axis, viewport) {
            Some(max) => size.min(max),
            None => size,
        }
    }
}
