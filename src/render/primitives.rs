use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        let unit = |channel: u8| f64::from(channel) / 255.0;
        Self::rgb(unit(red), unit(green), unit(blue))
    }

    pub fn validate(self) -> ChartResult<()> {
        let channels = [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ];
        match channels
            .into_iter()
            .find(|(_, value)| !(0.0..=1.0).contains(value))
        {
            Some((channel, _)) => Err(ChartError::InvalidData(format!(
                "color channel `{channel}` must be in [0, 1]"
            ))),
            None => Ok(()),
        }
    }
}

/// Straight stroke between two pixel points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub from: PixelPoint,
    pub to: PixelPoint,
    pub stroke_width: f64,
    pub color: Color,
    pub round_caps: bool,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(from: PixelPoint, to: PixelPoint, stroke_width: f64, color: Color) -> Self {
        Self {
            from,
            to,
            stroke_width,
            color,
            round_caps: false,
        }
    }

    #[must_use]
    pub const fn with_round_caps(mut self) -> Self {
        self.round_caps = true;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_point("line start", self.from)?;
        ensure_point("line end", self.to)?;
        ensure_positive("line stroke width", self.stroke_width)?;
        self.color.validate()
    }
}

/// Left-aligned label; `origin.y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub origin: PixelPoint,
    pub font_size_px: f64,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, origin: PixelPoint, font_size_px: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            origin,
            font_size_px,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData("label text is empty".to_owned()));
        }
        ensure_point("label origin", self.origin)?;
        ensure_positive("label font size", self.font_size_px)?;
        self.color.validate()
    }
}

/// Filled circle, used for the selected-sample marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center: PixelPoint,
    pub radius: f64,
    pub color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(center: PixelPoint, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_point("circle center", self.center)?;
        ensure_positive("circle radius", self.radius)?;
        self.color.validate()
    }
}

fn ensure_point(what: &str, point: PixelPoint) -> ChartResult<()> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

fn ensure_positive(what: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} must be finite and > 0"
        )))
    }
}
