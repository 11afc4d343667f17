#![forbid(unsafe_code)]

//! Drawing surface seam between the rain renderer and its host.

use core::convert::Infallible;

use crate::color::Rgba;

/// A 2D-paintable rectangle sized by the host.
///
/// The web frontend implements this over `CanvasRenderingContext2d`;
/// [`RecordingSurface`] implements it headlessly.
pub trait DrawSurface {
    type Error;

    /// Fill the entire surface with `color` (alpha-blended).
    fn fill_overlay(&mut self, color: Rgba) -> Result<(), Self::Error>;

    /// Select the fill color and CSS font used by subsequent glyphs.
    fn set_glyph_style(&mut self, color: Rgba, font: &str) -> Result<(), Self::Error>;

    /// Draw one glyph with its baseline origin at `(x, y)` in CSS pixels.
    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64) -> Result<(), Self::Error>;
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Overlay(Rgba),
    GlyphStyle { color: Rgba, font: String },
    Glyph { glyph: char, x: f64, y: f64 },
}

/// Headless surface that records every call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls since creation or the last [`take_ops`](Self::take_ops).
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        core::mem::take(&mut self.ops)
    }

    /// Recorded glyph draws only, in draw order.
    pub fn glyphs(&self) -> impl Iterator<Item = (char, f64, f64)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Glyph { glyph, x, y } => Some((glyph, x, y)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    type Error = Infallible;

    fn fill_overlay(&mut self, color: Rgba) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Overlay(color));
        Ok(())
    }

    fn set_glyph_style(&mut self, color: Rgba, font: &str) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::GlyphStyle {
            color,
            font: font.to_owned(),
        });
        Ok(())
    }

    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Glyph { glyph, x, y });
        Ok(())
    }
}
