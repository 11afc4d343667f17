#![forbid(unsafe_code)]

//! Digital rain: one falling glyph stream per grid column.
//!
//! The host owns the timer. Each [`RainRenderer::tick`] paints one frame:
//!
//! 1. Fade the previous frames with a translucent overlay.
//! 2. Draw one random glyph per column at `(column, offset) * cell_size`.
//! 3. Columns whose glyph fell past the bottom edge restart at the top with
//!    a small probability, which staggers the streams.
//! 4. Every offset advances by one cell.
//!
//! On resize the grid is rebuilt with `floor(width / cell_size)` columns, all
//! starting one cell below the top edge.

use crate::config::RainConfig;
use crate::error::Result;
use crate::rng::GlyphRng;
use crate::surface::DrawSurface;

/// Offset every column starts from after setup or resize.
pub const INITIAL_OFFSET: u32 = 1;

/// Falling-glyph grid state.
#[derive(Debug, Clone)]
pub struct RainRenderer {
    config: RainConfig,
    alphabet: Vec<char>,
    font: String,
    width: u32,
    height: u32,
    drops: Vec<u32>,
    rng: GlyphRng,
    frame: u64,
}

impl RainRenderer {
    /// Build a renderer for a `width` x `height` surface.
    pub fn new(config: RainConfig, width: u32, height: u32, seed: u64) -> Result<Self> {
        config.validate()?;
        let alphabet = config.alphabet.chars().collect();
        let font = config.font();
        let mut renderer = Self {
            config,
            alphabet,
            font,
            width: 0,
            height: 0,
            drops: Vec::new(),
            rng: GlyphRng::new(seed),
            frame: 0,
        };
        renderer.resize(width, height);
        Ok(renderer)
    }

    /// Number of columns that fit in `width` pixels.
    #[must_use]
    pub fn columns_for(width: u32, cell_size: u16) -> usize {
        (width / u32::from(cell_size.max(1))) as usize
    }

    /// Recompute the grid for a new surface size.
    ///
    /// All offsets are reset to [`INITIAL_OFFSET`].
    pub fn resize(&mut self, width: u32, height: u32) {
        let columns = Self::columns_for(width, self.config.cell_size);
        self.width = width;
        self.height = height;
        self.drops.clear();
        self.drops.resize(columns, INITIAL_OFFSET);
        tracing::debug!(width, height, columns, "rain grid resized");
    }

    /// Paint one frame and advance every column.
    pub fn tick<S: DrawSurface>(&mut self, surface: &mut S) -> core::result::Result<(), S::Error> {
        surface.fill_overlay(self.config.trail_color)?;
        surface.set_glyph_style(self.config.glyph_color, &self.font)?;

        let cell = f64::from(self.config.cell_size);
        let height = f64::from(self.height);
        for (column, offset) in self.drops.iter_mut().enumerate() {
            let glyph = self.alphabet[self.rng.below(self.alphabet.len())];
            let x = column as f64 * cell;
            let y = f64::from(*offset) * cell;
            surface.draw_glyph(glyph, x, y)?;

            if y > height && self.rng.chance(self.config.reset_probability) {
                *offset = 0;
            }
            *offset = offset.saturating_add(1);
        }

        self.frame = self.frame.wrapping_add(1);
        tracing::trace!(frame = self.frame, columns = self.drops.len(), "rain tick");
        Ok(())
    }

    /// Per-column offsets, in cell heights.
    #[must_use]
    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Frames painted since construction.
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::surface::{DrawOp, RecordingSurface};
    use pretty_assertions::assert_eq;

    fn renderer(width: u32, height: u32) -> RainRenderer {
        RainRenderer::new(RainConfig::default(), width, height, 0xC0FFEE).unwrap()
    }

    #[test]
    fn columns_are_floor_of_width_over_cell() {
        assert_eq!(RainRenderer::columns_for(0, 14), 0);
        assert_eq!(RainRenderer::columns_for(13, 14), 0);
        assert_eq!(RainRenderer::columns_for(14, 14), 1);
        assert_eq!(RainRenderer::columns_for(1920, 14), 137);
    }

    #[test]
    fn setup_starts_every_column_at_one() {
        let rain = renderer(140, 100);
        assert_eq!(rain.drops(), &[INITIAL_OFFSET; 10]);
    }

    #[test]
    fn overlay_precedes_glyphs() {
        let mut rain = renderer(70, 100);
        let mut surface = RecordingSurface::new();
        rain.tick(&mut surface).unwrap();

        let ops = surface.ops();
        assert_eq!(ops.len(), 2 + 5);
        assert_eq!(ops[0], DrawOp::Overlay(Rgba::BLACK.with_alpha(0.05)));
        assert_eq!(
            ops[1],
            DrawOp::GlyphStyle {
                color: Rgba::rgb(0x00, 0xff, 0x95),
                font: "14px monospace".to_owned(),
            }
        );
        assert!(ops[2..].iter().all(|op| matches!(op, DrawOp::Glyph { .. })));
    }

    #[test]
    fn glyph_positions_follow_grid() {
        let mut rain = renderer(42, 1_000);
        let mut surface = RecordingSurface::new();
        rain.tick(&mut surface).unwrap();
        rain.tick(&mut surface).unwrap();

        let positions: Vec<(f64, f64)> = surface.glyphs().map(|(_, x, y)| (x, y)).collect();
        assert_eq!(
            positions,
            vec![
                (0.0, 14.0),
                (14.0, 14.0),
                (28.0, 14.0),
                (0.0, 28.0),
                (14.0, 28.0),
                (28.0, 28.0),
            ]
        );
    }

    #[test]
    fn glyphs_come_from_alphabet() {
        let config = RainConfig {
            alphabet: "01".to_owned(),
            ..RainConfig::default()
        };
        let mut rain = RainRenderer::new(config, 280, 100, 9).unwrap();
        let mut surface = RecordingSurface::new();
        for _ in 0..20 {
            rain.tick(&mut surface).unwrap();
        }
        assert!(surface.glyphs().all(|(g, _, _)| g == '0' || g == '1'));
    }

    #[test]
    fn on_screen_columns_always_advance() {
        let mut rain = renderer(140, 10_000);
        let mut surface = RecordingSurface::new();
        for step in 1..=50u32 {
            rain.tick(&mut surface).unwrap();
            assert!(rain.drops().iter().all(|&o| o == INITIAL_OFFSET + step));
        }
    }

    #[test]
    fn certain_reset_restarts_off_screen_columns() {
        let config = RainConfig {
            reset_probability: 1.0,
            ..RainConfig::default()
        };
        // 28px tall: offset 1 -> y=14, offset 2 -> y=28, offset 3 -> y=42 > 28.
        let mut rain = RainRenderer::new(config, 28, 28, 1).unwrap();
        let mut surface = RecordingSurface::new();
        let mut seen = Vec::new();
        for _ in 0..4 {
            rain.tick(&mut surface).unwrap();
            seen.push(rain.drops()[0]);
        }
        assert_eq!(seen, vec![2, 3, 1, 2]);
    }

    #[test]
    fn zero_probability_never_resets() {
        let config = RainConfig {
            reset_probability: 0.0,
            ..RainConfig::default()
        };
        let mut rain = RainRenderer::new(config, 14, 14, 1).unwrap();
        let mut surface = RecordingSurface::new();
        for _ in 0..200 {
            rain.tick(&mut surface).unwrap();
        }
        assert_eq!(rain.drops(), &[INITIAL_OFFSET + 200]);
    }

    #[test]
    fn resize_rebuilds_grid() {
        let mut rain = renderer(140, 100);
        let mut surface = RecordingSurface::new();
        rain.tick(&mut surface).unwrap();
        rain.tick(&mut surface).unwrap();

        rain.resize(300, 50);
        assert_eq!(rain.size(), (300, 50));
        assert_eq!(rain.columns(), 21);
        assert!(rain.drops().iter().all(|&o| o == INITIAL_OFFSET));
    }

    #[test]
    fn narrow_surface_draws_only_overlay() {
        let mut rain = renderer(5, 100);
        let mut surface = RecordingSurface::new();
        rain.tick(&mut surface).unwrap();
        assert_eq!(surface.glyphs().count(), 0);
        assert_eq!(rain.frame(), 1);
    }

    #[test]
    fn same_seed_same_frames() {
        let mut a = renderer(200, 40);
        let mut b = renderer(200, 40);
        let mut sa = RecordingSurface::new();
        let mut sb = RecordingSurface::new();
        for _ in 0..30 {
            a.tick(&mut sa).unwrap();
            b.tick(&mut sb).unwrap();
        }
        assert_eq!(sa.ops(), sb.ops());
        assert_eq!(a.drops(), b.drops());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = RainConfig {
            cell_size: 0,
            ..RainConfig::default()
        };
        assert!(RainRenderer::new(config, 100, 100, 1).is_err());
    }
}
