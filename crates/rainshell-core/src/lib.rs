#![forbid(unsafe_code)]

//! `rainshell-core` holds the host-independent state behind the Rainshell
//! portfolio widget.
//!
//! Design goals:
//! - **Host-driven**: the embedding environment owns timers, input events,
//!   surface sizes and the wall clock, and pushes them in explicitly.
//! - **Deterministic**: glyph randomness comes from a seeded generator and
//!   time from a host-set clock, so every frame and log is reproducible.
//! - **No DOM**: drawing goes through [`DrawSurface`], terminal output is
//!   queued as [`OutputOp`]s. `rainshell-web` binds both to the browser.

pub mod clock;
pub mod color;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod rain;
pub mod rng;
pub mod surface;
pub mod terminal;

pub use clock::{SessionClock, format_system_date};
pub use color::Rgba;
pub use commands::{COMMAND_TABLE, Command, Destination};
pub use config::{NavigationTargets, RainConfig, TerminalConfig, WidgetConfig};
pub use error::{RainshellError, Result};
pub use rain::RainRenderer;
pub use rng::GlyphRng;
pub use surface::{DrawOp, DrawSurface, RecordingSurface};
pub use terminal::{
    CommandOutcome, LineStyle, OutputOp, SessionState, TerminalLine, TerminalSession,
};
