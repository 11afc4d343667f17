#![forbid(unsafe_code)]

//! Mount options accepted from JavaScript.
//!
//! Element ids sit next to the flattened [`WidgetConfig`], so a host can pass
//! a single object:
//!
//! ```json
//! { "canvas_id": "matrix", "rain": { "cell_size": 16 }, "terminal": { "prompt": "$" } }
//! ```

use rainshell_core::{Result, WidgetConfig};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MountOptions {
    /// `<canvas>` the rain paints on.
    pub canvas_id: String,
    /// Scrolling container that receives terminal rows.
    pub output_id: String,
    /// Single-line `<input>` read on Enter.
    pub input_id: String,
    /// Optional wrapper whose clicks refocus the input.
    pub input_bar_id: String,
    #[serde(flatten)]
    pub widget: WidgetConfig,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            canvas_id: "matrix".to_owned(),
            output_id: "terminal-output".to_owned(),
            input_id: "terminal-input".to_owned(),
            input_bar_id: "terminal-input-bar".to_owned(),
            widget: WidgetConfig::default(),
        }
    }
}

impl MountOptions {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.widget.validate()?;
        Ok(options)
    }
}
