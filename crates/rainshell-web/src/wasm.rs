#![forbid(unsafe_code)]

use wasm_bindgen::prelude::*;

use crate::canvas::RainAnimation;
use crate::dom::DomTerminal;
use crate::options::MountOptions;

fn parse_options(options: &JsValue) -> Result<MountOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(MountOptions::default());
    }
    let json: String = js_sys::JSON::stringify(options)?.into();
    MountOptions::from_json(&json).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let lo = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (hi << 32) | lo
}

/// Mount both components once the host page has loaded.
///
/// Each component activates independently; a missing canvas or missing
/// terminal elements leave that part inert without failing the mount.
#[wasm_bindgen]
pub fn mount(options: JsValue) -> Result<Rainshell, JsValue> {
    let options = parse_options(&options)?;
    let Some(window) = web_sys::window() else {
        return Ok(Rainshell::inert());
    };
    let Some(document) = window.document() else {
        return Ok(Rainshell::inert());
    };

    let MountOptions {
        canvas_id,
        output_id,
        input_id,
        input_bar_id,
        widget,
    } = options;
    let rain = RainAnimation::mount(&window, &document, &canvas_id, widget.rain, random_seed())?;
    let terminal = DomTerminal::mount(
        &window,
        &document,
        &output_id,
        &input_id,
        &input_bar_id,
        widget.terminal,
    )?;
    Ok(Rainshell { rain, terminal })
}

/// Handle to the mounted widget.
#[wasm_bindgen]
pub struct Rainshell {
    rain: Option<RainAnimation>,
    terminal: Option<DomTerminal>,
}

impl Rainshell {
    fn inert() -> Self {
        Self {
            rain: None,
            terminal: None,
        }
    }
}

#[wasm_bindgen]
impl Rainshell {
    /// Whether the rain animation is painting.
    #[wasm_bindgen(getter, js_name = rainActive)]
    pub fn rain_active(&self) -> bool {
        self.rain.as_ref().is_some_and(RainAnimation::is_running)
    }

    /// Whether the shell is attached to the page.
    #[wasm_bindgen(getter, js_name = terminalActive)]
    pub fn terminal_active(&self) -> bool {
        self.terminal.is_some()
    }

    /// Submit a line programmatically, exactly as if typed and followed by Enter.
    ///
    /// Returns the navigation target for `cd` commands without navigating.
    #[wasm_bindgen(js_name = submitLine)]
    pub fn submit_line(&self, raw: &str) -> Result<Option<String>, JsValue> {
        match &self.terminal {
            Some(terminal) => terminal.submit(raw),
            None => Ok(None),
        }
    }

    /// Lines currently held in the terminal log.
    #[wasm_bindgen(getter, js_name = lineCount)]
    pub fn line_count(&self) -> usize {
        self.terminal.as_ref().map_or(0, DomTerminal::line_count)
    }

    /// Cancel the rain timer and detach every listener.
    ///
    /// Safe to call more than once; dropping the handle does the same.
    pub fn stop(&mut self) {
        if let Some(rain) = &mut self.rain {
            rain.stop();
        }
        if let Some(terminal) = &mut self.terminal {
            terminal.stop();
        }
    }
}
