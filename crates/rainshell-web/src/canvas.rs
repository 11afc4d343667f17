#![forbid(unsafe_code)]

//! Canvas 2D binding for the rain renderer.

use std::cell::RefCell;
use std::rc::Rc;

use rainshell_core::{DrawSurface, RainConfig, RainRenderer, Rgba};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

/// Current viewport size in CSS pixels.
pub(crate) fn viewport_size(window: &Window) -> (u32, u32) {
    let dim = |v: Result<JsValue, JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .map_or(0, |v| v.max(0.0) as u32)
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// [`DrawSurface`] over a `<canvas>` 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context, or `None` if the canvas cannot provide one.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl DrawSurface for CanvasSurface {
    type Error = JsValue;

    fn fill_overlay(&mut self, color: Rgba) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        Ok(())
    }

    fn set_glyph_style(&mut self, color: Rgba, font: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.set_font(font);
        Ok(())
    }

    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64) -> Result<(), JsValue> {
        let mut buf = [0u8; 4];
        self.ctx.fill_text(glyph.encode_utf8(&mut buf), x, y)
    }
}

struct RainState {
    renderer: RainRenderer,
    surface: CanvasSurface,
}

/// Running rain animation: an interval timer plus a window resize listener.
pub struct RainAnimation {
    window: Window,
    tick: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
    interval: Option<i32>,
    listening: bool,
}

impl RainAnimation {
    /// Start painting onto `#canvas_id`.
    ///
    /// Returns `Ok(None)` when the canvas or its 2D context is unavailable.
    pub fn mount(
        window: &Window,
        document: &Document,
        canvas_id: &str,
        config: RainConfig,
        seed: u64,
    ) -> Result<Option<Self>, JsValue> {
        let Some(canvas) = document
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            tracing::warn!(canvas_id, "rain canvas not found; animation disabled");
            return Ok(None);
        };
        let Some(surface) = CanvasSurface::new(canvas) else {
            tracing::warn!(canvas_id, "2d context unavailable; animation disabled");
            return Ok(None);
        };

        let interval_ms = i32::try_from(config.tick_interval_ms).unwrap_or(i32::MAX);
        let (width, height) = viewport_size(window);
        surface.set_size(width, height);
        let renderer = RainRenderer::new(config, width, height, seed)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let state = Rc::new(RefCell::new(RainState { renderer, surface }));

        let tick_state = Rc::clone(&state);
        let tick = Closure::<dyn FnMut()>::new(move || {
            let mut state = tick_state.borrow_mut();
            let RainState { renderer, surface } = &mut *state;
            if let Err(err) = renderer.tick(surface) {
                tracing::warn!(?err, "rain tick failed");
            }
        });

        let resize_state = Rc::clone(&state);
        let resize_window = window.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let (width, height) = viewport_size(&resize_window);
            let mut state = resize_state.borrow_mut();
            state.surface.set_size(width, height);
            state.renderer.resize(width, height);
        });

        let mut animation = Self {
            window: window.clone(),
            tick,
            on_resize,
            interval: None,
            listening: false,
        };
        window.add_event_listener_with_callback(
            "resize",
            animation.on_resize.as_ref().unchecked_ref(),
        )?;
        animation.listening = true;
        animation.interval = Some(
            window.set_interval_with_callback_and_timeout_and_arguments_0(
                animation.tick.as_ref().unchecked_ref(),
                interval_ms,
            )?,
        );
        tracing::info!(canvas_id, width, height, interval_ms, "rain animation started");
        Ok(Some(animation))
    }

    /// Cancel the timer and detach the resize listener. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.interval.take() {
            self.window.clear_interval_with_handle(handle);
        }
        if self.listening {
            let _ = self.window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
            self.listening = false;
            tracing::debug!("rain animation stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

impl Drop for RainAnimation {
    fn drop(&mut self) {
        self.stop();
    }
}
