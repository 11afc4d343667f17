#![forbid(unsafe_code)]

//! DOM binding for the simulated shell.

use std::cell::RefCell;
use std::rc::Rc;

use rainshell_core::{
    CommandOutcome, LineStyle, OutputOp, SessionClock, TerminalConfig, TerminalLine,
    TerminalSession,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent, Window};
use web_time::{SystemTime, UNIX_EPOCH};

use crate::input::{Listener, ListenerLedger, is_submit_key};

/// Browser wall clock in milliseconds since the Unix epoch.
fn now_unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
}

/// Output region and input field.
struct TerminalView {
    window: Window,
    document: Document,
    output: HtmlElement,
    input: HtmlInputElement,
}

impl TerminalView {
    fn apply(&self, op: &OutputOp, prompt: &str) -> Result<(), JsValue> {
        match op {
            OutputOp::Append(line) => self.append(line, prompt),
            OutputOp::Clear => {
                self.output.set_inner_html("");
                Ok(())
            }
        }
    }

    fn append(&self, line: &TerminalLine, prompt_text: &str) -> Result<(), JsValue> {
        let row = self.document.create_element("div")?;
        row.set_class_name(line.style.css_class());
        if line.style == LineStyle::Echo {
            let prompt = self.document.create_element("span")?;
            prompt.set_class_name("prompt");
            prompt.set_text_content(Some(prompt_text));
            row.append_child(&prompt)?;
            let text = self.document.create_element("span")?;
            text.set_text_content(Some(&format!(" {}", line.text)));
            row.append_child(&text)?;
        } else {
            row.set_text_content(Some(&line.text));
        }
        self.output.append_child(&row)?;
        self.output.set_scroll_top(self.output.scroll_height());
        Ok(())
    }

    fn flush(&self, session: &mut TerminalSession) {
        let ops: Vec<OutputOp> = session.drain_output().collect();
        for op in &ops {
            if let Err(err) = self.apply(op, session.prompt()) {
                tracing::warn!(?err, "failed to mirror terminal output");
            }
        }
    }

    fn navigate(&self, target: &str) {
        tracing::info!(target, "navigating away from terminal");
        if let Err(err) = self.window.location().set_href(target) {
            tracing::warn!(?err, target, "navigation failed");
        }
    }
}

/// Mounted shell: a session plus its keyboard and focus listeners.
pub struct DomTerminal {
    session: Rc<RefCell<TerminalSession>>,
    view: Rc<TerminalView>,
    input_bar: Option<HtmlElement>,
    on_keydown: Closure<dyn FnMut(KeyboardEvent)>,
    on_focus_click: Closure<dyn FnMut()>,
    listeners: ListenerLedger,
}

impl DomTerminal {
    /// Attach to `#output_id` and `#input_id`, then print the intro.
    ///
    /// Returns `Ok(None)` when either required element is missing. The input
    /// bar is optional.
    pub fn mount(
        window: &Window,
        document: &Document,
        output_id: &str,
        input_id: &str,
        input_bar_id: &str,
        config: TerminalConfig,
    ) -> Result<Option<Self>, JsValue> {
        let output = document
            .get_element_by_id(output_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let input = document
            .get_element_by_id(input_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let (Some(output), Some(input)) = (output, input) else {
            tracing::warn!(output_id, input_id, "terminal elements not found; shell disabled");
            return Ok(None);
        };
        let input_bar = document
            .get_element_by_id(input_bar_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let mut clock = SessionClock::default();
        clock.set_unix_millis(now_unix_millis());
        let view = Rc::new(TerminalView {
            window: window.clone(),
            document: document.clone(),
            output,
            input,
        });
        let session = Rc::new(RefCell::new(TerminalSession::new(config, clock)));
        {
            let mut session = session.borrow_mut();
            session
                .print_intro()
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
            view.flush(&mut session);
        }

        let key_session = Rc::clone(&session);
        let key_view = Rc::clone(&view);
        let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if !is_submit_key(&event.key(), event.is_composing()) {
                return;
            }
            event.prevent_default();
            let raw = key_view.input.value();
            let outcome = {
                let mut session = key_session.borrow_mut();
                session.clock_mut().set_unix_millis(now_unix_millis());
                let outcome = session.submit(&raw);
                key_view.flush(&mut session);
                outcome
            };
            key_view.input.set_value("");
            match outcome {
                Ok(CommandOutcome::Continue) => {}
                Ok(CommandOutcome::Navigate(target)) => key_view.navigate(&target),
                Err(err) => tracing::warn!(%err, "command dispatch failed"),
            }
        });

        let focus_view = Rc::clone(&view);
        let on_focus_click = Closure::<dyn FnMut()>::new(move || {
            let _ = focus_view.input.focus();
        });

        let mut terminal = Self {
            session,
            view,
            input_bar,
            on_keydown,
            on_focus_click,
            listeners: ListenerLedger::new(),
        };
        if let Err(err) = terminal.attach() {
            terminal.stop();
            return Err(err);
        }
        tracing::info!(output_id, input_id, "terminal mounted");
        Ok(Some(terminal))
    }

    /// Event target and callback for one listener; `None` when its element is absent.
    fn registration(&self, listener: Listener) -> Option<(&EventTarget, &js_sys::Function)> {
        let keydown: &js_sys::Function = self.on_keydown.as_ref().unchecked_ref();
        let focus: &js_sys::Function = self.on_focus_click.as_ref().unchecked_ref();
        match listener {
            Listener::InputKeydown => {
                let target: &EventTarget = &self.view.input;
                Some((target, keydown))
            }
            Listener::OutputClick => {
                let target: &EventTarget = &self.view.output;
                Some((target, focus))
            }
            Listener::InputBarClick => self.input_bar.as_ref().map(|bar| {
                let target: &EventTarget = bar;
                (target, focus)
            }),
        }
    }

    fn attach(&mut self) -> Result<(), JsValue> {
        for listener in [
            Listener::InputKeydown,
            Listener::OutputClick,
            Listener::InputBarClick,
        ] {
            if self.registration(listener).is_none() {
                continue;
            }
            self.listeners.record(listener);
            if let Some((target, callback)) = self.registration(listener) {
                target.add_event_listener_with_callback(listener.event_type(), callback)?;
            }
        }
        Ok(())
    }

    /// Detach every listener. Idempotent.
    pub fn stop(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        for listener in self.listeners.take() {
            if let Some((target, callback)) = self.registration(listener) {
                let _ = target.remove_event_listener_with_callback(listener.event_type(), callback);
            }
        }
        tracing::debug!("terminal detached");
    }

    /// Feed one line as if typed and submitted; returns the navigation target, if any.
    pub fn submit(&self, raw: &str) -> Result<Option<String>, JsValue> {
        let mut session = self.session.borrow_mut();
        session.clock_mut().set_unix_millis(now_unix_millis());
        let outcome = session
            .submit(raw)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.view.flush(&mut session);
        Ok(match outcome {
            CommandOutcome::Continue => None,
            CommandOutcome::Navigate(target) => Some(target),
        })
    }

    /// Number of lines in the scrollback log.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.session.borrow().lines().len()
    }
}

impl Drop for DomTerminal {
    fn drop(&mut self) {
        self.stop();
    }
}
