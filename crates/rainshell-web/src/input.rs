#![forbid(unsafe_code)]

//! Keyboard and listener bookkeeping for the DOM shell.
//!
//! Kept free of `web-sys` types so it builds and tests on native targets.

/// DOM `KeyboardEvent.key` that submits the input line.
pub const SUBMIT_KEY: &str = "Enter";

/// Whether a keydown should submit the current line.
///
/// Enter while an IME composition is open only confirms the composition.
#[must_use]
pub fn is_submit_key(key: &str, composing: bool) -> bool {
    !composing && key == SUBMIT_KEY
}

/// Listeners the shell attaches to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    InputKeydown,
    OutputClick,
    InputBarClick,
}

impl Listener {
    /// DOM event type the listener is registered for.
    #[must_use]
    pub const fn event_type(self) -> &'static str {
        match self {
            Self::InputKeydown => "keydown",
            Self::OutputClick | Self::InputBarClick => "click",
        }
    }
}

/// Listeners that may currently be registered.
///
/// Entries are recorded before the DOM call, so a registration that throws
/// part-way still leaves every earlier listener scheduled for removal.
/// Removing a listener that was never added is a no-op in the DOM.
#[derive(Debug, Default, Clone)]
pub struct ListenerLedger {
    attached: Vec<Listener>,
}

impl ListenerLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, listener: Listener) {
        if !self.attached.contains(&listener) {
            self.attached.push(listener);
        }
    }

    /// Remove and return every recorded listener, most recent first.
    pub fn take(&mut self) -> Vec<Listener> {
        let mut drained = core::mem::take(&mut self.attached);
        drained.reverse();
        drained
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn enter_submits() {
        assert!(is_submit_key("Enter", false));
    }

    #[test]
    fn enter_during_composition_does_not_submit() {
        assert!(!is_submit_key("Enter", true));
    }

    #[test]
    fn other_keys_do_not_submit() {
        for key in ["a", "Tab", "NumpadEnter", "enter", "Escape"] {
            assert!(!is_submit_key(key, false), "{key}");
        }
    }

    #[test]
    fn event_types() {
        assert_eq!(Listener::InputKeydown.event_type(), "keydown");
        assert_eq!(Listener::OutputClick.event_type(), "click");
        assert_eq!(Listener::InputBarClick.event_type(), "click");
    }

    #[test]
    fn failed_attach_still_releases_earlier_listeners() {
        let mut ledger = ListenerLedger::new();
        // keydown succeeded, the output click registration threw after being recorded.
        ledger.record(Listener::InputKeydown);
        ledger.record(Listener::OutputClick);
        assert_eq!(
            ledger.take(),
            vec![Listener::OutputClick, Listener::InputKeydown]
        );
    }

    #[test]
    fn take_is_idempotent() {
        let mut ledger = ListenerLedger::new();
        ledger.record(Listener::InputKeydown);
        assert!(!ledger.is_empty());
        assert_eq!(ledger.take().len(), 1);
        assert!(ledger.is_empty());
        assert!(ledger.take().is_empty());
    }

    #[test]
    fn duplicate_records_collapse() {
        let mut ledger = ListenerLedger::new();
        ledger.record(Listener::InputBarClick);
        ledger.record(Listener::InputBarClick);
        assert_eq!(ledger.take(), vec![Listener::InputBarClick]);
    }
}
