//! Property-based invariant tests for the shell session.
//!
//! Verifies:
//! 1. Whitespace-only input never produces output
//! 2. Any input outside the table yields exactly the not-found pair
//! 3. `clear` after arbitrary history leaves exactly a fresh intro
//! 4. The output queue replays to the same log the session holds

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rainshell_core::terminal::unknown_command_hint;
use rainshell_core::{
    COMMAND_TABLE, Command, OutputOp, SessionClock, TerminalConfig, TerminalLine, TerminalSession,
};
use time::OffsetDateTime;

fn session_at(unix_secs: i64) -> TerminalSession {
    let now = OffsetDateTime::from_unix_timestamp(unix_secs).unwrap();
    TerminalSession::new(TerminalConfig::default(), SessionClock::new(now))
}

fn arb_input() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(COMMAND_TABLE.iter().map(|(l, _)| l.to_string()).collect::<Vec<_>>()),
        "[a-z ]{0,16}",
        "\\PC{0,24}",
    ]
}

fn replay(ops: impl IntoIterator<Item = OutputOp>) -> Vec<TerminalLine> {
    let mut shown = Vec::new();
    for op in ops {
        match op {
            OutputOp::Append(line) => shown.push(line),
            OutputOp::Clear => shown.clear(),
        }
    }
    shown
}

proptest! {
    #[test]
    fn whitespace_is_silent(ws in "[ \\t\\r\\n]{0,12}") {
        let mut s = session_at(0);
        s.handle_command(&ws).unwrap();
        prop_assert!(s.lines().is_empty());
    }

    #[test]
    fn unknown_input_prints_not_found(raw in "\\PC{1,24}") {
        let trimmed = raw.trim();
        prop_assume!(!trimmed.is_empty() && Command::parse(trimmed).is_none());
        let mut s = session_at(0);
        s.handle_command(&raw).unwrap();
        prop_assert_eq!(s.lines().len(), 2);
        prop_assert_eq!(&s.lines()[0].text, &format!("bash: {trimmed}: command not found"));
        prop_assert_eq!(&s.lines()[1].text, &unknown_command_hint());
    }

    #[test]
    fn clear_leaves_fresh_intro(
        secs in 0i64..4_102_444_800,
        history in prop::collection::vec(arb_input(), 0..12),
    ) {
        let mut s = session_at(secs);
        s.print_intro().unwrap();
        for raw in &history {
            s.submit(raw).unwrap();
        }
        s.handle_command("clear").unwrap();

        let mut fresh = session_at(secs);
        fresh.print_intro().unwrap();
        assert_eq!(s.lines(), fresh.lines());
    }

    #[test]
    fn queue_replays_to_log(history in prop::collection::vec(arb_input(), 0..16)) {
        let mut s = session_at(1_700_000_000);
        s.print_intro().unwrap();
        let mut ops: Vec<OutputOp> = s.drain_output().collect();
        for raw in &history {
            s.submit(raw).unwrap();
            ops.extend(s.drain_output());
        }
        assert_eq!(replay(ops).as_slice(), s.lines());
    }
}
