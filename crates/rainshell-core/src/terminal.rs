#![forbid(unsafe_code)]

//! Simulated shell session.
//!
//! [`TerminalSession`] owns the scrollback log and dispatches submitted lines
//! against [`COMMAND_TABLE`](crate::commands::COMMAND_TABLE). It never touches
//! the DOM; instead every visible change is queued as an [`OutputOp`] that the
//! host drains and mirrors:
//!
//! 1. Set the clock via [`TerminalSession::clock_mut`].
//! 2. Call [`TerminalSession::submit`] with the raw input value.
//! 3. Apply [`TerminalSession::drain_output`] to the output region.
//! 4. Follow [`CommandOutcome::Navigate`] if returned.

use std::collections::VecDeque;

use crate::clock::{SessionClock, format_system_date};
use crate::commands::{Command, command_list};
use crate::config::TerminalConfig;
use crate::content;
use crate::error::Result;

/// Presentation tag of a [`TerminalLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    /// Plain command output.
    #[default]
    Output,
    /// Decorative ASCII banner text.
    Banner,
    /// A submitted input line, drawn after the prompt token.
    Echo,
}

impl LineStyle {
    /// CSS class the web host attaches to the rendered row.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Output => "line",
            Self::Banner => "line ascii",
            Self::Echo => "line echo",
        }
    }
}

/// One immutable row of terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub text: String,
    pub style: LineStyle,
}

impl TerminalLine {
    #[must_use]
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    #[must_use]
    pub fn output(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Output)
    }
}

/// A change the host must mirror into its output region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputOp {
    /// Append a row and scroll it into view.
    Append(TerminalLine),
    /// Remove every row.
    Clear,
}

/// What the host should do after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Stay in the shell.
    Continue,
    /// Replace the document location with this relative target.
    Navigate(String),
}

/// Dispatch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Dispatching,
}

/// Hint printed after an unrecognized command.
#[must_use]
pub fn unknown_command_hint() -> String {
    format!("Type 'help' for more. Valid commands: {}", command_list())
}

/// Scrollback log plus command dispatch.
#[derive(Debug, Clone)]
pub struct TerminalSession {
    config: TerminalConfig,
    clock: SessionClock,
    log: Vec<TerminalLine>,
    pending: VecDeque<OutputOp>,
    state: SessionState,
}

impl TerminalSession {
    #[must_use]
    pub fn new(config: TerminalConfig, clock: SessionClock) -> Self {
        Self {
            config,
            clock,
            log: Vec::new(),
            pending: VecDeque::new(),
            state: SessionState::Idle,
        }
    }

    /// Append one line to the log and queue it for display.
    pub fn print(&mut self, text: impl Into<String>, style: LineStyle) {
        let line = TerminalLine::new(text, style);
        self.pending.push_back(OutputOp::Append(line.clone()));
        self.log.push(line);
    }

    /// Print the welcome screen.
    pub fn print_intro(&mut self) -> Result<()> {
        let last_login = format_system_date(self.clock.last_login())?;

        self.print(content::WELCOME, LineStyle::Output);
        self.print("", LineStyle::Output);
        for line in content::BANNER {
            self.print(*line, LineStyle::Banner);
        }
        self.print(content::DISCLAIMER, LineStyle::Output);
        self.print(
            format!("Try one of: {}", command_list()),
            LineStyle::Output,
        );
        for line in content::SYSTEM_INFO {
            self.print(*line, LineStyle::Output);
        }
        self.print(
            format!("Last login: {last_login} on ttys000"),
            LineStyle::Output,
        );
        Ok(())
    }

    /// Dispatch one input line.
    ///
    /// Leading and trailing whitespace is ignored; blank input does nothing.
    pub fn handle_command(&mut self, raw: &str) -> Result<CommandOutcome> {
        let input = raw.trim();
        if input.is_empty() {
            return Ok(CommandOutcome::Continue);
        }

        let Some(command) = Command::parse(input) else {
            tracing::debug!(input, "unknown command");
            self.print(format!("bash: {input}: command not found"), LineStyle::Output);
            self.print(unknown_command_hint(), LineStyle::Output);
            return Ok(CommandOutcome::Continue);
        };

        tracing::debug!(command = command.literal(), "dispatching command");
        match command {
            Command::Help => {
                self.print(content::HELP_HEADER, LineStyle::Output);
                for entry in content::HELP_ENTRIES {
                    self.print(*entry, LineStyle::Output);
                }
            }
            Command::Whoami => self.print(content::IDENTITY, LineStyle::Output),
            Command::LsProjects => {
                for entry in content::PROJECTS {
                    self.print(*entry, LineStyle::Output);
                }
            }
            Command::Cd(destination) => {
                let target = destination.target(&self.config.targets).to_owned();
                return Ok(CommandOutcome::Navigate(target));
            }
            Command::Clear => self.clear()?,
        }
        Ok(CommandOutcome::Continue)
    }

    /// Echo a submitted line after the prompt, then dispatch it.
    pub fn submit(&mut self, raw: &str) -> Result<CommandOutcome> {
        self.state = SessionState::Dispatching;
        self.print(raw, LineStyle::Echo);
        let outcome = self.handle_command(raw);
        self.state = SessionState::Idle;
        outcome
    }

    fn clear(&mut self) -> Result<()> {
        tracing::debug!(lines = self.log.len(), "clearing terminal");
        self.log.clear();
        self.pending.push_back(OutputOp::Clear);
        self.print_intro()
    }

    /// Drain queued display changes in order.
    pub fn drain_output(&mut self) -> impl Iterator<Item = OutputOp> + '_ {
        self.pending.drain(..)
    }

    /// Every line currently in the log.
    #[must_use]
    pub fn lines(&self) -> &[TerminalLine] {
        &self.log
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    pub fn clock_mut(&mut self) -> &mut SessionClock {
        &mut self.clock
    }
}
