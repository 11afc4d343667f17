#![forbid(unsafe_code)]

//! Fixed command table of the simulated shell.

use crate::config::NavigationTargets;

/// Pages reachable through `cd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Projects,
    Resume,
    Contact,
}

impl Destination {
    /// Resolve against the configured relative targets.
    #[must_use]
    pub fn target<'a>(&self, targets: &'a NavigationTargets) -> &'a str {
        match self {
            Self::Projects => &targets.projects,
            Self::Resume => &targets.resume,
            Self::Contact => &targets.contact,
        }
    }
}

/// A recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Whoami,
    LsProjects,
    Cd(Destination),
    Clear,
}

/// Literal input strings and the command each one selects.
///
/// Matching is exact and case-sensitive; entries are mutually exclusive.
pub const COMMAND_TABLE: &[(&str, Command)] = &[
    ("help", Command::Help),
    ("whoami", Command::Whoami),
    ("ls projects", Command::LsProjects),
    ("cd projects", Command::Cd(Destination::Projects)),
    ("cd resume", Command::Cd(Destination::Resume)),
    ("cd contact", Command::Cd(Destination::Contact)),
    ("clear", Command::Clear),
];

impl Command {
    /// Look up an already-trimmed input line.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        COMMAND_TABLE
            .iter()
            .find(|(literal, _)| *literal == input)
            .map(|&(_, command)| command)
    }

    /// The literal that selects this command.
    #[must_use]
    pub fn literal(&self) -> &'static str {
        COMMAND_TABLE
            .iter()
            .find(|(_, command)| command == self)
            .map_or("", |(literal, _)| literal)
    }
}

/// Comma-separated list of every recognized literal.
#[must_use]
pub fn command_list() -> String {
    COMMAND_TABLE
        .iter()
        .map(|(literal, _)| *literal)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_literal_parses_to_its_entry() {
        for &(literal, command) in COMMAND_TABLE {
            assert_eq!(Command::parse(literal), Some(command));
            assert_eq!(command.literal(), literal);
        }
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        for input in ["Help", "HELP", "ls", "ls  projects", "cd", "cd Projects", "clear now"] {
            assert_eq!(Command::parse(input), None, "{input:?}");
        }
    }

    #[test]
    fn literals_are_unique() {
        for (i, (a, _)) in COMMAND_TABLE.iter().enumerate() {
            for (b, _) in &COMMAND_TABLE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn destinations_resolve_to_targets() {
        let targets = NavigationTargets::default();
        assert_eq!(Destination::Projects.target(&targets), "projects.html");
        assert_eq!(Destination::Resume.target(&targets), "resume.html");
        assert_eq!(Destination::Contact.target(&targets), "contact.html");
    }

    #[test]
    fn command_list_names_everything() {
        assert_eq!(
            command_list(),
            "help, whoami, ls projects, cd projects, cd resume, cd contact, clear"
        );
    }
}
