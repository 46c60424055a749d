//! # Command Parser
//!
//! Turns one line of free text into a command keyword and up to three
//! positional arguments.
//!
//! The line is scanned (not anchored) with a single case-insensitive pattern:
//! a registered keyword, optionally followed by an alphabetic name, then up to
//! two ten-digit numbers. Anything before or after the matched span is
//! ignored, so `please add Bob 1234567890 thanks` parses as `add`.
//!
//! A lone `.` is also a command and only matches when it is the whole line.
//!
//! The keyword is lower-cased and its inner whitespace collapsed
//! (`Show   ALL` → `show all`); the arguments are passed through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dispatch::KEYWORDS;
use crate::error::Result;

/// Keyword for the silent exit command.
pub const QUIT: &str = ".";

static DEFAULT_PARSER: Lazy<CommandParser> = Lazy::new(|| {
    CommandParser::new(KEYWORDS).expect("built-in keywords always form a valid pattern")
});

/// Positional arguments captured after the keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    /// Alphabetic token right after the keyword (contact or file name).
    pub name: Option<String>,
    /// First ten-digit number.
    pub phone: Option<String>,
    /// Second ten-digit number.
    pub new_phone: Option<String>,
}

impl CommandArgs {
    pub fn new(name: Option<&str>, phone: Option<&str>, new_phone: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            phone: phone.map(str::to_string),
            new_phone: new_phone.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: String,
    pub args: CommandArgs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(ParsedCommand),
    NoMatch,
}

impl ParseOutcome {
    pub fn command(&self) -> Option<&str> {
        match self {
            ParseOutcome::Parsed(parsed) => Some(&parsed.command),
            ParseOutcome::NoMatch => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandParser {
    pattern: Regex,
}

impl CommandParser {
    /// Builds a parser recognizing `keywords`. Multi-word keywords match any
    /// run of whitespace between their words.
    pub fn new<I, K>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut alternatives: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty() && k != QUIT)
            .collect();
        // Longer keywords first so `phones` wins over `phone`.
        alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        alternatives.dedup();

        let alternation = alternatives
            .iter()
            .map(|k| {
                k.split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .collect::<Vec<_>>()
            .join("|");

        let keyword_group = if alternation.is_empty() {
            // Never matches; keeps the capture group layout intact.
            r"\b([^\s\S])\b".to_string()
        } else {
            format!(r"\b({})\b", alternation)
        };

        let source = format!(
            r"(?i)(?:^(\.)$|{})(?:\s+([a-zA-Z]+)\b)?(?:\s+(\d{{10}})\b)?(?:\s+(\d{{10}})\b)?",
            keyword_group
        );

        Ok(Self {
            pattern: Regex::new(&source)?,
        })
    }

    pub fn parse(&self, line: &str) -> ParseOutcome {
        let line = line.trim();
        let Some(caps) = self.pattern.captures(line) else {
            tracing::debug!(line, "no command recognized");
            return ParseOutcome::NoMatch;
        };

        let command = if caps.get(1).is_some() {
            QUIT.to_string()
        } else {
            match caps.get(2) {
                Some(m) => normalize_keyword(m.as_str()),
                None => return ParseOutcome::NoMatch,
            }
        };

        let arg = |i: usize| caps.get(i).map(|m| m.as_str());
        let parsed = ParsedCommand {
            command,
            args: CommandArgs::new(arg(3), arg(4), arg(5)),
        };
        tracing::debug!(command = %parsed.command, args = ?parsed.args, "parsed command");
        ParseOutcome::Parsed(parsed)
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        DEFAULT_PARSER.clone()
    }
}

/// Parses `line` with the parser for the built-in command set.
pub fn parse(line: &str) -> ParseOutcome {
    DEFAULT_PARSER.parse(line)
}

fn normalize_keyword(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> ParsedCommand {
        match parse(line) {
            ParseOutcome::Parsed(p) => p,
            ParseOutcome::NoMatch => panic!("expected a match for {:?}", line),
        }
    }

    #[test]
    fn parses_add_with_name_and_phone() {
        let p = parsed("add Alice 1234567890");
        assert_eq!(p.command, "add");
        assert_eq!(p.args, CommandArgs::new(Some("Alice"), Some("1234567890"), None));
    }

    #[test]
    fn parses_change_with_two_phones() {
        let p = parsed("change Alice 1234567890 1111111111");
        assert_eq!(p.command, "change");
        assert_eq!(
            p.args,
            CommandArgs::new(Some("Alice"), Some("1234567890"), Some("1111111111"))
        );
    }

    #[test]
    fn command_is_case_insensitive_and_lowercased() {
        let p = parsed("ADD Alice 1234567890");
        assert_eq!(p.command, "add");
        assert_eq!(p.args.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn multi_word_commands() {
        assert_eq!(parsed("show all").command, "show all");
        assert_eq!(parsed("Show   ALL").command, "show all");
        assert_eq!(parsed("good bye").command, "good bye");
        assert_eq!(parsed("clear number Bob 1234567890").command, "clear number");
    }

    #[test]
    fn command_can_appear_anywhere() {
        let p = parsed("could you please add Bob 1234567890 thanks");
        assert_eq!(p.command, "add");
        assert_eq!(p.args.name.as_deref(), Some("Bob"));
        assert_eq!(p.args.phone.as_deref(), Some("1234567890"));
    }

    #[test]
    fn keyword_must_be_a_whole_word() {
        assert_eq!(parse("address"), ParseOutcome::NoMatch);
        assert_eq!(parse("hellooo"), ParseOutcome::NoMatch);
    }

    #[test]
    fn phones_preferred_over_phone() {
        assert_eq!(parsed("phones Alice").command, "phones");
        assert_eq!(parsed("phone Alice").command, "phone");
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        let p = parsed("add Bob 12345678901");
        assert_eq!(p.args.name.as_deref(), Some("Bob"));
        assert_eq!(p.args.phone, None);

        let p = parsed("add Bob 12345");
        assert_eq!(p.args.phone, None);
    }

    #[test]
    fn name_must_be_alphabetic() {
        let p = parsed("add 1234567890");
        assert_eq!(p.args.name, None);
        assert_eq!(p.args.phone.as_deref(), Some("1234567890"));

        let p = parsed("add Bob2 1234567890");
        assert_eq!(p.args, CommandArgs::default());
    }

    #[test]
    fn lone_dot_is_quit() {
        assert_eq!(parsed(".").command, QUIT);
        assert_eq!(parsed("  .  ").command, QUIT);
        assert_eq!(parse(". ."), ParseOutcome::NoMatch);
    }

    #[test]
    fn unrecognized_line_is_no_match() {
        assert_eq!(parse("what is this"), ParseOutcome::NoMatch);
        assert_eq!(parse("what is this").command(), None);
    }

    #[test]
    fn custom_keyword_set() {
        let parser = CommandParser::new(["ping", "look around"]).unwrap();
        assert_eq!(parser.parse("PING").command(), Some("ping"));
        assert_eq!(parser.parse("look  around").command(), Some("look around"));
        assert_eq!(parser.parse("hello"), ParseOutcome::NoMatch);
    }

    #[test]
    fn empty_keyword_set_only_knows_quit() {
        let parser = CommandParser::new(Vec::<String>::new()).unwrap();
        assert_eq!(parser.parse("hello"), ParseOutcome::NoMatch);
        assert_eq!(parser.parse(".").command(), Some(QUIT));
    }
}
