//! The prompt loop: Prompt → Read → Parse → Dispatch → Render, until a
//! command asks to stop or input runs out.

use super::print::print_messages;
use contactz::api::ContactzApi;
use contactz::store::BookStore;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

pub(super) struct LoopOptions<'a> {
    pub prompt: &'a str,
    pub color: bool,
}

pub(super) fn run_loop<S, R, W>(
    api: &mut ContactzApi<S>,
    mut input: R,
    output: &mut W,
    options: &LoopOptions<'_>,
) -> io::Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        write!(output, "{}", options.prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!("end of input");
            writeln!(output)?;
            return Ok(());
        }

        // Undecodable bytes become U+FFFD; the line still goes to the parser.
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            tracing::warn!("input line was not valid UTF-8");
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let result = api.execute(trimmed);
        print_messages(output, &result.messages, options.color)?;
        if result.exit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactz::config::ContactzConfig;
    use contactz::store::memory::InMemoryStore;

    fn session(script: &str) -> (String, ContactzApi<InMemoryStore>) {
        session_bytes(script.as_bytes())
    }

    fn session_bytes(script: &[u8]) -> (String, ContactzApi<InMemoryStore>) {
        let mut api = ContactzApi::new(InMemoryStore::new(), ContactzConfig::default());
        let mut out = Vec::new();
        let options = LoopOptions {
            prompt: ">>> ",
            color: false,
        };
        run_loop(&mut api, script, &mut out, &options).unwrap();
        (String::from_utf8(out).unwrap(), api)
    }

    #[test]
    fn dot_exits_without_response() {
        let (out, _) = session(".\nhello\n");
        assert_eq!(out, ">>> ");
    }

    #[test]
    fn exit_says_good_bye_and_stops() {
        let (out, _) = session("exit\nhello\n");
        assert_eq!(out, ">>> Good bye!\n");
    }

    #[test]
    fn blank_lines_reprompt() {
        let (out, _) = session("\n   \nclose\n");
        assert_eq!(out, ">>> >>> >>> Good bye!\n");
    }

    #[test]
    fn end_of_input_stops() {
        let (out, api) = session("add Alice 1234567890\n");
        assert!(out.contains("Contact 'Alice' added to the address book."));
        assert!(out.ends_with(">>> \n"));
        assert!(api.contacts().book.contains("Alice"));
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_session() {
        let (out, api) = session_bytes(b"caf\xe9\nhello\nadd Alice 1234567890\n.\n");
        let responses: Vec<&str> = out
            .split(">>> ")
            .map(str::trim_end)
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(
            responses,
            vec![
                "What do you mean?",
                "How can I help you?",
                "Contact 'Alice' added to the address book.",
            ]
        );
        assert!(api.contacts().book.contains("Alice"));
    }

    #[test]
    fn conversation() {
        let (out, _) = session(
            "hello\nadd Alice 1234567890\nphones Alice\nwhatever\ngood bye\n",
        );
        let responses: Vec<&str> = out
            .split(">>> ")
            .map(str::trim_end)
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(
            responses,
            vec![
                "How can I help you?",
                "Contact 'Alice' added to the address book.",
                "Alice: 1234567890",
                "What do you mean?",
                "Good bye!",
            ]
        );
    }
}
