use colored::Colorize;
use contactz::api::{CmdMessage, MessageLevel};
use std::io::{self, Write};

pub(super) fn format_message(message: &CmdMessage, color: bool) -> String {
    if !color {
        return message.content.clone();
    }
    match message.level {
        MessageLevel::Info => message.content.normal().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub(super) fn print_messages<W: Write>(
    out: &mut W,
    messages: &[CmdMessage],
    color: bool,
) -> io::Result<()> {
    for message in messages {
        writeln!(out, "{}", format_message(message, color))?;
    }
    Ok(())
}
