use colored::Colorize;
use numlist::api::{CmdMessage, MessageLevel};
use numlist::error::NumlistError;
use numlist::menu::{menu_lines, MENU_PROMPT, MENU_TITLE};
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, err: &NumlistError) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(format!("Erro: {}", err))])
}

/// Menu block followed by the selection prompt. The prompt has no newline.
pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", MENU_TITLE.bold())?;
    for line in menu_lines() {
        writeln!(out, "{}", line)?;
    }
    print_prompt(out, MENU_PROMPT)
}

pub(super) fn print_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{}", prompt)?;
    out.flush()
}
