//! The read/eval/print loop.
//!
//! One state, "awaiting selection", and one way out. Each turn prints the menu,
//! reads a line, maps it to a [`MenuCommand`] and runs it to completion before
//! reading again. Recoverable errors are printed as `Erro: ...`; only a broken
//! input or output stream leaves the loop with an error.

use super::render::{print_error, print_menu, print_messages, print_prompt};
use numlist::api::{CmdMessage, NumlistApi};
use numlist::commands::divide::parse_operand;
use numlist::commands::CmdResult;
use numlist::error::{NumlistError, Operand, Result};
use numlist::menu::MenuCommand;
use std::io::{BufRead, Write};

const FAREWELL: &str = "Saindo do programa. Obrigado!";
const INVALID_OPTION: &str = "Opção inválida. Por favor, escolha uma opção válida.";

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, api: &mut NumlistApi) -> Result<()> {
        loop {
            print_menu(&mut self.output)?;

            let Some(selection) = self.read_line()? else {
                tracing::debug!("end of input, leaving menu");
                writeln!(self.output)?;
                print_messages(&mut self.output, &[CmdMessage::info(FAREWELL)])?;
                return Ok(());
            };

            let command = MenuCommand::from(selection.as_str());
            tracing::debug!(?command, "dispatching selection");

            match self.dispatch(api, &command) {
                Ok(result) => print_messages(&mut self.output, &result.messages)?,
                Err(e) if e.is_recoverable() => {
                    tracing::debug!(error = %e, ?command, "operation failed");
                    print_error(&mut self.output, &e)?;
                }
                Err(e) => {
                    tracing::error!(error = %e, "session aborted");
                    return Err(e);
                }
            }

            if command == MenuCommand::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, api: &mut NumlistApi, command: &MenuCommand) -> Result<CmdResult> {
        match command {
            MenuCommand::Add => {
                let input = self.prompt("Digite um número: ")?;
                api.add(&input)
            }
            MenuCommand::List => api.list(),
            MenuCommand::Remove => {
                let input = self.prompt("Digite um índice: ")?;
                api.remove(&input)
            }
            MenuCommand::Statistics => api.statistics(),
            MenuCommand::Divide => {
                let input = self.prompt("Digite o dividendo: ")?;
                let dividend = parse_operand(&input, Operand::Dividend)?;
                let divisor = self.prompt("Digite o divisor: ")?;
                api.divide(dividend, &divisor)
            }
            MenuCommand::Clear => api.clear(),
            MenuCommand::Sort => api.sort(),
            MenuCommand::Evens => api.evens(),
            MenuCommand::Export => api.export(),
            MenuCommand::Exit => {
                Ok(CmdResult::default().with_message(CmdMessage::info(FAREWELL)))
            }
            MenuCommand::Unrecognized(_) => {
                Ok(CmdResult::default().with_message(CmdMessage::warning(INVALID_OPTION)))
            }
        }
    }

    /// Prompts for one operation input. End of input reads as an empty line.
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        print_prompt(&mut self.output, prompt)?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Next line, trimmed. `None` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(NumlistError::InputStream)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
