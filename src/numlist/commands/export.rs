use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ListAction, NumlistError, Result};
use crate::model::NumberList;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the list to `path`, one integer per line, replacing any existing file.
///
/// The file handle lives only inside this call and is closed on every return path.
pub fn run(list: &NumberList, path: &Path) -> Result<CmdResult> {
    if list.is_empty() {
        return Err(NumlistError::EmptyList(ListAction::Export));
    }

    let file = File::create(path).map_err(NumlistError::ExportCreate)?;
    write_numbers(BufWriter::new(file), list.as_slice())?;
    tracing::debug!(path = %path.display(), count = list.len(), "list exported");

    Ok(CmdResult::default()
        .with_numbers(list.to_vec())
        .with_export_path(path.to_path_buf())
        .with_message(CmdMessage::success(format!(
            "Lista exportada para '{}' com sucesso.",
            path.display()
        ))))
}

fn write_numbers<W: Write>(mut writer: W, numbers: &[i64]) -> Result<()> {
    for n in numbers {
        writeln!(writer, "{}", n).map_err(NumlistError::ExportWrite)?;
    }
    writer.flush().map_err(NumlistError::ExportWrite)?;
    Ok(())
}
