//! Line-based interactive session over any reader/writer pair.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::export::{group_name_for, render_text_table, resolve_output_base, write_export};
use crate::session::{ExportRequest, Session, SessionState, Step};

/// Runs the prompt loop until the user finishes or input runs out.
///
/// Validation errors are printed and the same question is asked again.
/// A failed export is reported without ending the session.
pub fn run_session<R: BufRead, W: Write>(input: R, output: &mut W, config: &Config) -> Result<()> {
    writeln!(output, "Welcome to the {APP_NAME}.")?;
    writeln!(
        output,
        "Prepare your colors in hexadecimal format, for example #3366CC or #36C."
    )?;

    let base_dir = config.output_base_dir()?;
    let mut session = Session::new();
    let mut lines = input.lines();

    while !session.is_done() {
        writeln!(output, "\n{}", session.prompt())?;
        write!(output, ">> ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            // Out of input: still show the table if colors were entered
            if session.state() == &(SessionState::CollectingColors { pending_hex: None }) {
                let result = session.handle("");
                report(&session, result, output, &base_dir)?;
            }
            break;
        };

        let result = session.handle(&line);
        report(&session, result, output, &base_dir)?;
    }

    Ok(())
}

fn report<W: Write>(
    session: &Session,
    result: crate::error::PaletteResult<Step>,
    output: &mut W,
    base_dir: &Path,
) -> Result<()> {
    match result {
        Ok(Step::ColorAdded(name)) => writeln!(output, "Added '{name}'.")?,
        Ok(Step::PaletteReady) => {
            if let Some(palette) = session.palette() {
                writeln!(output, "\n{}", render_text_table(palette))?;
            }
        }
        Ok(Step::Export(request)) => export(session, &request, output, base_dir)?,
        Ok(Step::Continue | Step::Finished) => {}
        Err(e) => writeln!(output, "Invalid input: {e}. Try again.")?,
    }
    Ok(())
}

fn export<W: Write>(
    session: &Session,
    request: &ExportRequest,
    output: &mut W,
    base_dir: &Path,
) -> Result<()> {
    let Some(palette) = session.palette() else {
        return Ok(());
    };

    let base = resolve_output_base(&request.file_name, base_dir);
    let group = group_name_for(&base);
    debug!(base = %base.display(), format = %request.format, "exporting palette");

    match write_export(palette, request.format, &base, &group) {
        Ok(path) => writeln!(output, "✓ Exported palette to: {}", path.display())?,
        Err(e) => writeln!(output, "Export failed: {e:#}")?,
    }
    Ok(())
}
