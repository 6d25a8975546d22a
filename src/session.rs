//! Interactive session state machine.
//!
//! The session consumes one input line at a time and moves through
//! collecting colors, showing the finalized palette, choosing exports and
//! finishing. It performs no I/O itself: exports are handed back to the caller
//! as [`ExportRequest`]s, and validation failures come back as
//! [`PaletteError`]s so the caller can show them and prompt again.

use crate::error::{PaletteError, PaletteResult};
use crate::export::{strip_known_suffix, ExportFormat};
use crate::models::{is_hex_color, Palette, PaletteBuilder};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Reading colors. When `pending_hex` is set, the next line names it.
    CollectingColors {
        /// Hex value waiting for a name
        pending_hex: Option<String>,
    },
    /// Colors are derived; waiting for an export choice.
    Finalized,
    /// Choosing a format, then a file name.
    Exporting {
        /// Format picked so far
        format: Option<ExportFormat>,
    },
    /// Session is over.
    Done,
}

/// A request to write the palette, produced once format and name are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Chosen output format
    pub format: ExportFormat,
    /// File name as entered, with known extensions stripped
    pub file_name: String,
}

/// What happened after handling a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Input accepted; prompt again.
    Continue,
    /// A color was added under this name.
    ColorAdded(String),
    /// Collection ended and the palette is ready to show.
    PaletteReady,
    /// The caller should perform this export.
    Export(ExportRequest),
    /// The session has ended.
    Finished,
}

/// Drives palette collection and export choices from input lines.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    builder: Option<PaletteBuilder>,
    palette: Option<Palette>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session ready to collect colors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SessionState::CollectingColors { pending_hex: None },
            builder: Some(PaletteBuilder::new()),
            palette: None,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The finalized palette, once collection has ended.
    #[must_use]
    pub const fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    /// Returns true once the session is over.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == SessionState::Done
    }

    /// Prompt text for the current state.
    #[must_use]
    pub fn prompt(&self) -> String {
        match &self.state {
            SessionState::CollectingColors { pending_hex: None } => {
                "Enter a hexadecimal color value or an empty line to end.".to_string()
            }
            SessionState::CollectingColors {
                pending_hex: Some(hex),
            } => format!("Give the color {hex} a name."),
            SessionState::Finalized => {
                "Enter \"e\" to export or an empty line to end.".to_string()
            }
            SessionState::Exporting { format: None } => format!(
                "Choose a format to export (or an empty line to go back):\n{}",
                ExportFormat::menu()
            ),
            SessionState::Exporting { format: Some(_) } => {
                "What would you like to name the file?".to_string()
            }
            SessionState::Done => String::new(),
        }
    }

    /// Handles one line of input (without the trailing newline).
    ///
    /// # Errors
    ///
    /// Returns a recoverable [`PaletteError`]; the state is unchanged and the
    /// same prompt applies again.
    pub fn handle(&mut self, line: &str) -> PaletteResult<Step> {
        let input = line.trim();

        match &self.state {
            SessionState::CollectingColors { pending_hex: None } => {
                if input.is_empty() {
                    return Ok(self.finish_collection());
                }
                if !is_hex_color(input) {
                    return Err(PaletteError::InvalidColor(input.to_string()));
                }
                self.state = SessionState::CollectingColors {
                    pending_hex: Some(input.to_string()),
                };
                Ok(Step::Continue)
            }
            SessionState::CollectingColors {
                pending_hex: Some(hex),
            } => {
                let hex = hex.clone();
                let builder = self.builder.get_or_insert_with(PaletteBuilder::new);
                builder.add_color(input, &hex)?;
                self.state = SessionState::CollectingColors { pending_hex: None };
                Ok(Step::ColorAdded(input.to_string()))
            }
            SessionState::Finalized => match input {
                "" => {
                    self.state = SessionState::Done;
                    Ok(Step::Finished)
                }
                "e" => {
                    self.state = SessionState::Exporting { format: None };
                    Ok(Step::Continue)
                }
                other => Err(PaletteError::InvalidSelection(other.to_string())),
            },
            SessionState::Exporting { format: None } => {
                if input.is_empty() {
                    self.state = SessionState::Finalized;
                    return Ok(Step::Continue);
                }
                let format = ExportFormat::from_selection(input)?;
                self.state = SessionState::Exporting {
                    format: Some(format),
                };
                Ok(Step::Continue)
            }
            SessionState::Exporting {
                format: Some(format),
            } => {
                let format = *format;
                let file_name = strip_known_suffix(input);
                if file_name.is_empty() {
                    return Err(PaletteError::EmptyFileName);
                }
                let request = ExportRequest {
                    format,
                    file_name: file_name.to_string(),
                };
                self.state = SessionState::Finalized;
                Ok(Step::Export(request))
            }
            SessionState::Done => Ok(Step::Finished),
        }
    }

    fn finish_collection(&mut self) -> Step {
        let palette = self.builder.take().unwrap_or_default().finalize();
        let step = if palette.is_empty() {
            self.state = SessionState::Done;
            Step::Finished
        } else {
            self.state = SessionState::Finalized;
            Step::PaletteReady
        };
        self.palette = Some(palette);
        step
    }
}
