//! Colored diagnostic output
//!
//! Informational messages go to stdout; warnings and errors go to stderr
//! with a colored label. Coloring honors the `--color` flag and is
//! suppressed automatically when the stream is not a terminal.

use crate::cli::args::ColorChoice;
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Writer for the tool's human-readable messages
pub struct Diagnostics {
    stdout: StandardStream,
    stderr: StandardStream,
}

fn stream_choice(choice: ColorChoice, is_tty: bool) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto => {
            if is_tty {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        }
    }
}

impl Diagnostics {
    pub fn new(choice: ColorChoice) -> Self {
        Diagnostics {
            stdout: StandardStream::stdout(stream_choice(choice, io::stdout().is_terminal())),
            stderr: StandardStream::stderr(stream_choice(choice, io::stderr().is_terminal())),
        }
    }

    /// Prints an informational message to stdout
    pub fn info(&mut self, message: &str) {
        let _ = writeln!(self.stdout, "{message}");
    }

    /// Prints a warning to stderr with a yellow label
    pub fn warn(&mut self, message: &str) {
        self.labeled(Color::Yellow, "Warning", message);
    }

    /// Prints an error to stderr with a red label
    pub fn error(&mut self, message: &str) {
        self.labeled(Color::Red, "Error", message);
    }

    fn labeled(&mut self, color: Color, label: &str, message: &str) {
        let _ = self
            .stderr
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(self.stderr, "{label}: ");
        let _ = self.stderr.reset();
        let _ = writeln!(self.stderr, "{message}");
    }
}
