//! Colored terminal output for packaging runs
//!
//! Log records go through `log`; this is the summary the user reads at the end.

use std::io::Write;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    bufwtr: BufferWriter,
    verbose: bool,
}

impl OutputManager {
    /// Create a new output manager writing to stdout
    pub fn new(verbose: bool) -> Self {
        Self {
            bufwtr: BufferWriter::stdout(ColorChoice::Auto),
            verbose,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.prefixed("✓", ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true), message)
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.prefixed("⚠", ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true), message)
    }

    /// Print a verbose message (only in verbose mode)
    pub fn verbose(&self, message: &str) -> std::io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        self.prefixed("→", ColorSpec::new().set_fg(Some(Color::Blue)), message)
    }

    /// Print an error message to stderr
    pub fn error(&self, message: &str) {
        let bufwtr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = bufwtr.buffer();

        if buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true)).is_err()
            || write!(&mut buffer, "✗").is_err()
            || buffer.reset().is_err()
            || writeln!(&mut buffer, " {}", message).is_err()
            || bufwtr.print(&buffer).is_err()
        {
            eprintln!("✗ {}", message);
        }
    }

    /// Print indented text (for sub-items)
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        let mut buffer = self.bufwtr.buffer();
        writeln!(&mut buffer, "    {}", message)?;
        self.bufwtr.print(&buffer)
    }

    /// Print a plain message
    pub fn println(&self, message: &str) -> std::io::Result<()> {
        let mut buffer = self.bufwtr.buffer();
        writeln!(&mut buffer, "{}", message)?;
        self.bufwtr.print(&buffer)
    }

    fn prefixed(&self, symbol: &str, spec: &ColorSpec, message: &str) -> std::io::Result<()> {
        let mut buffer = self.bufwtr.buffer();
        let _ = buffer.set_color(spec);
        write!(&mut buffer, "{}", symbol)?;
        let _ = buffer.reset();
        writeln!(&mut buffer, " {}", message)?;
        self.bufwtr.print(&buffer)
    }
}
