//! The jpackage command line under construction.

use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Ordered jpackage arguments plus the executable they are destined for.
///
/// Built front to back by [`ArgumentBuilder`](super::ArgumentBuilder) and
/// discarded once the process has finished.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommandLine {
    executable: Option<PathBuf>,
    args: Vec<String>,
}

impl CommandLine {
    /// Creates an empty command line with no executable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bare flag.
    pub fn push_flag(&mut self, flag: &str) {
        self.args.push(flag.to_string());
    }

    /// Appends a flag followed by its value.
    pub fn push_value(&mut self, flag: &str, value: impl Into<String>) {
        self.args.push(flag.to_string());
        self.args.push(value.into());
    }

    /// Sets the executable the arguments are passed to.
    pub fn set_executable(&mut self, executable: impl Into<PathBuf>) {
        self.executable = Some(executable.into());
    }

    /// Executable, if one has been set.
    pub fn executable(&self) -> Option<&Path> {
        self.executable.as_deref()
    }

    /// Arguments in emission order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether no argument has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Executable as shown in logs, quoted when it contains a space so that
    /// the rendered line can be pasted into a shell.
    pub fn display_executable(&self) -> Option<String> {
        self.executable.as_ref().map(|exe| {
            let exe = exe.display().to_string();
            if exe.contains(' ') {
                format!("\"{exe}\"")
            } else {
                exe
            }
        })
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if let Some(exe) = self.display_executable() {
            write!(f, "{exe}")?;
            first = false;
        }
        for arg in &self.args {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{arg}")?;
            first = false;
        }
        Ok(())
    }
}
