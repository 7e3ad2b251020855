//! jpackage command line construction.
//!
//! [`ArgumentBuilder`] turns [`Settings`](crate::bundler::Settings) into a
//! [`CommandLine`] in jpackage's canonical order:
//!
//! 1. `--name` and `--dest` (mandatory)
//! 2. common options
//! 3. repeated path options, one flag per entry
//! 4. `--add-modules` and `--jlink-options`, each joined into one value
//! 5. `--java-options` and `--arguments`, escaped per platform
//! 6. `--add-launcher` entries
//! 7. raw additional options
//! 8. options of the active platform

mod builder;
mod command_line;
mod escape;

pub use builder::ArgumentBuilder;
pub use command_line::CommandLine;
pub use escape::escape;
