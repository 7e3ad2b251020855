//! jpackage invocation engine.
//!
//! Maps a declarative packaging configuration onto a jpackage command line,
//! locates and version-probes the jpackage executable, optionally removes the
//! previous output and runs the tool.
//!
//! # Configuration
//!
//! Packaging is configured via `jpackage.toml`:
//!
//! ```toml
//! name = "MyApp"
//! dest = "target/dist"
//! type = "app-image"
//! input = "target/libs"
//! main_jar = "myapp.jar"
//!
//! [[launchers]]
//! name = "myapp-cli"
//! file = "src/launchers/cli.properties"
//!
//! [linux]
//! shortcut = true
//! ```
//!
//! # Integration
//!
//! ```no_run
//! use kodegen_bundler_jpackage::bundler::{
//!     ExecutableLocator, NoToolchains, PackageSettings, Packager, Platform, SettingsBuilder,
//! };
//!
//! # async fn example() -> kodegen_bundler_jpackage::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .package_settings(PackageSettings {
//!         name: Some("MyApp".into()),
//!         destination: Some("target/dist".into()),
//!         ..Default::default()
//!     })
//!     .build()?;
//!
//! let locator = ExecutableLocator::from_env(Platform::current(), NoToolchains);
//! let outcome = Packager::new(settings, locator).execute().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Supported Platforms
//!
//! | Platform | Package types | Options table |
//! |----------|---------------|---------------|
//! | Linux | app-image, deb, rpm | `[linux]` |
//! | macOS | app-image, dmg, pkg | `[macos]` |
//! | Windows | app-image, exe, msi | `[windows]` |

pub mod arguments;
pub mod builder;
pub mod error;
pub mod parameters;
mod platform;
pub mod settings;
pub mod toolchain;
pub mod utils;

// Public re-exports
pub use arguments::{ArgumentBuilder, CommandLine, escape};
pub use builder::{
    ExecutableLocator, ExecutionResult, Packager, PackagerOutcome, ProcessRunner,
    TokioProcessRunner,
};
pub use error::{Error, Result};
pub use platform::Platform;
pub use settings::{
    ImageType, Launcher, LinuxSettings, MacOsSettings, PackageSettings, PlatformOptions, Settings,
    SettingsBuilder, WindowsSettings,
};
pub use toolchain::{NoToolchains, Toolchain, ToolchainManager, ToolchainsFile};
