//! Configuration structures for a jpackage run.
//!
//! Platform-independent options live in [`PackageSettings`]; each platform
//! has its own bundle, of which [`SettingsBuilder`] keeps exactly one.

mod builder;
mod core;
mod image_type;
mod launcher;
mod linux;
mod macos;
mod package;
mod windows;

pub use builder::SettingsBuilder;
pub use core::{PlatformOptions, Settings};
pub use image_type::ImageType;
pub use launcher::Launcher;
pub use linux::LinuxSettings;
pub use macos::MacOsSettings;
pub use package::PackageSettings;
pub use windows::WindowsSettings;
