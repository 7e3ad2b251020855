//! Platform-independent jpackage options.

use super::{ImageType, Launcher};
use serde::Deserialize;
use std::path::PathBuf;

/// Options shared by every platform.
///
/// This maps the top level of `jpackage.toml`. Relative paths are resolved
/// against the project base directory when the command line is built.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_jpackage::bundler::{ImageType, PackageSettings};
///
/// let settings = PackageSettings {
///     name: Some("MyApp".into()),
///     destination: Some("target/dist".into()),
///     image_type: Some(ImageType::AppImage),
///     main_jar: Some("myapp.jar".into()),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PackageSettings {
    /// `--name`: application and package name. Required.
    pub name: Option<String>,

    /// `--dest`: directory the package is written to. Required.
    #[serde(alias = "dest")]
    pub destination: Option<PathBuf>,

    /// `--verbose`
    pub verbose: bool,

    /// `--type`: package type. Default: jpackage's platform default.
    #[serde(rename = "type")]
    pub image_type: Option<ImageType>,

    /// `--app-version`
    pub app_version: Option<String>,

    /// `--copyright`
    pub copyright: Option<String>,

    /// `--description`
    pub description: Option<String>,

    /// `--runtime-image`: prebuilt runtime to bundle. Must exist.
    pub runtime_image: Option<PathBuf>,

    /// `--input`: directory with the application jars. Must exist.
    pub input: Option<PathBuf>,

    /// `--install-dir`: installation directory on the target machine.
    ///
    /// Passed through verbatim; it names a location on the machine the
    /// package is installed on, not a local path.
    pub install_dir: Option<String>,

    /// `--resource-dir`: overrides for jpackage resources. Must exist.
    pub resource_dir: Option<PathBuf>,

    /// `--vendor`
    pub vendor: Option<String>,

    /// `--module`: `<module name>[/<main class>]`
    pub module: Option<String>,

    /// `--main-class`
    pub main_class: Option<String>,

    /// `--main-jar`: jar relative to `input`.
    pub main_jar: Option<String>,

    /// `--temp`: working directory for jpackage. Created if missing.
    pub temp: Option<PathBuf>,

    /// `--icon`. Must exist.
    pub icon: Option<PathBuf>,

    /// `--license-file`. Must exist.
    pub license_file: Option<PathBuf>,

    /// `--about-url` (jpackage 17+)
    pub about_url: Option<String>,

    /// `--app-image`: existing application image to package. Must exist.
    pub app_image: Option<PathBuf>,

    /// `--launcher-as-service` (jpackage 19+)
    pub launcher_as_service: bool,

    /// `--module-path`, one flag per entry. Each must exist.
    pub module_paths: Vec<PathBuf>,

    /// `--file-associations`, one properties file per entry. Each must exist.
    pub file_associations: Vec<PathBuf>,

    /// `--app-content` (jpackage 18+), one flag per entry. Each must exist.
    #[serde(alias = "app_content")]
    pub app_content_paths: Vec<PathBuf>,

    /// `--add-modules`, joined with commas.
    pub add_modules: Vec<String>,

    /// `--jlink-options` (jpackage 16+), joined with spaces.
    pub jlink_options: Vec<String>,

    /// `--java-options`, one flag per entry, quoted for jpackage.
    pub java_options: Vec<String>,

    /// `--arguments`, one flag per entry, quoted for jpackage.
    pub arguments: Vec<String>,

    /// `--add-launcher`, one flag per launcher.
    pub launchers: Vec<Launcher>,

    /// Extra jpackage tokens appended verbatim after the mapped options.
    pub additional_options: Vec<String>,
}
