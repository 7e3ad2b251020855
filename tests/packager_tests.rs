//! End-to-end packaging runs against a recorded fake jpackage.

#[cfg(test)]
mod tests {
    use kodegen_bundler_jpackage::bundler::{
        Error, ExecutableLocator, ExecutionResult, ImageType, Launcher, LinuxSettings,
        MacOsSettings, NoToolchains, PackageSettings, Packager, PackagerOutcome, Platform,
        ProcessRunner, Result, SettingsBuilder, WindowsSettings, builder::VERSION_FLAG,
    };
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// What the fake jpackage does for one kind of call.
    #[derive(Clone)]
    enum Reply {
        Exit(ExecutionResult),
        StartFailure,
    }

    impl Reply {
        fn output(stdout: &str) -> Self {
            Reply::Exit(ExecutionResult {
                exit_code: 0,
                stdout: stdout.to_string(),
                stderr: String::new(),
            })
        }

        fn to_result(&self, program: &Path) -> Result<ExecutionResult> {
            match self {
                Reply::Exit(result) => Ok(result.clone()),
                Reply::StartFailure => Err(Error::ProcessStartFailure {
                    command: program.display().to_string(),
                    error: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                }),
            }
        }
    }

    /// Answers `--version` with `version` and every other call with
    /// `packaging`, recording all argv lists.
    struct FakeRunner {
        version: Reply,
        packaging: Reply,
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl FakeRunner {
        fn new(version_output: &str) -> Self {
            Self::with_result(version_output, ExecutionResult::default())
        }

        fn with_result(version_output: &str, result: ExecutionResult) -> Self {
            Self::replying(Reply::output(version_output), Reply::Exit(result))
        }

        fn replying(version: Reply, packaging: Reply) -> Self {
            Self {
                version,
                packaging,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().unwrap().clone()
        }

        fn packaging_calls(&self) -> Vec<Vec<String>> {
            self.calls()
                .into_iter()
                .filter(|args| args.as_slice() != [VERSION_FLAG])
                .collect()
        }
    }

    impl ProcessRunner for FakeRunner {
        async fn run(&self, program: &Path, args: &[String]) -> Result<ExecutionResult> {
            self.calls.lock().unwrap().push(args.to_vec());
            if args == [VERSION_FLAG] {
                self.version.to_result(program)
            } else {
                self.packaging.to_result(program)
            }
        }
    }

    /// Project directory with a fake JDK holding an empty jpackage file.
    struct Project {
        dir: TempDir,
    }

    impl Project {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let bin = dir.path().join("jdk").join("bin");
            std::fs::create_dir_all(&bin).unwrap();
            std::fs::write(bin.join(Platform::current().executable_name("jpackage")), b"")
                .unwrap();
            Self { dir }
        }

        fn path(&self) -> &Path {
            self.dir.path()
        }

        fn jpackage(&self) -> PathBuf {
            self.path()
                .join("jdk")
                .join("bin")
                .join(Platform::current().executable_name("jpackage"))
        }

        fn locator(&self) -> ExecutableLocator {
            ExecutableLocator::new(Platform::current(), NoToolchains)
                .java_home(Some(self.path().join("jdk")))
        }

        fn builder(&self, package: PackageSettings) -> SettingsBuilder {
            SettingsBuilder::new()
                .base_dir(self.path())
                .platform(Platform::Linux)
                .package_settings(package)
        }
    }

    fn app(dest: &str) -> PackageSettings {
        PackageSettings {
            name: Some("App".into()),
            destination: Some(dest.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_linux_app_image_runs_jpackage() {
        let project = Project::new();
        let mut package = app("out");
        package.verbose = true;
        package.image_type = Some(ImageType::AppImage);
        let settings = project.builder(package).build().unwrap();

        let packager = Packager::with_runner(settings, project.locator(), FakeRunner::new("21.0.5"));
        let outcome = packager.execute().await.unwrap();

        let dest = project.path().join("out").display().to_string();
        let expected = ["--name", "App", "--dest", &dest, "--verbose", "--type", "app-image"];
        assert_eq!(packager.runner().calls()[0], [VERSION_FLAG]);
        assert_eq!(packager.runner().packaging_calls(), [expected]);

        match outcome {
            PackagerOutcome::Completed { command_line, .. } => {
                assert_eq!(command_line.args(), expected);
                assert_eq!(command_line.executable(), Some(project.jpackage().as_path()));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_windows_run_emits_only_windows_options() {
        let project = Project::new();
        let settings = project
            .builder(app("out"))
            .platform(Platform::Windows)
            .windows(WindowsSettings {
                menu: true,
                menu_group: Some("Tools".into()),
                ..Default::default()
            })
            .macos(MacOsSettings {
                sign: true,
                ..Default::default()
            })
            .linux(LinuxSettings {
                shortcut: true,
                package_deps: Some("libc6".into()),
                ..Default::default()
            })
            .build()
            .unwrap();

        let packager = Packager::with_runner(settings, project.locator(), FakeRunner::new("22"))
            .dry_run(true);
        let PackagerOutcome::DryRun { command_line } = packager.execute().await.unwrap() else {
            panic!("expected a dry run");
        };

        let args = command_line.args();
        assert_eq!(&args[4..], ["--win-menu", "--win-menu-group", "Tools"]);
        assert!(packager.runner().packaging_calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_launcher_aborts_before_packaging() {
        let project = Project::new();
        std::fs::write(project.path().join("cli.properties"), b"").unwrap();
        let mut package = app("out");
        package.launchers = vec![Launcher::new("", "cli.properties")];
        let settings = project.builder(package).build().unwrap();

        let packager = Packager::with_runner(settings, project.locator(), FakeRunner::new("21"));
        let err = packager.execute().await.unwrap_err();

        assert!(matches!(err, Error::InvalidLauncher { index: 0, .. }));
        assert!(packager.runner().packaging_calls().is_empty());
    }

    #[tokio::test]
    async fn test_refused_cleanup_still_runs_jpackage() {
        let project = Project::new();
        let outside = TempDir::new().unwrap();
        std::fs::write(outside.path().join("keep.txt"), b"keep").unwrap();

        let settings = project
            .builder(app(&outside.path().display().to_string()))
            .remove_destination(true)
            .build()
            .unwrap();

        let packager = Packager::with_runner(settings, project.locator(), FakeRunner::new("21"))
            .build_dir(project.path().join("target"));
        let outcome = packager.execute().await.unwrap();

        assert!(matches!(outcome, PackagerOutcome::Completed { .. }));
        assert!(outside.path().join("keep.txt").exists());
        assert_eq!(packager.runner().packaging_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_nested_destination_is_removed_before_run() {
        let project = Project::new();
        let dist = project.path().join("target").join("dist");
        std::fs::create_dir_all(dist.join("App").join("lib")).unwrap();
        std::fs::write(dist.join("App").join("lib").join("app.jar"), b"jar").unwrap();

        let settings = project
            .builder(app("target/dist"))
            .remove_destination(true)
            .build()
            .unwrap();

        let packager = Packager::with_runner(settings, project.locator(), FakeRunner::new("21"));
        packager.execute().await.unwrap();

        assert!(!dist.exists());
        assert!(project.path().join("target").exists());
    }

    #[tokio::test]
    async fn test_dry_run_keeps_destination() {
        let project = Project::new();
        let dist = project.path().join("target").join("dist");
        std::fs::create_dir_all(&dist).unwrap();

        let settings = project
            .builder(app("target/dist"))
            .remove_destination(true)
            .build()
            .unwrap();

        let packager = Packager::with_runner(settings, project.locator(), FakeRunner::new("21"))
            .dry_run(true);
        let outcome = packager.execute().await.unwrap();

        assert!(matches!(outcome, PackagerOutcome::DryRun { .. }));
        assert!(dist.exists());
        assert_eq!(packager.runner().calls(), [[VERSION_FLAG]]);
    }

    #[tokio::test]
    async fn test_flag_newer_than_jpackage_is_rejected() {
        let project = Project::new();
        let mut package = app("out");
        package.about_url = Some("https://example.com".into());
        let settings = project.builder(package).build().unwrap();

        let packager =
            Packager::with_runner(settings.clone(), project.locator(), FakeRunner::new("16.0.2"));
        let err = packager.execute().await.unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedByVersion {
                parameter: "--about-url",
                tool_version: 16,
                ..
            }
        ));
        assert!(packager.runner().packaging_calls().is_empty());

        // Unknown version disables gating
        let packager = Packager::with_runner(settings, project.locator(), FakeRunner::new("dev"));
        assert!(packager.execute().await.is_ok());
    }

    #[tokio::test]
    async fn test_failed_version_query_builds_ungated() {
        let project = Project::new();
        let mut package = app("out");
        package.about_url = Some("https://example.com".into());
        let settings = project.builder(package).build().unwrap();

        // Exit code 1 discards the output, even when it names a release
        let failed_exit = Reply::Exit(ExecutionResult {
            exit_code: 1,
            stdout: "16.0.2".into(),
            stderr: "unrecognized option".into(),
        });
        let replies = [failed_exit, Reply::StartFailure];

        for version in replies {
            let runner = FakeRunner::replying(version, Reply::Exit(ExecutionResult::default()));
            let packager = Packager::with_runner(settings.clone(), project.locator(), runner);

            let PackagerOutcome::Completed { command_line, .. } = packager.execute().await.unwrap()
            else {
                panic!("expected a completed run");
            };
            assert!(command_line.args().iter().any(|arg| arg == "--about-url"));
            assert_eq!(packager.runner().packaging_calls().len(), 1);
        }

        let strict = project
            .builder(app("out"))
            .require_tool_version(true)
            .build()
            .unwrap();
        let runner = FakeRunner::replying(Reply::StartFailure, Reply::StartFailure);
        let packager = Packager::with_runner(strict, project.locator(), runner);
        assert!(matches!(
            packager.execute().await,
            Err(Error::VersionUndetermined { .. })
        ));
    }

    #[tokio::test]
    async fn test_start_failure_is_not_reported_as_exit() {
        let project = Project::new();
        let settings = project.builder(app("out")).build().unwrap();
        let runner = FakeRunner::replying(Reply::output("21"), Reply::StartFailure);

        let packager = Packager::with_runner(settings, project.locator(), runner);
        let err = packager.execute().await.unwrap_err();

        assert!(matches!(err, Error::ProcessStartFailure { .. }), "{err:?}");
        assert_eq!(packager.runner().packaging_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_version_is_fatal_when_required() {
        let project = Project::new();
        let settings = project
            .builder(app("out"))
            .require_tool_version(true)
            .build()
            .unwrap();

        let packager = Packager::with_runner(settings, project.locator(), FakeRunner::new(""));
        let err = packager.execute().await.unwrap_err();
        assert!(matches!(err, Error::VersionUndetermined { .. }));
    }

    #[tokio::test]
    async fn test_non_zero_exit_reports_command_line() {
        let project = Project::new();
        let settings = project.builder(app("out")).build().unwrap();
        let runner = FakeRunner::with_result(
            "21",
            ExecutionResult {
                exit_code: 2,
                stdout: "Bundling failed\n".into(),
                stderr: "Error: Invalid value\n".into(),
            },
        );

        let packager = Packager::with_runner(settings, project.locator(), runner);
        let err = packager.execute().await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Exit code: 2 - Error: Invalid value"));
        assert!(message.contains("Command line was: "));
        assert!(message.contains("--name App"));
        match err {
            Error::NonZeroExit { exit_code, stdout, .. } => {
                assert_eq!(exit_code, 2);
                assert_eq!(stdout, ["Bundling failed"]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_skip_does_nothing() {
        let project = Project::new();
        let settings = SettingsBuilder::new()
            .base_dir(project.path())
            .package_settings(PackageSettings::default())
            .skip(true)
            .build()
            .unwrap();

        // No JDK anywhere: skip must win before lookup
        let locator = ExecutableLocator::new(Platform::current(), NoToolchains);
        let packager = Packager::with_runner(settings, locator, FakeRunner::new("21"));

        assert!(matches!(
            packager.execute().await.unwrap(),
            PackagerOutcome::Skipped
        ));
        assert!(packager.runner().calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_jpackage_is_reported() {
        let project = Project::new();
        let settings = project.builder(app("out")).build().unwrap();
        let locator = ExecutableLocator::new(Platform::current(), NoToolchains)
            .java_home(Some(project.path().join("no-jdk")));

        let packager = Packager::with_runner(settings, locator, FakeRunner::new("21"));
        assert!(matches!(
            packager.execute().await,
            Err(Error::ExecutableNotFound { .. })
        ));
        assert!(packager.runner().calls().is_empty());
    }
}
