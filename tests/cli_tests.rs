//! Binary tests in dry-run mode against a fake JDK.

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use kodegen_bundler_jpackage::bundler::Platform;
    use predicates::prelude::PredicateBooleanExt;
    use predicates::str::contains;
    use std::path::Path;
    use tempfile::TempDir;

    const FIXTURE: &str = include_str!("fixtures/jpackage.toml");

    /// Project with the fixture configuration and a JDK whose jpackage is an
    /// empty file, so version probing fails softly.
    fn project(config: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("jpackage.toml"), config).unwrap();
        let bin = dir.path().join("jdk").join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join(Platform::current().executable_name("jpackage")), b"").unwrap();
        dir
    }

    fn command(project: &Path) -> Command {
        let mut cmd = Command::cargo_bin("kodegen_bundler_jpackage").unwrap();
        cmd.current_dir(project)
            .env("JAVA_HOME", project.join("jdk"))
            .env("HOME", project)
            .env("XDG_CONFIG_HOME", project.join(".config"))
            .env_remove("JPACKAGE_TOOLCHAINS")
            .env_remove("JPACKAGE_BUILD_DIR")
            .env_remove("JPACKAGE_DRY_RUN")
            .env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_dry_run_prints_linux_command_line() {
        let project = project(FIXTURE);

        command(project.path())
            .args(["--dry-run", "--platform", "linux"])
            .assert()
            .success()
            .stdout(contains("Dry run"))
            .stdout(contains("--name DemoApp"))
            .stdout(contains("--type app-image"))
            .stdout(contains("--add-modules java.base,java.desktop"))
            .stdout(contains("\"-Dapp.title=Demo App\""))
            .stdout(contains("--linux-app-category Development --linux-shortcut"))
            .stdout(contains("--win-").not())
            .stdout(contains("--mac-").not());

        assert!(!project.path().join("target").exists());
    }

    #[test]
    fn test_dry_run_for_windows_uses_windows_options() {
        let project = project(FIXTURE);

        command(project.path())
            .args(["--dry-run", "--platform", "windows"])
            .assert()
            .success()
            .stdout(contains("--win-menu --win-menu-group Example --win-shortcut"))
            .stdout(contains("--linux-").not());
    }

    #[test]
    fn test_dry_run_from_environment() {
        let project = project(FIXTURE);

        command(project.path())
            .env("JPACKAGE_DRY_RUN", "true")
            .args(["--platform", "macos"])
            .assert()
            .success()
            .stdout(contains("--mac-package-identifier com.example.demo"));
    }

    #[test]
    fn test_explicit_config_and_base_dir() {
        let project = project(FIXTURE);
        let elsewhere = TempDir::new().unwrap();

        let dest = project.path().join("target").join("dist");
        command(elsewhere.path())
            .arg("--config")
            .arg(project.path().join("jpackage.toml"))
            .args(["--dry-run", "--platform", "linux"])
            .assert()
            .success()
            .stdout(contains(format!("--dest {}", dest.display())));
    }

    #[test]
    fn test_missing_name_fails_with_suggestion() {
        let project = project("dest = \"out\"\n");

        command(project.path())
            .arg("--dry-run")
            .assert()
            .failure()
            .code(1)
            .stderr(contains("Mandatory parameter \"name\""));
    }

    #[test]
    fn test_missing_config_fails() {
        let dir = TempDir::new().unwrap();

        command(dir.path())
            .arg("--dry-run")
            .assert()
            .failure()
            .stderr(contains("Cannot read"));
    }

    #[test]
    fn test_skip_short_circuits() {
        let project = project("skip = true\n");

        command(project.path())
            .env_remove("JAVA_HOME")
            .assert()
            .success()
            .stdout(contains("Packaging skipped"));
    }

    #[test]
    fn test_missing_input_directory_is_reported() {
        let project = project(&format!("input = \"libs\"\n{FIXTURE}"));

        command(project.path())
            .args(["--dry-run", "--platform", "linux"])
            .assert()
            .failure()
            .stderr(contains("--input"));
    }
}
