//! Kodegen Bundler jpackage - native Java application packager.
//!
//! This binary maps `jpackage.toml` onto a jpackage invocation, runs it and
//! reports failures with recovery suggestions.

use kodegen_bundler_jpackage::cli::{self, OutputManager};
use log::LevelFilter;
use std::process;

#[tokio::main]
async fn main() {
    let args = cli::parse_args();

    let default_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    match cli::run(args).await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Fatal errors are never quiet
            let output = OutputManager::new(false);
            output.error(&format!("Fatal error: {e}"));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                let _ = output.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    let _ = output.indent(&suggestion);
                }
            }

            process::exit(1);
        }
    }
}
