//! Quoting of JVM options and application arguments.
//!
//! jpackage splits `--java-options` and `--arguments` values on whitespace and
//! writes them into the launcher configuration, so values with spaces must
//! reach it already quoted. On Windows the value goes through one more round
//! of shell unquoting, hence the heavier escape sequences there.
//!
//! The transform is one-shot: escaping an already escaped value escapes it
//! again.

use crate::bundler::Platform;

/// Escapes `arg` for the quoting convention of `platform`.
///
/// - Windows: `"` becomes `\\\"`; a value containing a space is wrapped in `\"…\"`.
/// - macOS/Linux: `"` becomes `\"`; a value containing a space is wrapped in `"…"`.
pub fn escape(arg: &str, platform: Platform) -> String {
    let escaped = arg.replace('"', platform.quote_replacement());
    if escaped.contains(' ') {
        let wrapper = platform.space_wrapper();
        format!("{wrapper}{escaped}{wrapper}")
    } else {
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values_are_unchanged() {
        for platform in [Platform::Windows, Platform::MacOs, Platform::Linux] {
            assert_eq!(escape("", platform), "");
            assert_eq!(escape("123", platform), "123");
            assert_eq!(escape("-Xmx512m", platform), "-Xmx512m");
        }
    }

    #[test]
    fn test_posix_space_wrapping() {
        assert_eq!(
            escape("-DAppOption=text string", Platform::Linux),
            "\"-DAppOption=text string\""
        );
        assert_eq!(
            escape("-DAppOption=text string", Platform::MacOs),
            "\"-DAppOption=text string\""
        );
    }

    #[test]
    fn test_posix_embedded_quotes() {
        assert_eq!(
            escape("-XX:OnError=\"userdump.exe %p\"", Platform::Linux),
            "\"-XX:OnError=\\\"userdump.exe %p\\\"\""
        );
        assert_eq!(escape("a\"b", Platform::Linux), "a\\\"b");
    }

    #[test]
    fn test_windows_space_wrapping() {
        assert_eq!(
            escape("-DAppOption=text string", Platform::Windows),
            "\\\"-DAppOption=text string\\\""
        );
    }

    #[test]
    fn test_windows_embedded_quotes() {
        assert_eq!(
            escape("-XX:OnError=\"userdump.exe %p\"", Platform::Windows),
            "\\\"-XX:OnError=\\\\\\\"userdump.exe %p\\\\\\\"\\\""
        );
        assert_eq!(escape("a\"b", Platform::Windows), "a\\\\\\\"b");
    }

    #[test]
    fn test_escaping_is_not_idempotent() {
        let once = escape("say \"hi\"", Platform::Linux);
        let twice = escape(&once, Platform::Linux);
        assert_ne!(once, twice);
    }
}
