//! Build metadata
//!
//! `build.rs` embeds a build number and compile time; the status tool, the
//! server info and the startup banner all read them from here.

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Human-readable product name
pub const TITLE: &str = "Health Tracker";

/// Build identity of the running binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_env(option_env!("HT_BUILD_NUMBER"), option_env!("HT_BUILD_TIMESTAMP"))
    }

    /// Missing or malformed values fall back to build 0 and "unknown"
    fn from_env(build_number: Option<&str>, build_timestamp: Option<&'static str>) -> Self {
        Self {
            version: VERSION,
            build_number: build_number.and_then(|s| s.trim().parse().ok()).unwrap_or(0),
            build_timestamp: build_timestamp.unwrap_or("unknown"),
        }
    }

    /// e.g. "Health Tracker 1.0.0 (build 12)"
    pub fn title(&self) -> String {
        format!("{} {} (build {})", TITLE, self.version, self.build_number)
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  {}", info.title());
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env() {
        let info = BuildInfo::from_env(Some("42"), Some("2024-05-01T10:00:00Z"));
        assert_eq!(info.build_number, 42);
        assert_eq!(info.build_timestamp, "2024-05-01T10:00:00Z");
        assert_eq!(info.title(), format!("Health Tracker {} (build 42)", VERSION));
    }

    #[test]
    fn test_from_env_fallbacks() {
        let info = BuildInfo::from_env(None, None);
        assert_eq!(info.build_number, 0);
        assert_eq!(info.build_timestamp, "unknown");
        assert_eq!(BuildInfo::from_env(Some("12a"), None).build_number, 0);
    }
}
