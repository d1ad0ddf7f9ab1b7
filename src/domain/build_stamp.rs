//! Version and build date injected into firmware builds as compiler defines.

use chrono::NaiveDate;

use crate::domain::AppError;

/// Version used when no source-control description is available.
pub const FALLBACK_VERSION: &str = "0000000";

/// Day-precision format; anything finer changes the flags on every build and
/// forces a full rebuild.
pub const BUILD_DATE_FORMAT: &str = "%a %b %d %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStamp {
    version: String,
    build_date: NaiveDate,
}

impl BuildStamp {
    pub fn new(version: impl Into<String>, build_date: NaiveDate) -> Self {
        Self { version: version.into(), build_date }
    }

    /// Stamp carrying the fallback version.
    pub fn fallback(build_date: NaiveDate) -> Self {
        Self::new(FALLBACK_VERSION, build_date)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn build_date(&self) -> NaiveDate {
        self.build_date
    }

    pub fn is_fallback(&self) -> bool {
        self.version == FALLBACK_VERSION
    }

    /// Build date as it appears in the firmware, e.g. `Mon Oct 19 2026`.
    pub fn formatted_date(&self) -> String {
        self.build_date.format(BUILD_DATE_FORMAT).to_string()
    }

    /// Render as build flags defining `PROGVERS` and `BUILD_DATE` as C strings.
    ///
    /// The outer quotes belong to the shell word; the escaped inner quotes end
    /// up in the C string literal.
    pub fn to_flags(&self) -> String {
        format!(
            r#"-DPROGVERS="\"{}\"" -DBUILD_DATE="\"{}\"""#,
            escape_c_string(&self.version),
            escape_c_string(&self.formatted_date())
        )
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        let value = serde_json::json!({
            "version": self.version,
            "build_date": self.formatted_date(),
        });
        serde_json::to_string_pretty(&value).map_err(|e| AppError::ParseError {
            what: "build stamp".to_string(),
            details: e.to_string(),
        })
    }
}

/// Parse a `YYYY-MM-DD` override for the build date.
pub fn parse_build_date(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

fn escape_c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str(r"\\\\"),
            '"' => out.push_str(r#"\\\""#),
            _ => out.push(c),
        }
    }
    out
}
