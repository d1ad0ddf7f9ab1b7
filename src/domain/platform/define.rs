use std::fmt;
use std::str::FromStr;

use crate::domain::{AppError, PlatformId};

/// A preprocessor define as passed to the compiler: `NAME` or `NAME=VALUE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    name: String,
    value: Option<String>,
}

impl Define {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Result<Self, AppError> {
        let name = name.into();
        if !is_c_identifier(&name) {
            return Err(AppError::InvalidDefine(name));
        }
        Ok(Self { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl FromStr for Define {
    type Err = AppError;

    /// Accepts `NAME`, `NAME=VALUE`, and the `-D` prefixed compiler forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let body = raw.strip_prefix("-D").unwrap_or(raw);
        let (name, value) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (body, None),
        };
        Define::new(name, value).map_err(|_| AppError::InvalidDefine(s.to_string()))
    }
}

impl fmt::Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Pick the platform from the first define named `define_name` that has a value.
///
/// Valueless occurrences are skipped; later valued occurrences are ignored.
pub fn select_platform(
    defines: &[Define],
    define_name: &str,
) -> Result<Option<PlatformId>, AppError> {
    let Some(value) =
        defines.iter().filter(|d| d.name() == define_name).find_map(|d| d.value())
    else {
        return Ok(None);
    };

    PlatformId::new(value.trim_matches('"')).map(Some)
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defines(raw: &[&str]) -> Vec<Define> {
        raw.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn parses_name_and_value() {
        let define: Define = "uHAL_PLATFORM=CMSIS_STM32".parse().unwrap();
        assert_eq!(define.name(), "uHAL_PLATFORM");
        assert_eq!(define.value(), Some("CMSIS_STM32"));
    }

    #[test]
    fn parses_compiler_flag_form() {
        let define: Define = "-DNDEBUG".parse().unwrap();
        assert_eq!(define.name(), "NDEBUG");
        assert_eq!(define.value(), None);
        assert_eq!(define.to_string(), "NDEBUG");
    }

    #[test]
    fn rejects_non_identifiers() {
        assert!("=AVR".parse::<Define>().is_err());
        assert!("1ABC=2".parse::<Define>().is_err());
        assert!("".parse::<Define>().is_err());
    }

    #[test]
    fn selects_first_valued_match() {
        let defines = defines(&[
            "F_CPU=16000000",
            "uHAL_PLATFORM",
            "uHAL_PLATFORM=AVR_XMEGA3",
            "uHAL_PLATFORM=CMSIS_STM32",
        ]);
        let platform = select_platform(&defines, "uHAL_PLATFORM").unwrap();
        assert_eq!(platform.unwrap().as_str(), "AVR_XMEGA3");
    }

    #[test]
    fn no_matching_define_selects_nothing() {
        let defines = defines(&["F_CPU=16000000"]);
        assert_eq!(select_platform(&defines, "uHAL_PLATFORM").unwrap(), None);
    }

    #[test]
    fn quoted_value_is_unwrapped() {
        let defines = defines(&["uHAL_PLATFORM=\"CMSIS_STM32\""]);
        let platform = select_platform(&defines, "uHAL_PLATFORM").unwrap().unwrap();
        assert_eq!(platform.as_str(), "CMSIS_STM32");
    }

    #[test]
    fn traversal_value_is_rejected() {
        let defines = defines(&["uHAL_PLATFORM=../etc"]);
        assert!(matches!(
            select_platform(&defines, "uHAL_PLATFORM"),
            Err(AppError::InvalidPlatform(_))
        ));
    }
}
