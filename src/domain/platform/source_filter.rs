use std::fmt;
use std::str::FromStr;

use crate::domain::{AppError, PlatformId};

use super::PLATFORM_DIR;

/// One `+<pattern>` or `-<pattern>` entry of a source filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRule {
    Include(String),
    Exclude(String),
}

impl FilterRule {
    pub fn pattern(&self) -> &str {
        match self {
            FilterRule::Include(p) | FilterRule::Exclude(p) => p,
        }
    }

    /// Whether the pattern selects `path` (relative, `/`-separated).
    ///
    /// A pattern selects a file when it matches the file itself or any of its
    /// ancestor directories. A trailing `/` restricts the match to directories.
    pub fn matches(&self, path: &str) -> bool {
        let pattern = self.pattern();
        let dir_only = pattern.ends_with('/');
        let pattern = pattern.trim_end_matches('/');

        let pattern_segments: Vec<&str> = pattern.split('/').collect();
        let path_segments: Vec<&str> = path.split('/').collect();
        let max_len = if dir_only { path_segments.len() - 1 } else { path_segments.len() };

        if pattern_segments.len() > max_len {
            return false;
        }
        pattern_segments.iter().zip(&path_segments).all(|(p, s)| glob_segment(p, s))
    }
}

impl fmt::Display for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterRule::Include(p) => write!(f, "+<{}>", p),
            FilterRule::Exclude(p) => write!(f, "-<{}>", p),
        }
    }
}

impl FromStr for FilterRule {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || AppError::ParseError {
            what: "source filter rule".to_string(),
            details: format!("'{}' is not of the form +<pattern> or -<pattern>", s),
        };
        let s = s.trim();
        let body = |rest: &str| {
            rest.strip_prefix('<').and_then(|r| r.strip_suffix('>')).map(str::to_string)
        };

        if let Some(rest) = s.strip_prefix('+') {
            body(rest).map(FilterRule::Include).ok_or_else(parse_error)
        } else if let Some(rest) = s.strip_prefix('-') {
            body(rest).map(FilterRule::Exclude).ok_or_else(parse_error)
        } else {
            Err(parse_error())
        }
    }
}

/// Ordered include/exclude rules selecting which sources get compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFilter {
    rules: Vec<FilterRule>,
}

impl SourceFilter {
    pub fn new(rules: Vec<FilterRule>) -> Self {
        Self { rules }
    }

    /// Everything compiles; used when no platform is selected.
    pub fn unrestricted() -> Self {
        Self::new(vec![FilterRule::Include("*".to_string())])
    }

    /// Everything except other platforms' directories.
    pub fn for_platform(platform: &PlatformId) -> Self {
        Self::new(vec![
            FilterRule::Include("*".to_string()),
            FilterRule::Exclude(format!("{}/", PLATFORM_DIR)),
            FilterRule::Include(format!("{}/{}", PLATFORM_DIR, platform)),
        ])
    }

    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    /// Rules as a single space-separated line.
    pub fn render(&self) -> String {
        self.rules.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        let rules: Vec<String> = self.rules.iter().map(ToString::to_string).collect();
        serde_json::to_string(&rules).map_err(|e| AppError::ParseError {
            what: "source filter".to_string(),
            details: e.to_string(),
        })
    }

    /// Evaluate the rules in order for one path; the last matching rule wins.
    pub fn includes(&self, path: &str) -> bool {
        self.rules.iter().fold(false, |included, rule| match rule {
            FilterRule::Include(_) if rule.matches(path) => true,
            FilterRule::Exclude(_) if rule.matches(path) => false,
            _ => included,
        })
    }

    /// Keep the paths the filter includes, preserving input order.
    pub fn apply<'a, I>(&self, paths: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        paths.into_iter().filter(|p| self.includes(p)).map(str::to_string).collect()
    }
}

impl FromStr for SourceFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rules =
            s.split_whitespace().map(str::parse::<FilterRule>).collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }
}

/// Shell-style match of a single path segment; `*` and `?` stay within it.
fn glob_segment(pattern: &str, segment: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let s: Vec<char> = segment.chars().collect();
    let (mut pi, mut si) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while si < s.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == s[si]) {
            pi += 1;
            si += 1;
        } else if pi < p.len() && p[pi] == '*' {
            backtrack = Some((pi, si));
            pi += 1;
        } else if let Some((star_pi, star_si)) = backtrack {
            pi = star_pi + 1;
            si = star_si + 1;
            backtrack = Some((star_pi, star_si + 1));
        } else {
            return false;
        }
    }

    p[pi..].iter().all(|&c| c == '*')
}
