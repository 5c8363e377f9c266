//! Run configuration.
//!
//! Credentials and endpoints are resolved once at startup from environment
//! variables (optionally seeded from a `.env` file):
//! - `POCKET_CONSUMER_KEY`, `POCKET_ACCESS_TOKEN` - Pocket credentials
//! - `TODOIST_TOKEN` - Todoist bearer token
//! - `TODOIST_PROJECT_ID` - destination project (default: the "Daily Read" project)
//! - `POCKET_API_URL`, `TODOIST_API_URL` - endpoint overrides

/// Reading speed used to turn word counts into minutes.
pub const WORDS_PER_MINUTE: u64 = 250;

/// Reading budget when none (or garbage) is given on the command line.
pub const DEFAULT_READING_MINUTES: i64 = 30;

/// Deep-link prefix for opening an item in the Pocket reader.
pub const READ_BASE_URL: &str = "https://getpocket.com/read/";

const DEFAULT_POCKET_URL: &str = "https://getpocket.com/v3";
const DEFAULT_TODOIST_URL: &str = "https://api.todoist.com/rest/v2";
const DEFAULT_PROJECT_ID: &str = "2328700616";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pocket_consumer_key: String,
    pub pocket_access_token: String,
    pub todoist_token: String,
    pub pocket_url: String,
    pub todoist_url: String,
    pub project_id: String,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    ///
    /// Missing credentials resolve to empty strings. They are not checked
    /// here; the remote service rejects them.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            pocket_consumer_key: lookup("POCKET_CONSUMER_KEY").unwrap_or_default(),
            pocket_access_token: lookup("POCKET_ACCESS_TOKEN").unwrap_or_default(),
            todoist_token: lookup("TODOIST_TOKEN").unwrap_or_default(),
            pocket_url: or_default("POCKET_API_URL", DEFAULT_POCKET_URL),
            todoist_url: or_default("TODOIST_API_URL", DEFAULT_TODOIST_URL),
            project_id: or_default("TODOIST_PROJECT_ID", DEFAULT_PROJECT_ID),
        }
    }
}

/// Interpret the optional minutes argument.
///
/// Only the leading integer counts (`"2.5"` is 2, `"45min"` is 45). Absent,
/// non-numeric and zero values fall back to [`DEFAULT_READING_MINUTES`].
/// Negative values are passed through and end up selecting nothing.
pub fn parse_reading_minutes(arg: Option<&str>) -> i64 {
    arg.and_then(leading_integer)
        .filter(|&m| m != 0)
        .unwrap_or(DEFAULT_READING_MINUTES)
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Word budget for a reading time in minutes.
pub fn word_budget(minutes: i64) -> i64 {
    minutes.saturating_mul(WORDS_PER_MINUTE as i64)
}
