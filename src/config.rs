//! Client configuration resolved at build time.
//!
//! Optional overrides (baked in by `option_env!`):
//! - `JOURNAL_API_BASE_URL`: account API origin, empty for same-origin
//! - `JOURNAL_STUDENT_REDIRECT_MS`: default 2000
//! - `JOURNAL_TUTOR_REDIRECT_MS`: default 3000
//! - `JOURNAL_APPROVAL_NOTICE_MS`: default 5000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_STUDENT_REDIRECT_MS: u64 = 2_000;
pub const DEFAULT_TUTOR_REDIRECT_MS: u64 = 3_000;
pub const DEFAULT_APPROVAL_NOTICE_MS: u64 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for `/api/...` requests, without a trailing slash.
    pub api_base_url: String,
    pub student_redirect_delay: Duration,
    pub tutor_redirect_delay: Duration,
    pub approval_notice: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            student_redirect_delay: Duration::from_millis(DEFAULT_STUDENT_REDIRECT_MS),
            tutor_redirect_delay: Duration::from_millis(DEFAULT_TUTOR_REDIRECT_MS),
            approval_notice: Duration::from_millis(DEFAULT_APPROVAL_NOTICE_MS),
        }
    }
}

impl ClientConfig {
    /// Build config from the variables captured when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("JOURNAL_API_BASE_URL"),
            option_env!("JOURNAL_STUDENT_REDIRECT_MS"),
            option_env!("JOURNAL_TUTOR_REDIRECT_MS"),
            option_env!("JOURNAL_APPROVAL_NOTICE_MS"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        student_redirect_ms: Option<&str>,
        tutor_redirect_ms: Option<&str>,
        approval_notice_ms: Option<&str>,
    ) -> Self {
        Self {
            api_base_url: api_base_url.unwrap_or_default().trim().trim_end_matches('/').to_owned(),
            student_redirect_delay: parse_millis(student_redirect_ms, DEFAULT_STUDENT_REDIRECT_MS),
            tutor_redirect_delay: parse_millis(tutor_redirect_ms, DEFAULT_TUTOR_REDIRECT_MS),
            approval_notice: parse_millis(approval_notice_ms, DEFAULT_APPROVAL_NOTICE_MS),
        }
    }
}

fn parse_millis(raw: Option<&str>, default: u64) -> Duration {
    Duration::from_millis(raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default))
}
