//! Application configuration.
//!
//! Storage keys are fixed. Timing values default to the values below and can
//! be overridden at build time:
//! - `DASHBOARD_SUBMIT_DELAY_MS`: simulated sign-in/sign-up latency, default 1000
//! - `DASHBOARD_COUNTER_PULSE_MS`: counter pulse animation length, default 300

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const AUTH_USER_KEY: &str = "authUser";
pub const RICH_TEXT_KEY: &str = "richTextData";
pub const USERS_KEY: &str = "users";
pub const COUNTER_KEY: &str = "counterValue";

pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1000;
pub const DEFAULT_COUNTER_PULSE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub submit_delay_ms: u32,
    pub counter_pulse_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS, counter_pulse_ms: DEFAULT_COUNTER_PULSE_MS }
    }
}

impl AppConfig {
    /// Build config from values baked in at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("DASHBOARD_SUBMIT_DELAY_MS"), option_env!("DASHBOARD_COUNTER_PULSE_MS"))
    }

    fn from_raw(submit_delay: Option<&str>, counter_pulse: Option<&str>) -> Self {
        Self {
            submit_delay_ms: parse_u32(submit_delay, DEFAULT_SUBMIT_DELAY_MS),
            counter_pulse_ms: parse_u32(counter_pulse, DEFAULT_COUNTER_PULSE_MS),
        }
    }
}

fn parse_u32(raw: Option<&str>, default: u32) -> u32 {
    match raw.map(str::trim).map(str::parse::<u32>) {
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            log::warn!("ignoring invalid timing override: {e}");
            default
        }
        None => default,
    }
}
