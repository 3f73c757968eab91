//! Session configuration.

use tracing::warn;

/// Environment switch read by `SessionConfig::from_env`.
pub const FILTER_POLICY_ENV: &str = "DUEL_CHESS_FILTER";

/// When a selected piece's destinations are narrowed by the check filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPolicy {
    /// Only while the mover's own king is in check. Outside of check a move
    /// may still expose the king, and the opponent may then take it.
    #[default]
    WhenInCheck,
    /// On every selection; only fully legal moves are offered.
    Always,
}

impl FilterPolicy {
    /// Parses `always` or `in-check`, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("always") {
            Some(FilterPolicy::Always)
        } else if value.eq_ignore_ascii_case("in-check") {
            Some(FilterPolicy::WhenInCheck)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub filter_policy: FilterPolicy,
}

impl SessionConfig {
    /// Defaults, overridden by `DUEL_CHESS_FILTER` when it holds a known value.
    pub fn from_env() -> Self {
        match std::env::var(FILTER_POLICY_ENV) {
            Ok(value) => Self::with_policy_override(&value),
            Err(_) => Self::default(),
        }
    }

    fn with_policy_override(value: &str) -> Self {
        match FilterPolicy::parse(value) {
            Some(filter_policy) => Self { filter_policy },
            None => {
                warn!(value, "unknown {FILTER_POLICY_ENV} value, using default policy");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_only_in_check() {
        assert_eq!(SessionConfig::default().filter_policy, FilterPolicy::WhenInCheck);
    }

    #[test]
    fn policy_override_parses_known_values() {
        assert_eq!(
            SessionConfig::with_policy_override("ALWAYS").filter_policy,
            FilterPolicy::Always
        );
        assert_eq!(
            SessionConfig::with_policy_override("in-check").filter_policy,
            FilterPolicy::WhenInCheck
        );
        assert_eq!(SessionConfig::with_policy_override("sometimes"), SessionConfig::default());
    }
}
