//! Engine defaults and their environment overrides.

use log::warn;

pub const DEPTH_ENV: &str = "MAGIC_CHESS_DEPTH";
pub const MOVETIME_ENV: &str = "MAGIC_CHESS_MOVETIME_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth used when a request names none.
    pub default_depth: u8,
    /// Time budget used when a request names none; `None` searches to depth.
    pub default_movetime_ms: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_depth: 4,
            default_movetime_ms: None,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `MAGIC_CHESS_DEPTH` / `MAGIC_CHESS_MOVETIME_MS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env` with a caller-supplied variable source. Unparseable
    /// values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(DEPTH_ENV) {
            match raw.trim().parse::<u8>() {
                Ok(depth) if depth > 0 => config.default_depth = depth,
                _ => warn!("ignoring {DEPTH_ENV}={raw:?}: expected a depth from 1 to 255"),
            }
        }

        if let Some(raw) = lookup(MOVETIME_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.default_movetime_ms = Some(ms),
                Err(_) => warn!("ignoring {MOVETIME_ENV}={raw:?}: expected milliseconds"),
            }
        }

        config
    }

    /// Applies command-line overrides on top of this config.
    pub fn with_overrides(mut self, depth: Option<u8>, movetime_ms: Option<u64>) -> Self {
        if let Some(depth) = depth {
            self.default_depth = depth.max(1);
        }
        if movetime_ms.is_some() {
            self.default_movetime_ms = movetime_ms;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn unset_environment_gives_defaults() {
        assert_eq!(EngineConfig::from_lookup(lookup(&[])), EngineConfig::default());
    }

    #[test]
    fn environment_values_override_defaults() {
        let config = EngineConfig::from_lookup(lookup(&[(DEPTH_ENV, "6"), (MOVETIME_ENV, " 250 ")]));
        assert_eq!(config.default_depth, 6);
        assert_eq!(config.default_movetime_ms, Some(250));
    }

    #[test]
    fn bad_environment_values_are_ignored() {
        let config = EngineConfig::from_lookup(lookup(&[(DEPTH_ENV, "0"), (MOVETIME_ENV, "soon")]));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn command_line_beats_environment() {
        let config = EngineConfig::from_lookup(lookup(&[(DEPTH_ENV, "6")])).with_overrides(Some(2), Some(100));
        assert_eq!(config.default_depth, 2);
        assert_eq!(config.default_movetime_ms, Some(100));

        let untouched = config.with_overrides(None, None);
        assert_eq!(untouched, config);
    }
}
