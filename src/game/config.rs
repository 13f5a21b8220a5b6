//! Game settings

use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

/// Default number of scored rounds per session
pub const DEFAULT_ROUNDS: u32 = 10;

/// Default time allowed per answer
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(15);

/// Default inclusive range of target word lengths
pub const DEFAULT_LENGTHS: RangeInclusive<usize> = 4..=8;

/// Rejected game settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one round")]
    NoRounds,
    #[error("minimum word length {min} is greater than maximum {max}")]
    InvertedLengths { min: usize, max: usize },
    #[error("word length must be at least 1")]
    ZeroLength,
    #[error("time limit must be greater than zero")]
    ZeroTimeLimit,
}

/// Settings for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    rounds: u32,
    time_limit: Duration,
    min_length: usize,
    max_length: usize,
}

impl GameConfig {
    /// Create validated settings
    ///
    /// # Errors
    /// Returns `ConfigError` for zero rounds, a zero time limit, a zero
    /// minimum length or `min_length > max_length`.
    pub fn new(
        rounds: u32,
        time_limit: Duration,
        min_length: usize,
        max_length: usize,
    ) -> Result<Self, ConfigError> {
        if rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if time_limit.is_zero() {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if min_length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if min_length > max_length {
            return Err(ConfigError::InvertedLengths {
                min: min_length,
                max: max_length,
            });
        }

        Ok(Self {
            rounds,
            time_limit,
            min_length,
            max_length,
        })
    }

    #[inline]
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    #[inline]
    #[must_use]
    pub const fn time_limit(&self) -> Duration {
        self.time_limit
    }

    #[inline]
    #[must_use]
    pub const fn lengths(&self) -> RangeInclusive<usize> {
        self.min_length..=self.max_length
    }

    /// Draw a target length uniformly from the configured range
    pub fn pick_length<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(self.lengths())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            time_limit: DEFAULT_TIME_LIMIT,
            min_length: *DEFAULT_LENGTHS.start(),
            max_length: *DEFAULT_LENGTHS.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_matches_classic_rules() {
        let config = GameConfig::default();
        assert_eq!(config.rounds(), 10);
        assert_eq!(config.time_limit(), Duration::from_secs(15));
        assert_eq!(config.lengths(), 4..=8);
    }

    #[test]
    fn picked_lengths_stay_in_range() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 9];

        for _ in 0..500 {
            let length = config.pick_length(&mut rng);
            assert!((4..=8).contains(&length));
            seen[length] = true;
        }

        // Uniform over 5 values: 500 draws should hit all of them
        assert!(seen[4..=8].iter().all(|&s| s));
    }

    #[test]
    fn fixed_length_range() {
        let config = GameConfig::new(3, Duration::from_secs(5), 6, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!((0..20).all(|_| config.pick_length(&mut rng) == 6));
    }

    #[test]
    fn invalid_settings_rejected() {
        let limit = Duration::from_secs(15);
        assert_eq!(GameConfig::new(0, limit, 4, 8), Err(ConfigError::NoRounds));
        assert_eq!(
            GameConfig::new(10, Duration::ZERO, 4, 8),
            Err(ConfigError::ZeroTimeLimit)
        );
        assert_eq!(GameConfig::new(10, limit, 0, 8), Err(ConfigError::ZeroLength));
        assert_eq!(
            GameConfig::new(10, limit, 9, 4),
            Err(ConfigError::InvertedLengths { min: 9, max: 4 })
        );
    }
}
