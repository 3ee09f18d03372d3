//! Game configuration and tuning
//!
//! Everything the engine needs is supplied at construction time; there are no
//! module-level constants feeding gameplay. Defaults describe the stock
//! 480x800 arena.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration, detected eagerly at engine construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("arena dimensions must be positive, got {width}x{height}")]
    NonPositiveArena { width: f32, height: f32 },

    #[error("{name} must be within (0, 1), got {value}")]
    RatioOutOfRange { name: &'static str, value: f32 },

    #[error("{name} must not be negative, got {value}")]
    NegativeLength { name: &'static str, value: f32 },

    #[error("miss limit must be at least 1")]
    ZeroMissLimit,

    #[error("spawn interval floor {floor} must be in 1..={initial}")]
    BadSpawnInterval { initial: u32, floor: u32 },

    #[error("difficulty step ticks must be at least 1")]
    ZeroDifficultyStep,

    #[error("{name} ({size}px) plus side margins ({margin}px each) exceeds arena width {width}")]
    ArenaTooNarrow {
        name: &'static str,
        size: f32,
        margin: f32,
        width: f32,
    },
}

/// Engine configuration
///
/// Sizes and speeds are derived from the arena width so the same config scales
/// to different logical resolutions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Arena logical width in pixels
    pub arena_width: f32,
    /// Arena logical height in pixels
    pub arena_height: f32,

    /// Player sprite size as a fraction of arena width
    pub player_size_ratio: f32,
    /// Player horizontal speed (pixels/tick) as a fraction of arena width
    pub player_speed_ratio: f32,
    /// Lower bound on the derived player speed (pixels/tick)
    pub min_player_speed: f32,
    /// Gap between the player and the arena bottom
    pub ground_margin: f32,
    /// Side margin the player and spawns never cross
    pub horizontal_margin: f32,
    /// Catch-zone shrink as a fraction of player size (trims sprite-edge catches)
    pub hit_inset_ratio: f32,

    /// Bean sprite size as a fraction of arena width
    pub item_size_ratio: f32,
    /// How far past the arena bottom a bean may fall before counting as missed
    pub miss_tolerance: f32,

    /// Misses that end the run
    pub miss_limit: u8,
    /// Ticks between spawns at the start of a run
    pub initial_spawn_interval: u32,
    /// The spawn interval never ramps below this
    pub spawn_interval_floor: u32,
    /// Ticks between difficulty steps
    pub difficulty_step_ticks: u64,
    /// Spawn-interval reduction per difficulty step
    pub difficulty_step_amount: u32,

    /// RNG seed; `None` seeds from system entropy at construction
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: 480.0,
            arena_height: 800.0,

            player_size_ratio: 0.26,
            player_speed_ratio: 0.018,
            min_player_speed: 7.0,
            ground_margin: 12.0,
            horizontal_margin: 20.0,
            hit_inset_ratio: 0.2,

            item_size_ratio: 0.12,
            miss_tolerance: 50.0,

            miss_limit: 3,
            initial_spawn_interval: 60,
            spawn_interval_floor: 28,
            difficulty_step_ticks: 600,
            difficulty_step_amount: 4,

            seed: None,
        }
    }
}

impl GameConfig {
    /// Player sprite size in pixels
    #[inline]
    pub fn player_size(&self) -> f32 {
        (self.arena_width * self.player_size_ratio).round()
    }

    /// Player horizontal speed in pixels/tick
    #[inline]
    pub fn player_speed(&self) -> f32 {
        (self.arena_width * self.player_speed_ratio)
            .round()
            .max(self.min_player_speed)
    }

    /// Bean sprite size in pixels
    #[inline]
    pub fn item_size(&self) -> f32 {
        (self.arena_width * self.item_size_ratio).round()
    }

    /// Total catch-zone shrink in pixels (split evenly across both sides)
    #[inline]
    pub fn hit_inset(&self) -> f32 {
        (self.player_size() * self.hit_inset_ratio).round()
    }

    /// Leftmost legal player x
    #[inline]
    pub fn min_player_x(&self) -> f32 {
        self.horizontal_margin
    }

    /// Rightmost legal player x
    #[inline]
    pub fn max_player_x(&self) -> f32 {
        self.arena_width - self.player_size() - self.horizontal_margin
    }

    /// The y beyond which an uncaught bean counts as missed
    #[inline]
    pub fn miss_line(&self) -> f32 {
        self.arena_height + self.miss_tolerance
    }

    /// Validate the configuration, rejecting values that would make the
    /// simulation undefined at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(ConfigError::NonPositiveArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }

        for (name, value) in [
            ("player_size_ratio", self.player_size_ratio),
            ("player_speed_ratio", self.player_speed_ratio),
            ("item_size_ratio", self.item_size_ratio),
            ("hit_inset_ratio", self.hit_inset_ratio),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ConfigError::RatioOutOfRange { name, value });
            }
        }

        for (name, value) in [
            ("ground_margin", self.ground_margin),
            ("horizontal_margin", self.horizontal_margin),
            ("miss_tolerance", self.miss_tolerance),
            ("min_player_speed", self.min_player_speed),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::NegativeLength { name, value });
            }
        }

        if self.miss_limit == 0 {
            return Err(ConfigError::ZeroMissLimit);
        }

        if self.spawn_interval_floor == 0 || self.spawn_interval_floor > self.initial_spawn_interval
        {
            return Err(ConfigError::BadSpawnInterval {
                initial: self.initial_spawn_interval,
                floor: self.spawn_interval_floor,
            });
        }

        if self.difficulty_step_ticks == 0 {
            return Err(ConfigError::ZeroDifficultyStep);
        }

        // Both the player and spawned beans must have a non-empty legal x range.
        for (name, size) in [
            ("player", self.player_size()),
            ("item", self.item_size()),
        ] {
            if size + 2.0 * self.horizontal_margin >= self.arena_width {
                return Err(ConfigError::ArenaTooNarrow {
                    name,
                    size,
                    margin: self.horizontal_margin,
                    width: self.arena_width,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_derived_values() {
        let config = GameConfig::default();
        assert_eq!(config.player_size(), 125.0); // round(480 * 0.26)
        assert_eq!(config.player_speed(), 9.0); // round(480 * 0.018)
        assert_eq!(config.item_size(), 58.0); // round(480 * 0.12)
        assert_eq!(config.hit_inset(), 25.0); // round(125 * 0.2)
        assert_eq!(config.max_player_x(), 480.0 - 125.0 - 20.0);
    }

    #[test]
    fn test_speed_floor_applies_on_small_arenas() {
        let config = GameConfig {
            arena_width: 200.0,
            ..Default::default()
        };
        // round(200 * 0.018) = 4, floored to 7
        assert_eq!(config.player_speed(), 7.0);
    }

    #[test]
    fn test_rejects_non_positive_arena() {
        let config = GameConfig {
            arena_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveArena { .. })
        ));
    }

    #[test]
    fn test_rejects_ratio_out_of_range() {
        let config = GameConfig {
            item_size_ratio: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RatioOutOfRange {
                name: "item_size_ratio",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_floor() {
        let config = GameConfig {
            spawn_interval_floor: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadSpawnInterval { .. })
        ));
    }

    #[test]
    fn test_rejects_floor_above_initial() {
        let config = GameConfig {
            initial_spawn_interval: 20,
            spawn_interval_floor: 28,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadSpawnInterval {
                initial: 20,
                floor: 28
            })
        ));
    }

    #[test]
    fn test_rejects_arena_too_narrow_for_player() {
        let config = GameConfig {
            arena_width: 60.0,
            horizontal_margin: 25.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ArenaTooNarrow { .. })
        ));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = GameConfig {
            seed: Some(42),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
