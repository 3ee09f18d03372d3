//! Game state and core simulation types
//!
//! All state that must be reproduced for determinism lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::{ConfigError, GameConfig};

/// Base fall speed range a bean is dealt at spawn (pixels/tick)
pub const BEAN_MIN_FALL_SPEED: f32 = 3.0;
pub const BEAN_MAX_FALL_SPEED: f32 = 5.0;
/// Extra fall speed per point of score at spawn time
pub const SCORE_SPEED_BIAS: f32 = 0.02;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; waiting for a restart signal
    GameOver,
}

/// The player's catcher sprite, pinned to the ground line
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed in pixels/tick
    pub speed: f32,
    /// Current velocity, recomputed from input each tick (never integrated)
    pub vx: f32,
}

impl Player {
    /// Spawn centered on the ground line
    pub fn spawn(config: &GameConfig) -> Self {
        let size = config.player_size();
        Self {
            pos: Vec2::new(
                (config.arena_width - size) / 2.0,
                config.arena_height - size - config.ground_margin,
            ),
            size: Vec2::splat(size),
            speed: config.player_speed(),
            vx: 0.0,
        }
    }

    /// Full sprite bounding box
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// The inset sub-rectangle that actually catches beans. Smaller than the
    /// sprite so a bean grazing the outer pixels doesn't count.
    pub fn catch_zone(&self, inset: f32) -> Rect {
        self.rect().inset(inset)
    }

    /// Move one tick's worth in the given direction, clamped to the legal
    /// x range. `dir` is -1, 0, or +1; y never changes during play.
    pub fn advance(&mut self, dir: f32, min_x: f32, max_x: f32) {
        self.vx = dir * self.speed;
        self.pos.x = (self.pos.x + self.vx).clamp(min_x, max_x);
    }
}

/// A falling bean
///
/// `vy` is dealt at spawn and stays fixed for the bean's whole lifetime;
/// difficulty only biases beans spawned later.
#[derive(Debug, Clone, PartialEq)]
pub struct Bean {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Fall speed in pixels/tick
    pub vy: f32,
}

impl Bean {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Advance one tick of constant-velocity fall
    pub fn fall(&mut self) {
        self.pos.y += self.vy;
    }
}

/// Countdown driving bean spawns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnClock {
    /// Ticks until the next spawn; never goes negative
    pub countdown: u32,
    /// Current ticks between spawns
    pub interval: u32,
}

impl SpawnClock {
    /// A fresh clock fires on its first tick, then every `interval` ticks.
    pub fn new(interval: u32) -> Self {
        Self {
            countdown: 0,
            interval,
        }
    }

    /// Count down one tick. Returns true when a spawn is due, at most once
    /// per call, and rearms from the current interval.
    pub fn tick(&mut self) -> bool {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.countdown = self.interval;
            true
        } else {
            false
        }
    }

    /// Difficulty step: shorten the interval by `step`, never below `floor`.
    /// This is the only place the interval changes.
    pub fn tighten(&mut self, step: u32, floor: u32) {
        if self.interval > floor {
            self.interval = self.interval.saturating_sub(step).max(floor);
            log::debug!("spawn interval tightened to {} ticks", self.interval);
        }
    }
}

/// Read-only view of one tick, handed to the external renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Simulation tick counter
    pub tick: u64,
    pub score: u32,
    pub misses: u8,
    pub running: bool,
    pub player: Rect,
    /// Live beans, in pool order
    pub beans: Vec<Rect>,
}

/// Complete game state: one owned instance holds every entity
///
/// External code interacts only through [`super::tick`], [`Self::snapshot`],
/// and the input carried in [`super::TickInput`].
#[derive(Debug, Clone)]
pub struct GameState {
    /// Validated configuration this run was built from
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the sole randomness source for spawns
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    pub misses: u8,
    /// Simulation tick counter, also the difficulty-ramp clock
    pub time_ticks: u64,
    pub player: Player,
    /// Live beans; exclusively owned, removed by swap-remove on resolve
    pub beans: Vec<Bean>,
    pub spawn: SpawnClock,
}

impl GameState {
    /// Build a fresh run from the given configuration.
    ///
    /// Rejects malformed configuration eagerly rather than producing
    /// undefined behavior mid-run. With `config.seed` unset, seeds from
    /// system entropy.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!("New game, seed {seed}");

        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            score: 0,
            misses: 0,
            time_ticks: 0,
            player: Player::spawn(&config),
            beans: Vec::new(),
            spawn: SpawnClock::new(config.initial_spawn_interval),
            config,
        })
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Spawn one bean just above the arena with a randomized column and fall
    /// speed. The speed bias grows with the score at spawn time.
    pub fn spawn_bean(&mut self) {
        let size = self.config.item_size();
        let min_x = self.config.horizontal_margin;
        let max_x = self.config.arena_width - self.config.horizontal_margin - size;

        let x = self.rng.random_range(min_x..max_x);
        let vy = self.rng.random_range(BEAN_MIN_FALL_SPEED..BEAN_MAX_FALL_SPEED)
            + self.score as f32 * SCORE_SPEED_BIAS;

        self.beans.push(Bean {
            pos: Vec2::new(x, -size),
            size: Vec2::splat(size),
            vy,
        });
    }

    /// Restart from game over: full reset to the state a freshly constructed
    /// engine with the same config and seed would have. Ignored while
    /// running, so stray input can't wipe a live run.
    pub fn restart(&mut self) {
        if self.running() {
            log::debug!("restart ignored while running");
            return;
        }

        log::info!("Restart (previous score {})", self.score);
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.phase = GamePhase::Running;
        self.score = 0;
        self.misses = 0;
        self.time_ticks = 0;
        self.player = Player::spawn(&self.config);
        self.beans.clear();
        self.spawn = SpawnClock::new(self.config.initial_spawn_interval);
    }

    /// Read-only view for the renderer; available in every phase.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            score: self.score,
            misses: self.misses,
            running: self.running(),
            player: self.player.rect(),
            beans: self.beans.iter().map(Bean::rect).collect(),
        }
    }
}
