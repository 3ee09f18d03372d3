//! Per-tick simulation step
//!
//! One call to [`tick`] advances the whole game by one discrete step. The
//! order inside a running tick is load-bearing: the player moves first, then
//! the spawn clock runs, then the difficulty ramp, then beans fall, and only
//! then are catches and misses resolved, so collisions never see a stale
//! position from the previous tick.

use super::collision;
use super::state::{GamePhase, GameState};

/// A held movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Input signal for a single tick (deterministic)
///
/// The host translates keyboard/touch events into held flags; the engine only
/// ever reads the net direction. `restart` is edge-triggered and only takes
/// effect at game over.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left_held: bool,
    pub right_held: bool,
    /// Restart signal (key press, tap, or programmatic)
    pub restart: bool,
    /// Demo mode: the engine steers the player under the most urgent bean
    pub autopilot: bool,
}

impl TickInput {
    pub fn set_held(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Left => self.left_held = held,
            Direction::Right => self.right_held = held,
        }
    }

    /// Net movement sign: -1 left, +1 right, 0 when both or neither are held.
    pub fn net_direction(&self) -> f32 {
        (self.right_held as i8 - self.left_held as i8) as f32
    }
}

/// Advance the game state by one tick.
///
/// At game over the simulation is frozen; the only thing consumed is the
/// restart edge. Snapshots remain available in every phase.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
        }
        return;
    }

    // Demo mode: synthesize held directions from the current state. A pure
    // function of the state, so autopilot runs stay deterministic.
    let mut input = input.clone();
    if input.autopilot {
        steer_autopilot(state, &mut input);
    }
    let input = &input;

    state.time_ticks += 1;

    // Movement: velocity is recomputed from input every tick, then clamped
    // into the legal x range.
    state.player.advance(
        input.net_direction(),
        state.config.min_player_x(),
        state.config.max_player_x(),
    );

    // Spawning: at most one bean per tick.
    if state.spawn.tick() {
        state.spawn_bean();
    }

    // Difficulty ramp: shortens the interval used by later spawn resets.
    if state.time_ticks % state.config.difficulty_step_ticks == 0 {
        state.spawn.tighten(
            state.config.difficulty_step_amount,
            state.config.spawn_interval_floor,
        );
    }

    // Constant-velocity fall for every live bean.
    for bean in &mut state.beans {
        bean.fall();
    }

    // Catch/miss resolution against the freshly moved player and beans.
    let outcome = collision::resolve(
        &state.player,
        &mut state.beans,
        state.config.hit_inset(),
        state.config.miss_line(),
    );
    state.score += outcome.caught;
    state.misses = (u32::from(state.misses) + outcome.missed)
        .min(u32::from(state.config.miss_limit)) as u8;

    // Loss check runs after resolution, once per tick.
    if state.misses >= state.config.miss_limit {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over at tick {} (score {})",
            state.time_ticks,
            state.score
        );
    }
}

/// Hold left/right toward the bean closest to the ground, with a one-step
/// deadzone so the player doesn't jitter around the target column.
fn steer_autopilot(state: &GameState, input: &mut TickInput) {
    input.left_held = false;
    input.right_held = false;

    let target = state
        .beans
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|bean| bean.rect().center().x);

    if let Some(target_x) = target {
        let player_x = state.player.rect().center().x;
        if target_x < player_x - state.player.speed {
            input.left_held = true;
        } else if target_x > player_x + state.player.speed {
            input.right_held = true;
        }
    }
}
