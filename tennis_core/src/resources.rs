use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub rally_started: bool,
    pub point_won: Option<Side>,
    pub game_won: Option<Side>,
    pub set_won: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Input from the host, applied at the start of the next step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pointer-driven target for the player's paddle, in arena units
    SetPlayerPaddleY(f32),
    /// Serve button
    Action,
}

/// Input queue drained by the simulation thread
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub commands: Vec<Command>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Command> {
        self.commands.drain(..)
    }
}

/// Countdown before the computer serves
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeClock {
    pub timer: f32, // Time remaining before the computer serves (0 = ready)
}

impl ServeClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_delay(&mut self, delay: f32) {
        self.timer = delay;
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.timer <= 0.0
    }
}
