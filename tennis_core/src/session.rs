//! Owned simulations driven by a host frame loop
//!
//! Each session owns all of its state and is advanced with `tick(dt)`. Readers
//! get copies (snapshots), never references into the live simulation.

use glam::{Vec2, Vec3};
use hecs::World;
use rand::Rng;

use crate::{
    create_ball, create_paddle, perspective_scale, serve_position, shadow_scale, step, step_ball,
    Command, Config, Contacts, Court, CourtBall, Events, GameRng, GameState, InputQueue, Paddle,
    RallyBall, Scoreboard, ServeClock, Side, Tally, Time,
};

/// Score as shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSnapshot {
    pub points: Tally,
    pub games: Tally,
    pub player_label: &'static str,
    pub computer_label: &'static str,
}

/// Everything a renderer needs to draw one rally frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RallySnapshot {
    pub tick: u32,
    pub ball: RallyBall,
    pub player_paddle: Paddle,
    pub computer_paddle: Paddle,
    pub score: ScoreSnapshot,
    pub state: GameState,
    pub server: Side,
}

/// Pong-style rally with tennis scoring against an AI paddle
pub struct RallySession {
    world: World,
    time: Time,
    config: Config,
    scoreboard: Scoreboard,
    events: Events,
    input: InputQueue,
    rng: GameRng,
    serve_clock: ServeClock,
    tick: u32,
}

impl RallySession {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let centre_y = config.rally.arena_height / 2.0;
        create_paddle(&mut world, Side::Player, config.clamp_paddle_y(centre_y));
        create_paddle(&mut world, Side::Computer, config.clamp_paddle_y(centre_y));

        let scoreboard = Scoreboard::new(config.scoring.clone());
        let pos = serve_position(&config, scoreboard.server(), config.clamp_paddle_y(centre_y));
        create_ball(&mut world, pos, Vec2::ZERO, config.rally.ball_radius);

        Self {
            world,
            time: Time::default(),
            config,
            scoreboard,
            events: Events::new(),
            input: InputQueue::new(),
            rng: GameRng::new(seed),
            serve_clock: ServeClock::new(),
            tick: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Advance by `dt` seconds and return what happened
    pub fn tick(&mut self, dt: f32) -> &Events {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.scoreboard,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
            &mut self.serve_clock,
        );
        self.tick = self.tick.wrapping_add(1);
        &self.events
    }

    /// Queue input for the next tick
    pub fn push_command(&mut self, command: Command) {
        self.input.push(command);
    }

    /// Pointer position mapped into arena units; applied on the next tick
    pub fn set_player_paddle_y(&mut self, y: f32) {
        self.push_command(Command::SetPlayerPaddleY(y));
    }

    /// Serve button; only starts a rally while waiting to serve
    pub fn on_action(&mut self) {
        self.push_command(Command::Action);
    }

    pub fn ball_state(&self) -> RallyBall {
        self.world
            .query::<&RallyBall>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| RallyBall::new(Vec2::ZERO, Vec2::ZERO, self.config.rally.ball_radius))
    }

    /// (player, computer)
    pub fn paddle_states(&self) -> (Paddle, Paddle) {
        let centre_y = self.config.rally.arena_height / 2.0;
        let mut player = Paddle::new(Side::Player, centre_y);
        let mut computer = Paddle::new(Side::Computer, centre_y);
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Player => player = *paddle,
                Side::Computer => computer = *paddle,
            }
        }
        (player, computer)
    }

    pub fn score(&self) -> ScoreSnapshot {
        let (player_label, computer_label) = self.scoreboard.labels();
        ScoreSnapshot {
            points: self.scoreboard.points(),
            games: self.scoreboard.games(),
            player_label,
            computer_label,
        }
    }

    pub fn game_state(&self) -> GameState {
        self.scoreboard.state()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn snapshot(&self) -> RallySnapshot {
        let (player_paddle, computer_paddle) = self.paddle_states();
        RallySnapshot {
            tick: self.tick,
            ball: self.ball_state(),
            player_paddle,
            computer_paddle,
            score: self.score(),
            state: self.scoreboard.state(),
            server: self.scoreboard.server(),
        }
    }

    /// Start a new set with the same config and RNG stream
    pub fn reset(&mut self) {
        tracing::debug!("rally session reset");
        let rng = std::mem::take(&mut self.rng);
        let config = self.config.clone();
        *self = Self::new(config, 0);
        self.rng = rng;
    }
}

/// Everything a renderer needs to draw the court ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtSnapshot {
    pub tick: u32,
    pub ball: CourtBall,
    /// Sprite scale for the ball's height
    pub scale: f32,
    pub shadow_scale: f32,
    /// Whether the ball's ground position is inside the court lines
    pub in_court: bool,
}

/// Free-bouncing ball on the perspective court
pub struct CourtSession {
    court: Court,
    config: Config,
    ball: CourtBall,
    rng: GameRng,
    time: Time,
    tick: u32,
}

impl CourtSession {
    pub fn new(config: Config, seed: u64) -> Self {
        let court = Court::new(config.court.clone());
        let ball = CourtBall::new(Vec3::ZERO, Vec3::ZERO, config.physics.ball_radius);
        let mut session = Self {
            court,
            config,
            ball,
            rng: GameRng::new(seed),
            time: Time::default(),
            tick: 0,
        };
        session.serve();
        session
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    /// Recreate the ball at the near baseline and hit it toward the far side
    pub fn serve(&mut self) {
        let physics = &self.config.physics;
        let (_, near) = self.court.depth_range();
        let spread = physics.serve_spread.abs();
        let vx = if spread > 0.0 {
            self.rng.0.gen_range(-spread..=spread)
        } else {
            0.0
        };
        self.ball = CourtBall::new(
            Vec3::new(self.court.centre_x(), near, physics.serve_height.max(0.0)),
            Vec3::new(vx, -physics.serve_speed, physics.serve_lift),
            physics.ball_radius,
        );
        tracing::debug!(vx, "court serve");
    }

    /// Advance by `dt` seconds in fixed steps. Returns every surface touched.
    pub fn tick(&mut self, dt: f32) -> Contacts {
        let physics = &self.config.physics;
        let clamped_dt = dt.min(physics.max_dt).max(0.0);
        let mut touched = Contacts::default();

        let mut remaining_dt = clamped_dt;
        while remaining_dt > 0.0 {
            let step_dt = remaining_dt.min(physics.fixed_dt);
            remaining_dt -= step_dt;

            let (ball, contacts) = step_ball(self.ball, &self.court, physics, step_dt);
            self.ball = ball;
            touched.ground |= contacts.ground;
            touched.net |= contacts.net;
            touched.baseline |= contacts.baseline;
            touched.sideline |= contacts.sideline;
        }

        self.time.now += clamped_dt;
        self.tick = self.tick.wrapping_add(1);
        touched
    }

    pub fn ball_state(&self) -> CourtBall {
        self.ball
    }

    pub fn snapshot(&self) -> CourtSnapshot {
        let physics = &self.config.physics;
        CourtSnapshot {
            tick: self.tick,
            ball: self.ball,
            scale: perspective_scale(self.ball.pos.z, physics),
            shadow_scale: shadow_scale(self.ball.pos.z, physics),
            in_court: self.court.contains(self.ball.pos.x, self.ball.pos.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_new_rally_waits_for_serve() {
        let session = RallySession::new(Config::new(), 1);
        let snap = session.snapshot();
        assert_eq!(snap.state, GameState::Serve);
        assert_eq!(snap.server, Side::Player);
        assert_eq!(snap.ball.vel, Vec2::ZERO);
        assert_eq!(snap.ball.pos.y, snap.player_paddle.y);
        assert_eq!(snap.score.player_label, "0");
    }

    #[test]
    fn test_ball_follows_paddle_while_serving() {
        let mut session = RallySession::new(Config::new(), 1);
        session.set_player_paddle_y(150.0);
        session.tick(DT);
        let (player, _) = session.paddle_states();
        assert_eq!(player.y, 150.0);
        assert_eq!(session.ball_state().pos.y, 150.0);
        assert_eq!(session.game_state(), GameState::Serve);
    }

    #[test]
    fn test_action_starts_rally() {
        let mut session = RallySession::new(Config::new(), 1);
        session.on_action();
        let events = session.tick(DT).clone();
        assert!(events.rally_started);
        assert_eq!(session.game_state(), GameState::Playing);
        assert!(session.ball_state().vel.x > 0.0);
    }

    #[test]
    fn test_no_integration_while_serving() {
        let mut session = RallySession::new(Config::new(), 1);
        let before = session.ball_state();
        for _ in 0..30 {
            session.tick(DT);
        }
        assert_eq!(session.ball_state(), before);
    }

    #[test]
    fn test_court_session_respects_ground() {
        let mut session = CourtSession::new(Config::new(), 3);
        for _ in 0..600 {
            session.tick(DT);
            let snap = session.snapshot();
            assert!(snap.ball.pos.z >= 0.0);
            assert!(snap.scale >= 1.0);
            assert!(snap.in_court);
        }
    }

    #[test]
    fn test_court_serve_heads_for_far_side() {
        let session = CourtSession::new(Config::new(), 3);
        let ball = session.ball_state();
        assert!(ball.vel.y < 0.0);
        assert!(ball.vel.z > 0.0);
        assert_eq!(ball.pos.y, session.court().depth_range().1);
    }
}
