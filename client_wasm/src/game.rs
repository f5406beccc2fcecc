//! JS-facing wrappers around the simulation sessions

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use glam::Vec2;
use proto::{score_byte, Command, Frame};
use tennis_core::{
    Config, CourtSession, CourtSnapshot, CourtVariant, Events, GameState, RallySession,
    RallySnapshot, Side,
};

use crate::input::{is_action_key, paddle_direction, CanvasTransform};

/// Paddle travel per arrow key press, in arena units
const KEY_NUDGE: f32 = 40.0;

fn side_byte(side: Side) -> u8 {
    match side {
        Side::Player => 0,
        Side::Computer => 1,
    }
}

fn state_byte(state: GameState) -> u8 {
    match state {
        GameState::Serve => 0,
        GameState::Playing => 1,
        GameState::SetOver => 2,
    }
}

/// Encode a rally snapshot for the renderer
pub fn rally_frame(snap: &RallySnapshot) -> Frame {
    Frame::Rally {
        tick: snap.tick,
        ball_x: snap.ball.pos.x,
        ball_y: snap.ball.pos.y,
        ball_vx: snap.ball.vel.x,
        ball_vy: snap.ball.vel.y,
        player_paddle_y: snap.player_paddle.y,
        computer_paddle_y: snap.computer_paddle.y,
        player_points: score_byte(snap.score.points.player),
        computer_points: score_byte(snap.score.points.computer),
        player_games: score_byte(snap.score.games.player),
        computer_games: score_byte(snap.score.games.computer),
        state: state_byte(snap.state),
        server: side_byte(snap.server),
    }
}

/// Encode a court snapshot for the renderer
pub fn court_frame(snap: &CourtSnapshot) -> Frame {
    Frame::Court {
        tick: snap.tick,
        x: snap.ball.pos.x,
        y: snap.ball.pos.y,
        z: snap.ball.pos.z,
        vx: snap.ball.vel.x,
        vy: snap.ball.vel.y,
        vz: snap.ball.vel.z,
        rotation: snap.ball.rotation,
        scale: snap.scale,
        shadow_scale: snap.shadow_scale,
    }
}

/// Pong rally against the computer
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct TennisGame {
    session: RallySession,
    paddle_target: f32,
    last_events: Events,
}

impl TennisGame {
    fn with_config(config: Config, seed: u32) -> Self {
        let paddle_target = config.rally.arena_height / 2.0;
        Self {
            session: RallySession::new(config, u64::from(seed)),
            paddle_target,
            last_events: Events::new(),
        }
    }

    pub fn session(&self) -> &RallySession {
        &self.session
    }

    pub fn events(&self) -> &Events {
        &self.last_events
    }

    pub fn frame(&self) -> Frame {
        rally_frame(&self.session.snapshot())
    }

    /// `SetOver` frame on the tick the set was won
    pub fn set_over_frame(&self) -> Option<Frame> {
        self.last_events.set_won.map(|winner| Frame::SetOver {
            winner: side_byte(winner),
        })
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetPaddleY { y } => self.set_paddle_y(y),
            Command::Action => self.session.on_action(),
            Command::Reset => self.reset(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl TennisGame {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new(seed: u32) -> Self {
        Self::with_config(Config::new(), seed)
    }

    /// Start from a TOML override of the default config
    pub fn from_toml(toml: &str, seed: u32) -> Result<TennisGame, String> {
        let config = Config::from_toml_str(toml).map_err(|e| e.to_string())?;
        Ok(Self::with_config(config, seed))
    }

    pub fn tick(&mut self, dt: f32) {
        self.last_events = self.session.tick(dt).clone();
    }

    /// Paddle target in arena units
    pub fn set_paddle_y(&mut self, y: f32) {
        self.paddle_target = self.session.config().clamp_paddle_y(y);
        self.session.set_player_paddle_y(self.paddle_target);
    }

    /// Pointer position in client coordinates plus the canvas bounding rect
    pub fn pointer_move(
        &mut self,
        client_x: f32,
        client_y: f32,
        rect_left: f32,
        rect_top: f32,
        rect_width: f32,
        rect_height: f32,
    ) {
        let rally = &self.session.config().rally;
        let transform = CanvasTransform::new(
            Vec2::new(rect_left, rect_top),
            Vec2::new(rect_width, rect_height),
            Vec2::new(rally.arena_width, rally.arena_height),
        );
        let logical = transform.to_logical(Vec2::new(client_x, client_y));
        self.set_paddle_y(logical.y);
    }

    pub fn key_down(&mut self, key: &str) {
        if is_action_key(key) {
            self.session.on_action();
            return;
        }
        let dir = paddle_direction(key);
        if dir != 0 {
            self.set_paddle_y(self.paddle_target + f32::from(dir) * KEY_NUDGE);
        }
    }

    pub fn action(&mut self) {
        self.session.on_action();
    }

    /// Decode and apply a postcard-encoded command
    pub fn apply_command(&mut self, bytes: &[u8]) -> Result<(), String> {
        let command =
            Command::from_bytes(bytes).map_err(|e| format!("Failed to decode command: {e}"))?;
        self.apply(command);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.paddle_target = self.session.config().rally.arena_height / 2.0;
        self.last_events = Events::new();
    }

    /// Postcard-encoded `Frame::Rally` for the current state
    pub fn frame_bytes(&self) -> Result<Vec<u8>, String> {
        self.frame()
            .to_bytes()
            .map_err(|e| format!("Failed to serialize frame: {e}"))
    }

    pub fn ball_x(&self) -> f32 {
        self.session.ball_state().pos.x
    }

    pub fn ball_y(&self) -> f32 {
        self.session.ball_state().pos.y
    }

    pub fn player_paddle_y(&self) -> f32 {
        self.session.paddle_states().0.y
    }

    pub fn computer_paddle_y(&self) -> f32 {
        self.session.paddle_states().1.y
    }

    pub fn player_label(&self) -> String {
        self.session.score().player_label.to_string()
    }

    pub fn computer_label(&self) -> String {
        self.session.score().computer_label.to_string()
    }

    pub fn player_games(&self) -> u32 {
        self.session.score().games.player
    }

    pub fn computer_games(&self) -> u32 {
        self.session.score().games.computer
    }

    /// 0 = serve, 1 = playing, 2 = set over
    pub fn state(&self) -> u8 {
        state_byte(self.session.game_state())
    }

    pub fn state_string(&self) -> String {
        format!("{:?}", self.session.game_state())
    }

    pub fn player_serving(&self) -> bool {
        self.session.scoreboard().server() == Side::Player
    }

    pub fn hit_paddle(&self) -> bool {
        self.last_events.ball_hit_paddle
    }

    pub fn hit_wall(&self) -> bool {
        self.last_events.ball_hit_wall
    }

    /// -1 if no point was decided this tick, else 0 = player, 1 = computer
    pub fn point_winner(&self) -> i8 {
        self.last_events
            .point_won
            .map_or(-1, |side| side_byte(side) as i8)
    }
}

/// Ball bouncing around the perspective court
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct BounceCourt {
    session: CourtSession,
}

impl BounceCourt {
    pub fn session(&self) -> &CourtSession {
        &self.session
    }

    pub fn frame(&self) -> Frame {
        court_frame(&self.session.snapshot())
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl BounceCourt {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new(seed: u32, singles: bool) -> Self {
        let variant = if singles {
            CourtVariant::Singles
        } else {
            CourtVariant::Doubles
        };
        Self {
            session: CourtSession::new(Config::new().with_variant(variant), u64::from(seed)),
        }
    }

    /// Advance and report whether the ball touched anything
    pub fn tick(&mut self, dt: f32) -> bool {
        self.session.tick(dt).any()
    }

    pub fn serve(&mut self) {
        self.session.serve();
    }

    pub fn frame_bytes(&self) -> Result<Vec<u8>, String> {
        self.frame()
            .to_bytes()
            .map_err(|e| format!("Failed to serialize frame: {e}"))
    }

    pub fn x(&self) -> f32 {
        self.session.ball_state().pos.x
    }

    pub fn y(&self) -> f32 {
        self.session.ball_state().pos.y
    }

    pub fn z(&self) -> f32 {
        self.session.ball_state().pos.z
    }

    pub fn rotation(&self) -> f32 {
        self.session.ball_state().rotation
    }

    pub fn scale(&self) -> f32 {
        self.session.snapshot().scale
    }

    pub fn shadow_scale(&self) -> f32 {
        self.session.snapshot().shadow_scale
    }

    /// Full court width at depth `y`, for drawing the doubles outline
    pub fn width_at(&self, y: f32) -> f32 {
        self.session.court().width_at_depth(y)
    }

    /// Singles line width at depth `y`
    pub fn singles_width_at(&self, y: f32) -> f32 {
        self.session
            .court()
            .line_width_at(y, CourtVariant::Singles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_key_down_serves_and_nudges() {
        let mut game = TennisGame::new(1);
        game.key_down("ArrowUp");
        game.tick(DT);
        assert_eq!(game.player_paddle_y(), 260.0);
        assert_eq!(game.state(), 0);

        game.key_down(" ");
        game.tick(DT);
        assert_eq!(game.state(), 1);
        assert!(game.events().rally_started);
    }

    #[test]
    fn test_pointer_move_maps_into_arena() {
        let mut game = TennisGame::new(1);
        // Canvas shown at half size at (10, 20)
        game.pointer_move(60.0, 20.0 + 100.0, 10.0, 20.0, 400.0, 300.0);
        game.tick(DT);
        assert_eq!(game.player_paddle_y(), 200.0);
        assert_eq!(game.ball_y(), 200.0, "Ball waits on the serving paddle");
    }

    #[test]
    fn test_apply_command_bytes() {
        let mut game = TennisGame::new(1);
        let bytes = Command::SetPaddleY { y: 420.0 }
            .to_bytes()
            .expect("encode");
        game.apply_command(&bytes).expect("apply");
        game.tick(DT);
        assert_eq!(game.player_paddle_y(), 420.0);

        assert!(game.apply_command(&[0xff]).is_err());
    }

    #[test]
    fn test_frame_bytes_decode_to_rally_frame() {
        let mut game = TennisGame::new(1);
        game.tick(DT);
        let bytes = game.frame_bytes().expect("encode");
        match Frame::from_bytes(&bytes).expect("decode") {
            Frame::Rally {
                tick,
                state,
                server,
                player_paddle_y,
                ..
            } => {
                assert_eq!(tick, 1);
                assert_eq!(state, 0);
                assert_eq!(server, 0);
                assert_eq!(player_paddle_y, 300.0);
            }
            other => panic!("Unexpected frame {other:?}"),
        }
        assert!(game.set_over_frame().is_none());
    }

    #[test]
    fn test_from_toml_rejects_bad_config() {
        assert!(TennisGame::from_toml("[rally]\nai_speed = 500.0", 1).is_ok());
        assert!(TennisGame::from_toml("[rally]\nai_speed = \"fast\"", 1).is_err());
    }

    #[test]
    fn test_bounce_court_frame() {
        let mut court = BounceCourt::new(4, true);
        for _ in 0..120 {
            court.tick(DT);
        }
        assert!(court.z() >= 0.0);
        assert!(court.singles_width_at(court.y()) < court.width_at(court.y()));
        match court.frame() {
            Frame::Court { scale, z, .. } => {
                assert_eq!(scale, 1.0 + z / 200.0);
            }
            other => panic!("Unexpected frame {other:?}"),
        }
    }
}
