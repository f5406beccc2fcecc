/// Tuning parameters for the court and rally simulations
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Real-world reference widths in metres (only the ratio is used)
    pub const REAL_WIDTH_SINGLES: f32 = 8.23;
    pub const REAL_WIDTH_DOUBLES: f32 = 10.97;

    // Canvas
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    // Far (opponent) box
    pub const FAR_TOP_Y: f32 = 50.0;
    pub const FAR_BOTTOM_Y: f32 = 250.0;
    pub const FAR_WIDTH_TOP: f32 = 400.0;
    pub const FAR_WIDTH_BOTTOM: f32 = 600.0;

    // Near (player) box
    pub const NEAR_TOP_Y: f32 = 350.0;
    pub const NEAR_BOTTOM_Y: f32 = 550.0;
    pub const NEAR_WIDTH_TOP: f32 = 600.0;
    pub const NEAR_WIDTH_BOTTOM: f32 = 800.0;

    // Net and service lines
    pub const NET_Y: f32 = 300.0;
    pub const NET_HEIGHT: f32 = 40.0;
    pub const NET_WIDTH: f32 = 10.0;
    pub const FAR_SERVICE_Y: f32 = 200.0;
    pub const NEAR_SERVICE_Y: f32 = 400.0;

    // Bounce physics (rates are per second)
    pub const GRAVITY: f32 = 9.8 * 60.0; // 9.8 per frame at 60 Hz
    pub const COR_GROUND: f32 = 0.75;
    pub const COR_RACKET: f32 = 0.85;
    pub const COR_NET: f32 = 0.5;
    pub const BOUNCE_FRICTION: f32 = 0.9;
    pub const AIR_DRAG: f32 = 0.99; // kept per FIXED_DT of flight
    pub const NET_BAND: f32 = 5.0; // half of the net stroke width
    pub const PERSPECTIVE_HEIGHT: f32 = 200.0; // z at which the ball draws at 2x
    pub const SPIN_RATE: f32 = 1.0; // degrees per unit of depth travelled
    pub const COURT_BALL_RADIUS: f32 = 8.0;
    pub const COURT_SERVE_HEIGHT: f32 = 60.0;
    pub const COURT_SERVE_SPEED: f32 = 350.0; // toward the far baseline
    pub const COURT_SERVE_LIFT: f32 = 240.0;
    pub const COURT_SERVE_SPREAD: f32 = 80.0;

    // Rally arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between the arena edge and the paddle

    // Ball
    pub const RALLY_BALL_RADIUS: f32 = 8.0;
    pub const SERVE_SPEED: f32 = 300.0;
    pub const SERVE_SPREAD: f32 = 120.0;
    pub const SPEED_MULTIPLIER: f32 = 1.05; // Multiply speed on paddle hit
    pub const DEFLECTION: f32 = 0.75; // vy per unit of normalised paddle offset, relative to vx

    // Computer paddle
    pub const AI_SPEED: f32 = 240.0;
    pub const AI_DEAD_ZONE: f32 = 15.0;
    pub const AI_SERVE_DELAY: f32 = 1.0;

    // Scoring
    pub const POINTS_TO_WIN_GAME: u32 = 4;
    pub const MIN_POINT_LEAD: u32 = 2;
    pub const GAMES_TO_WIN_SET: u32 = 6;

    // Timestep
    pub const FIXED_DT: f32 = 1.0 / 60.0; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
