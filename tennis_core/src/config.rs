use serde::{Deserialize, Serialize};

use crate::Params;

/// Errors from loading a config override
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Which lines bound the playable court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourtVariant {
    Singles,
    #[default]
    Doubles,
}

impl CourtVariant {
    /// Width of this variant relative to the full (doubles) trapezoid
    pub fn width_ratio(self) -> f32 {
        match self {
            CourtVariant::Singles => Params::REAL_WIDTH_SINGLES / Params::REAL_WIDTH_DOUBLES,
            CourtVariant::Doubles => 1.0,
        }
    }
}

/// Canvas-space court layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CourtConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub far_top_y: f32,
    pub far_bottom_y: f32,
    pub far_width_top: f32,
    pub far_width_bottom: f32,
    pub near_top_y: f32,
    pub near_bottom_y: f32,
    pub near_width_top: f32,
    pub near_width_bottom: f32,
    pub net_y: f32,
    pub net_height: f32,
    pub net_width: f32,
    pub far_service_y: f32,
    pub near_service_y: f32,
    pub variant: CourtVariant,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            far_top_y: Params::FAR_TOP_Y,
            far_bottom_y: Params::FAR_BOTTOM_Y,
            far_width_top: Params::FAR_WIDTH_TOP,
            far_width_bottom: Params::FAR_WIDTH_BOTTOM,
            near_top_y: Params::NEAR_TOP_Y,
            near_bottom_y: Params::NEAR_BOTTOM_Y,
            near_width_top: Params::NEAR_WIDTH_TOP,
            near_width_bottom: Params::NEAR_WIDTH_BOTTOM,
            net_y: Params::NET_Y,
            net_height: Params::NET_HEIGHT,
            net_width: Params::NET_WIDTH,
            far_service_y: Params::FAR_SERVICE_Y,
            near_service_y: Params::NEAR_SERVICE_Y,
            variant: CourtVariant::default(),
        }
    }
}

/// Constants for the 3D bounce integrator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub ground_restitution: f32,
    pub racket_restitution: f32,
    pub net_restitution: f32,
    /// Depth velocity retained after each ground bounce.
    pub bounce_friction: f32,
    /// Horizontal velocity kept per `fixed_dt` of flight; shorter or longer
    /// steps use `air_drag.powf(dt / fixed_dt)`.
    pub air_drag: f32,
    /// Half-depth of the band around the net line that catches the ball.
    pub net_band: f32,
    pub perspective_height: f32,
    pub spin_rate: f32,
    pub ball_radius: f32,
    pub serve_height: f32,
    pub serve_speed: f32,
    pub serve_lift: f32,
    pub serve_spread: f32,
    pub fixed_dt: f32,
    pub max_dt: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Params::GRAVITY,
            ground_restitution: Params::COR_GROUND,
            racket_restitution: Params::COR_RACKET,
            net_restitution: Params::COR_NET,
            bounce_friction: Params::BOUNCE_FRICTION,
            air_drag: Params::AIR_DRAG,
            net_band: Params::NET_BAND,
            perspective_height: Params::PERSPECTIVE_HEIGHT,
            spin_rate: Params::SPIN_RATE,
            ball_radius: Params::COURT_BALL_RADIUS,
            serve_height: Params::COURT_SERVE_HEIGHT,
            serve_speed: Params::COURT_SERVE_SPEED,
            serve_lift: Params::COURT_SERVE_LIFT,
            serve_spread: Params::COURT_SERVE_SPREAD,
            fixed_dt: Params::FIXED_DT,
            max_dt: Params::MAX_DT,
        }
    }
}

/// Pong-style rally arena, paddles and computer opponent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RallyConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub serve_speed: f32,
    pub serve_spread: f32,
    pub speed_multiplier: f32,
    /// Upper bound on horizontal ball speed. `None` lets rallies accelerate forever.
    pub speed_cap: Option<f32>,
    pub deflection: f32,
    pub ai_speed: f32,
    pub ai_dead_zone: f32,
    pub ai_serve_delay: f32,
}

impl Default for RallyConfig {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::RALLY_BALL_RADIUS,
            serve_speed: Params::SERVE_SPEED,
            serve_spread: Params::SERVE_SPREAD,
            speed_multiplier: Params::SPEED_MULTIPLIER,
            speed_cap: None,
            deflection: Params::DEFLECTION,
            ai_speed: Params::AI_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ai_serve_delay: Params::AI_SERVE_DELAY,
        }
    }
}

/// Game and set thresholds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub points_to_win_game: u32,
    pub min_point_lead: u32,
    pub games_to_win_set: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_to_win_game: Params::POINTS_TO_WIN_GAME,
            min_point_lead: Params::MIN_POINT_LEAD,
            games_to_win_set: Params::GAMES_TO_WIN_SET,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub court: CourtConfig,
    pub physics: PhysicsConfig,
    pub rally: RallyConfig,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same config with a different court variant
    pub fn with_variant(mut self, variant: CourtVariant) -> Self {
        self.court.variant = variant;
        self
    }

    /// Parse a (possibly partial) TOML override on top of the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read a TOML override from disk.
    pub fn from_path(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load config from `TENNIS_CONFIG` (or `config/tennis.toml`). Falls back to
    /// defaults if the file is missing or unparseable.
    pub fn load() -> Self {
        let path =
            std::env::var("TENNIS_CONFIG").unwrap_or_else(|_| "config/tennis.toml".to_string());
        match Self::from_path(&path) {
            Ok(cfg) => cfg,
            Err(ConfigError::Read { .. }) => Config::default(),
            Err(e) => {
                tracing::warn!("Failed to parse {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

    /// X position of the paddle face the ball bounces off
    pub fn paddle_face_x(&self, side: crate::Side) -> f32 {
        let r = &self.rally;
        match side {
            crate::Side::Player => r.paddle_margin + r.paddle_width,
            crate::Side::Computer => r.arena_width - r.paddle_margin - r.paddle_width,
        }
    }

    /// X position of the paddle centre
    pub fn paddle_x(&self, side: crate::Side) -> f32 {
        let half = self.rally.paddle_width / 2.0;
        match side {
            crate::Side::Player => self.paddle_face_x(side) - half,
            crate::Side::Computer => self.paddle_face_x(side) + half,
        }
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.rally.paddle_height / 2.0;
        y.clamp(half_height, self.rally.arena_height - half_height)
    }
}
