//! Tennis scoring state machine
//!
//! Points run 0-15-30-40, a game needs four points and a two point lead
//! (deuce/advantage past 40-40), and the set ends when one side reaches the
//! game threshold. Set over is terminal until `reset`.

use serde::{Deserialize, Serialize};

use crate::{ScoringConfig, Side};

/// Whether the rally simulation is waiting for a serve, running, or finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Serve,
    Playing,
    SetOver,
}

/// A count per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player: u32,
    pub computer: u32,
}

impl Tally {
    pub fn new(player: u32, computer: u32) -> Self {
        Self { player, computer }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    fn increment(&mut self, side: Side) -> u32 {
        let count = match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        };
        *count += 1;
        *count
    }
}

/// What a call to [`Scoreboard::score_point`] led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOutcome {
    /// Point recorded, game continues
    Point,
    /// Point won the game for this side
    Game(Side),
    /// Game won the set for this side
    Set(Side),
    /// Set already over, nothing changed
    Ignored,
}

/// Display label for a side holding `points` against `opponent`
pub fn point_label(points: u32, opponent: u32) -> &'static str {
    if points >= 3 && opponent >= 3 {
        return match points.cmp(&opponent) {
            std::cmp::Ordering::Equal => "40 (Deuce)",
            std::cmp::Ordering::Greater => "Advantage",
            std::cmp::Ordering::Less => "40",
        };
    }
    match points {
        0 => "0",
        1 => "15",
        2 => "30",
        _ => "40",
    }
}

/// Score state machine
#[derive(Debug, Clone)]
pub struct Scoreboard {
    rules: ScoringConfig,
    points: Tally,
    games: Tally,
    state: GameState,
    server: Side,
}

impl Scoreboard {
    pub fn new(rules: ScoringConfig) -> Self {
        Self {
            rules,
            points: Tally::default(),
            games: Tally::default(),
            state: GameState::Serve,
            server: Side::Player,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn points(&self) -> Tally {
        self.points
    }

    pub fn games(&self) -> Tally {
        self.games
    }

    /// Side serving the current game
    pub fn server(&self) -> Side {
        self.server
    }

    /// Set winner once the set is over
    pub fn winner(&self) -> Option<Side> {
        if self.state != GameState::SetOver {
            return None;
        }
        if self.games.player > self.games.computer {
            Some(Side::Player)
        } else {
            Some(Side::Computer)
        }
    }

    /// Point labels for (player, computer)
    pub fn labels(&self) -> (&'static str, &'static str) {
        (
            point_label(self.points.player, self.points.computer),
            point_label(self.points.computer, self.points.player),
        )
    }

    /// Return to the serve state. No effect once the set is over.
    pub fn start_serve(&mut self) {
        if self.state != GameState::SetOver {
            self.state = GameState::Serve;
        }
    }

    /// Serve action. Only valid while waiting for a serve.
    pub fn begin_rally(&mut self) -> bool {
        if self.state != GameState::Serve {
            return false;
        }
        self.state = GameState::Playing;
        true
    }

    pub fn score_point(&mut self, winner: Side) -> PointOutcome {
        if self.state == GameState::SetOver {
            return PointOutcome::Ignored;
        }

        let won = self.points.increment(winner);
        let lost = self.points.get(winner.opponent());
        tracing::debug!(
            ?winner,
            player = self.points.player,
            computer = self.points.computer,
            "point"
        );

        if won >= self.rules.points_to_win_game && won >= lost + self.rules.min_point_lead {
            self.points = Tally::default();
            self.win_game(winner)
        } else {
            self.start_serve();
            PointOutcome::Point
        }
    }

    fn win_game(&mut self, winner: Side) -> PointOutcome {
        let games = self.games.increment(winner);
        tracing::info!(
            ?winner,
            player = self.games.player,
            computer = self.games.computer,
            "game won"
        );

        if games >= self.rules.games_to_win_set {
            self.state = GameState::SetOver;
            tracing::info!(?winner, "set won");
            PointOutcome::Set(winner)
        } else {
            self.server = self.server.opponent();
            self.start_serve();
            PointOutcome::Game(winner)
        }
    }

    /// Start a fresh set
    pub fn reset(&mut self) {
        *self = Self::new(self.rules.clone());
    }

    #[cfg(test)]
    fn with_score(points: Tally, games: Tally) -> Self {
        Self {
            points,
            games,
            ..Self::new(ScoringConfig::default())
        }
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
