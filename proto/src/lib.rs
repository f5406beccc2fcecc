//! Host protocol for the tennis game
//!
//! Commands flow from the page into the simulation, frames flow back out.
//! Both use postcard for compact binary serialization.

use postcard::{from_bytes, to_allocvec};

// ============================================================================
// Host -> simulation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Command {
    /// Player paddle target in arena units
    SetPaddleY { y: f32 },

    /// Serve button
    Action,

    /// Start a fresh set
    Reset,
}

// ============================================================================
// Simulation -> host
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Frame {
    /// Pong rally snapshot
    Rally {
        tick: u32,
        ball_x: f32,
        ball_y: f32,
        ball_vx: f32,
        ball_vy: f32,
        player_paddle_y: f32,
        computer_paddle_y: f32,
        player_points: u8,
        computer_points: u8,
        player_games: u8,
        computer_games: u8,
        state: u8,  // 0 = serve, 1 = playing, 2 = set over
        server: u8, // 0 = player, 1 = computer
    },

    /// Bouncing court ball snapshot
    Court {
        tick: u32,
        x: f32,
        y: f32,
        z: f32,
        vx: f32,
        vy: f32,
        vz: f32,
        rotation: f32,
        scale: f32,
        shadow_scale: f32,
    },

    /// Set finished
    SetOver {
        winner: u8, // 0 = player, 1 = computer
    },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Command {
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl Frame {
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

/// Saturating narrow for score counters
pub fn score_byte(value: u32) -> u8 {
    value.min(u8::MAX as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serialization() {
        let msg = Command::SetPaddleY { y: 245.5 };
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        let decoded = Command::from_bytes(&bytes).expect("Deserialization should succeed");
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_rally_frame_serialization() {
        let msg = Frame::Rally {
            tick: 100,
            ball_x: 400.0,
            ball_y: 300.0,
            ball_vx: -315.0,
            ball_vy: 12.0,
            player_paddle_y: 280.0,
            computer_paddle_y: 310.0,
            player_points: 3,
            computer_points: 3,
            player_games: 2,
            computer_games: 4,
            state: 1,
            server: 0,
        };
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        let decoded = Frame::from_bytes(&bytes).expect("Deserialization should succeed");
        match decoded {
            Frame::Rally {
                tick,
                ball_vx,
                computer_games,
                ..
            } => {
                assert_eq!(tick, 100);
                assert_eq!(ball_vx, -315.0);
                assert_eq!(computer_games, 4);
            }
            _ => panic!("Message type mismatch"),
        }
    }

    #[test]
    fn test_truncated_frame_is_an_error() {
        let bytes = Frame::SetOver { winner: 1 }
            .to_bytes()
            .expect("Serialization should succeed");
        assert!(Frame::from_bytes(&bytes[..bytes.len() - 1]).is_err());
        assert!(Command::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_score_byte_saturates() {
        assert_eq!(score_byte(3), 3);
        assert_eq!(score_byte(1_000), u8::MAX);
    }
}
