use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// The two ends of a rally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Horizontal direction a ball leaving this side's paddle travels in
    pub fn outward(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Computer => -1.0,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // centre, clamped to arena
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddleControl {
    /// Follows the last y supplied by the input collaborator
    Pointer { target_y: f32 },
    /// Tracks the ball
    Ai,
}

/// Ball component for the rally arena
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RallyBall {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl RallyBall {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }
}

/// Ball on the perspective court. `pos.z` is height above the ground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtBall {
    pub pos: Vec3,
    pub vel: Vec3,
    pub radius: f32,
    /// Cosmetic spin angle in degrees, [0, 360)
    pub rotation: f32,
}

impl CourtBall {
    pub fn new(pos: Vec3, vel: Vec3, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            rotation: 0.0,
        }
    }

    /// Squared speed, a stand-in for kinetic energy
    pub fn energy(&self) -> f32 {
        self.vel.length_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent_and_outward() {
        assert_eq!(Side::Player.opponent(), Side::Computer);
        assert_eq!(Side::Computer.opponent(), Side::Player);
        assert_eq!(Side::Player.outward(), 1.0);
        assert_eq!(Side::Computer.outward(), -1.0);
    }
}
