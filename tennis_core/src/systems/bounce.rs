use crate::{Court, CourtBall, PhysicsConfig};

/// Surfaces the court ball touched during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub ground: bool,
    pub net: bool,
    pub baseline: bool,
    pub sideline: bool,
}

impl Contacts {
    pub fn any(&self) -> bool {
        self.ground || self.net || self.baseline || self.sideline
    }
}

/// Drawing scale for a ball at height `z`
pub fn perspective_scale(z: f32, physics: &PhysicsConfig) -> f32 {
    1.0 + z / physics.perspective_height
}

/// Shadow scale for a ball at height `z`
pub fn shadow_scale(z: f32, physics: &PhysicsConfig) -> f32 {
    perspective_scale(z, physics) * 0.9
}

/// Horizontal velocity kept after `dt` seconds of air drag
pub fn drag_factor(physics: &PhysicsConfig, dt: f32) -> f32 {
    if physics.fixed_dt <= 0.0 {
        return physics.air_drag;
    }
    physics.air_drag.powf(dt / physics.fixed_dt)
}

/// Advance the court ball by `dt` seconds.
///
/// Every boundary is a clamp and reflection: after the step the ball rests on
/// or above the ground and inside the sidelines at its depth.
pub fn step_ball(
    ball: CourtBall,
    court: &Court,
    physics: &PhysicsConfig,
    dt: f32,
) -> (CourtBall, Contacts) {
    let mut ball = ball;
    let mut contacts = Contacts::default();

    // 1. Gravity
    ball.vel.z -= physics.gravity * dt;

    // 2. Integrate. Lateral motion is exaggerated with height so the ball
    // reads as closer to the camera.
    ball.pos.x += ball.vel.x * perspective_scale(ball.pos.z, physics) * dt;
    ball.pos.y += ball.vel.y * dt;
    ball.pos.z += ball.vel.z * dt;

    // 3. Ground
    if ball.pos.z <= 0.0 {
        ball.pos.z = 0.0;
        if ball.vel.z < 0.0 {
            ball.vel.z = -ball.vel.z * physics.ground_restitution;
            ball.vel.y *= physics.bounce_friction;
            contacts.ground = true;
        }
    }

    // 4. Net
    let net = court.config();
    let net_offset = ball.pos.y - net.net_y;
    if net_offset.abs() < physics.net_band && ball.pos.z < net.net_height {
        ball.vel.x = -ball.vel.x * physics.net_restitution;
        ball.vel.y = -ball.vel.y * physics.net_restitution;

        // Leave the band on the side the ball now travels toward
        let toward_near = if ball.vel.y != 0.0 {
            ball.vel.y > 0.0
        } else {
            net_offset >= 0.0
        };
        ball.pos.y = if toward_near {
            net.net_y + physics.net_band
        } else {
            net.net_y - physics.net_band
        };
        contacts.net = true;
    }

    // 5. Baselines
    let (far, near) = court.depth_range();
    if ball.pos.y < far {
        ball.pos.y = far;
        ball.vel.y = ball.vel.y.abs();
        contacts.baseline = true;
    } else if ball.pos.y > near {
        ball.pos.y = near;
        ball.vel.y = -ball.vel.y.abs();
        contacts.baseline = true;
    }

    // 6. Sidelines, at the resulting depth
    let (left, right) = court.lateral_bounds(ball.pos.y);
    let margin = ball.radius.min((right - left) / 2.0);
    if ball.pos.x - margin < left {
        ball.pos.x = left + margin;
        ball.vel.x = ball.vel.x.abs() * physics.racket_restitution;
        contacts.sideline = true;
    } else if ball.pos.x + margin > right {
        ball.pos.x = right - margin;
        ball.vel.x = -ball.vel.x.abs() * physics.racket_restitution;
        contacts.sideline = true;
    }

    // 7. Air drag, scaled to the step length
    let drag = drag_factor(physics, dt);
    ball.vel.x *= drag;
    ball.vel.y *= drag;

    // 8. Cosmetic spin
    ball.rotation = (ball.rotation + ball.vel.y * physics.spin_rate * dt).rem_euclid(360.0);

    (ball, contacts)
}
