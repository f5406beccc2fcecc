use crate::{Config, Events, Paddle, RallyBall, Side};
use glam::Vec2;
use hecs::World;

/// Whether the ball, moving toward `side`, has reached that side's paddle face
pub fn reached_paddle_face(ball: &RallyBall, side: Side, config: &Config) -> bool {
    let face_x = config.paddle_face_x(side);
    match side {
        Side::Player => ball.vel.x < 0.0 && ball.pos.x - ball.radius <= face_x,
        Side::Computer => ball.vel.x > 0.0 && ball.pos.x + ball.radius >= face_x,
    }
}

/// Return velocity after `side`'s paddle at `paddle_y` strikes the ball.
///
/// Horizontal speed grows by the rally multiplier (never shrinks, even past
/// the cap) and the vertical component follows the hit offset from the paddle
/// centre.
pub fn deflect(ball: &RallyBall, side: Side, paddle_y: f32, config: &Config) -> Vec2 {
    let rally = &config.rally;
    let speed_x = ball.vel.x.abs();
    let mut new_speed = speed_x * rally.speed_multiplier;
    if let Some(cap) = rally.speed_cap {
        new_speed = new_speed.min(cap);
    }
    let new_speed = new_speed.max(speed_x);

    // -1 at the top edge, 1 at the bottom edge
    let half_height = rally.paddle_height / 2.0;
    let offset = ((ball.pos.y - paddle_y) / half_height).clamp(-1.0, 1.0);

    Vec2::new(
        side.outward() * new_speed,
        offset * rally.deflection * new_speed,
    )
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // First, collect ball data without holding borrows
    let ball = {
        let mut ball_query = world.query::<&RallyBall>();
        ball_query.iter().next().map(|(_e, ball)| *ball)
    };

    let Some(mut ball) = ball else {
        return; // No ball in world
    };

    // Top/bottom walls
    let height = config.rally.arena_height;
    if ball.pos.y - ball.radius <= 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = ball.vel.y.abs();
        events.ball_hit_wall = true;
    } else if ball.pos.y + ball.radius >= height {
        ball.pos.y = height - ball.radius;
        ball.vel.y = -ball.vel.y.abs();
        events.ball_hit_wall = true;
    }

    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    let half_height = config.rally.paddle_height / 2.0;
    for (side, paddle_y) in paddles {
        if !reached_paddle_face(&ball, side, config) {
            continue;
        }
        if (ball.pos.y - paddle_y).abs() > half_height + ball.radius {
            // Missed; scoring picks this up
            continue;
        }

        ball.vel = deflect(&ball, side, paddle_y, config);
        // Push ball out of paddle
        ball.pos.x = config.paddle_face_x(side) + side.outward() * ball.radius;
        events.ball_hit_paddle = true;
        break;
    }

    for (_entity, b) in world.query_mut::<&mut RallyBall>() {
        *b = ball;
    }
}
