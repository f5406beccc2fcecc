use hecs::World;

use crate::{Config, Paddle, PaddleControl, RallyBall, Time};

/// Next y for the computer paddle chasing `ball_y`
pub fn ai_paddle_y(paddle_y: f32, ball_y: f32, time: &Time, config: &Config) -> f32 {
    let diff = ball_y - paddle_y;
    if diff.abs() <= config.rally.ai_dead_zone {
        return config.clamp_paddle_y(paddle_y);
    }
    let travel = (config.rally.ai_speed * time.dt).min(diff.abs());
    config.clamp_paddle_y(paddle_y + diff.signum() * travel)
}

/// Move paddles: pointer paddles jump to their target, AI paddles chase the ball
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    let ball_y = world
        .query::<&RallyBall>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    for (_entity, (paddle, control)) in world.query_mut::<(&mut Paddle, &PaddleControl)>() {
        paddle.y = match *control {
            PaddleControl::Pointer { target_y } => config.clamp_paddle_y(target_y),
            PaddleControl::Ai => match ball_y {
                Some(ball_y) => ai_paddle_y(paddle.y, ball_y, time, config),
                None => paddle.y,
            },
        };
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut RallyBall>() {
        ball.pos += ball.vel * time.dt;
    }
}
