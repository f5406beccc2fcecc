use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::{Config, GameRng, Paddle, RallyBall, Side};

fn paddle_y(world: &World, side: Side) -> Option<f32> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| p.y)
}

/// Where the ball waits while `server` prepares to serve
pub fn serve_position(config: &Config, server: Side, paddle_y: f32) -> Vec2 {
    let x = config.paddle_face_x(server) + server.outward() * config.rally.ball_radius;
    Vec2::new(x, paddle_y)
}

/// Hold the ball against the serving paddle with no velocity
pub fn pin_ball_to_server(world: &mut World, config: &Config, server: Side) {
    let Some(y) = paddle_y(world, server) else {
        return;
    };
    let pos = serve_position(config, server, y);
    for (_entity, ball) in world.query_mut::<&mut RallyBall>() {
        ball.pos = pos;
        ball.vel = Vec2::ZERO;
    }
}

/// Send the ball away from the server's paddle
pub fn launch_ball(world: &mut World, config: &Config, server: Side, rng: &mut GameRng) {
    let spread = config.rally.serve_spread.abs();
    let vy = if spread > 0.0 {
        rng.0.gen_range(-spread..=spread)
    } else {
        0.0
    };
    let vel = Vec2::new(server.outward() * config.rally.serve_speed, vy);
    for (_entity, ball) in world.query_mut::<&mut RallyBall>() {
        ball.vel = vel;
    }
    tracing::debug!(?server, vx = vel.x, vy = vel.y, "serve");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup() -> (World, Config) {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Player, 200.0);
        create_paddle(&mut world, Side::Computer, 400.0);
        create_ball(
            &mut world,
            Vec2::new(400.0, 300.0),
            Vec2::new(50.0, 50.0),
            config.rally.ball_radius,
        );
        (world, config)
    }

    fn ball(world: &World) -> RallyBall {
        world
            .query::<&RallyBall>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap()
    }

    #[test]
    fn test_ball_pinned_to_player_paddle() {
        let (mut world, config) = setup();
        pin_ball_to_server(&mut world, &config, Side::Player);
        let b = ball(&world);
        assert_eq!(b.vel, Vec2::ZERO);
        assert_eq!(b.pos.y, 200.0);
        assert_eq!(b.pos.x, config.paddle_face_x(Side::Player) + config.rally.ball_radius);
    }

    #[test]
    fn test_ball_pinned_to_computer_paddle() {
        let (mut world, config) = setup();
        pin_ball_to_server(&mut world, &config, Side::Computer);
        let b = ball(&world);
        assert_eq!(b.pos.y, 400.0);
        assert_eq!(b.pos.x, config.paddle_face_x(Side::Computer) - config.rally.ball_radius);
    }

    #[test]
    fn test_launch_heads_away_from_server() {
        let (mut world, config) = setup();
        let mut rng = GameRng::new(7);

        launch_ball(&mut world, &config, Side::Player, &mut rng);
        let b = ball(&world);
        assert_eq!(b.vel.x, config.rally.serve_speed);
        assert!(b.vel.y.abs() <= config.rally.serve_spread);

        launch_ball(&mut world, &config, Side::Computer, &mut rng);
        assert_eq!(ball(&world).vel.x, -config.rally.serve_speed);
    }

    #[test]
    fn test_launch_is_deterministic_per_seed() {
        let (mut a, config) = setup();
        let (mut b, _) = setup();
        launch_ball(&mut a, &config, Side::Player, &mut GameRng::new(99));
        launch_ball(&mut b, &config, Side::Player, &mut GameRng::new(99));
        assert_eq!(ball(&a).vel, ball(&b).vel);
    }
}
