pub mod components;
pub mod config;
pub mod court;
pub mod params;
pub mod resources;
pub mod scoreboard;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use court::*;
pub use params::*;
pub use resources::*;
pub use scoreboard::*;
pub use session::*;
pub use systems::*;

use hecs::World;

/// Run the rally simulation for `time.dt` seconds
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    scoreboard: &mut Scoreboard,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
    serve_clock: &mut ServeClock,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(config.physics.max_dt).max(0.0);

    events.clear();

    // 1. Ingest inputs (paddle targets, serve button)
    // The action input only serves for the player; the computer keeps its delay
    let serve_requested = ingest_inputs(world, input);
    if serve_requested && scoreboard.server() == Side::Player && scoreboard.begin_rally() {
        launch_ball(world, config, scoreboard.server(), rng);
        events.rally_started = true;
    }

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 && scoreboard.state() != GameState::SetOver {
        let step_dt = remaining_dt.min(config.physics.fixed_dt);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 2. Computer serves on its own after a pause
        if scoreboard.state() == GameState::Serve && scoreboard.server() == Side::Computer {
            serve_clock.update(step_dt);
            if serve_clock.is_ready() && scoreboard.begin_rally() {
                launch_ball(world, config, Side::Computer, rng);
                events.rally_started = true;
            }
        }

        // 3. Move paddles
        move_paddles(world, &step_time, config);

        if scoreboard.state() == GameState::Playing {
            // 4. Move ball
            move_ball(world, &step_time);

            // 5. Walls and paddles
            check_collisions(world, config, events);

            // 6. Ball got past a paddle
            if check_scoring(world, config, scoreboard, events).is_some()
                && scoreboard.state() == GameState::Serve
                && scoreboard.server() == Side::Computer
            {
                serve_clock.start_delay(config.rally.ai_serve_delay);
            }
        }

        // 7. Waiting ball follows the server's paddle
        if scoreboard.state() == GameState::Serve {
            pin_ball_to_server(world, config, scoreboard.server());
        }
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity. The player's paddle follows pointer
/// input, the computer's is AI-driven.
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    let control = match side {
        Side::Player => PaddleControl::Pointer { target_y: y },
        Side::Computer => PaddleControl::Ai,
    };
    world.spawn((Paddle::new(side, y), control))
}

/// Helper to create the rally ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    radius: f32,
) -> hecs::Entity {
    world.spawn((RallyBall::new(pos, vel, radius),))
}
