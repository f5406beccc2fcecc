use hecs::World;

use crate::{Command, InputQueue, Paddle, PaddleControl, Side};

/// Apply queued input. Returns true if a serve was requested.
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) -> bool {
    let mut serve_requested = false;

    for command in queue.drain() {
        match command {
            Command::SetPlayerPaddleY(y) => {
                for (_entity, (paddle, control)) in
                    world.query_mut::<(&Paddle, &mut PaddleControl)>()
                {
                    if paddle.side == Side::Player {
                        *control = PaddleControl::Pointer { target_y: y };
                    }
                }
            }
            Command::Action => serve_requested = true,
        }
    }

    serve_requested
}
