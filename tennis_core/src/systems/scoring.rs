use crate::{reached_paddle_face, Config, Events, PointOutcome, RallyBall, Scoreboard, Side};
use hecs::World;

/// Award the point if the ball got past a paddle. Runs after
/// `check_collisions`, so a ball still heading into a paddle face here is a miss.
pub fn check_scoring(
    world: &World,
    config: &Config,
    scoreboard: &mut Scoreboard,
    events: &mut Events,
) -> Option<PointOutcome> {
    let ball = world
        .query::<&RallyBall>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball)?;

    let loser = [Side::Player, Side::Computer]
        .into_iter()
        .find(|&side| reached_paddle_face(&ball, side, config))?;
    let winner = loser.opponent();

    let outcome = scoreboard.score_point(winner);
    match outcome {
        PointOutcome::Point => events.point_won = Some(winner),
        PointOutcome::Game(side) => {
            events.point_won = Some(side);
            events.game_won = Some(side);
        }
        PointOutcome::Set(side) => {
            events.point_won = Some(side);
            events.game_won = Some(side);
            events.set_won = Some(side);
        }
        PointOutcome::Ignored => {}
    }
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, GameState, Tally};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Scoreboard, Events) {
        let mut scoreboard = Scoreboard::default();
        scoreboard.begin_rally();
        (World::new(), Config::new(), scoreboard, Events::new())
    }

    #[test]
    fn test_computer_scores_when_ball_passes_player() {
        let (mut world, config, mut scoreboard, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(20.0, 500.0), Vec2::new(-300.0, 0.0), 8.0);

        let outcome = check_scoring(&world, &config, &mut scoreboard, &mut events);

        assert_eq!(outcome, Some(PointOutcome::Point));
        assert_eq!(scoreboard.points(), Tally::new(0, 1));
        assert_eq!(scoreboard.state(), GameState::Serve);
        assert_eq!(events.point_won, Some(Side::Computer));
    }

    #[test]
    fn test_player_scores_when_ball_passes_computer() {
        let (mut world, config, mut scoreboard, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(780.0, 100.0), Vec2::new(300.0, 0.0), 8.0);

        check_scoring(&world, &config, &mut scoreboard, &mut events);

        assert_eq!(scoreboard.points(), Tally::new(1, 0));
        assert_eq!(events.point_won, Some(Side::Player));
    }

    #[test]
    fn test_no_scoring_when_ball_in_play() {
        let (mut world, config, mut scoreboard, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(300.0, 40.0), 8.0);

        assert_eq!(check_scoring(&world, &config, &mut scoreboard, &mut events), None);
        assert_eq!(scoreboard.points(), Tally::default());
        assert_eq!(scoreboard.state(), GameState::Playing);
        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_game_point_reports_game() {
        let (mut world, config, mut scoreboard, mut events) = setup_world();
        for _ in 0..3 {
            scoreboard.score_point(Side::Player);
        }
        create_ball(&mut world, Vec2::new(780.0, 100.0), Vec2::new(300.0, 0.0), 8.0);

        let outcome = check_scoring(&world, &config, &mut scoreboard, &mut events);

        assert_eq!(outcome, Some(PointOutcome::Game(Side::Player)));
        assert_eq!(events.game_won, Some(Side::Player));
        assert_eq!(scoreboard.games(), Tally::new(1, 0));
    }
}
