use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use super::{config::Config, feed::Feed, sprite::Sprite, trail::Trail};
use crate::api::{models::FrameState, types::Coord};

/// One game, from the first fingertip to an explicit restart. Owns all the
/// mutable state and is advanced one frame at a time.
#[derive(Clone, Debug)]
pub struct Session {
    config: Config,
    trail:  Trail,
    feed:   Feed,
}

impl Session {
    #[must_use]
    pub fn new(config: Config, sprite: &Sprite) -> Self {
        Self::with_rng(config, sprite, StdRng::from_entropy())
    }

    /// Same as [`Session::new`] but food placement is reproducible.
    #[must_use]
    pub fn seeded(config: Config, sprite: &Sprite, seed: u64) -> Self {
        Self::with_rng(config, sprite, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, sprite: &Sprite, rng: StdRng) -> Self {
        let half_extents = sprite.half_extents(config.sprite_scale);
        let mut feed = Feed::new(config.feed, half_extents, rng);
        feed.place_randomly();

        Self {
            config,
            trail: Trail::new(config.trail),
            feed,
        }
    }

    /// Advances the game by one frame. A frame without a fingertip leaves
    /// everything as it was, as does any frame once the game is over.
    pub fn frame(&mut self, fingertip: Option<Coord>) -> FrameState {
        let Some(head) = fingertip else {
            debug!("no fingertip this frame");
            return self.state();
        };

        if self.trail.is_game_over() {
            return self.state();
        }

        let (_, collided) = self.trail.update(head);
        if collided {
            self.feed.check_final_meal(head);
            if self.config.reset_score_on_game_over {
                self.feed.reset_score();
            }
            info!("game over with score {}", self.feed.score());
        } else {
            self.feed.check_consumption(head, &mut self.trail);
        }

        self.state()
    }

    /// Starts a fresh game: empty trail, score zero, new food.
    pub fn restart(&mut self) {
        self.trail.restart();
        self.feed.reset_score();
        self.feed.place_randomly();
        info!("session restarted");
    }

    #[must_use]
    pub fn state(&self) -> FrameState {
        FrameState {
            trail:     self.trail.points().iter().copied().collect(),
            food:      self.feed.food().into(),
            score:     self.feed.score(),
            game_over: self.trail.is_game_over(),
        }
    }

    /// Moves the food by hand, e.g. to stage a scenario.
    pub fn place_food(&mut self, position: Coord) {
        self.feed.place_at(position);
    }

    #[must_use]
    pub const fn trail(&self) -> &Trail {
        &self.trail
    }

    #[must_use]
    pub const fn feed(&self) -> &Feed {
        &self.feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::{SpawnBounds, TrailRules};

    const SPRITE: Sprite = Sprite::new(200, 200);

    fn session(config: Config) -> Session {
        Session::seeded(config, &SPRITE, 42)
    }

    fn roomy() -> Config {
        Config {
            trail: TrailRules {
                initial_length: 10_000.0,
                ..TrailRules::default()
            },
            ..Config::default()
        }
    }

    fn close_a_loop(session: &mut Session) -> FrameState {
        // keep food away from the loop
        session.place_food(Coord::new(900, 500));
        let mut state = session.state();
        for (x, y) in [(0, 0), (100, 0), (100, 100), (0, 100), (1, 1)] {
            state = session.frame(Some(Coord::new(x, y)));
        }
        state
    }

    #[test]
    fn food_uses_scaled_sprite() {
        let state = session(Config::default()).state();
        assert_eq!(state.food.half_width, 20);
        assert_eq!(state.food.half_height, 20);
        assert!(SpawnBounds::REFERENCE.contains(state.food.position));
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert!(state.trail.is_empty());
    }

    #[test]
    fn missing_fingertip_freezes_state() {
        let mut session = session(Config::default());
        session.place_food(Coord::new(900, 500));
        session.frame(Some(Coord::new(300, 300)));
        let before = session.state();

        let after = session.frame(None);
        assert_eq!(before, after);
    }

    #[test]
    fn eating_shows_in_the_state() {
        let mut session = session(Config::default());
        session.place_food(Coord::new(500, 300));

        let state = session.frame(Some(Coord::new(510, 305)));
        assert_eq!(state.score, 1);
        assert_eq!(state.trail, vec![Coord::new(510, 305)]);
        assert!((session.trail().allowed_length() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn collision_keeps_score_by_default() {
        let mut session = session(roomy());
        session.place_food(Coord::new(500, 300));
        session.frame(Some(Coord::new(500, 300)));
        let state = close_a_loop(&mut session);

        assert!(state.game_over);
        assert!(state.trail.is_empty());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn collision_can_reset_score() {
        let mut session = session(Config {
            reset_score_on_game_over: true,
            ..roomy()
        });
        session.place_food(Coord::new(500, 300));
        session.frame(Some(Coord::new(500, 300)));
        assert_eq!(session.feed().score(), 1);

        let state = close_a_loop(&mut session);
        assert!(state.game_over);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn eating_on_the_crashing_frame_still_scores() {
        let mut session = session(roomy());
        session.place_food(Coord::new(900, 500));
        for (x, y) in [(0, 0), (100, 0), (100, 100), (0, 100)] {
            session.frame(Some(Coord::new(x, y)));
        }

        session.place_food(Coord::new(5, 5));
        let state = session.frame(Some(Coord::new(1, 1)));

        assert!(state.game_over);
        assert!(state.trail.is_empty());
        assert_eq!(state.score, 1);
        assert_ne!(state.food.position, Coord::new(5, 5));
        assert!((session.trail().allowed_length() - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn game_over_ignores_frames_until_restart() {
        let mut session = session(roomy());
        let over = close_a_loop(&mut session);
        assert!(over.game_over);

        let food = over.food.position;
        session.place_food(food);
        let still_over = session.frame(Some(food));
        assert_eq!(over, still_over);

        session.restart();
        let state = session.state();
        assert!(!state.game_over);
        assert_eq!(state.score, 0);

        session.place_food(Coord::new(900, 500));
        let state = session.frame(Some(Coord::new(10, 10)));
        assert_eq!(state.trail, vec![Coord::new(10, 10)]);
    }
}
