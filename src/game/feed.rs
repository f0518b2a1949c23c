use log::{debug, info};
use rand::{rngs::StdRng, Rng};

use super::{config::FeedRules, trail::Trail};
use crate::api::{models::Food, types::Coord};

/// Half the displayed sprite size, measured from the food's centre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfExtents {
    pub width:  i64,
    pub height: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoodItem {
    pub position:     Coord,
    pub half_extents: HalfExtents,
}

impl FoodItem {
    /// Strictly inside the sprite's box; the edge itself does not count.
    #[must_use]
    pub const fn covers(&self, coord: Coord) -> bool {
        let Self {
            position,
            half_extents,
        } = *self;
        position.x - half_extents.width < coord.x
            && coord.x < position.x + half_extents.width
            && position.y - half_extents.height < coord.y
            && coord.y < position.y + half_extents.height
    }
}

impl From<FoodItem> for Food {
    fn from(item: FoodItem) -> Self {
        Self {
            position:    item.position,
            half_width:  item.half_extents.width,
            half_height: item.half_extents.height,
        }
    }
}

/// Owns the single piece of food and the score.
#[derive(Clone, Debug)]
pub struct Feed {
    food:  FoodItem,
    score: u64,
    rules: FeedRules,
    rng:   StdRng,
}

impl Feed {
    /// The food starts at the top left of the spawn rectangle; call
    /// [`Feed::place_randomly`] before play.
    #[must_use]
    pub fn new(rules: FeedRules, half_extents: HalfExtents, rng: StdRng) -> Self {
        Self {
            food: FoodItem {
                position: Coord::new(rules.spawn.x_min, rules.spawn.y_min),
                half_extents,
            },
            score: 0,
            rules,
            rng,
        }
    }

    pub fn place_randomly(&mut self) -> FoodItem {
        let spawn = self.rules.spawn;
        self.food.position = Coord {
            x: self.rng.gen_range(spawn.x_min..=spawn.x_max),
            y: self.rng.gen_range(spawn.y_min..=spawn.y_max),
        };
        debug!("food placed at {}", self.food.position);
        self.food
    }

    pub fn place_at(&mut self, position: Coord) {
        self.food.position = position;
    }

    /// Eats the food if `head` is on it: the food moves somewhere new, the
    /// trail may grow longer and the score goes up by one.
    pub fn check_consumption(&mut self, head: Coord, trail: &mut Trail) -> bool {
        if !self.food.covers(head) {
            return false;
        }

        let eaten_at = self.food.position;
        self.place_randomly();
        trail.grow(self.rules.growth_per_food);
        self.score += 1;

        info!(
            "ate food at {}, score {}, trail budget {:.0}",
            eaten_at,
            self.score,
            trail.allowed_length()
        );

        true
    }

    /// Counts a meal on a frame that also ended the game. The trail has just
    /// been reset, so it does not grow; the food moves either way.
    pub fn check_final_meal(&mut self, head: Coord) -> bool {
        let eaten = self.food.covers(head);
        if eaten {
            self.score += 1;
            info!(
                "ate food at {} on the last frame, score {}",
                self.food.position, self.score
            );
        }
        self.place_randomly();
        eaten
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    #[must_use]
    pub const fn food(&self) -> FoodItem {
        self.food
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }
}
