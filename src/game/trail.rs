use std::collections::VecDeque;

use log::{debug, info};

use super::config::TrailRules;
use crate::api::{
    types::Coord,
    utils::{euclidean_distance, polyline_distance},
};

/// The snake's body: a length-bounded polyline of recent head positions.
///
/// `distances[i]` is the length of the segment joining `points[i]` and
/// `points[i + 1]`, so a non-empty trail always holds one more point than
/// it has distances, and `current_length` is their running sum.
#[derive(Clone, Debug)]
pub struct Trail {
    points:         VecDeque<Coord>,
    distances:      VecDeque<f64>,
    current_length: f64,
    allowed_length: f64,
    previous_head:  Coord,
    game_over:      bool,
    rules:          TrailRules,
}

impl Trail {
    #[must_use]
    pub fn new(rules: TrailRules) -> Self {
        Self {
            points: VecDeque::new(),
            distances: VecDeque::new(),
            current_length: 0.0,
            allowed_length: rules.initial_length,
            previous_head: Coord::default(),
            game_over: false,
            rules,
        }
    }

    /// Records a new head position, trims the oldest segments back under the
    /// allowed length and tests the head against the rest of the body.
    ///
    /// Returns the trail for rendering and whether the head hit the body on
    /// this call. A hit ends the game and empties the trail. Once the game is
    /// over this does nothing until [`Trail::restart`].
    pub fn update(&mut self, head: Coord) -> (&VecDeque<Coord>, bool) {
        if self.game_over {
            return (&self.points, false);
        }

        if !self.points.is_empty() {
            let distance = euclidean_distance(self.previous_head, head);
            self.distances.push_back(distance);
            self.current_length += distance;
        }
        self.points.push_back(head);
        self.previous_head = head;

        self.trim();

        let collided = self.hits_body(head);
        if collided {
            info!(
                "head at {} crossed its own trail of {} points",
                head,
                self.points.len()
            );
            self.reset();
            self.game_over = true;
        }

        (&self.points, collided)
    }

    fn trim(&mut self) {
        let mut dropped = 0;
        while self.current_length > self.allowed_length {
            let Some(distance) = self.distances.pop_front() else {
                break;
            };
            self.points.pop_front();
            self.current_length -= distance;
            dropped += 1;
        }

        if self.distances.is_empty() {
            // nothing left to sum, so discard any float residue
            self.current_length = 0.0;
        }

        if dropped > 0 {
            debug!(
                "trimmed {} segments, length now {:.1} of {:.1}",
                dropped, self.current_length, self.allowed_length
            );
        }
    }

    fn hits_body(&self, head: Coord) -> bool {
        let body_len = self.points.len().saturating_sub(self.rules.skip_recent);
        if body_len < self.rules.min_body_points {
            return false;
        }

        polyline_distance(head, self.points.range(..body_len))
            .is_some_and(|distance| distance <= self.rules.collision_tolerance)
    }

    /// Raises the length budget; used when food is eaten.
    pub fn grow(&mut self, amount: f64) {
        self.allowed_length += amount;
    }

    /// Puts the geometry back to its starting values. The game-over flag is
    /// left alone.
    pub fn reset(&mut self) {
        self.points.clear();
        self.distances.clear();
        self.current_length = 0.0;
        self.allowed_length = self.rules.initial_length;
        self.previous_head = Coord::default();
    }

    pub fn restart(&mut self) {
        self.reset();
        self.game_over = false;
    }

    #[must_use]
    pub const fn points(&self) -> &VecDeque<Coord> {
        &self.points
    }

    #[must_use]
    pub const fn distances(&self) -> &VecDeque<f64> {
        &self.distances
    }

    #[must_use]
    pub const fn current_length(&self) -> f64 {
        self.current_length
    }

    #[must_use]
    pub const fn allowed_length(&self) -> f64 {
        self.allowed_length
    }

    #[must_use]
    pub const fn previous_head(&self) -> Coord {
        self.previous_head
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }
}
