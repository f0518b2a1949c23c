use std::env;

use color_eyre::{eyre::WrapErr, Result};

use crate::api::types::Coord;

/// Frame size the default spawn rectangle was tuned for.
pub const REFERENCE_FRAME_WIDTH: i64 = 1280;
pub const REFERENCE_FRAME_HEIGHT: i64 = 720;

pub const INITIAL_ALLOWED_LENGTH: f64 = 150.0;
pub const GROWTH_PER_FOOD: f64 = 50.0;
pub const COLLISION_TOLERANCE: f64 = 1.0;
/// The newest points are left out of the self-collision body; the head always
/// touches its own freshest segment.
pub const SKIP_RECENT_POINTS: usize = 2;
pub const MIN_BODY_POINTS: usize = 3;
/// Sprites are drawn at a fifth of their decoded size.
pub const SPRITE_SCALE: f64 = 0.2;

/// Inclusive rectangle that food may be placed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnBounds {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl SpawnBounds {
    pub const REFERENCE: Self = Self {
        x_min: 100,
        x_max: 1000,
        y_min: 100,
        y_max: 600,
    };

    /// Scales the reference rectangle to a frame of the given size, so food
    /// stays clear of the borders at any resolution.
    #[must_use]
    pub const fn for_frame(width: i64, height: i64) -> Self {
        let reference = Self::REFERENCE;
        Self {
            x_min: reference.x_min * width / REFERENCE_FRAME_WIDTH,
            x_max: reference.x_max * width / REFERENCE_FRAME_WIDTH,
            y_min: reference.y_min * height / REFERENCE_FRAME_HEIGHT,
            y_max: reference.y_max * height / REFERENCE_FRAME_HEIGHT,
        }
    }

    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= self.x_min
            && coord.x <= self.x_max
            && coord.y >= self.y_min
            && coord.y <= self.y_max
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailRules {
    pub initial_length:      f64,
    pub collision_tolerance: f64,
    pub skip_recent:         usize,
    pub min_body_points:     usize,
}

impl Default for TrailRules {
    fn default() -> Self {
        Self {
            initial_length:      INITIAL_ALLOWED_LENGTH,
            collision_tolerance: COLLISION_TOLERANCE,
            skip_recent:         SKIP_RECENT_POINTS,
            min_body_points:     MIN_BODY_POINTS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeedRules {
    pub growth_per_food: f64,
    pub spawn:           SpawnBounds,
}

impl Default for FeedRules {
    fn default() -> Self {
        Self {
            growth_per_food: GROWTH_PER_FOOD,
            spawn:           SpawnBounds::REFERENCE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub trail:                    TrailRules,
    pub feed:                     FeedRules,
    pub sprite_scale:             f64,
    /// Keep the score across lives unless this is set.
    pub reset_score_on_game_over: bool,
}

impl Config {
    #[must_use]
    pub fn for_frame(width: i64, height: i64) -> Self {
        Self {
            feed: FeedRules {
                spawn: SpawnBounds::for_frame(width, height),
                ..FeedRules::default()
            },
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trail:                    TrailRules::default(),
            feed:                     FeedRules::default(),
            sprite_scale:             SPRITE_SCALE,
            reset_score_on_game_over: false,
        }
    }
}

pub const SPRITE_VAR: &str = "FINGERSNAKE_SPRITE";
pub const FRAME_WIDTH_VAR: &str = "FINGERSNAKE_FRAME_WIDTH";
pub const FRAME_HEIGHT_VAR: &str = "FINGERSNAKE_FRAME_HEIGHT";
pub const DEFAULT_SPRITE: &str = "apple.png";

/// Startup settings shared by the server and the replay tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment {
    pub sprite:       String,
    pub frame_width:  i64,
    pub frame_height: i64,
}

impl Environment {
    /// # Errors
    ///
    /// Fails if a frame size variable is set but is not an integer.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// # Errors
    ///
    /// Fails if a frame size value is present but is not an integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let frame_size = |key: &str, default: i64| -> Result<i64> {
            lookup(key).map_or(Ok(default), |value| {
                value
                    .trim()
                    .parse()
                    .wrap_err_with(|| format!("invalid {key}: {value:?}"))
            })
        };

        Ok(Self {
            sprite:       lookup(SPRITE_VAR).unwrap_or_else(|| DEFAULT_SPRITE.to_owned()),
            frame_width:  frame_size(FRAME_WIDTH_VAR, REFERENCE_FRAME_WIDTH)?,
            frame_height: frame_size(FRAME_HEIGHT_VAR, REFERENCE_FRAME_HEIGHT)?,
        })
    }

    #[must_use]
    pub fn config(&self) -> Config {
        Config::for_frame(self.frame_width, self.frame_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_defaults() {
        let environment = Environment::from_lookup(|_| None).unwrap();
        assert_eq!(environment.sprite, DEFAULT_SPRITE);
        assert_eq!(environment.config(), Config::default());
    }

    #[test]
    fn environment_sets_frame_size() {
        let environment = Environment::from_lookup(|key| match key {
            FRAME_WIDTH_VAR => Some("640".to_owned()),
            FRAME_HEIGHT_VAR => Some(" 360 ".to_owned()),
            SPRITE_VAR => Some("sprites/cherry.jpg".to_owned()),
            _ => None,
        })
        .unwrap();

        assert_eq!(environment.sprite, "sprites/cherry.jpg");
        assert_eq!(environment.config().feed.spawn, SpawnBounds::for_frame(640, 360));
    }

    #[test]
    fn environment_rejects_bad_sizes() {
        let err = Environment::from_lookup(|key| {
            (key == FRAME_WIDTH_VAR).then(|| "wide".to_owned())
        })
        .unwrap_err();
        assert!(format!("{err:?}").contains(FRAME_WIDTH_VAR));
    }

    #[test]
    fn reference_frame_keeps_reference_bounds() {
        assert_eq!(
            SpawnBounds::for_frame(REFERENCE_FRAME_WIDTH, REFERENCE_FRAME_HEIGHT),
            SpawnBounds::REFERENCE
        );
        assert_eq!(Config::for_frame(1280, 720), Config::default());
    }

    #[test]
    fn bounds_scale_with_the_frame() {
        let bounds = SpawnBounds::for_frame(640, 360);
        assert_eq!(
            bounds,
            SpawnBounds {
                x_min: 50,
                x_max: 500,
                y_min: 50,
                y_max: 300,
            }
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = SpawnBounds::REFERENCE;
        assert!(bounds.contains(Coord::new(100, 100)));
        assert!(bounds.contains(Coord::new(1000, 600)));
        assert!(!bounds.contains(Coord::new(99, 300)));
        assert!(!bounds.contains(Coord::new(500, 601)));
    }
}
