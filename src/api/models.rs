use serde::{Deserialize, Serialize};

use crate::api::types::{APIVersion, Coord};

#[derive(Serialize, Debug)]
pub struct Status {
    pub apiversion:   APIVersion,
    pub author:       String,
    pub version:      String,
    pub frame_width:  i64,
    pub frame_height: i64,
}

/// One detector output. `fingertip` is absent when no hand was found in the
/// frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    #[serde(default)]
    pub fingertip: Option<Coord>,
}

impl Frame {
    #[must_use]
    pub const fn at(fingertip: Coord) -> Self {
        Self {
            fingertip: Some(fingertip),
        }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self { fingertip: None }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position:    Coord,
    pub half_width:  i64,
    pub half_height: i64,
}

/// Everything a renderer needs to draw one frame.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FrameState {
    pub trail:     Vec<Coord>,
    pub food:      Food,
    pub score:     u64,
    pub game_over: bool,
}
