use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Serialize, Debug)]
pub enum APIVersion {
    #[serde(rename = "1")]
    One,
}

struct DeserializePixelVisitor;

impl<'de> de::Visitor<'de> for DeserializePixelVisitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or float pixel coordinate")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v).map_err(|_| E::custom("pixel coordinate out of range"))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // landmark detectors often report sub-pixel positions
        if v.is_finite() {
            Ok(v.round() as i64)
        } else {
            Err(E::custom("pixel coordinate must be finite"))
        }
    }
}

fn from_pixel<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DeserializePixelVisitor)
}

/// A position in frame-pixel space. The origin is the top left corner, x
/// grows to the right and y grows downwards.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Coord {
    #[serde(deserialize_with = "from_pixel")]
    pub x: i64,
    #[serde(deserialize_with = "from_pixel")]
    pub y: i64,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}
