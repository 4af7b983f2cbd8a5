use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Geographic box as received on the wire: `[west, south, east, north]`
/// in degrees.
///
/// The ordering is untrusted input. `west <= east` and `south <= north`
/// are neither enforced nor normalized; inverted boxes are propagated
/// unchanged and consumers read the corners as bare points.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundingBox(pub [f64; 4]);

impl BoundingBox {
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self([west, south, east, north])
    }

    pub fn west(&self) -> f64 {
        self.0[0]
    }

    pub fn south(&self) -> f64 {
        self.0[1]
    }

    pub fn east(&self) -> f64 {
        self.0[2]
    }

    pub fn north(&self) -> f64 {
        self.0[3]
    }

    /// `(south, west)` corner.
    pub fn south_west(&self) -> Point {
        Point::new(self.south(), self.west())
    }

    /// `(north, east)` corner.
    pub fn north_east(&self) -> Point {
        Point::new(self.north(), self.east())
    }
}
