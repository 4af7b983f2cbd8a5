use crate::point::Point;

/// Accumulating geographic extent over WGS84 points.
///
/// Starts empty; extending with points grows the min/max independently
/// per axis, so corner points from inverted boxes are absorbed without
/// any ordering assumption.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoBounds {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl GeoBounds {
    pub fn empty() -> Self {
        Self {
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            min_lon: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut bounds = Self::empty();
        for p in points {
            bounds.extend(p);
        }
        bounds
    }

    pub fn is_empty(&self) -> bool {
        self.min_lat > self.max_lat || self.min_lon > self.max_lon
    }

    pub fn extend(&mut self, p: Point) {
        self.min_lat = self.min_lat.min(p.lat);
        self.max_lat = self.max_lat.max(p.lat);
        self.min_lon = self.min_lon.min(p.lon);
        self.max_lon = self.max_lon.max(p.lon);
    }

    pub fn union(mut self, other: Self) -> Self {
        if !other.is_empty() {
            self.extend(other.south_west());
            self.extend(other.north_east());
        }
        self
    }

    /// `(min_lat, min_lon)` corner. Meaningless while empty.
    pub fn south_west(&self) -> Point {
        Point::new(self.min_lat, self.min_lon)
    }

    /// `(max_lat, max_lon)` corner. Meaningless while empty.
    pub fn north_east(&self) -> Point {
        Point::new(self.max_lat, self.max_lon)
    }

    pub fn center(&self) -> Option<Point> {
        if self.is_empty() {
            return None;
        }
        Some(Point::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        ))
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::GeoBounds;
    use crate::point::Point;

    #[test]
    fn starts_empty() {
        let bounds = GeoBounds::empty();
        assert!(bounds.is_empty());
        assert_eq!(bounds.center(), None);
    }

    #[test]
    fn extend_grows_extent() {
        let mut bounds = GeoBounds::empty();
        bounds.extend(Point::new(28.55, 77.10));
        bounds.extend(Point::new(28.77, 77.32));
        assert_eq!(bounds.south_west(), Point::new(28.55, 77.10));
        assert_eq!(bounds.north_east(), Point::new(28.77, 77.32));
        let center = bounds.center().unwrap();
        assert!((center.lat - 28.66).abs() < 1e-9);
        assert!((center.lon - 77.21).abs() < 1e-9);
    }

    #[test]
    fn single_point_is_a_degenerate_extent() {
        let bounds = GeoBounds::from_points([Point::new(0.0, 0.0)]);
        assert!(!bounds.is_empty());
        assert_eq!(bounds.south_west(), bounds.north_east());
    }

    #[test]
    fn union_with_empty_is_identity() {
        let a = GeoBounds::from_points([Point::new(1.0, 2.0)]);
        let merged = a.union(GeoBounds::empty());
        assert_eq!(merged, a);
    }

    #[test]
    fn absorbs_corners_in_any_order() {
        let forward = GeoBounds::from_points([Point::new(28.55, 77.10), Point::new(28.77, 77.32)]);
        let inverted = GeoBounds::from_points([Point::new(28.77, 77.32), Point::new(28.55, 77.10)]);
        assert_eq!(forward, inverted);
    }
}
