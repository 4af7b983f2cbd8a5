use geo::Point;

/// Wide default view shown before any query resolves.
pub const WORLD_CENTER: Point = Point::new(0.0, 0.0);
pub const WORLD_ZOOM: u8 = 2;

/// Zoom applied once a query anchors the view.
pub const ANCHORED_ZOOM: u8 = 11;

/// Two-state map view: the wide world default, then query-anchored.
///
/// There is no other transition; the only way back to the world view is
/// an outcome that carries no center.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum Camera {
    #[default]
    World,
    Anchored {
        center: Point,
        zoom: u8,
    },
}

impl Camera {
    pub fn center(&self) -> Point {
        match self {
            Camera::World => WORLD_CENTER,
            Camera::Anchored { center, .. } => *center,
        }
    }

    pub fn zoom(&self) -> u8 {
        match self {
            Camera::World => WORLD_ZOOM,
            Camera::Anchored { zoom, .. } => *zoom,
        }
    }

    pub fn apply_center(&mut self, center: Option<Point>) {
        *self = match center {
            Some(center) => Camera::Anchored {
                center,
                zoom: ANCHORED_ZOOM,
            },
            None => Camera::World,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::{ANCHORED_ZOOM, Camera, WORLD_ZOOM};
    use geo::Point;

    #[test]
    fn defaults_to_the_world_view() {
        let camera = Camera::default();
        assert_eq!(camera.center(), Point::new(0.0, 0.0));
        assert_eq!(camera.zoom(), WORLD_ZOOM);
    }

    #[test]
    fn anchors_tighter_on_a_resolved_center() {
        let mut camera = Camera::default();
        camera.apply_center(Some(Point::new(28.6139, 77.2090)));
        assert_eq!(camera.center(), Point::new(28.6139, 77.2090));
        assert_eq!(camera.zoom(), ANCHORED_ZOOM);
        assert!(camera.zoom() > WORLD_ZOOM);
    }

    #[test]
    fn falls_back_to_world_without_a_center() {
        let mut camera = Camera::default();
        camera.apply_center(Some(Point::new(28.6139, 77.2090)));
        camera.apply_center(None);
        assert_eq!(camera, Camera::World);
    }
}
