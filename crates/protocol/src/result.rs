use geo::{BoundingBox, Point};
use serde::{Deserialize, Serialize};

/// One ranked item returned for a query, optionally geo-located.
///
/// Every field beyond title/description is optional on the wire; a
/// missing score defaults to 0 and items without `coords` simply never
/// reach the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Confidence in `[0, 1]`. Taken as-is from the wire, 0 if absent.
    #[serde(default)]
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

impl ResultItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>, score: f64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            score,
            annotation: None,
            distance_km: None,
            coords: None,
            bbox: None,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn with_distance_km(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }

    pub fn with_coords(mut self, coords: Point) -> Self {
        self.coords = Some(coords);
        self
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }
}

/// Flat geometry representation used by the service-backed variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::{Marker, ResultItem};
    use geo::{BoundingBox, Point};
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_optional_fields_default() {
        let item: ResultItem =
            serde_json::from_str(r#"{"title":"Topographic Hint","description":"Tip"}"#).unwrap();
        assert_eq!(item.score, 0.0);
        assert_eq!(item.annotation, None);
        assert_eq!(item.distance_km, None);
        assert_eq!(item.coords, None);
        assert_eq!(item.bbox, None);
    }

    #[test]
    fn full_item_round_trips_over_the_wire() {
        let item = ResultItem::new("Nearest River: Yamuna", "The Yamuna flows along Delhi", 0.92)
            .with_annotation("Near Delhi")
            .with_distance_km(3.2)
            .with_coords(Point::new(28.6139, 77.23))
            .with_bbox(BoundingBox::new(77.10, 28.55, 77.32, 28.77));

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""distanceKm":3.2"#));
        let back: ResultItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn marker_type_field_keeps_wire_name() {
        let marker: Marker =
            serde_json::from_str(r#"{"lat":28.61,"lon":77.21,"label":"CP","type":"poi"}"#).unwrap();
        assert_eq!(marker.kind, "poi");
        let json = serde_json::to_string(&marker).unwrap();
        assert!(json.contains(r#""type":"poi""#));
    }
}
