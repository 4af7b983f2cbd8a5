use geo::Point;
use serde::{Deserialize, Serialize};

use crate::outcome::FetchOutcome;
use crate::query::Query;
use crate::result::{Marker, ResultItem};

/// Radius sent when the query carries no usable one.
pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// Body of `POST /api/query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub query: String,
    #[serde(default = "default_radius")]
    pub radius_km: f64,
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS_KM
}

impl QueryRequest {
    pub fn from_query(query: &Query) -> Self {
        let radius_km = query.radius_km();
        let radius_km = if radius_km.is_finite() && radius_km > 0.0 {
            radius_km
        } else {
            DEFAULT_RADIUS_KM
        };
        Self {
            query: query.text().to_string(),
            radius_km,
        }
    }
}

/// Response envelope of `POST /api/query`.
///
/// `results` may contain explicit nulls (holes). Holes are dropped at
/// decode time and never produce a list row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Option<ResultItem>>,
    #[serde(default)]
    pub center: Option<Point>,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl QueryResponse {
    pub fn from_outcome(outcome: FetchOutcome) -> Self {
        Self {
            results: outcome.data.into_iter().map(Some).collect(),
            center: outcome.center,
            markers: outcome.markers,
        }
    }

    /// Converts the wire envelope into an outcome, skipping holes.
    pub fn into_outcome(self, ok: bool) -> FetchOutcome {
        FetchOutcome {
            ok,
            data: self.results.into_iter().flatten().collect(),
            center: self.center,
            markers: self.markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_RADIUS_KM, QueryRequest, QueryResponse};
    use crate::query::{Query, QueryKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn request_keeps_positive_radius() {
        let q = Query::new("nearest river", QueryKind::General, 10.0).unwrap();
        let request = QueryRequest::from_query(&q);
        assert_eq!(request.radius_km, 10.0);
    }

    #[test]
    fn request_falls_back_to_default_radius() {
        let q = Query::new("nearest river", QueryKind::General, 0.0).unwrap();
        assert_eq!(QueryRequest::from_query(&q).radius_km, DEFAULT_RADIUS_KM);

        let q = Query::new("nearest river", QueryKind::General, f64::NAN).unwrap();
        assert_eq!(QueryRequest::from_query(&q).radius_km, DEFAULT_RADIUS_KM);
    }

    #[test]
    fn missing_radius_defaults_on_decode() {
        let request: QueryRequest = serde_json::from_str(r#"{"query":"hello"}"#).unwrap();
        assert_eq!(request.radius_km, DEFAULT_RADIUS_KM);
    }

    #[test]
    fn holes_are_skipped_on_decode() {
        let body = r#"{
            "results": [
                {"title": "a", "description": ""},
                null,
                {"title": "b", "description": ""}
            ],
            "center": null,
            "markers": []
        }"#;
        let envelope: QueryResponse = serde_json::from_str(body).unwrap();
        let outcome = envelope.into_outcome(true);
        assert!(outcome.ok);
        let titles: Vec<_> = outcome.data.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn missing_envelope_fields_default_empty() {
        let envelope: QueryResponse = serde_json::from_str("{}").unwrap();
        let outcome = envelope.into_outcome(false);
        assert!(!outcome.ok);
        assert!(outcome.data.is_empty());
        assert_eq!(outcome.center, None);
    }
}
