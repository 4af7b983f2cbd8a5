use serde::{Deserialize, Serialize};

/// Query category, one per interface tab.
///
/// Wire form matches the tab labels verbatim.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QueryKind {
    #[default]
    General,
    #[serde(rename = "Land Use")]
    LandUse,
    #[serde(rename = "Climate & Weather")]
    ClimateWeather,
    Population,
    Infrastructure,
}

/// User-submitted search intent: free text plus category and radius.
///
/// Immutable once built; consumed once per fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    text: String,
    kind: QueryKind,
    radius_km: f64,
}

impl Query {
    /// Returns `None` when the trimmed text is empty. An empty submit is
    /// silently ignored upstream, never surfaced as an error.
    pub fn new(text: impl Into<String>, kind: QueryKind, radius_km: f64) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text,
            kind,
            radius_km,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}
