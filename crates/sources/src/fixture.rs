use std::time::Duration;

use geo::{BoundingBox, Point};
use protocol::{FetchOutcome, Query, ResultItem};

use crate::ResultSource;

/// Simulated service latency for the canned data path.
pub const FIXTURE_LATENCY_MS: u64 = 600;

/// Substrings that select the Delhi fixture branch (matched
/// case-insensitively against the query text).
const DELHI_HINTS: [&str; 3] = ["delhi", "28.6", "77."];

/// Fixture center: Connaught Place, New Delhi.
const DELHI_CENTER: Point = Point::new(28.6139, 77.2090);

/// Local, canned-data strategy used for demos.
///
/// Always resolves `ok: true`; the center is set only on the Delhi
/// branch.
#[derive(Debug, Copy, Clone, Default)]
pub struct FixtureSource;

impl FixtureSource {
    fn is_delhi_query(text: &str) -> bool {
        let lower = text.to_lowercase();
        DELHI_HINTS.iter().any(|hint| lower.contains(hint))
    }

    fn delhi_results() -> Vec<ResultItem> {
        vec![
            ResultItem::new(
                "Nearest River: Yamuna",
                "The Yamuna flows along Delhi; typical distance from CP ≈ 3–6 km.",
                0.92,
            )
            .with_annotation("✅ Near Delhi")
            .with_distance_km(3.2)
            .with_coords(Point::new(28.6139, 77.2300))
            .with_bbox(BoundingBox::new(77.10, 28.55, 77.32, 28.77)),
            ResultItem::new(
                "Administrative Region: New Delhi",
                "Capital district; dense urban core with mixed land-use.",
                0.88,
            )
            .with_annotation("Admin polygon matched")
            .with_coords(Point::new(28.61, 77.21)),
            ResultItem::new(
                "Transport: Ring Road",
                "Primary arterial road forming a loop around the city.",
                0.81,
            )
            .with_annotation("Proximity: within radius"),
        ]
    }

    fn hint_result() -> ResultItem {
        ResultItem::new(
            "Topographic Hint",
            "Try adding coordinates, e.g., 'nearest river to 28.61, 77.21'.",
            0.50,
        )
        .with_annotation("Tip")
    }
}

impl ResultSource for FixtureSource {
    async fn fetch(&self, query: &Query) -> FetchOutcome {
        tokio::time::sleep(Duration::from_millis(FIXTURE_LATENCY_MS)).await;

        if Self::is_delhi_query(query.text()) {
            FetchOutcome::success(Self::delhi_results(), Some(DELHI_CENTER), Vec::new())
        } else {
            FetchOutcome::success(vec![Self::hint_result()], None, Vec::new())
        }
    }
}
