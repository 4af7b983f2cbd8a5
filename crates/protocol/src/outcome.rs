use geo::Point;

use crate::result::{Marker, ResultItem};

/// Full response envelope for one query attempt.
///
/// Transient: swapped wholesale on the next query, never mutated in
/// place. `ok: false` and an empty result list render identically to an
/// empty success; `ok` is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchOutcome {
    pub ok: bool,
    pub data: Vec<ResultItem>,
    pub center: Option<Point>,
    pub markers: Vec<Marker>,
}

impl FetchOutcome {
    pub fn success(data: Vec<ResultItem>, center: Option<Point>, markers: Vec<Marker>) -> Self {
        Self {
            ok: true,
            data,
            center,
            markers,
        }
    }

    /// The all-empty envelope every failure path resolves to.
    pub fn failure() -> Self {
        Self {
            ok: false,
            data: Vec::new(),
            center: None,
            markers: Vec::new(),
        }
    }
}
