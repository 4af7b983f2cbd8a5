use geo::{GeoBounds, Point};
use protocol::ResultItem;

/// Visual padding requested around a fitted region, in pixels per side.
pub const FIT_PADDING_PX: u32 = 18;

/// A request to frame the map to a region.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitRequest {
    pub bounds: GeoBounds,
    pub padding_px: u32,
}

/// Computes the region covering every rendered geometry: the query
/// center (if any), each result's point, and both corners of each
/// result's box.
///
/// Returns `None` when there is nothing to frame; the viewport must be
/// left untouched in that case. Call on results/center change, not per
/// render.
pub fn fit(results: &[ResultItem], center: Option<Point>) -> Option<FitRequest> {
    let mut bounds = GeoBounds::empty();
    if let Some(center) = center {
        bounds.extend(center);
    }
    for item in results {
        if let Some(coords) = item.coords {
            bounds.extend(coords);
        }
        if let Some(bbox) = item.bbox {
            bounds.extend(bbox.south_west());
            bounds.extend(bbox.north_east());
        }
    }

    if bounds.is_empty() {
        return None;
    }
    Some(FitRequest {
        bounds,
        padding_px: FIT_PADDING_PX,
    })
}
