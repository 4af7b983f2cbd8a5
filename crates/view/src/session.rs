use protocol::{FetchOutcome, ResultItem};

use crate::camera::Camera;
use crate::reveal::{RevealGen, RevealSequencer};
use crate::viewport::{FitRequest, fit};

/// Identifies one submitted query. Monotonically increasing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Owns the latest outcome and everything fanned out from it: the
/// reveal sequencer, the viewport fit, and the camera.
///
/// Overlapping queries are safe: each submit gets a fresh [`RequestId`]
/// and [`SearchSession::apply`] rejects any response that is not for
/// the newest submit, so a slow stale response can never overwrite a
/// newer one.
#[derive(Debug, Default)]
pub struct SearchSession {
    next_request: u64,
    applied: Option<RequestId>,
    outcome: FetchOutcome,
    sequencer: RevealSequencer,
    camera: Camera,
    fit: Option<FitRequest>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps a new submit. Any response for an earlier id is stale
    /// from this point on.
    pub fn begin(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }

    /// Applies an outcome: swaps the stored envelope wholesale,
    /// restarts the reveal sequence, recomputes the viewport fit, and
    /// updates the camera. Returns the new reveal generation, or `None`
    /// when the response is stale (nothing changes in that case).
    pub fn apply(&mut self, id: RequestId, outcome: FetchOutcome) -> Option<RevealGen> {
        if id.0 != self.next_request || self.applied == Some(id) {
            return None;
        }
        self.applied = Some(id);

        self.fit = fit(&outcome.data, outcome.center);
        self.camera.apply_center(outcome.center);
        let generation = self.sequencer.start(outcome.data.clone());
        self.outcome = outcome;
        Some(generation)
    }

    /// One reveal tick; see [`RevealSequencer::advance`].
    pub fn advance(&mut self, generation: RevealGen) -> Option<&[ResultItem]> {
        self.sequencer.advance(generation)
    }

    pub fn displayed(&self) -> &[ResultItem] {
        self.sequencer.displayed()
    }

    pub fn sequencer(&self) -> &RevealSequencer {
        &self.sequencer
    }

    pub fn outcome(&self) -> &FetchOutcome {
        &self.outcome
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn fit_request(&self) -> Option<FitRequest> {
        self.fit
    }
}
