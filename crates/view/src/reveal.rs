use protocol::ResultItem;

/// Milliseconds between reveal steps. The driver owns the actual timer;
/// this core is tick-driven and deterministic.
pub const REVEAL_INTERVAL_MS: u64 = 90;

/// Generation token handed out by [`RevealSequencer::start`].
///
/// A tick carrying a stale generation is ignored, so output from a
/// replaced sequence can never be applied after a reset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealGen(u64);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    Revealing { shown: usize },
    Done,
}

/// Discloses a result list as a growing prefix, one item per tick.
///
/// For an input of length n, exactly n+1 prefix states are observable
/// (the empty prefix included), strictly increasing in length, after
/// which the sequence is done and further ticks are no-ops.
#[derive(Debug, Default)]
pub struct RevealSequencer {
    generation: u64,
    results: Vec<ResultItem>,
    shown: usize,
}

impl RevealSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the displayed prefix to empty, invalidates any prior
    /// generation, and begins a fresh sequence over `results`.
    pub fn start(&mut self, results: Vec<ResultItem>) -> RevealGen {
        self.generation += 1;
        self.results = results;
        self.shown = 0;
        RevealGen(self.generation)
    }

    pub fn state(&self) -> RevealState {
        if self.generation == 0 {
            RevealState::Idle
        } else if self.shown < self.results.len() {
            RevealState::Revealing { shown: self.shown }
        } else {
            RevealState::Done
        }
    }

    pub fn is_done(&self) -> bool {
        self.state() == RevealState::Done
    }

    /// Currently displayed prefix.
    pub fn displayed(&self) -> &[ResultItem] {
        &self.results[..self.shown]
    }

    /// One timer tick. Extends the prefix by one item and returns it.
    /// Returns `None` without mutating anything when `generation` is
    /// stale or the sequence has finished.
    pub fn advance(&mut self, generation: RevealGen) -> Option<&[ResultItem]> {
        if generation != RevealGen(self.generation) || self.shown >= self.results.len() {
            return None;
        }
        self.shown += 1;
        Some(self.displayed())
    }
}
