//! Result sources: where a query's outcome comes from.
//!
//! Two interchangeable strategies implement the one capability that
//! matters — produce a [`FetchOutcome`] for a [`Query`] — and a
//! deployment picks exactly one:
//! - [`FixtureSource`]: canned demo data behind a simulated latency
//! - [`RemoteSource`]: one POST to a backing query service
//!
//! The fetch contract never fails outward. Every transport or decode
//! error resolves to [`FetchOutcome::failure`], logged on the
//! diagnostic channel only.

pub mod fixture;
pub mod remote;

use std::future::Future;

use protocol::{FetchOutcome, Query};

pub use fixture::FixtureSource;
pub use remote::RemoteSource;

/// Capability shared by all strategies.
pub trait ResultSource {
    /// Resolves to an outcome, never an error.
    fn fetch(&self, query: &Query) -> impl Future<Output = FetchOutcome> + Send;
}

/// One strategy per deployment: local demo or service-backed.
#[derive(Debug, Clone)]
pub enum Source {
    Fixture(FixtureSource),
    Remote(RemoteSource),
}

impl ResultSource for Source {
    async fn fetch(&self, query: &Query) -> FetchOutcome {
        match self {
            Source::Fixture(fixture) => fixture.fetch(query).await,
            Source::Remote(remote) => remote.fetch(query).await,
        }
    }
}
