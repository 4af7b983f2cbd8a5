//! Domain and wire types for spatial query exchange.
//!
//! One request/response pair covers the whole contract:
//! - `POST /api/query` with a [`QueryRequest`] body
//! - a [`QueryResponse`] envelope of ranked results, an optional query
//!   center, and flat markers
//!
//! The envelope is transport-agnostic; the same types back the canned
//! fixture source and the service-backed remote source.

pub mod outcome;
pub mod query;
pub mod result;
pub mod wire;

pub use outcome::*;
pub use query::*;
pub use result::*;
pub use wire::*;
