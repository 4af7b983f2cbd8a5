pub mod bbox;
pub mod bounds;
pub mod point;

// Geo crate: small, well-tested geographic primitives only.
pub use bbox::*;
pub use bounds::*;
pub use point::*;
