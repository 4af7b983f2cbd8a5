pub mod camera;
pub mod render;
pub mod reveal;
pub mod session;
pub mod viewport;

pub use camera::*;
pub use render::*;
pub use reveal::*;
pub use session::*;
pub use viewport::*;
