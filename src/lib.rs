pub mod clock;
pub mod context;
pub mod error;
pub mod shader;
pub mod shapes;

pub use clock::FrameClock;
pub use context::Context;
pub use error::SetupError;
