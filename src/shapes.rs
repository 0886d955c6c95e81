pub mod trophy;

pub use trophy::{ColorMode, Trophy};
