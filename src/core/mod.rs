pub mod field;
pub mod sound;
pub mod theme;

pub use field::*;
pub use sound::*;
pub use theme::*;
