pub mod constants;
pub mod sim;
pub mod sound;

pub use constants::*;
pub use sim::*;
pub use sound::*;
