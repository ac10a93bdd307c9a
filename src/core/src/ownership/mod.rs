pub mod change;
pub mod league;

pub use change::*;
pub use league::*;
