mod franchise;
mod names;

pub use franchise::*;
pub use names::*;
