pub mod meter;
pub mod processor;
pub mod season;

pub use meter::*;
pub use processor::*;
pub use season::*;
