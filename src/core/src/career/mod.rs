pub mod interview;
pub mod market;
pub mod record;

pub use interview::*;
pub use market::*;
pub use record::*;
