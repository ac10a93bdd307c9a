pub mod context;
pub mod state;

pub use context::*;
pub use state::*;
