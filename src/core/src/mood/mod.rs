pub mod events;
pub mod state;
pub mod statements;

pub use events::*;
pub use state::*;
pub use statements::*;
