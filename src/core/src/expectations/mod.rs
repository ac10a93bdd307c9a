pub mod evaluation;
pub mod season;
pub mod state;
pub mod timeline;

pub use evaluation::*;
pub use season::*;
pub use state::*;
pub use timeline::*;
