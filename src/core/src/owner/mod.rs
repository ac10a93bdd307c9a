pub mod builder;
pub mod owner;
pub mod personality;

pub use builder::*;
pub use owner::*;
pub use personality::*;
