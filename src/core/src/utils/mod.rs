pub mod random;
pub mod time;

pub use random::*;
pub use time::*;

/// Five-step descriptive ladder shared by every "hide the numbers" label.
pub fn five_step_index(value: i32) -> usize {
    match value {
        v if v < 20 => 0,
        v if v < 40 => 1,
        v if v < 60 => 2,
        v if v < 80 => 3,
        _ => 4,
    }
}
