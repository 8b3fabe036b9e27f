pub mod timer;

pub use timer::{jiffies, HZ};
