mod dmesg;
mod printk;

pub use dmesg::{dmesg, dmesg_clear};
pub use printk::__printk;
