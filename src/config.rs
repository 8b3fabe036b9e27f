/// Timer interrupt frequency, a.k.a. `HZ`: jiffies per second.
pub const TIMER_FREQUENCY_HZ: usize = 1000;

/// Longest name accepted for a procfs entry.
pub const NAME_MAX: usize = 255;

/// Capacity of the kernel log ring buffer in bytes.
pub const DMESG_SIZE: usize = 16 * 1024;
