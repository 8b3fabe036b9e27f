use core::sync::atomic::{AtomicUsize, Ordering};

use crate::config::TIMER_FREQUENCY_HZ;

pub const HZ: usize = TIMER_FREQUENCY_HZ;

static JIFFIES: AtomicUsize = AtomicUsize::new(0);

/// Ticks since boot. Wraps on overflow, compare with `wrapping_sub`.
pub fn jiffies() -> usize {
	JIFFIES.load(Ordering::Acquire)
}

/// Timer interrupt bottom half: one tick elapsed.
pub fn handle_timer_tick() {
	advance_jiffies(1);
}

/// Accounts `ticks` ticks at once, e.g. when leaving a tickless idle period.
pub fn advance_jiffies(ticks: usize) {
	JIFFIES.fetch_add(ticks, Ordering::AcqRel);
}

/// Split in whole seconds and remainder so that no jiffies value overflows.
pub fn jiffies_to_msecs(j: usize) -> u64 {
	(j / HZ) as u64 * 1000 + (j % HZ) as u64 * 1000 / HZ as u64
}

#[cfg(any(test, feature = "ktest"))]
pub(crate) fn set_jiffies(value: usize) {
	JIFFIES.store(value, Ordering::Release);
}
