//! Host harness behind `#[kernel_test]`.
//!
//! Kernel state lives in statics, so tests touching it run one at a time and
//! each starts from a freshly booted kernel: no modules, an empty `/proc`,
//! an empty log and `jiffies() == 0`.

use std::sync::{Mutex, PoisonError};

static KTEST_LOCK: Mutex<()> = Mutex::new(());

pub fn ktest_scope<R>(test: impl FnOnce() -> R) -> R {
	// a failed test poisons the lock, the state reset below makes that harmless.
	let _guard = KTEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

	reset();

	test()
}

fn reset() {
	crate::module::clear();
	crate::fs::procfs::clear();
	crate::printk::dmesg_clear();
	crate::interrupt::timer::set_jiffies(0);
}
