//! `/proc/seconds`: seconds elapsed since this module was loaded.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod line;
mod reporter;

pub use line::{OutputLine, LINE_MAX};
pub use reporter::{elapsed_seconds, ElapsedTimeReporter};

use alloc::boxed::Box;
use alloc::sync::Arc;
use kernel::{
	fs::procfs::{self, PROC_ROOT},
	fs::vfs::Permission,
	interrupt::jiffies,
	kernel_module,
	module::KernelModule,
	pr_info,
	syscall::errno::Errno,
};

pub const NAME: &[u8] = b"seconds";
pub const PROC_NAME: &str = "seconds";
pub const PROC_MODE: u32 = 0o666;

kernel_module! {
	name: NAME,
	init: init_module,
	cleanup: Some(cleanup_module),
	license: "GPL",
	description: "Kernel Module that creates /proc/seconds to report elapsed time",
	author: "SGG",
}

fn init_module(_this: Arc<KernelModule>) -> Result<(), Errno> {
	let reporter = ElapsedTimeReporter::new(jiffies());

	procfs::proc_create(
		PROC_NAME.as_bytes(),
		Permission::from_bits_truncate(PROC_MODE),
		Box::new(reporter),
	)?;

	pr_info!("{}/{} created", PROC_ROOT, PROC_NAME);
	Ok(())
}

fn cleanup_module() {
	procfs::remove_proc_entry(PROC_NAME.as_bytes());

	pr_info!("{}/{} removed", PROC_ROOT, PROC_NAME);
}
