use kernel::{
	fs::procfs::ProcOps,
	interrupt::{jiffies, HZ},
	mm::user::{copy_to_user, UserAddressSpace},
	syscall::errno::Errno,
};

use crate::line::OutputLine;

/// Whole seconds between two jiffies readings, truncated.
///
/// The counter may have wrapped since `start`. Unsigned wrapping subtraction
/// still gives the elapsed ticks.
pub fn elapsed_seconds(start: usize, now: usize, hz: usize) -> usize {
	now.wrapping_sub(start) / hz
}

/// Backing state of `/proc/seconds`.
///
/// procfs serializes calls into one entry, so `completed` needs no lock.
pub struct ElapsedTimeReporter {
	start_jiffies: usize,
	completed: bool,
}

impl ElapsedTimeReporter {
	pub fn new(start_jiffies: usize) -> Self {
		Self {
			start_jiffies,
			completed: false,
		}
	}

	pub fn start_jiffies(&self) -> usize {
		self.start_jiffies
	}

	pub fn elapsed_seconds(&self, now: usize) -> usize {
		elapsed_seconds(self.start_jiffies, now, HZ)
	}
}

impl ProcOps for ElapsedTimeReporter {
	/// Every other call produces the line, the ones in between report end of
	/// file. `pos` is not tracked.
	fn proc_read(
		&mut self,
		user: &mut UserAddressSpace,
		buf: usize,
		count: usize,
		_pos: &mut usize,
	) -> Result<usize, Errno> {
		if self.completed {
			self.completed = false;
			return Ok(0);
		}

		// set before copying: a faulting copy still ends this logical read.
		self.completed = true;

		let line = OutputLine::new(self.elapsed_seconds(jiffies()))?;
		let bytes = line.as_bytes();
		let len = bytes.len().min(count);

		copy_to_user(user, buf, &bytes[..len])?;

		Ok(len)
	}
}

#[cfg(test)]
mod tests {
	use kernel::interrupt::timer::advance_jiffies;
	use kernel::mm::user::{copy_from_user, AreaFlag};
	use kfs_macro::kernel_test;

	use super::*;

	const BUF: usize = 0x8000;

	fn user_space() -> UserAddressSpace {
		let mut user = UserAddressSpace::new();
		user.map(BUF, 128, AreaFlag::Readable | AreaFlag::Writable)
			.unwrap();
		user
	}

	fn read(reporter: &mut ElapsedTimeReporter, user: &mut UserAddressSpace) -> Vec<u8> {
		let mut pos = 0;
		let n = reporter.proc_read(user, BUF, 128, &mut pos).unwrap();
		let mut out = vec![0; n];

		copy_from_user(user, &mut out, BUF).unwrap();
		out
	}

	#[test]
	fn seconds_truncate() {
		assert_eq!(elapsed_seconds(0, 0, 1000), 0);
		assert_eq!(elapsed_seconds(0, 999, 1000), 0);
		assert_eq!(elapsed_seconds(0, 1000, 1000), 1);
		assert_eq!(elapsed_seconds(500, 2499, 1000), 1);
		assert_eq!(elapsed_seconds(7, 7 + 250 * 9 + 249, 250), 9);
	}

	#[test]
	fn seconds_across_wrap() {
		assert_eq!(elapsed_seconds(usize::MAX - 499, 1500, 1000), 2);
	}

	#[kernel_test(seconds)]
	fn reads_alternate_data_and_eof() {
		let mut user = user_space();
		let mut reporter = ElapsedTimeReporter::new(jiffies());

		for _ in 0..4 {
			assert_eq!(read(&mut reporter, &mut user), b"Elapsed seconds: 0\n");
			assert_eq!(read(&mut reporter, &mut user), b"");
		}
	}

	#[kernel_test(seconds)]
	fn reports_time_since_start() {
		let mut user = user_space();

		advance_jiffies(5 * HZ);
		let mut reporter = ElapsedTimeReporter::new(jiffies());
		assert_eq!(reporter.start_jiffies(), 5 * HZ);

		advance_jiffies(3 * HZ - 1);
		assert_eq!(read(&mut reporter, &mut user), b"Elapsed seconds: 2\n");
		read(&mut reporter, &mut user);

		advance_jiffies(1);
		assert_eq!(read(&mut reporter, &mut user), b"Elapsed seconds: 3\n");
	}

	#[kernel_test(seconds)]
	fn fault_keeps_read_completed() {
		let mut user = user_space();
		let mut reporter = ElapsedTimeReporter::new(jiffies());
		let mut pos = 0;

		assert_eq!(
			reporter.proc_read(&mut user, 0x10, 128, &mut pos),
			Err(Errno::EFAULT)
		);
		assert_eq!(read(&mut reporter, &mut user), b"");
		assert_eq!(read(&mut reporter, &mut user), b"Elapsed seconds: 0\n");
	}

	#[kernel_test(seconds)]
	fn fault_leaves_buffer_untouched() {
		let mut user = UserAddressSpace::new();
		let mut reporter = ElapsedTimeReporter::new(jiffies());
		let mut pos = 0;

		user.map(BUF, 4, AreaFlag::Readable | AreaFlag::Writable)
			.unwrap();

		// the line does not fit in the mapping, the copy faults as a whole.
		assert_eq!(
			reporter.proc_read(&mut user, BUF, 128, &mut pos),
			Err(Errno::EFAULT)
		);

		let mut out = [0xff; 4];
		copy_from_user(&user, &mut out, BUF).unwrap();
		assert_eq!(out, [0; 4]);
	}

	#[kernel_test(seconds)]
	fn short_buffer_gets_prefix() {
		let mut user = user_space();
		let mut reporter = ElapsedTimeReporter::new(jiffies());
		let mut pos = 0;

		assert_eq!(reporter.proc_read(&mut user, BUF, 7, &mut pos), Ok(7));

		let mut out = [0; 7];
		copy_from_user(&user, &mut out, BUF).unwrap();
		assert_eq!(&out, b"Elapsed");
		assert_eq!(pos, 0);
	}
}
