use core::fmt::{self, Write};

use alloc::string::String;
use alloc::vec::Vec;
use time::Duration;

use crate::collection::WrapQueue;
use crate::config::DMESG_SIZE;
use crate::interrupt::timer::{jiffies, jiffies_to_msecs};
use crate::sync::Locked;

pub struct Dmesg {
	line_start: bool,
	kern_buf: WrapQueue<u8, DMESG_SIZE>,
}

pub(super) static DMESG: Locked<Dmesg> = Locked::new(Dmesg::new());

impl Dmesg {
	pub const fn new() -> Self {
		Self {
			line_start: true,
			kern_buf: WrapQueue::with(0),
		}
	}

	fn stamp(&mut self) -> fmt::Result {
		// whole seconds of any u64 millisecond count fit in an i64.
		let msecs = jiffies_to_msecs(jiffies());
		let uptime = Duration::new((msecs / 1000) as i64, (msecs % 1000 * 1_000_000) as i32);

		self.line_start = false;
		write!(
			self,
			"[{:>5}.{:06}] ",
			uptime.whole_seconds(),
			uptime.subsec_microseconds()
		)
	}

	fn write_bytes(&mut self, bytes: &[u8]) {
		bytes.iter().for_each(|b| self.kern_buf.push(*b));
	}
}

impl Write for Dmesg {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		for line in s.split_inclusive('\n') {
			if self.line_start {
				self.stamp()?;
			}

			self.write_bytes(line.as_bytes());
			self.line_start = line.ends_with('\n');
		}

		Ok(())
	}
}

/// Snapshot of the kernel log, oldest line first.
pub fn dmesg() -> String {
	let dmesg = DMESG.lock();
	let (front, back) = dmesg.kern_buf.as_slices();

	let mut raw = Vec::with_capacity(front.len() + back.len());
	raw.extend_from_slice(front);
	raw.extend_from_slice(back);

	String::from_utf8_lossy(&raw).into_owned()
}

pub fn dmesg_clear() {
	let mut dmesg = DMESG.lock();

	dmesg.kern_buf.clear();
	dmesg.line_start = true;
}
