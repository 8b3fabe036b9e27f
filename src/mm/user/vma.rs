use core::ops::Bound::{Included, Unbounded};

use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;
use bitflags::bitflags;

use crate::syscall::errno::Errno;

bitflags! {
	#[derive(Clone, Copy, Debug, PartialEq, Eq)]
	pub struct AreaFlag: u32 {
		const Readable = (1 << 0);
		const Writable = (1 << 1);
	}
}

/// user memory area.
/// area is half-opened [start, end)
pub struct Area {
	pub start: usize,
	pub end: usize,
	pub flags: AreaFlag,
	data: Vec<u8>,
}

impl Area {
	fn new(start: usize, end: usize, flags: AreaFlag) -> Self {
		Self {
			start,
			end,
			flags,
			data: vec![0; end - start],
		}
	}

	pub fn contains(&self, addr: usize) -> bool {
		self.start <= addr && addr < self.end
	}

	fn is_overlap(&self, start: usize, end: usize) -> bool {
		start < self.end && self.start < end
	}

	pub(super) fn bytes(&self, start: usize, end: usize) -> &[u8] {
		&self.data[(start - self.start)..(end - self.start)]
	}

	pub(super) fn bytes_mut(&mut self, start: usize, end: usize) -> &mut [u8] {
		&mut self.data[(start - self.start)..(end - self.start)]
	}
}

/// Address space of the process issuing a syscall, as seen by the kernel.
///
/// Areas are backed by their own bytes; addresses outside every area are
/// unmapped and any access through them faults.
#[derive(Default)]
pub struct UserAddressSpace {
	areas: BTreeMap<usize, Area>,
}

impl UserAddressSpace {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn map(&mut self, start: usize, len: usize, flags: AreaFlag) -> Result<(), Errno> {
		let end = start.checked_add(len).ok_or(Errno::EINVAL)?;

		if len == 0 || self.areas.values().any(|a| a.is_overlap(start, end)) {
			return Err(Errno::EINVAL);
		}

		self.areas.insert(start, Area::new(start, end, flags));

		Ok(())
	}

	pub fn unmap(&mut self, start: usize) -> Result<(), Errno> {
		self.areas.remove(&start).map(|_| ()).ok_or(Errno::EINVAL)
	}

	pub fn find_area(&self, addr: usize) -> Option<&Area> {
		self.areas
			.range((Unbounded, Included(addr)))
			.next_back()
			.map(|(_, a)| a)
			.filter(|a| a.contains(addr))
	}

	pub(super) fn find_area_mut(&mut self, addr: usize) -> Option<&mut Area> {
		self.areas
			.range_mut((Unbounded, Included(addr)))
			.next_back()
			.map(|(_, a)| a)
			.filter(|a| a.contains(addr))
	}

	/// every byte of `[start, start + bytes)` is mapped with at least `flags`.
	pub fn query_flags_range(&self, start: usize, bytes: usize, flags: AreaFlag) -> bool {
		let end = match start.checked_add(bytes) {
			Some(x) => x,
			None => return false,
		};

		let mut curr = start;

		while curr < end {
			match self.find_area(curr) {
				Some(a) if a.flags.contains(flags) => curr = a.end,
				_ => return false,
			}
		}

		true
	}
}
