use crate::syscall::errno::Errno;

use super::verify::verify_region;
use super::vma::{AreaFlag, UserAddressSpace};

/// Copies `src` to user address `dst`.
///
/// the whole destination is verified first, on `EFAULT` nothing was written.
pub fn copy_to_user(space: &mut UserAddressSpace, dst: usize, src: &[u8]) -> Result<(), Errno> {
	verify_region(space, dst, src.len(), AreaFlag::Writable)?;

	let mut curr = dst;
	let mut rest = src;

	while !rest.is_empty() {
		let area = space.find_area_mut(curr).ok_or(Errno::EFAULT)?;
		let end = area.end.min(curr + rest.len());
		let (head, tail) = rest.split_at(end - curr);

		area.bytes_mut(curr, end).copy_from_slice(head);

		curr = end;
		rest = tail;
	}

	Ok(())
}

/// Copies `dst.len()` bytes from user address `src`.
pub fn copy_from_user(space: &UserAddressSpace, dst: &mut [u8], src: usize) -> Result<(), Errno> {
	verify_region(space, src, dst.len(), AreaFlag::Readable)?;

	let mut curr = src;
	let mut rest = dst;

	while !rest.is_empty() {
		let area = space.find_area(curr).ok_or(Errno::EFAULT)?;
		let end = area.end.min(curr + rest.len());
		let (head, tail) = core::mem::take(&mut rest).split_at_mut(end - curr);

		head.copy_from_slice(area.bytes(curr, end));

		curr = end;
		rest = tail;
	}

	Ok(())
}
