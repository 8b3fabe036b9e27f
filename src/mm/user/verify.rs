use crate::syscall::errno::Errno;

use super::vma::{AreaFlag, UserAddressSpace};

pub fn verify_region(
	space: &UserAddressSpace,
	buf_ptr: usize,
	len: usize,
	flags: AreaFlag,
) -> Result<(), Errno> {
	if !space.query_flags_range(buf_ptr, len, flags) {
		return Err(Errno::EFAULT);
	}

	Ok(())
}
