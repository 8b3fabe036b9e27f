use bitflags::bitflags;

bitflags! {
	#[derive(Clone, Copy, Debug, PartialEq, Eq)]
	pub struct Permission: u32 {
		const S_ISUID = 0o4000;
		const S_ISGID = 0o2000;
		const S_ISVTX = 0o1000;
		const S_IRUSR = 0o0400;
		const S_IWUSR = 0o0200;
		const S_IXUSR = 0o0100;
		const S_IRGRP = 0o0040;
		const S_IWGRP = 0o0020;
		const S_IXGRP = 0o0010;
		const S_IROTH = 0o0004;
		const S_IWOTH = 0o0002;
		const S_IXOTH = 0o0001;
	}
}

impl Permission {
	pub const ANY_READ: Self = Self::S_IRUSR.union(Self::S_IRGRP).union(Self::S_IROTH);
	pub const ANY_WRITE: Self = Self::S_IWUSR.union(Self::S_IWGRP).union(Self::S_IWOTH);

	pub fn readable(self) -> bool {
		self.intersects(Self::ANY_READ)
	}

	pub fn writable(self) -> bool {
		self.intersects(Self::ANY_WRITE)
	}
}

#[cfg(test)]
mod tests {
	use super::Permission;

	#[test]
	fn mode_0666_is_world_read_write() {
		let perm = Permission::from_bits_truncate(0o666);

		assert!(perm.contains(Permission::ANY_READ | Permission::ANY_WRITE));
		assert!(!perm.intersects(Permission::S_IXUSR | Permission::S_IXGRP | Permission::S_IXOTH));
	}

	#[test]
	fn access_classes() {
		assert!(Permission::S_IRGRP.readable());
		assert!(!Permission::S_IRGRP.writable());
		assert!(!Permission::empty().readable());
	}
}
