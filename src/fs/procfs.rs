//! In-memory `/proc` root.
//!
//! Entries are handler-backed files: nothing is stored, every read and write
//! is forwarded to the entry's [`ProcOps`]. Calls into one entry's handlers
//! are serialized by that entry's lock, so handlers may keep plain mutable
//! state.

use alloc::{boxed::Box, collections::BTreeMap, sync::Arc, vec, vec::Vec};

use crate::config::NAME_MAX;
use crate::mm::user::{copy_from_user, UserAddressSpace};
use crate::sync::Locked;
use crate::syscall::errno::Errno;

use super::vfs::{Permission, StatxMode};

pub const PROC_ROOT: &str = "/proc";

pub trait ProcOps: Send {
	/// Fills at most `count` bytes at user address `buf`.
	///
	/// returns the number of bytes produced, `0` means end of file.
	fn proc_read(
		&mut self,
		user: &mut UserAddressSpace,
		buf: usize,
		count: usize,
		pos: &mut usize,
	) -> Result<usize, Errno>;

	fn proc_write(
		&mut self,
		_user: &UserAddressSpace,
		_buf: usize,
		_count: usize,
		_pos: &mut usize,
	) -> Result<usize, Errno> {
		Err(Errno::EIO)
	}
}

struct ProcEntry {
	perm: Permission,
	ops: Locked<Box<dyn ProcOps>>,
}

static PROCFS_ROOT_DIR: Locked<BTreeMap<Vec<u8>, Arc<ProcEntry>>> = Locked::new(BTreeMap::new());

fn check_name(name: &[u8]) -> Result<(), Errno> {
	if name.len() > NAME_MAX {
		return Err(Errno::ENAMETOOLONG);
	}

	match name {
		b"" | b"." | b".." => Err(Errno::EINVAL),
		_ if name.contains(&b'/') => Err(Errno::EINVAL),
		_ => Ok(()),
	}
}

fn lookup(name: &[u8]) -> Result<Arc<ProcEntry>, Errno> {
	PROCFS_ROOT_DIR
		.lock()
		.get(name)
		.cloned()
		.ok_or(Errno::ENOENT)
}

/// Registers `/proc/<name>` backed by `ops`.
pub fn proc_create(name: &[u8], perm: Permission, ops: Box<dyn ProcOps>) -> Result<(), Errno> {
	check_name(name)?;

	let mut root = PROCFS_ROOT_DIR.lock();

	if root.contains_key(name) {
		return Err(Errno::EEXIST);
	}

	let entry = ProcEntry {
		perm,
		ops: Locked::new(ops),
	};

	root.insert(name.to_vec(), Arc::new(entry));

	Ok(())
}

/// Unregisters `/proc/<name>`. Removing an absent entry is a no-op.
///
/// a read already running on the entry completes, its handler is dropped
/// afterwards.
pub fn remove_proc_entry(name: &[u8]) {
	PROCFS_ROOT_DIR.lock().remove(name);
}

pub fn proc_read(
	name: &[u8],
	user: &mut UserAddressSpace,
	buf: usize,
	count: usize,
	pos: &mut usize,
) -> Result<usize, Errno> {
	let entry = lookup(name)?;

	if !entry.perm.readable() {
		return Err(Errno::EACCES);
	}

	// an empty read never reaches the handler.
	if count == 0 {
		return Ok(0);
	}

	let mut ops = entry.ops.lock();
	ops.proc_read(user, buf, count, pos)
}

pub fn proc_write(
	name: &[u8],
	user: &UserAddressSpace,
	buf: usize,
	count: usize,
	pos: &mut usize,
) -> Result<usize, Errno> {
	let entry = lookup(name)?;

	if !entry.perm.writable() {
		return Err(Errno::EACCES);
	}

	let mut ops = entry.ops.lock();
	ops.proc_write(user, buf, count, pos)
}

pub fn proc_stat(name: &[u8]) -> Result<StatxMode, Errno> {
	let entry = lookup(name)?;

	Ok(StatxMode::regular(entry.perm))
}

/// Names under the procfs root, sorted.
pub fn proc_list() -> Vec<Vec<u8>> {
	PROCFS_ROOT_DIR.lock().keys().cloned().collect()
}

/// One logical read, the way `cat` does it: reads through the user buffer
/// at `buf` until the entry reports end of file.
pub fn read_to_end(
	name: &[u8],
	user: &mut UserAddressSpace,
	buf: usize,
	count: usize,
) -> Result<Vec<u8>, Errno> {
	let mut contents = Vec::new();
	let mut chunk = vec![0; count];
	let mut pos = 0;

	loop {
		let n = proc_read(name, user, buf, count, &mut pos)?;
		if n == 0 {
			break;
		}

		copy_from_user(user, &mut chunk[..n], buf)?;
		contents.extend_from_slice(&chunk[..n]);
	}

	Ok(contents)
}

#[cfg(any(test, feature = "ktest"))]
pub(crate) fn clear() {
	let entries = core::mem::take(&mut *PROCFS_ROOT_DIR.lock());

	drop(entries);
}
