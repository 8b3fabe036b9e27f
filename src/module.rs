//! Loadable kernel modules.
//!
//! A module describes itself with [`kernel_module!`]; the loader runs its
//! `init` hook and keeps it registered until [`cleanup_kernel_module`] drops
//! the last reference, which runs `cleanup`.

use core::sync::atomic::{AtomicBool, Ordering};

use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::sync::Locked;
use crate::syscall::errno::Errno;
use crate::{pr_info, pr_warn};

#[macro_export]
macro_rules! kernel_module {
	{$($fields:tt)*} => {
		#[used]
		pub static __MODULE: $crate::module::KernelModuleInfo = $crate::module::KernelModuleInfo {
			$($fields)*
		};
	};
}

pub struct KernelModuleInfo {
	pub name: &'static [u8],
	pub init: fn(this: Arc<KernelModule>) -> Result<(), Errno>,
	pub cleanup: Option<fn()>,
	pub license: &'static str,
	pub description: &'static str,
	pub author: &'static str,
}

/// `modinfo` view of a loaded module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModInfo {
	pub license: &'static str,
	pub description: &'static str,
	pub author: &'static str,
}

pub struct KernelModule {
	info: &'static KernelModuleInfo,
	live: AtomicBool,
}

impl Drop for KernelModule {
	fn drop(&mut self) {
		if !self.live.load(Ordering::Acquire) {
			return;
		}

		if let Some(cleanup) = self.info.cleanup {
			(cleanup)()
		}
	}
}

impl KernelModule {
	fn new(info: &'static KernelModuleInfo) -> Arc<Self> {
		Arc::new(Self {
			info,
			live: AtomicBool::new(false),
		})
	}

	pub fn get_info(&self) -> &'static KernelModuleInfo {
		self.info
	}

	pub fn name(&self) -> &'static [u8] {
		self.info.name
	}
}

static LOADED_MODULES: Locked<BTreeMap<&'static [u8], Arc<KernelModule>>> =
	Locked::new(BTreeMap::new());

static TAINTED: AtomicBool = AtomicBool::new(false);

const GPL_COMPATIBLE: [&str; 6] = [
	"GPL",
	"GPL v2",
	"GPL and additional rights",
	"Dual BSD/GPL",
	"Dual MIT/GPL",
	"Dual MPL/GPL",
];

fn license_is_gpl_compatible(license: &str) -> bool {
	GPL_COMPATIBLE.contains(&license)
}

fn name_str(name: &[u8]) -> &str {
	core::str::from_utf8(name).unwrap_or("?")
}

/// Runs `info.init` and registers the module.
///
/// a failing `init` leaves nothing registered and `cleanup` is not run.
/// `init` runs with the registry locked and must not call back into it.
pub fn load_kernel_module(info: &'static KernelModuleInfo) -> Result<(), Errno> {
	let mut loaded_modules = LOADED_MODULES.lock();

	if loaded_modules.contains_key(info.name) {
		return Err(Errno::EEXIST);
	}

	if !license_is_gpl_compatible(info.license) {
		pr_warn!(
			"{}: module license '{}' taints kernel.",
			name_str(info.name),
			info.license
		);
		TAINTED.store(true, Ordering::Release);
	}

	let module = KernelModule::new(info);

	if let Err(e) = (info.init)(module.clone()) {
		pr_info!("{}: init failed: {}", name_str(info.name), e);
		return Err(e);
	}

	module.live.store(true, Ordering::Release);
	loaded_modules.insert(info.name, module);

	Ok(())
}

/// Unregisters `name`; `cleanup` runs once the last reference is gone.
pub fn cleanup_kernel_module(name: &[u8]) -> Result<(), Errno> {
	let mut loaded_modules = LOADED_MODULES.lock();

	let module = loaded_modules.remove(name).ok_or(Errno::ENOENT)?;

	match Arc::try_unwrap(module) {
		Ok(module) => {
			drop(loaded_modules);
			drop(module);
			Ok(())
		}
		Err(module) => {
			loaded_modules.insert(module.name(), module);
			Err(Errno::EBUSY)
		}
	}
}

pub fn modinfo(name: &[u8]) -> Option<ModInfo> {
	LOADED_MODULES.lock().get(name).map(|module| {
		let info = module.get_info();

		ModInfo {
			license: info.license,
			description: info.description,
			author: info.author,
		}
	})
}

pub fn loaded_modules() -> Vec<&'static [u8]> {
	LOADED_MODULES.lock().keys().copied().collect()
}

pub fn is_tainted() -> bool {
	TAINTED.load(Ordering::Acquire)
}

/// Unloads every module, running their `cleanup` hooks.
#[cfg(any(test, feature = "ktest"))]
pub(crate) fn clear() {
	let modules = core::mem::take(&mut *LOADED_MODULES.lock());

	drop(modules);
	TAINTED.store(false, Ordering::Release);
}
