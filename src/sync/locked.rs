use core::{
	cell::UnsafeCell,
	ops::{Deref, DerefMut},
};

use super::lock::{spinlock::SpinLock, TryLockFail};

/// Spin-lock protected value, usable in `static`s.
#[derive(Debug)]
pub struct Locked<T: ?Sized> {
	inner: SpinLock,
	value: UnsafeCell<T>,
}

unsafe impl<T: ?Sized + Send> Send for Locked<T> {}
unsafe impl<T: ?Sized + Send> Sync for Locked<T> {}

impl<T> Locked<T> {
	pub const fn new(value: T) -> Self {
		Self {
			inner: SpinLock::new(),
			value: UnsafeCell::new(value),
		}
	}
}

impl<T: ?Sized> Locked<T> {
	pub fn lock(&self) -> LockedGuard<'_, T> {
		self.inner.lock();
		unsafe { LockedGuard::new(self) }
	}

	pub fn try_lock(&self) -> Result<LockedGuard<'_, T>, TryLockFail> {
		self.inner
			.try_lock()
			.map(|_| unsafe { LockedGuard::new(self) })
	}
}

pub struct LockedGuard<'lock, T: ?Sized> {
	locked: &'lock Locked<T>,
}

impl<'lock, T: ?Sized> LockedGuard<'lock, T> {
	/// # Safety
	///
	/// the caller must hold `locked.inner`.
	pub unsafe fn new(locked: &'lock Locked<T>) -> Self {
		Self { locked }
	}
}

impl<'lock, T: ?Sized> Drop for LockedGuard<'lock, T> {
	fn drop(&mut self) {
		self.locked.inner.unlock()
	}
}

impl<'lock, T: ?Sized> Deref for LockedGuard<'lock, T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		unsafe { &*self.locked.value.get() }
	}
}

impl<'lock, T: ?Sized> DerefMut for LockedGuard<'lock, T> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		unsafe { &mut *self.locked.value.get() }
	}
}

#[cfg(test)]
mod tests {
	use super::Locked;

	#[test]
	fn try_lock_fails_while_held() {
		let locked = Locked::new(1);

		let mut guard = locked.lock();
		*guard += 1;
		assert!(locked.try_lock().is_err());
		drop(guard);

		assert_eq!(*locked.try_lock().unwrap(), 2);
	}
}
