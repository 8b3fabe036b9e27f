#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(all(feature = "ktest", not(test)))]
extern crate std;

// lets `#[kernel_test]` expansions name this crate as `::kernel` from inside.
extern crate self as kernel;

pub mod collection;
pub mod config;
pub mod fs;
pub mod interrupt;
pub mod mm;
pub mod module;
pub mod printk;
pub mod sync;
pub mod syscall;

#[cfg(any(test, feature = "ktest"))]
pub mod test;
