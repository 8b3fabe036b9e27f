#[macro_export]
macro_rules! pr_err {
	($($args:tt)*) => {
		$crate::printk::__printk(
			$crate::fmt_with!(
				WITH(ln)
				WITH(bg 41)
				FMT($($args)*)
			)
		)
	};
}

#[macro_export]
macro_rules! pr_warn {
	($($args:tt)*) => {
		$crate::printk::__printk(
			$crate::fmt_with!(
				WITH(ln)
				WITH(bg 43)
				FMT($($args)*)
			)
		)
	};
}

#[macro_export]
macro_rules! pr_info {
	($($args:tt)*) => {
		$crate::printk::__printk(
			$crate::fmt_with!(
				WITH(ln)
				FMT($($args)*)
			)
		)
	};
}

#[macro_export]
macro_rules! printkln {
	($($args:tt)*) => {
		$crate::printk::__printk(
			$crate::fmt_with!(
				WITH(ln)
				FMT($($args)*)
			)
		)
	};
}

#[macro_export]
macro_rules! printk {
	($($args:tt)*) => {
		$crate::printk::__printk(
			$crate::fmt_with!(
				FMT($($args)*)
			)
		)
	};
}

#[macro_export]
macro_rules! fmt_with {
	(WITH(bg $color:literal)) => { concat!("\x1b[", $color, "m") };

	(END(bg $color:literal)) => { "\x1b[49m" };

	(WITH(ln)) => { "" };

	(END(ln)) => { "\n" };

	(HANDLE FMT($fmt:expr)) => { $fmt };

	(HANDLE WITH($($x:tt)+) $(WITH($($xs:tt)+))* FMT($fmt:expr)) => {
		concat!(
			$crate::fmt_with!(WITH($($x)+)),
			$crate::fmt_with!(HANDLE $(WITH($($xs)+))* FMT($fmt)),
			$crate::fmt_with!(END($($x)+))
		)
	};

	($(WITH($($xs:tt)+))* FMT($fmt:expr)) => {
		$crate::fmt_with!($(WITH($($xs)+))* FMT($fmt,))
	};

	($(WITH($($xs:tt)+))* FMT($fmt:expr, $($args:tt)*)) => {
		core::format_args!($crate::fmt_with!(HANDLE $(WITH($($xs)+))* FMT($fmt)), $($args)*)
	};
}

use core::fmt::{Arguments, Write};

use super::dmesg::DMESG;

/// Appends one message to the kernel log.
///
/// never call printk from a `Display` impl that is itself being printed,
/// the log lock is held while formatting.
pub fn __printk(arg: Arguments) {
	// the ring drops the oldest bytes instead of failing, formatting is the
	// only error source left and a half written line is still worth keeping.
	let _ = DMESG.lock().write_fmt(arg);
}

#[cfg(test)]
mod tests {
	use kfs_macro::kernel_test;

	use crate::interrupt::timer::{advance_jiffies, set_jiffies, HZ};
	use crate::printk::dmesg;

	#[kernel_test(printk)]
	fn lines_carry_uptime_stamp() {
		pr_info!("first {}", 1);
		advance_jiffies(1500);
		pr_info!("second");

		assert_eq!(dmesg(), "[    0.000000] first 1\n[    1.500000] second\n");
	}

	#[kernel_test(printk)]
	fn stamp_near_counter_wrap() {
		let j = usize::MAX - 10;
		let msecs = j as u128 * 1000 / HZ as u128;

		set_jiffies(j);
		pr_info!("late");

		assert_eq!(
			dmesg(),
			std::format!("[{:>5}.{:06}] late\n", msecs / 1000, msecs % 1000 * 1000)
		);
	}

	#[kernel_test(printk)]
	fn partial_lines_are_stamped_once() {
		printk!("a");
		printk!("b");
		printkln!("c");

		assert_eq!(dmesg(), "[    0.000000] abc\n");
	}

	#[kernel_test(printk)]
	fn warn_and_err_are_colored() {
		pr_warn!("careful");
		pr_err!("broken");

		assert_eq!(
			dmesg(),
			"[    0.000000] \x1b[43mcareful\x1b[49m\n[    0.000000] \x1b[41mbroken\x1b[49m\n"
		);
	}
}
