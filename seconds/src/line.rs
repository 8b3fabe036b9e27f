use core::fmt::{self, Write};

use kernel::syscall::errno::Errno;

/// Capacity of a formatted line.
pub const LINE_MAX: usize = 128;

/// `"Elapsed seconds: N\n"`, formatted on the stack.
pub struct OutputLine {
	buf: [u8; LINE_MAX],
	len: usize,
}

impl OutputLine {
	pub fn new(seconds: usize) -> Result<Self, Errno> {
		let mut line = Self {
			buf: [0; LINE_MAX],
			len: 0,
		};

		writeln!(line, "Elapsed seconds: {}", seconds).map_err(|_| Errno::ERANGE)?;

		Ok(line)
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.buf[..self.len]
	}
}

impl Write for OutputLine {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		let end = self.len + s.len();

		if end > LINE_MAX {
			return Err(fmt::Error);
		}

		self.buf[self.len..end].copy_from_slice(s.as_bytes());
		self.len = end;

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use core::fmt::Write;

	use super::{OutputLine, LINE_MAX};

	#[test]
	fn format() {
		assert_eq!(OutputLine::new(0).unwrap().as_bytes(), b"Elapsed seconds: 0\n");
		assert_eq!(OutputLine::new(42).unwrap().as_bytes(), b"Elapsed seconds: 42\n");
	}

	#[test]
	fn widest_value_fits() {
		let line = OutputLine::new(usize::MAX).unwrap();
		let text = std::format!("Elapsed seconds: {}\n", usize::MAX);

		assert_eq!(line.as_bytes(), text.as_bytes());
	}

	#[test]
	fn overflow_is_rejected_without_partial_write() {
		let mut line = OutputLine::new(1).unwrap();
		let before = line.as_bytes().len();

		assert!(line.write_str(&"x".repeat(LINE_MAX)).is_err());
		assert_eq!(line.as_bytes().len(), before);
	}
}
