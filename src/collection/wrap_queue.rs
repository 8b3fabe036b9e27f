#[derive(PartialEq)]
enum State {
	Empty,
	Full,
	Avail,
}

/// Fixed capacity ring. Pushing into a full queue drops the oldest item.
pub struct WrapQueue<T, const N: usize> {
	data: [T; N],
	head: usize,
	tail: usize,
	state: State,
}

impl<T: Copy, const CAPACITY: usize> WrapQueue<T, CAPACITY> {
	pub const fn with(value: T) -> Self {
		Self {
			data: [value; CAPACITY],
			head: 0,
			tail: 0,
			state: State::Empty,
		}
	}
}

impl<T, const CAPACITY: usize> WrapQueue<T, CAPACITY> {
	fn circular_next(n: usize) -> usize {
		(n + 1) % CAPACITY
	}

	pub fn full(&self) -> bool {
		self.state == State::Full
	}

	pub fn clear(&mut self) {
		self.head = 0;
		self.tail = 0;
		self.state = State::Empty;
	}

	pub fn push(&mut self, item: T) {
		if self.full() {
			self.head = Self::circular_next(self.head);
		}

		self.data[self.tail] = item;
		self.tail = Self::circular_next(self.tail);

		self.state = match self.tail == self.head {
			true => State::Full,
			false => State::Avail,
		};
	}

	/// Contents as at most two slices, oldest first.
	pub fn as_slices(&self) -> (&[T], &[T]) {
		match self.state {
			State::Empty => (&[], &[]),
			_ if self.head < self.tail => (&self.data[self.head..self.tail], &[]),
			_ => (&self.data[self.head..], &self.data[..self.tail]),
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;

	use super::WrapQueue;

	fn collect<const N: usize>(q: &WrapQueue<u8, N>) -> Vec<u8> {
		let (a, b) = q.as_slices();
		a.iter().chain(b.iter()).copied().collect()
	}

	#[test]
	fn push_keeps_order() {
		let mut q = WrapQueue::<u8, 4>::with(0);

		assert!(collect(&q).is_empty());
		q.push(1);
		q.push(2);
		assert!(!q.full());
		assert_eq!(collect(&q), [1, 2]);
	}

	#[test]
	fn overflow_drops_oldest() {
		let mut q = WrapQueue::<u8, 3>::with(0);

		for i in 1..=5 {
			q.push(i);
		}

		assert!(q.full());
		assert_eq!(collect(&q), [3, 4, 5]);
	}

	#[test]
	fn slices_follow_wrap_around() {
		let mut q = WrapQueue::<u8, 4>::with(0);

		for i in 1..=6 {
			q.push(i);
		}

		assert_eq!(q.as_slices(), (&[3, 4][..], &[5, 6][..]));
		assert_eq!(collect(&q), [3, 4, 5, 6]);

		q.clear();
		assert!(collect(&q).is_empty());
	}
}
