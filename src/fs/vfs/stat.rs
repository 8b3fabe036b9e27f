use super::Permission;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatxMode(pub u16);

impl StatxMode {
	pub const TYPE_MASK: u16 = 0o170000;

	pub const REGULAR: u16 = 0o100000;

	pub fn get_perm(&self) -> u16 {
		self.0 & !Self::TYPE_MASK
	}

	pub fn get_type(&self) -> u16 {
		self.0 & Self::TYPE_MASK
	}

	pub fn new(typ: u16, perm: u16) -> Self {
		Self((typ & Self::TYPE_MASK) | (perm & !Self::TYPE_MASK))
	}

	pub fn regular(perm: Permission) -> Self {
		Self::new(Self::REGULAR, perm.bits() as u16)
	}
}
