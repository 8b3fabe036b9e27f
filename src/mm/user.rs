mod copy;
mod verify;
mod vma;

pub use copy::{copy_from_user, copy_to_user};
pub use verify::verify_region;
pub use vma::{Area, AreaFlag, UserAddressSpace};
