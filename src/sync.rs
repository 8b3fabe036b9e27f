mod lock;
mod locked;

pub use lock::TryLockFail;
pub use locked::{Locked, LockedGuard};
