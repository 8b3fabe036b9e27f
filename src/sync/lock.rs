pub mod spinlock;

#[derive(Debug)]
pub struct TryLockFail;
