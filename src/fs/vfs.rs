mod inode;
mod stat;

pub use inode::Permission;
pub use stat::StatxMode;
