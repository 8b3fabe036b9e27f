pub mod procfs;
pub mod vfs;
