pub mod errno;
