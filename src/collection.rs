mod wrap_queue;

pub use wrap_queue::WrapQueue;
