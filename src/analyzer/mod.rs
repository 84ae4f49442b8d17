pub mod classifier;
pub mod ffprobe;

pub use classifier::classify;
pub use ffprobe::probe;
