pub mod command_builder;
pub mod ffmpeg;
pub mod profile;

pub use command_builder::{TranscodeCommand, TranscodeParams};
pub use ffmpeg::run_transcode;
pub use profile::DeviceProfile;
