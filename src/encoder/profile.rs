/// Fixed encoding settings for a target playback device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Output width; height follows the aspect ratio in even steps
    pub width: u32,
    pub video_codec: &'static str,
    pub h264_profile: &'static str,
    pub h264_level: &'static str,
    pub video_bitrate: &'static str,
    pub max_rate: &'static str,
    pub buffer_size: &'static str,
    pub frame_rate: &'static str,
    pub audio_codec: &'static str,
    pub audio_bitrate: &'static str,
    pub audio_channels: u8,
    /// Container extension for derived output paths
    pub extension: &'static str,
}

impl DeviceProfile {
    /// PlayStation Portable: H.264 baseline 3.0 at 480 wide, ~768 kbps, AAC stereo
    pub const PSP: DeviceProfile = DeviceProfile {
        width: 480,
        video_codec: "libx264",
        h264_profile: "baseline",
        h264_level: "3.0",
        video_bitrate: "768k",
        max_rate: "768k",
        buffer_size: "2000k",
        frame_rate: "29.97",
        audio_codec: "aac",
        audio_bitrate: "128k",
        audio_channels: 2,
        extension: "mp4",
    };

    pub fn scale_filter(&self) -> String {
        format!("scale={}:-2", self.width)
    }

    /// Encoder arguments placed after the filter graph
    pub fn encoding_args(&self) -> Vec<String> {
        vec![
            "-c:v".to_string(),
            self.video_codec.to_string(),
            "-profile:v".to_string(),
            self.h264_profile.to_string(),
            "-level:v".to_string(),
            self.h264_level.to_string(),
            "-b:v".to_string(),
            self.video_bitrate.to_string(),
            "-maxrate".to_string(),
            self.max_rate.to_string(),
            "-bufsize".to_string(),
            self.buffer_size.to_string(),
            "-r".to_string(),
            self.frame_rate.to_string(),
            "-c:a".to_string(),
            self.audio_codec.to_string(),
            "-b:a".to_string(),
            self.audio_bitrate.to_string(),
            "-ac".to_string(),
            self.audio_channels.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_psp_profile() {
        let psp = DeviceProfile::PSP;
        assert_eq!(psp.scale_filter(), "scale=480:-2");

        let args = psp.encoding_args();
        assert_eq!(args.len(), 20);
        assert_eq!(&args[0..2], ["-c:v", "libx264"]);
        assert_eq!(&args[18..20], ["-ac", "2"]);
    }
}
