use crate::analyzer::ffprobe::{CodecType, StreamDescriptor};
use crate::tracks::TrackInfo;

/// Split probed streams into audio and subtitle tracks.
///
/// Both lists keep the order of the probe report. Video, data and
/// attachment streams are dropped.
pub fn classify(streams: &[StreamDescriptor]) -> (Vec<TrackInfo>, Vec<TrackInfo>) {
    let mut audio_tracks = Vec::new();
    let mut subtitle_tracks = Vec::new();

    for stream in streams {
        match stream.codec_type {
            CodecType::Audio => audio_tracks.push(TrackInfo::from(stream)),
            CodecType::Subtitle => subtitle_tracks.push(TrackInfo::from(stream)),
            _ => {}
        }
    }

    (audio_tracks, subtitle_tracks)
}

impl From<&StreamDescriptor> for TrackInfo {
    fn from(stream: &StreamDescriptor) -> Self {
        Self {
            index: stream.index,
            codec: stream
                .codec_name
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            language: stream
                .tags
                .language
                .clone()
                .unwrap_or_else(|| "und".to_string()),
            title: stream.tags.title.clone().unwrap_or_default(),
        }
    }
}
