pub mod selection;

pub use selection::{SelectionResult, SubtitleSource, TrackPrompter, TrackRequest, resolve_selection};

use std::fmt;

/// Audio or subtitle track of the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    /// Global stream index, as used in `-map 0:<index>`
    pub index: u32,
    pub codec: String,
    pub language: String,
    pub title: String,
}

impl fmt::Display for TrackInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ff_index=0:{}, codec={}, lang={}, title={}",
            self.index, self.codec, self.language, self.title
        )
    }
}

/// Position of a stream index among `tracks`
pub fn position_of(tracks: &[TrackInfo], index: u32) -> Option<usize> {
    tracks.iter().position(|t| t.index == index)
}
