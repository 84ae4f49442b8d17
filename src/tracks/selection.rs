use super::{TrackInfo, position_of};
use crate::error::AppError;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// Track choices given on the command line
#[derive(Debug, Clone, Default)]
pub struct TrackRequest {
    pub audio_index: Option<u32>,
    pub subtitle_index: Option<u32>,
    pub external_subs: Option<PathBuf>,
}

/// Where burned-in subtitles come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtitleSource {
    /// Subtitle file next to the video
    External(PathBuf),
    /// Embedded subtitle stream, by global stream index
    Embedded(u32),
}

/// Final track selection for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub audio_index: u32,
    pub subtitle: Option<SubtitleSource>,
}

/// Resolve the selection from command line choices, prompting for the rest.
///
/// An external subtitle file always wins over an embedded track. The
/// subtitle prompt only runs when neither was given.
pub fn resolve_selection<R: BufRead, W: Write>(
    request: &TrackRequest,
    audio_tracks: &[TrackInfo],
    subtitle_tracks: &[TrackInfo],
    prompter: &mut TrackPrompter<R, W>,
) -> Result<SelectionResult, AppError> {
    if audio_tracks.is_empty() {
        return Err(AppError::NoAudioTracks);
    }

    let audio_index = match request.audio_index {
        Some(index) if position_of(audio_tracks, index).is_some() => index,
        Some(index) => return Err(AppError::UnknownAudioTrack(index)),
        None => prompter.select_audio(audio_tracks)?,
    };

    let subtitle = match (&request.external_subs, request.subtitle_index) {
        (Some(path), _) => Some(SubtitleSource::External(path.clone())),
        (None, Some(index)) => Some(SubtitleSource::Embedded(index)),
        (None, None) => prompter
            .select_subtitle(subtitle_tracks)?
            .map(SubtitleSource::Embedded),
    };

    debug!("Selected audio 0:{}, subtitles {:?}", audio_index, subtitle);
    Ok(SelectionResult {
        audio_index,
        subtitle,
    })
}

/// Console prompts for picking tracks
pub struct TrackPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TrackPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for an audio track, returning its global stream index
    pub fn select_audio(&mut self, tracks: &[TrackInfo]) -> Result<u32, AppError> {
        if let [only] = tracks {
            writeln!(self.output, "Detected 1 AUDIO track!")?;
            return Ok(only.index);
        }

        writeln!(
            self.output,
            "Detected ({}) the following AUDIO tracks:",
            tracks.len()
        )?;
        self.list(tracks)?;

        let prompt = format!(
            "Select which audio track (0 to {}): ",
            tracks.len().saturating_sub(1)
        );
        loop {
            let line = self.ask(&prompt)?;
            match line.trim().parse::<i64>() {
                Ok(choice) => match usize::try_from(choice).ok().and_then(|i| tracks.get(i)) {
                    Some(track) => return Ok(track.index),
                    None => writeln!(self.output, "Invalid choice. Try again.")?,
                },
                Err(_) => writeln!(self.output, "Invalid input. Try again.")?,
            }
        }
    }

    /// Ask for an embedded subtitle track; `None` means no burn-in
    pub fn select_subtitle(&mut self, tracks: &[TrackInfo]) -> Result<Option<u32>, AppError> {
        if tracks.is_empty() {
            writeln!(self.output, "\nNo embedded subtitle tracks found.")?;
            return Ok(None);
        }

        writeln!(self.output, "\nDetected the following SUBTITLE tracks:")?;
        self.list(tracks)?;
        writeln!(
            self.output,
            "Enter -1 (or leave blank) if you do not want to burn any embedded subtitles."
        )?;

        let prompt = format!(
            "Select which subtitle track (0 to {} or -1): ",
            tracks.len() - 1
        );
        loop {
            let line = self.ask(&prompt)?;
            let line = match line.trim() {
                "" => "-1",
                other => other,
            };
            match line.parse::<i64>() {
                Ok(-1) => return Ok(None),
                Ok(choice) => match usize::try_from(choice).ok().and_then(|i| tracks.get(i)) {
                    Some(track) => return Ok(Some(track.index)),
                    None => writeln!(self.output, "Invalid choice. Try again.")?,
                },
                Err(_) => writeln!(self.output, "Invalid input. Try again.")?,
            }
        }
    }

    fn list(&mut self, tracks: &[TrackInfo]) -> Result<(), AppError> {
        for (i, track) in tracks.iter().enumerate() {
            writeln!(self.output, "  [{}]  {}", i, track)?;
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn track(index: u32, language: &str) -> TrackInfo {
        TrackInfo {
            index,
            codec: "aac".to_string(),
            language: language.to_string(),
            title: String::new(),
        }
    }

    fn prompter(input: &str) -> TrackPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TrackPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(p: &TrackPrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&p.output).to_string()
    }

    #[test]
    fn test_single_audio_track_is_auto_selected() {
        let mut p = prompter("");
        assert_eq!(p.select_audio(&[track(3, "eng")]).unwrap(), 3);
        assert!(printed(&p).contains("Detected 1 AUDIO track!"));
    }

    #[test]
    fn test_audio_prompt_rejects_bad_input_until_valid() {
        let tracks = [track(1, "jpn"), track(2, "eng")];
        let mut p = prompter("abc\n5\n-1\n\n1\n");
        assert_eq!(p.select_audio(&tracks).unwrap(), 2);

        let out = printed(&p);
        assert_eq!(out.matches("Invalid input. Try again.").count(), 2);
        assert_eq!(out.matches("Invalid choice. Try again.").count(), 2);
        assert!(out.contains("[0]  ff_index=0:1, codec=aac, lang=jpn, title="));
        assert!(out.contains("Select which audio track (0 to 1): "));
    }

    #[test]
    fn test_audio_prompt_closed_input() {
        let tracks = [track(1, "jpn"), track(2, "eng")];
        let mut p = prompter("x\n");
        assert!(matches!(
            p.select_audio(&tracks),
            Err(AppError::InputClosed)
        ));
    }

    #[test]
    fn test_subtitle_prompt_blank_means_none() {
        let mut p = prompter("\n");
        assert_eq!(p.select_subtitle(&[track(4, "eng")]).unwrap(), None);
    }

    #[test]
    fn test_subtitle_prompt_minus_one_means_none() {
        let mut p = prompter("  -1 \n");
        assert_eq!(p.select_subtitle(&[track(4, "eng")]).unwrap(), None);
    }

    #[test]
    fn test_subtitle_prompt_reprompts() {
        let subs = [track(4, "eng"), track(6, "por")];
        let mut p = prompter("two\n2\n-2\n1\n");
        assert_eq!(p.select_subtitle(&subs).unwrap(), Some(6));
        let out = printed(&p);
        assert_eq!(out.matches("Invalid input. Try again.").count(), 1);
        assert_eq!(out.matches("Invalid choice. Try again.").count(), 2);
    }

    #[test]
    fn test_no_subtitle_tracks_skips_prompt() {
        let mut p = prompter("");
        assert_eq!(p.select_subtitle(&[]).unwrap(), None);
        assert!(printed(&p).contains("No embedded subtitle tracks found."));
    }

    #[test]
    fn test_resolve_requires_audio() {
        let mut p = prompter("");
        let err = resolve_selection(&TrackRequest::default(), &[], &[], &mut p).unwrap_err();
        assert!(matches!(err, AppError::NoAudioTracks));
    }

    #[test]
    fn test_resolve_rejects_unknown_audio_index() {
        let mut p = prompter("");
        let request = TrackRequest {
            audio_index: Some(9),
            ..Default::default()
        };
        let err = resolve_selection(&request, &[track(1, "eng")], &[], &mut p).unwrap_err();
        assert!(matches!(err, AppError::UnknownAudioTrack(9)));
    }

    #[test]
    fn test_resolve_external_subs_override_embedded() {
        let mut p = prompter("");
        let request = TrackRequest {
            audio_index: Some(1),
            subtitle_index: Some(2),
            external_subs: Some(PathBuf::from("movie.srt")),
        };
        let selection =
            resolve_selection(&request, &[track(1, "eng")], &[track(2, "eng")], &mut p).unwrap();
        assert_eq!(
            selection.subtitle,
            Some(SubtitleSource::External(PathBuf::from("movie.srt")))
        );
        assert!(p.output.is_empty());
    }

    #[test]
    fn test_resolve_flags_skip_prompts() {
        let mut p = prompter("");
        let request = TrackRequest {
            audio_index: Some(2),
            subtitle_index: Some(5),
            external_subs: None,
        };
        let selection = resolve_selection(
            &request,
            &[track(1, "jpn"), track(2, "eng")],
            &[track(4, "eng")],
            &mut p,
        )
        .unwrap();
        assert_eq!(
            selection,
            SelectionResult {
                audio_index: 2,
                subtitle: Some(SubtitleSource::Embedded(5)),
            }
        );
    }

    #[test]
    fn test_resolve_prompts_for_missing_choices() {
        let mut p = prompter("0\n\n");
        let selection = resolve_selection(
            &TrackRequest::default(),
            &[track(1, "jpn"), track(2, "eng")],
            &[track(4, "eng")],
            &mut p,
        )
        .unwrap();
        assert_eq!(selection.audio_index, 1);
        assert_eq!(selection.subtitle, None);
    }
}
