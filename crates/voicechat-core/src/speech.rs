//! Speech capabilities
//!
//! The platform is probed once at startup and the result is installed behind
//! these traits. [`NoSpeech`] stands in for whatever is missing.

use crate::error::SpeechError;

/// Speech-to-text. Results arrive through the platform's callbacks, which
/// the binding forwards to [`crate::ChatController::on_transcript`].
pub trait SpeechInput {
    fn is_supported(&self) -> bool;

    /// Begin a single, non-continuous recognition session
    fn start(&self) -> Result<(), SpeechError>;

    fn stop(&self);
}

/// Text-to-speech, fire-and-forget
pub trait SpeechOutput {
    fn is_supported(&self) -> bool;

    fn speak(&self, text: &str, lang: &str);
}

/// No-op capability for platforms without speech support
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpeech;

impl SpeechInput for NoSpeech {
    fn is_supported(&self) -> bool {
        false
    }

    fn start(&self) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn stop(&self) {}
}

impl SpeechOutput for NoSpeech {
    fn is_supported(&self) -> bool {
        false
    }

    fn speak(&self, _text: &str, _lang: &str) {}
}
