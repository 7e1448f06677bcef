// Export - JSON save/load of a composition
// The document is {bpm, notes}; colors are re-derived on load, never stored

use crate::model::note::Note;
use serde::{Deserialize, Serialize};

/// Export error types
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// The exported/imported composition document
///
/// Wire format: `{"bpm": <integer>, "notes": [{"key": <grade>, "octave": <integer>}, ...]}`.
/// Decoding then re-encoding reproduces an equivalent document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteExport {
    pub bpm: u32,
    pub notes: Vec<Note>,
}

impl NoteExport {
    pub fn new(bpm: u32, notes: Vec<Note>) -> Self {
        Self { bpm, notes }
    }

    /// Encode the document as JSON
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a document from JSON
    ///
    /// A malformed payload is reported without partially applying anything;
    /// note colors come back re-derived from key and octave.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let document: NoteExport = serde_json::from_str(json)?;

        if document.bpm == 0 {
            return Err(ExportError::InvalidDocument(
                "BPM must be at least 1".to_string(),
            ));
        }

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::color::NoteColor;
    use crate::model::key::Key;

    #[test]
    fn test_round_trip() {
        let document = NoteExport::new(
            120,
            vec![Note::pitched(Key::C), Note::pitched(Key::D)],
        );

        let json = document.to_json().unwrap();
        let decoded = NoteExport::from_json(&json).unwrap();

        assert_eq!(decoded, document);
        assert_eq!(decoded.bpm, 120);
    }

    #[test]
    fn test_wire_format() {
        let document = NoteExport::new(90, vec![Note::new(Key::G, 5)]);

        assert_eq!(
            document.to_json().unwrap(),
            r#"{"bpm":90,"notes":[{"key":8,"octave":5}]}"#
        );
    }

    #[test]
    fn test_colors_are_rederived_on_load() {
        let json = r#"{"bpm":120,"notes":[{"key":1,"octave":4},{"key":-1,"octave":4}]}"#;
        let document = NoteExport::from_json(json).unwrap();

        assert_eq!(document.notes[0].color, NoteColor::from_pitch(Key::C, 4));
        assert_eq!(document.notes[1].color, Some(NoteColor::REST_GRAY));
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(matches!(
            NoteExport::from_json("{\"bpm\":"),
            Err(ExportError::Json(_))
        ));
        assert!(matches!(
            NoteExport::from_json(r#"{"bpm":120,"notes":[{"key":2,"octave":4}]}"#),
            Err(ExportError::Json(_))
        ));
    }

    #[test]
    fn test_zero_bpm_is_rejected() {
        assert!(matches!(
            NoteExport::from_json(r#"{"bpm":0,"notes":[]}"#),
            Err(ExportError::InvalidDocument(_))
        ));
    }
}
