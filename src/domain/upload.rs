use bytes::Bytes;

/// Audio container formats accepted for transcription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mpeg,
    Wav,
}

impl AudioFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "audio/mpeg" => Some(Self::Mpeg),
            "audio/wav" => Some(Self::Wav),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Mpeg => "audio/mpeg",
            Self::Wav => "audio/wav",
        }
    }
}

/// A validated audio upload ready for persistence and transcription.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub filename: String,
    pub format: AudioFormat,
    pub data: Bytes,
}

impl AudioUpload {
    pub fn new(filename: impl Into<String>, format: AudioFormat, data: Bytes) -> Self {
        Self {
            filename: filename.into(),
            format,
            data,
        }
    }
}
