use thiserror::Error;

#[derive(Error, Debug)]
pub enum KikitoriError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Audio output error: {0}")]
    AudioStream(Box<rodio::StreamError>),

    #[error("Audio decode error: {0}")]
    AudioDecode(Box<rodio::decoder::DecoderError>),

    #[error("Card row must start with [number, word]: {0}")]
    MalformedCard(String),

    #[error("KikitoriError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for KikitoriError {
    fn from(error: std::io::Error) -> Self {
        KikitoriError::Io(Box::new(error))
    }
}

impl From<rodio::StreamError> for KikitoriError {
    fn from(error: rodio::StreamError) -> Self {
        KikitoriError::AudioStream(Box::new(error))
    }
}

impl From<rodio::decoder::DecoderError> for KikitoriError {
    fn from(error: rodio::decoder::DecoderError) -> Self {
        KikitoriError::AudioDecode(Box::new(error))
    }
}
