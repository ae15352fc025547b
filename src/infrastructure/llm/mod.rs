mod openai_tone_classifier;
mod openai_whisper_engine;

pub use openai_tone_classifier::OpenAiToneClassifier;
pub use openai_whisper_engine::OpenAiWhisperEngine;
