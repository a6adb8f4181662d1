#![allow(dead_code)]

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;
use voiceover_gen::{
    Error, ErrorType, GeneratorConfig, Result, ScriptCatalog, ScriptGroup, SpeechSynthesizer,
    VoiceProfile,
};

/// Частота дискретизации тестовых WAV файлов
pub const SAMPLE_RATE: u32 = 8000;
/// Длительность тестовой речи на один символ текста, в сэмплах (20 мс)
pub const SAMPLES_PER_CHAR: usize = 160;

/// Создает 16-битный моно WAV с тишиной заданной длины
pub fn wav_bytes(sample_rate: u32, num_samples: usize) -> Vec<u8> {
    let data_len = (num_samples * 2) as u32;
    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // моно
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(44 + data_len as usize, 0);
    bytes
}

/// Ожидаемая длительность речи мока для текста
pub fn expected_seconds(text: &str) -> f64 {
    (text.len() * SAMPLES_PER_CHAR) as f64 / SAMPLE_RATE as f64
}

/// Мок провайдера: длительность пропорциональна длине текста.
/// Может упасть на вызове с заданным номером (с единицы).
#[derive(Default)]
pub struct MockSynthesizer {
    pub fail_on_call: Option<usize>,
    pub calls: Mutex<Vec<(String, String)>>,
    pub validated: Mutex<Vec<String>>,
}

impl MockSynthesizer {
    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, text: &str, profile: &VoiceProfile) -> Result<Vec<u8>> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((profile.voice.clone(), text.to_string()));
            calls.len()
        };
        if self.fail_on_call == Some(call) {
            return Err(Error::new(ErrorType::Synthesis, "провайдер недоступен"));
        }
        Ok(wav_bytes(SAMPLE_RATE, text.len() * SAMPLES_PER_CHAR))
    }

    async fn validate_voices(&self, voices: &[String]) -> Result<()> {
        self.validated.lock().unwrap().extend(voices.iter().cloned());
        Ok(())
    }
}

/// Провайдер, возвращающий пустой поток
pub struct EmptySynthesizer;

#[async_trait]
impl SpeechSynthesizer for EmptySynthesizer {
    async fn synthesize(&self, _text: &str, _profile: &VoiceProfile) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

pub fn primary() -> VoiceProfile {
    VoiceProfile::new("en-GB-SoniaNeural", "+0%", "").unwrap()
}

pub fn secondary(voice: &str, suffix: &str) -> VoiceProfile {
    VoiceProfile::new(voice, "+0%", suffix).unwrap()
}

/// Небольшой каталог со всеми тремя группами
pub fn mixed_catalog() -> ScriptCatalog {
    ScriptCatalog::new()
        .with("logo-intro", ScriptGroup::Full, "ConsentHub. HIPAA-compliant consent management.").unwrap()
        .with("cta-endcard", ScriptGroup::Full, "Ready to modernise your consent workflow?").unwrap()
        .with("logo-intro-brief", ScriptGroup::Brief, "ConsentHub for Dynamics 365.").unwrap()
        .with("clip1-intro", ScriptGroup::Clip, "ConsentHub.").unwrap()
        .with("clip1-problem", ScriptGroup::Clip, "Paper forms get lost.").unwrap()
        .with("clip1-solution", ScriptGroup::Clip, "Digital signatures and real-time sync.").unwrap()
        .with("clip1-cta", ScriptGroup::Clip, "Visit consenthub.io to learn more.").unwrap()
}

pub fn config_for(output_dir: PathBuf, catalog: ScriptCatalog, voice_profiles: Vec<VoiceProfile>) -> GeneratorConfig {
    GeneratorConfig {
        output_dir,
        catalog,
        voice_profiles,
        ..Default::default()
    }
}
