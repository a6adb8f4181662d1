use crate::error::{Error, ErrorType, Result};
use crate::logging::{log_debug, log_info, log_warning};
use crate::tts::SpeechSynthesizer;
use crate::voice::VoiceProfile;
use async_trait::async_trait;
use msedge_tts::tts::{client::connect, SpeechConfig};
use msedge_tts::voice::{get_voices_list, Voice};

/// Формат MP3 по умолчанию для Edge TTS
pub const DEFAULT_AUDIO_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// Голос из каталога Edge TTS
pub type EdgeVoice = Voice;

/// Клиент Microsoft Edge read-aloud TTS
pub struct EdgeTts {
    audio_format: String,
}

impl EdgeTts {
    pub fn new(audio_format: &str) -> Self {
        Self {
            audio_format: audio_format.to_string(),
        }
    }

    /// Загружает список доступных голосов тем же клиентом, что и синтез
    pub async fn list_voices(&self) -> Result<Vec<EdgeVoice>> {
        let voices = tokio::task::spawn_blocking(|| {
            get_voices_list().map_err(|e| Error::new(
                ErrorType::Synthesis,
                &format!("Не удалось получить список голосов Edge TTS: {:?}", e)
            ))
        })
        .await
        .map_err(|e| Error::new(ErrorType::Synthesis, &format!("Задача загрузки голосов прервана: {}", e)))??;
        log_debug(&format!("Получено {} голосов Edge TTS", voices.len()));
        Ok(voices)
    }
}

impl Default for EdgeTts {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIO_FORMAT)
    }
}

/// Возвращает голоса, отсутствующие в каталоге провайдера
fn unknown_voices<'a>(requested: &'a [String], available: &[EdgeVoice]) -> Vec<&'a str> {
    requested
        .iter()
        .filter(|voice| {
            !available.iter().any(|v| {
                v.name == **voice
                    || v.short_name
                        .as_deref()
                        .map_or(false, |short| short.eq_ignore_ascii_case(voice))
            })
        })
        .map(String::as_str)
        .collect()
}

#[async_trait]
impl SpeechSynthesizer for EdgeTts {
    async fn synthesize(&self, text: &str, profile: &VoiceProfile) -> Result<Vec<u8>> {
        log_debug(&format!(
            "Edge TTS запрос: голос {}, скорость {}, {} символов",
            profile.voice,
            profile.rate,
            text.len()
        ));

        let config = SpeechConfig {
            voice_name: profile.voice.clone(),
            audio_format: self.audio_format.clone(),
            pitch: 0,
            rate: profile.rate.percent(),
            volume: 0,
        };
        let text = text.to_string();
        let voice = profile.voice.clone();

        // Клиент msedge-tts блокирующий; ждём его сразу, чтобы запросы шли строго по одному
        let audio_bytes = tokio::task::spawn_blocking(move || -> Result<Vec<u8>> {
            let mut tts = connect().map_err(|e| Error::new(
                ErrorType::Synthesis,
                &format!("Не удалось подключиться к Edge TTS: {:?}", e)
            ))?;
            let audio = tts.synthesize(&text, &config).map_err(|e| Error::new(
                ErrorType::Synthesis,
                &format!("Edge TTS отклонил запрос для голоса {}: {:?}", voice, e)
            ))?;
            Ok(audio.audio_bytes)
        })
        .await
        .map_err(|e| Error::new(ErrorType::Synthesis, &format!("Задача синтеза прервана: {}", e)))??;

        if audio_bytes.is_empty() {
            log_warning(&format!("Edge TTS вернул пустой поток для голоса {}", profile.voice));
        }
        Ok(audio_bytes)
    }

    async fn validate_voices(&self, voices: &[String]) -> Result<()> {
        let available = self.list_voices().await?;
        let unknown = unknown_voices(voices, &available);
        if !unknown.is_empty() {
            return Err(Error::new(
                ErrorType::Synthesis,
                &format!("Неизвестные голоса: {}", unknown.join(", ")),
            ));
        }
        log_info(&format!("Голоса проверены: {}", voices.join(", ")));
        Ok(())
    }
}
