use crate::error::{Error, ErrorType, Result};
use crate::logging::log_debug;
use crate::voice::VoiceProfile;
use async_trait::async_trait;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

mod edge;

pub use edge::{EdgeTts, EdgeVoice, DEFAULT_AUDIO_FORMAT};

/// Интерфейс для провайдеров синтеза речи
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Синтезирует речь для текста указанным голосом
    async fn synthesize(&self, text: &str, profile: &VoiceProfile) -> Result<Vec<u8>>;

    /// Проверяет, что провайдер знает указанные голоса
    async fn validate_voices(&self, _voices: &[String]) -> Result<()> {
        Ok(())
    }

    /// Синтезирует речь и сохраняет её в файл, перезаписывая существующий.
    ///
    /// Пустой ответ провайдера считается ошибкой синтеза, файл при этом не создается.
    async fn synthesize_to_file(&self, text: &str, profile: &VoiceProfile, path: &Path) -> Result<()> {
        let audio_data = self.synthesize(text, profile).await?;
        if audio_data.is_empty() {
            return Err(Error::new(
                ErrorType::Synthesis,
                &format!("Провайдер вернул пустой аудио поток для голоса {}", profile.voice),
            ));
        }

        let mut file = File::create(path).await?;
        file.write_all(&audio_data).await?;
        file.flush().await?;

        log_debug(&format!("Записано {} байт в {}", audio_data.len(), path.display()));
        Ok(())
    }
}
