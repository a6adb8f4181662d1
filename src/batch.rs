use crate::audio::{measure_duration, DurationRecord};
use crate::catalog::{ScriptEntry, ScriptGroup};
use crate::config::GeneratorConfig;
use crate::error::{Error, ErrorType, Result};
use crate::logging::{log_debug, log_info};
use crate::progress::ProgressTracker;
use crate::tts::SpeechSynthesizer;
use crate::voice::VoiceProfile;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Сводка прогона: ключ результата -> длительность, в порядке генерации
pub type ResultIndex = IndexMap<String, DurationRecord>;

/// Одна единица работы: сценарий, озвучиваемый одним профилем
#[derive(Debug, Clone, Copy)]
pub struct Job<'a> {
    pub profile: &'a VoiceProfile,
    pub key: &'a str,
    pub entry: &'a ScriptEntry,
}

impl Job<'_> {
    /// Ключ в сводке: `<key><suffix>`
    pub fn result_key(&self) -> String {
        self.profile.result_key(self.key)
    }
}

/// Основной профиль получает весь каталог, дополнительные получают только клипы.
pub fn is_selected(profile: &VoiceProfile, group: ScriptGroup) -> bool {
    profile.is_primary() || group == ScriptGroup::Clip
}

/// Пакетный генератор озвучки.
///
/// Записи обрабатываются строго по одной: порядок профилей, внутри него порядок каталога.
/// Первая же ошибка прерывает прогон, сводка при этом не записывается.
pub struct BatchGenerator<S: SpeechSynthesizer> {
    config: GeneratorConfig,
    synthesizer: S,
    progress: ProgressTracker,
}

impl<S: SpeechSynthesizer> BatchGenerator<S> {
    /// Создает генератор, проверяя настройки и уникальность ключей сводки
    pub fn new(config: GeneratorConfig, synthesizer: S) -> Result<Self> {
        config.validate()?;

        let generator = Self {
            config,
            synthesizer,
            progress: ProgressTracker::new(),
        };

        let mut seen = HashSet::new();
        for job in generator.jobs() {
            let key = job.result_key();
            if !seen.insert(key.clone()) {
                return Err(Error::new(
                    ErrorType::InvalidParameters,
                    &format!("Ключ сводки '{}' получается дважды", key),
                ));
            }
        }

        Ok(generator)
    }

    /// Устанавливает трекер прогресса
    pub fn with_progress(mut self, progress: ProgressTracker) -> Self {
        self.progress = progress;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn synthesizer(&self) -> &S {
        &self.synthesizer
    }

    /// План прогона в порядке выполнения
    pub fn jobs(&self) -> Vec<Job<'_>> {
        let catalog = &self.config.catalog;
        self.config
            .voice_profiles
            .iter()
            .flat_map(move |profile| {
                catalog
                    .iter()
                    .filter(move |(_, entry)| is_selected(profile, entry.group))
                    .map(move |(key, entry)| Job { profile, key, entry })
            })
            .collect()
    }

    /// Путь артефакта: `<output_dir>/<key><suffix>.mp3`
    pub fn artifact_path(&self, key: &str, profile: &VoiceProfile) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}.mp3", profile.result_key(key)))
    }

    /// Проверяет у провайдера все голоса до начала генерации
    pub async fn preflight(&self) -> Result<()> {
        let mut voices: Vec<String> = Vec::new();
        for profile in &self.config.voice_profiles {
            if !voices.contains(&profile.voice) {
                voices.push(profile.voice.clone());
            }
        }
        self.synthesizer.validate_voices(&voices).await
    }

    /// Синтезирует один сценарий и сохраняет его в каталог вывода
    pub async fn synthesize(&self, key: &str, text: &str, profile: &VoiceProfile) -> Result<PathBuf> {
        if text.trim().is_empty() {
            return Err(Error::new(
                ErrorType::InvalidParameters,
                &format!("Пустой текст для {}", key),
            ));
        }

        let path = self.artifact_path(key, profile);
        log_debug(&format!(
            "Синтез {} голосом {} ({})",
            profile.result_key(key),
            profile.voice,
            profile.rate
        ));
        self.synthesizer.synthesize_to_file(text, profile, &path).await?;
        Ok(path)
    }

    /// Измеряет длительность уже записанного артефакта
    pub fn measure_duration(&self, path: &Path) -> Result<DurationRecord> {
        measure_duration(path, &self.config.file_prefix)
    }

    /// Выполняет весь прогон и возвращает сводку.
    ///
    /// Уже записанные артефакты при ошибке остаются на диске.
    pub async fn run_batch(&self) -> Result<ResultIndex> {
        tokio::fs::create_dir_all(&self.config.output_dir).await?;

        let jobs = self.jobs();
        self.progress.start(jobs.len(), "Генерация озвучки");

        let mut index = ResultIndex::with_capacity(jobs.len());
        for job in jobs {
            let path = self.synthesize(job.key, &job.entry.text, job.profile).await?;
            let record = self.measure_duration(&path)?;
            let result_key = job.result_key();

            log_info(&format!(
                "{}: {:.2}s ({}f)",
                result_key, record.seconds, record.frames
            ));

            self.progress.advance(&result_key);
            index.insert(result_key, record);
        }

        Ok(index)
    }

    /// Записывает сводку в `<output_dir>/<summary_file>`, перезаписывая существующую
    pub async fn persist_results(&self, index: &ResultIndex) -> Result<PathBuf> {
        let path = self.config.summary_path();
        let json = serde_json::to_string_pretty(index)?;
        tokio::fs::create_dir_all(&self.config.output_dir).await?;
        tokio::fs::write(&path, json).await?;

        log_info(&format!("Длительности сохранены в {}", path.display()));
        Ok(path)
    }

    /// Прогон и запись сводки. Сводка пишется только после успешного прогона.
    pub async fn run(&self) -> Result<(ResultIndex, PathBuf)> {
        let index = self.run_batch().await?;
        let path = self.persist_results(&index).await?;
        Ok((index, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ScriptCatalog;
    use async_trait::async_trait;

    struct NoopSynthesizer;

    #[async_trait]
    impl SpeechSynthesizer for NoopSynthesizer {
        async fn synthesize(&self, _text: &str, _profile: &VoiceProfile) -> Result<Vec<u8>> {
            Ok(vec![0u8; 16])
        }
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            output_dir: PathBuf::from("out"),
            catalog: ScriptCatalog::new()
                .with("logo-intro", ScriptGroup::Full, "ConsentHub.").unwrap()
                .with("logo-intro-brief", ScriptGroup::Brief, "ConsentHub.").unwrap()
                .with("clip1-intro", ScriptGroup::Clip, "ConsentHub.").unwrap()
                .with("clip1-cta", ScriptGroup::Clip, "Visit consenthub.io.").unwrap(),
            voice_profiles: vec![
                VoiceProfile::new("en-GB-SoniaNeural", "+0%", "").unwrap(),
                VoiceProfile::new("en-AU-NatashaNeural", "+0%", "-au-f").unwrap(),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_selection_policy() {
        let primary = VoiceProfile::new("en-GB-SoniaNeural", "+0%", "").unwrap();
        let secondary = VoiceProfile::new("en-AU-NatashaNeural", "+0%", "-au-f").unwrap();

        for group in ScriptGroup::ALL {
            assert!(is_selected(&primary, group));
        }
        assert!(!is_selected(&secondary, ScriptGroup::Full));
        assert!(!is_selected(&secondary, ScriptGroup::Brief));
        assert!(is_selected(&secondary, ScriptGroup::Clip));
    }

    #[test]
    fn test_jobs_order() {
        let generator = BatchGenerator::new(config(), NoopSynthesizer).unwrap();
        let keys: Vec<String> = generator.jobs().iter().map(|job| job.result_key()).collect();
        assert_eq!(
            keys,
            vec![
                "logo-intro",
                "logo-intro-brief",
                "clip1-intro",
                "clip1-cta",
                "clip1-intro-au-f",
                "clip1-cta-au-f",
            ]
        );
    }

    #[test]
    fn test_artifact_path() {
        let generator = BatchGenerator::new(config(), NoopSynthesizer).unwrap();
        let profile = &generator.config().voice_profiles[1];
        assert_eq!(
            generator.artifact_path("clip1-cta", profile),
            PathBuf::from("out/clip1-cta-au-f.mp3")
        );
    }

    #[test]
    fn test_colliding_result_keys_rejected() {
        let mut config = config();
        config
            .catalog
            .insert("clip1-cta-au-f", ScriptGroup::Full, "Collides with the secondary voice.")
            .unwrap();
        assert!(BatchGenerator::new(config, NoopSynthesizer).is_err());
    }
}
