use crate::catalog::{consenthub_catalog, ScriptCatalog};
use crate::error::{Error, ErrorType, Result};
use crate::tts::DEFAULT_AUDIO_FORMAT;
use crate::voice::{default_profiles, VoiceProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Переменная окружения с путём к JSON файлу настроек
pub const CONFIG_ENV_VAR: &str = "VOICEOVER_CONFIG";

/// Каталог вывода по умолчанию: `public/audio` рядом с проектом генератора,
/// а не в текущем рабочем каталоге.
pub fn default_output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public").join("audio")
}

/// Настройки генератора озвучки.
///
/// Загружаются один раз при старте и не меняются во время прогона.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Каталог для аудио файлов и сводки
    pub output_dir: PathBuf,
    /// Префикс пути в поле `file` сводки
    pub file_prefix: String,
    /// Имя файла сводки длительностей
    pub summary_file: String,
    /// Формат аудио, запрашиваемый у провайдера
    pub audio_format: String,
    /// Уровень логирования (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// Каталог сценариев
    pub catalog: ScriptCatalog,
    /// Профили голосов в порядке генерации
    pub voice_profiles: Vec<VoiceProfile>,
}

impl GeneratorConfig {
    /// Загружает настройки из JSON файла. Отсутствующие поля берутся по умолчанию,
    /// относительный `output_dir` отсчитывается от каталога самого файла настроек.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config: GeneratorConfig = serde_json::from_str(&content)?;
        if config.output_dir.is_relative() {
            if let Some(base) = path.parent() {
                config.output_dir = base.join(&config.output_dir);
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Загружает настройки из файла, указанного в `VOICEOVER_CONFIG`,
    /// или возвращает встроенные.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_json_file(path),
            _ => {
                let config = Self::builtin()?;
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Встроенные настройки: каталог ConsentHub и три голоса
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            output_dir: default_output_dir(),
            file_prefix: "audio".to_string(),
            summary_file: "durations.json".to_string(),
            audio_format: DEFAULT_AUDIO_FORMAT.to_string(),
            log_level: "info".to_string(),
            catalog: consenthub_catalog()?,
            voice_profiles: default_profiles()?,
        })
    }

    /// Путь к файлу сводки
    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_file)
    }

    /// Уровень логирования как `LevelFilter`
    pub fn log_level_filter(&self) -> Result<log::LevelFilter> {
        self.log_level.parse().map_err(|_| {
            Error::new(
                ErrorType::InvalidParameters,
                &format!("Неизвестный уровень логирования: {}", self.log_level),
            )
        })
    }

    /// Проверяет согласованность настроек.
    ///
    /// Порядок профилей задаёт вызывающий; основной профиль не обязателен.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(Error::new(ErrorType::InvalidParameters, "Каталог сценариев пуст"));
        }
        if self.voice_profiles.is_empty() {
            return Err(Error::new(
                ErrorType::InvalidParameters,
                "Не задан ни один профиль голоса",
            ));
        }

        let mut suffixes = HashSet::new();
        for profile in &self.voice_profiles {
            if profile.voice.trim().is_empty() {
                return Err(Error::new(ErrorType::InvalidParameters, "Пустой идентификатор голоса"));
            }
            if profile.suffix.contains('/') || profile.suffix.contains('\\') {
                return Err(Error::new(
                    ErrorType::InvalidParameters,
                    &format!("Суффикс не может содержать разделитель пути: {}", profile.suffix),
                ));
            }
            if !suffixes.insert(profile.suffix.as_str()) {
                return Err(Error::new(
                    ErrorType::InvalidParameters,
                    &format!("Повторяющийся суффикс профиля: '{}'", profile.suffix),
                ));
            }
        }

        if self.summary_file.trim().is_empty() {
            return Err(Error::new(ErrorType::InvalidParameters, "Пустое имя файла сводки"));
        }

        self.log_level_filter()?;
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_prefix: "audio".to_string(),
            summary_file: "durations.json".to_string(),
            audio_format: DEFAULT_AUDIO_FORMAT.to_string(),
            log_level: "info".to_string(),
            catalog: ScriptCatalog::new(),
            voice_profiles: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ScriptGroup;
    use std::io::Write;

    fn minimal_config() -> GeneratorConfig {
        GeneratorConfig {
            catalog: ScriptCatalog::new()
                .with("logo-intro", ScriptGroup::Full, "ConsentHub.")
                .unwrap(),
            voice_profiles: vec![VoiceProfile::new("en-GB-SoniaNeural", "+0%", "").unwrap()],
            ..Default::default()
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        let config = GeneratorConfig::builtin().unwrap();
        config.validate().unwrap();
        assert!(config.output_dir.is_absolute());
        assert!(config.output_dir.starts_with(env!("CARGO_MANIFEST_DIR")));
        assert_eq!(
            config.summary_path(),
            Path::new(env!("CARGO_MANIFEST_DIR")).join("public/audio/durations.json")
        );
        assert_eq!(config.log_level_filter().unwrap(), log::LevelFilter::Info);
    }

    #[test]
    fn test_validate_accepts_any_profile_order() {
        let secondary = VoiceProfile::new("en-AU-NatashaNeural", "+0%", "-au-f").unwrap();

        let mut config = minimal_config();
        config.voice_profiles.insert(0, secondary.clone());
        config.validate().unwrap();

        config.voice_profiles = vec![secondary];
        config.validate().unwrap();

        config.voice_profiles.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_suffix() {
        let mut config = minimal_config();
        config
            .voice_profiles
            .push(VoiceProfile::new("en-AU-NatashaNeural", "+0%", "-au").unwrap());
        config
            .voice_profiles
            .push(VoiceProfile::new("en-AU-WilliamNeural", "+0%", "-au").unwrap());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(GeneratorConfig::default().validate().is_err());

        let mut config = minimal_config();
        config.log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "output_dir": "out/audio",
                "catalog": {{"logo-intro": {{"group": "full", "text": "ConsentHub."}}}},
                "voice_profiles": [{{"voice": "en-GB-SoniaNeural", "rate": "+5%"}}]
            }}"#
        )
        .unwrap();

        let config = GeneratorConfig::from_json_file(file.path()).unwrap();
        let base = file.path().parent().unwrap();
        assert_eq!(config.output_dir, base.join("out/audio"));
        assert_eq!(config.file_prefix, "audio");
        assert_eq!(config.catalog.len(), 1);
        assert_eq!(config.voice_profiles[0].rate.percent(), 5);
    }

    #[test]
    fn test_from_json_file_keeps_absolute_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("audio");
        let path = dir.path().join("voiceover.json");
        let json = serde_json::json!({
            "output_dir": output_dir,
            "catalog": {"clip1-intro": {"group": "clip", "text": "ConsentHub."}},
            "voice_profiles": [{"voice": "en-AU-NatashaNeural", "rate": "+0%", "suffix": "-au-f"}]
        });
        std::fs::write(&path, json.to_string()).unwrap();

        let config = GeneratorConfig::from_json_file(&path).unwrap();
        assert_eq!(config.output_dir, output_dir);
        assert!(!config.voice_profiles[0].is_primary());
    }
}
