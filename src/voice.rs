use crate::error::{Error, ErrorType, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static RATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-])(\d{1,3})%$").expect("valid rate regex"));

/// Модификатор скорости речи в процентах, например `+5%` или `-10%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RateModifier(i32);

impl RateModifier {
    /// Разбирает строку вида `+5%`. Знак обязателен.
    pub fn parse(s: &str) -> Result<Self> {
        let caps = RATE_PATTERN.captures(s.trim()).ok_or_else(|| {
            Error::new(
                ErrorType::InvalidParameters,
                &format!("Некорректный модификатор скорости: '{}', ожидается вид '+5%'", s),
            )
        })?;

        let value: i32 = caps[2].parse().map_err(|_| {
            Error::new(
                ErrorType::InvalidParameters,
                &format!("Некорректное значение скорости: {}", s),
            )
        })?;
        let value = if &caps[1] == "-" { -value } else { value };

        if value <= -100 {
            return Err(Error::new(
                ErrorType::InvalidParameters,
                &format!("Скорость не может быть {}: речь остановится", s),
            ));
        }

        Ok(Self(value))
    }

    /// Значение в процентах
    pub fn percent(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for RateModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}%", self.0)
    }
}

impl TryFrom<String> for RateModifier {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<RateModifier> for String {
    fn from(rate: RateModifier) -> Self {
        rate.to_string()
    }
}

/// Профиль голоса: идентификатор голоса, скорость и суффикс имени файла.
///
/// Профиль с пустым суффиксом считается основным.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceProfile {
    pub voice: String,
    #[serde(default)]
    pub rate: RateModifier,
    #[serde(default)]
    pub suffix: String,
}

impl VoiceProfile {
    pub fn new(voice: &str, rate: &str, suffix: &str) -> Result<Self> {
        if voice.trim().is_empty() {
            return Err(Error::new(ErrorType::InvalidParameters, "Пустой идентификатор голоса"));
        }
        Ok(Self {
            voice: voice.to_string(),
            rate: RateModifier::parse(rate)?,
            suffix: suffix.to_string(),
        })
    }

    pub fn is_primary(&self) -> bool {
        self.suffix.is_empty()
    }

    /// Ключ результата для сценария: `<key><suffix>`
    pub fn result_key(&self, script_key: &str) -> String {
        format!("{}{}", script_key, self.suffix)
    }
}

/// Профили по умолчанию: британский основной голос и два австралийских
/// для клипов.
pub fn default_profiles() -> Result<Vec<VoiceProfile>> {
    Ok(vec![
        VoiceProfile::new("en-GB-SoniaNeural", "+0%", "")?,
        VoiceProfile::new("en-AU-NatashaNeural", "+0%", "-au-f")?,
        VoiceProfile::new("en-AU-WilliamNeural", "+0%", "-au-m")?,
    ])
}
