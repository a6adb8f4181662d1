use serde::{Deserialize, Serialize};

/// Частота кадров видео, под которую считаются длительности
pub const FRAME_RATE: u32 = 30;

/// Длительность сгенерированного аудио файла
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationRecord {
    /// Длительность в секундах, округленная до сотых
    pub seconds: f64,
    /// Длительность в кадрах при `FRAME_RATE`
    pub frames: u64,
    /// Путь к файлу относительно корня публичных ресурсов (`audio/<name>.mp3`)
    pub file: String,
}

impl DurationRecord {
    /// Создает запись из измеренной длительности.
    ///
    /// Кадры считаются от уже округленных секунд, чтобы в сводке всегда
    /// выполнялось `frames == round(seconds * FRAME_RATE)`.
    pub fn from_seconds(raw_seconds: f64, file: String) -> Self {
        let seconds = round_to_hundredths(raw_seconds.max(0.0));
        let frames = (seconds * FRAME_RATE as f64).round() as u64;
        Self {
            seconds,
            frames,
            file,
        }
    }
}

/// Округляет до двух знаков после запятой
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
