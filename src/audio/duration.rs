use crate::audio::record::DurationRecord;
use crate::error::{Error, ErrorType, Result};
use crate::logging::{log_debug, log_trace};
use std::fs::File;
use std::path::Path;
use symphonia::core::codecs::CODEC_TYPE_NULL;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::default::get_probe;

fn duration_error(path: &Path, message: &str) -> Error {
    Error::new(
        ErrorType::DurationRead,
        &format!("{}: {}", path.display(), message),
    )
}

/// Читает длительность аудио файла в секундах.
///
/// Если контейнер сообщает число кадров, оно используется напрямую.
/// Иначе (MP3 без заголовка Xing) длительности пакетов суммируются без декодирования.
pub fn read_duration_seconds(path: &Path) -> Result<f64> {
    let file = File::open(path).map_err(|e| duration_error(path, &format!("не удалось открыть файл: {}", e)))?;
    let size = file
        .metadata()
        .map_err(|e| duration_error(path, &format!("не удалось прочитать метаданные: {}", e)))?
        .len();
    if size == 0 {
        return Err(duration_error(path, "файл пуст"));
    }

    let mss = MediaSourceStream::new(Box::new(file), Default::default());
    let probe_result = get_probe()
        .format(&Hint::new(), mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| duration_error(path, &format!("ошибка определения формата: {}", e)))?;

    let mut format = probe_result.format;
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| duration_error(path, "не найден аудио поток"))?;

    let track_id = track.id;
    let params = track.codec_params.clone();

    if let (Some(n_frames), Some(sample_rate)) = (params.n_frames, params.sample_rate) {
        if n_frames > 0 && sample_rate > 0 {
            log_trace(&format!("{}: {} кадров при {} Гц из заголовка", path.display(), n_frames, sample_rate));
            return Ok(n_frames as f64 / sample_rate as f64);
        }
    }

    let mut total_ts: u64 = 0;
    loop {
        match format.next_packet() {
            Ok(packet) => {
                if packet.track_id() == track_id {
                    total_ts += packet.dur();
                }
            }
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(SymphoniaError::ResetRequired) => break,
            Err(SymphoniaError::DecodeError(msg)) => {
                log_debug(&format!("{}: пропущен поврежденный пакет: {}", path.display(), msg));
            }
            Err(e) => return Err(duration_error(path, &format!("ошибка чтения пакета: {}", e))),
        }
    }

    if total_ts == 0 {
        return Err(duration_error(path, "в файле нет аудио кадров"));
    }

    if let Some(time_base) = params.time_base {
        let time = time_base.calc_time(total_ts);
        Ok(time.seconds as f64 + time.frac)
    } else if let Some(sample_rate) = params.sample_rate.filter(|rate| *rate > 0) {
        Ok(total_ts as f64 / sample_rate as f64)
    } else {
        Err(duration_error(path, "неизвестна частота дискретизации"))
    }
}

/// Измеряет длительность артефакта и формирует запись для сводки.
///
/// `file_prefix` задает каталог в поле `file` (обычно `audio`).
pub fn measure_duration(path: &Path, file_prefix: &str) -> Result<DurationRecord> {
    let seconds = read_duration_seconds(path)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| duration_error(path, "некорректное имя файла"))?;

    let file = if file_prefix.is_empty() {
        file_name.to_string()
    } else {
        format!("{}/{}", file_prefix.trim_end_matches('/'), file_name)
    };

    Ok(DurationRecord::from_seconds(seconds, file))
}
