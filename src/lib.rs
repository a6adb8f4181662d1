//! Пакетная генерация озвучки для промо-роликов.
//!
//! Каждый сценарий каталога озвучивается выбранными голосами, длительность
//! каждого файла измеряется и сохраняется в `durations.json` для тайминга видео.

pub mod error;
pub mod logging;
pub mod catalog;
pub mod voice;
pub mod tts;
pub mod audio;
pub mod config;
pub mod progress;
pub mod batch;
pub mod summary;

pub use error::{Error, Result, ErrorType};
pub use logging::{setup_logging, setup_test_logging, log_warning, log_info, log_debug, log_trace};
pub use catalog::{ScriptCatalog, ScriptEntry, ScriptGroup, consenthub_catalog};
pub use voice::{RateModifier, VoiceProfile, default_profiles};
pub use tts::{SpeechSynthesizer, EdgeTts, EdgeVoice};
pub use audio::{DurationRecord, FRAME_RATE, measure_duration, read_duration_seconds};
pub use config::GeneratorConfig;
pub use progress::{ProgressTracker, ProgressCallback};
pub use batch::{BatchGenerator, Job, ResultIndex, is_selected};
pub use summary::{print_summary, write_summary, total_seconds};
