mod duration;
mod record;

pub use duration::{measure_duration, read_duration_seconds};
pub use record::{round_to_hundredths, DurationRecord, FRAME_RATE};
