use env_logger::Builder;
use log::{debug, info, trace, warn, LevelFilter, Log, Metadata, Record};
use std::io::{self, Write};
use std::sync::Once;

static TEST_LOGGER: Once = Once::new();

/// Одна строка лога: время, уровень, модуль и сообщение
fn write_line<W: Write + ?Sized>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(
        out,
        "{} [{:<5}] {}: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.target().trim_start_matches("voiceover_gen::"),
        record.args()
    )
}

/// Логгер для тестов: пишет в stdout, чтобы вывод перехватывался `cargo test`
#[derive(Clone)]
pub struct TestLogger {
    level: LevelFilter,
}

impl TestLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut line = Vec::new();
            if write_line(&mut line, record).is_ok() {
                print!("{}", String::from_utf8_lossy(&line));
            }
        }
    }

    fn flush(&self) {}
}

/// Настраивает логирование генератора.
///
/// `RUST_LOG`, если задана, уточняет `level` по модулям.
pub fn setup_logging(level: LevelFilter) {
    let mut builder = Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.format(|buf, record| write_line(buf, record));

    // Повторная инициализация (например, из тестов) не ошибка
    let _ = builder.try_init();
    debug!("Логирование настроено: {}", level);
}

/// Настраивает логирование для тестов. Безопасно вызывать из каждого теста.
pub fn setup_test_logging(level: LevelFilter) {
    TEST_LOGGER.call_once(|| {
        if log::set_boxed_logger(Box::new(TestLogger::new(level))).is_ok() {
            log::set_max_level(level);
        }
    });
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_debug(message: &str) {
    debug!("{}", message);
}

pub fn log_trace(message: &str) {
    trace!("{}", message);
}
