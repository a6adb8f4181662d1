use thiserror::Error;

/// Типы ошибок, которые могут возникнуть при генерации озвучки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Ошибка синтеза речи
    Synthesis,
    /// Ошибка чтения длительности аудио
    DurationRead,
    /// Ошибка файловой системы
    Filesystem,
    /// Неверные параметры
    InvalidParameters,
}

/// Ошибки, которые могут возникнуть при генерации озвучки
#[derive(Debug, Error)]
pub enum Error {
    #[error("Ошибка синтеза речи: {0}")]
    Synthesis(String),

    #[error("Ошибка чтения длительности: {0}")]
    DurationRead(String),

    #[error("Ошибка файловой системы: {0}")]
    Filesystem(#[from] std::io::Error),

    #[error("Неверные параметры: {0}")]
    InvalidParameters(String),

    #[error("Ошибка сериализации JSON: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl Error {
    /// Создает новую ошибку указанного типа с сообщением
    pub fn new(error_type: ErrorType, message: &str) -> Self {
        match error_type {
            ErrorType::Synthesis => Self::Synthesis(message.to_string()),
            ErrorType::DurationRead => Self::DurationRead(message.to_string()),
            ErrorType::Filesystem => {
                Self::Filesystem(std::io::Error::new(std::io::ErrorKind::Other, message))
            }
            ErrorType::InvalidParameters => Self::InvalidParameters(message.to_string()),
        }
    }

    /// Возвращает тип ошибки
    pub fn error_type(&self) -> Option<ErrorType> {
        match self {
            Self::Synthesis(_) => Some(ErrorType::Synthesis),
            Self::DurationRead(_) => Some(ErrorType::DurationRead),
            Self::Filesystem(_) => Some(ErrorType::Filesystem),
            Self::InvalidParameters(_) => Some(ErrorType::InvalidParameters),
            Self::JsonSerialization(_) => None,
        }
    }
}

/// Результат с обработкой ошибок
pub type Result<T> = std::result::Result<T, Error>;
