use crate::error::{Error, ErrorType, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Группа сценариев. Влияет только на отчёт и на выбор записей для
/// дополнительных голосов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptGroup {
    /// Полная версия ролика
    Full,
    /// Короткая версия ролика
    Brief,
    /// Клипы короче 30 секунд
    Clip,
}

impl ScriptGroup {
    /// Все группы в порядке вывода отчёта
    pub const ALL: [ScriptGroup; 3] = [ScriptGroup::Full, ScriptGroup::Brief, ScriptGroup::Clip];

    /// Возвращает строковое представление группы
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Brief => "brief",
            Self::Clip => "clip",
        }
    }

    /// Заголовок группы для отчёта
    pub fn title(&self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::Brief => "BRIEF",
            Self::Clip => "CLIP",
        }
    }
}

/// Текст сценария вместе с его группой
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub group: ScriptGroup,
    pub text: String,
}

/// Упорядоченный каталог сценариев: ключ сцены -> текст озвучки.
///
/// Порядок вставки сохраняется и определяет порядок генерации.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, ScriptEntry>", into = "IndexMap<String, ScriptEntry>")]
pub struct ScriptCatalog {
    entries: IndexMap<String, ScriptEntry>,
}

impl ScriptCatalog {
    /// Создает пустой каталог
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Добавляет сценарий в каталог.
    ///
    /// Ключ и текст не могут быть пустыми, ключ должен быть уникальным.
    pub fn insert(&mut self, key: &str, group: ScriptGroup, text: &str) -> Result<()> {
        if key.trim().is_empty() {
            return Err(Error::new(ErrorType::InvalidParameters, "Пустой ключ сценария"));
        }
        if key.contains('/') || key.contains('\\') {
            return Err(Error::new(
                ErrorType::InvalidParameters,
                &format!("Ключ сценария не может содержать разделитель пути: {}", key),
            ));
        }
        if text.trim().is_empty() {
            return Err(Error::new(
                ErrorType::InvalidParameters,
                &format!("Пустой текст для сценария {}", key),
            ));
        }
        if self.entries.contains_key(key) {
            return Err(Error::new(
                ErrorType::InvalidParameters,
                &format!("Повторяющийся ключ сценария: {}", key),
            ));
        }

        self.entries.insert(
            key.to_string(),
            ScriptEntry {
                group,
                text: text.to_string(),
            },
        );
        Ok(())
    }

    /// Builder-вариант `insert` для статических таблиц
    pub fn with(mut self, key: &str, group: ScriptGroup, text: &str) -> Result<Self> {
        self.insert(key, group, text)?;
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&ScriptEntry> {
        self.entries.get(key)
    }

    /// Возвращает количество сценариев в каталоге
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Проверяет, пуст ли каталог
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Итератор по всем сценариям в порядке каталога
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScriptEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Итератор по сценариям одной группы в порядке каталога
    pub fn iter_group(&self, group: ScriptGroup) -> impl Iterator<Item = (&str, &ScriptEntry)> {
        self.iter().filter(move |(_, entry)| entry.group == group)
    }

    /// Ключи одной группы в порядке каталога
    pub fn keys_in_group(&self, group: ScriptGroup) -> Vec<&str> {
        self.iter_group(group).map(|(key, _)| key).collect()
    }

    /// Разбивает клипы на наборы по префиксу ключа (`clip1-intro` -> `clip1`).
    pub fn clip_sets(&self) -> IndexMap<&str, Vec<&str>> {
        let mut sets: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for (key, _) in self.iter_group(ScriptGroup::Clip) {
            let prefix = key.split('-').next().unwrap_or(key);
            sets.entry(prefix).or_default().push(key);
        }
        sets
    }
}

impl TryFrom<IndexMap<String, ScriptEntry>> for ScriptCatalog {
    type Error = Error;

    fn try_from(entries: IndexMap<String, ScriptEntry>) -> Result<Self> {
        let mut catalog = ScriptCatalog::new();
        for (key, entry) in entries {
            catalog.insert(&key, entry.group, &entry.text)?;
        }
        Ok(catalog)
    }
}

impl From<ScriptCatalog> for IndexMap<String, ScriptEntry> {
    fn from(catalog: ScriptCatalog) -> Self {
        catalog.entries
    }
}
