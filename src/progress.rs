use std::sync::{Arc, Mutex, MutexGuard};

/// Тип для функций обратного вызова прогресса: (процент, статус)
pub type ProgressCallback = Box<dyn Fn(f32, &str) + Send + Sync + 'static>;

#[derive(Debug, Default)]
struct ProgressState {
    completed: usize,
    total: usize,
    status: String,
}

/// Трекер прогресса пакетной генерации
#[derive(Clone, Default)]
pub struct ProgressTracker {
    state: Arc<Mutex<ProgressState>>,
    callback: Option<Arc<ProgressCallback>>,
}

impl ProgressTracker {
    /// Создает новый трекер прогресса
    pub fn new() -> Self {
        Self::default()
    }

    /// Создает новый трекер прогресса с функцией обратного вызова
    pub fn with_callback(callback: ProgressCallback) -> Self {
        Self {
            state: Arc::default(),
            callback: Some(Arc::new(callback)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ProgressState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Начинает новый прогон из `total` шагов
    pub fn start(&self, total: usize, status: &str) {
        {
            let mut state = self.lock();
            state.completed = 0;
            state.total = total;
            state.status = status.to_string();
        }
        self.notify();
    }

    /// Отмечает завершение очередного шага
    pub fn advance(&self, status: &str) {
        {
            let mut state = self.lock();
            state.completed = (state.completed + 1).min(state.total);
            state.status = status.to_string();
        }
        self.notify();
    }

    /// Текущий прогресс от 0.0 до 100.0
    pub fn get_progress(&self) -> f32 {
        let state = self.lock();
        if state.total == 0 {
            return 0.0;
        }
        state.completed as f32 / state.total as f32 * 100.0
    }

    /// Число завершенных и общее число шагов
    pub fn counts(&self) -> (usize, usize) {
        let state = self.lock();
        (state.completed, state.total)
    }

    /// Возвращает текущий статус
    pub fn get_status(&self) -> String {
        self.lock().status.clone()
    }

    fn notify(&self) {
        if let Some(callback) = &self.callback {
            let progress = self.get_progress();
            let status = self.get_status();
            callback(progress, &status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_progress_tracker() {
        let tracker = ProgressTracker::new();

        // Проверяем начальные значения
        assert_eq!(tracker.get_progress(), 0.0);
        assert_eq!(tracker.get_status(), "");

        tracker.start(4, "start");
        tracker.advance("clip1-intro");
        tracker.advance("clip1-problem");

        assert_eq!(tracker.get_progress(), 50.0);
        assert_eq!(tracker.counts(), (2, 4));
        assert_eq!(tracker.get_status(), "clip1-problem");

        // Лишние шаги не выводят прогресс за 100%
        for _ in 0..5 {
            tracker.advance("extra");
        }
        assert_eq!(tracker.get_progress(), 100.0);
    }

    #[test]
    fn test_progress_callback() {
        let (tx, rx) = mpsc::channel();
        let tx = Mutex::new(tx);

        let callback = Box::new(move |progress: f32, status: &str| {
            tx.lock().unwrap().send((progress, status.to_string())).unwrap();
        });

        let tracker = ProgressTracker::with_callback(callback);
        tracker.start(2, "begin");
        tracker.advance("logo-intro");

        assert_eq!(rx.recv().unwrap(), (0.0, "begin".to_string()));
        assert_eq!(rx.recv().unwrap(), (50.0, "logo-intro".to_string()));
    }
}
