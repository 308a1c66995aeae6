//! Clipboard history snapshot and periodic refresh
//!
//! `HistoryStore` keeps the last published snapshot and only replaces it when
//! the head entry (id + content) differs. `HistoryPoller` drives refreshes on a
//! fixed interval until its `PollerHandle` is stopped or dropped.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::host::HistorySource;
use crate::shared::types::ClipboardEntry;

#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Arc<Vec<ClipboardEntry>>,
    initialized: bool,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, most recent first
    pub fn snapshot(&self) -> Arc<Vec<ClipboardEntry>> {
        Arc::clone(&self.entries)
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Publish a fetched sequence. Returns true when the snapshot was replaced.
    ///
    /// The first call always replaces the (empty) initial state.
    pub fn apply(&mut self, fetched: Vec<ClipboardEntry>) -> bool {
        if self.initialized && same_head(self.entries.first(), fetched.first()) {
            return false;
        }
        self.initialized = true;
        self.entries = Arc::new(fetched);
        true
    }
}

fn same_head(previous: Option<&ClipboardEntry>, next: Option<&ClipboardEntry>) -> bool {
    match (previous, next) {
        (Some(a), Some(b)) => a.id == b.id && a.content == b.content,
        (None, None) => true,
        _ => false,
    }
}

/// Stops the refresh loop when told to, or when dropped
pub struct PollerHandle {
    stop: watch::Sender<bool>,
}

impl PollerHandle {
    /// No further refreshes are scheduled; an in-flight fetch still completes
    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }
}

pub struct HistoryPoller {
    source: Arc<dyn HistorySource>,
    period: Duration,
    stopped: watch::Receiver<bool>,
}

impl HistoryPoller {
    pub fn new(source: Arc<dyn HistorySource>, period: Duration) -> (Self, PollerHandle) {
        let (stop, stopped) = watch::channel(false);
        (Self { source, period, stopped }, PollerHandle { stop })
    }

    /// Fetch immediately, then once per period. Successful fetches go to `sink`;
    /// failures are logged and never reach it, so the published snapshot stays.
    pub async fn run<F>(mut self, sink: F)
    where
        F: Fn(Vec<ClipboardEntry>) + Send + Sync + 'static,
    {
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tracing::info!("[HistoryPoller] Started (every {:?})", self.period);

        loop {
            tokio::select! {
                // Stop wins over a tick that is due at the same instant
                biased;
                changed = self.stopped.changed() => {
                    // Err means the handle was dropped
                    if changed.is_err() || *self.stopped.borrow() {
                        break;
                    }
                    continue;
                }
                _ = ticker.tick() => {}
            }
            if *self.stopped.borrow() {
                break;
            }

            match self.source.fetch_history().await {
                Ok(entries) => sink(entries),
                Err(e) => tracing::warn!("[HistoryPoller] Failed to fetch history: {}", e),
            }
        }

        tracing::info!("[HistoryPoller] Stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::{AppError, AppResult};
    use crate::shared::types::ContentType;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn make(id: &str, content: &str) -> ClipboardEntry {
        ClipboardEntry::new(id, content, ContentType::Text, Utc::now())
    }

    /// Replays queued responses, repeating the last one
    struct ScriptedSource {
        responses: Mutex<Vec<AppResult<Vec<ClipboardEntry>>>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(responses: Vec<AppResult<Vec<ClipboardEntry>>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl HistorySource for ScriptedSource {
        async fn fetch_history(&self) -> AppResult<Vec<ClipboardEntry>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut responses = self.responses.lock().expect("lock");
            if responses.len() > 1 {
                responses.remove(0)
            } else {
                responses[0].clone()
            }
        }
    }

    #[test]
    fn test_first_apply_always_replaces() {
        let mut store = HistoryStore::new();
        assert!(store.apply(Vec::new()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_same_head_keeps_snapshot() {
        let mut store = HistoryStore::new();
        store.apply(vec![make("a", "x"), make("b", "y")]);
        let before = store.snapshot();

        assert!(!store.apply(vec![make("a", "x")]));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_new_head_replaces_snapshot() {
        let mut store = HistoryStore::new();
        store.apply(vec![make("a", "x")]);
        let before = store.snapshot();

        assert!(store.apply(vec![make("c", "z"), make("a", "x")]));
        assert!(!Arc::ptr_eq(&before, &store.snapshot()));
        assert_eq!(store.entries()[0].id.as_str(), "c");
    }

    #[test]
    fn test_changed_head_content_replaces() {
        let mut store = HistoryStore::new();
        store.apply(vec![make("a", "x")]);
        assert!(store.apply(vec![make("a", "x2")]));
    }

    #[test]
    fn test_history_cleared_by_host_replaces() {
        let mut store = HistoryStore::new();
        store.apply(vec![make("a", "x")]);
        assert!(store.apply(Vec::new()));
        assert!(store.is_empty());
        assert!(!store.apply(Vec::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_retains_published_snapshot() {
        let source = Arc::new(ScriptedSource::new(vec![
            Ok(vec![make("a", "x")]),
            Err(AppError::Network("refused".to_string())),
        ]));
        let store = Arc::new(Mutex::new(HistoryStore::new()));

        let (poller, handle) = HistoryPoller::new(source.clone(), Duration::from_millis(2000));
        let sink_store = store.clone();
        let task = tokio::spawn(poller.run(move |entries| {
            sink_store.lock().expect("lock").apply(entries);
        }));

        tokio::time::sleep(Duration::from_millis(4500)).await;
        handle.stop();
        task.await.expect("poller task");

        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
        let store = store.lock().expect("lock");
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].id.as_str(), "a");
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_ticks_until_stopped() {
        let source = Arc::new(ScriptedSource::new(vec![
            Ok(vec![make("a", "x")]),
            Err(AppError::Host("busy".to_string())),
            Ok(vec![make("b", "y")]),
        ]));
        let received = Arc::new(Mutex::new(Vec::new()));

        let (poller, handle) = HistoryPoller::new(source.clone(), Duration::from_millis(2000));
        let sink_log = received.clone();
        let task = tokio::spawn(poller.run(move |entries| {
            sink_log.lock().expect("lock").push(entries.len());
        }));

        // Immediate first tick, then one per period
        tokio::time::sleep(Duration::from_millis(4500)).await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
        // The failed fetch never reaches the sink
        assert_eq!(*received.lock().expect("lock"), vec![1, 1]);

        handle.stop();
        task.await.expect("poller task");

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_on_tick_boundary_schedules_nothing() {
        for _ in 0..50 {
            let source = Arc::new(ScriptedSource::new(vec![Ok(Vec::new())]));
            let (poller, handle) = HistoryPoller::new(source.clone(), Duration::from_millis(2000));
            let task = tokio::spawn(poller.run(|_| {}));

            tokio::time::sleep(Duration::from_millis(1)).await;
            tokio::time::sleep(Duration::from_millis(1999)).await;
            let calls_at_stop = source.calls.load(Ordering::SeqCst);
            handle.stop();
            task.await.expect("poller task");

            assert_eq!(source.calls.load(Ordering::SeqCst), calls_at_stop);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_ends_when_handle_dropped() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(Vec::new())]));
        let (poller, handle) = HistoryPoller::new(source, Duration::from_millis(2000));
        let task = tokio::spawn(poller.run(|_| {}));

        drop(handle);
        task.await.expect("poller task");
    }
}
