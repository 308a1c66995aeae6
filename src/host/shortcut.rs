//! Global shortcut registration
//!
//! Registration clears any previous binding first, then retries with
//! exponential backoff. A shortcut that never registers is logged and the app
//! keeps running without it (the tray menu still works).

use std::time::Duration;

use super::{ShortcutHandler, ShortcutRegistrar};
use crate::shared::error::AppResult;

pub const MAX_REGISTER_ATTEMPTS: u32 = 5;
const BASE_RETRY_DELAY_MS: u64 = 100;

/// Unregister without failing when nothing is bound
pub fn unregister_quietly(registrar: &dyn ShortcutRegistrar, accelerator: &str) {
    if !registrar.is_registered(accelerator) {
        tracing::debug!("[Shortcut] {} not registered, nothing to remove", accelerator);
        return;
    }
    match registrar.unregister(accelerator) {
        Ok(()) => tracing::info!("[Shortcut] Unregistered existing shortcut: {}", accelerator),
        Err(e) => tracing::debug!("[Shortcut] Unregister of {} ignored: {}", accelerator, e),
    }
}

/// Bind `accelerator` to `handler`, retrying `attempts` times (100ms, 200ms, 400ms, ...)
pub async fn register_with_retry(
    registrar: &dyn ShortcutRegistrar,
    accelerator: &str,
    handler: ShortcutHandler,
    attempts: u32,
) -> AppResult<()> {
    unregister_quietly(registrar, accelerator);

    let attempts = attempts.max(1);
    let mut attempt = 0;
    loop {
        match registrar.register(accelerator, handler.clone()) {
            Ok(()) => {
                tracing::info!("[Shortcut] Registered global shortcut: {} (attempt {})", accelerator, attempt + 1);
                return Ok(());
            }
            Err(e) if attempt + 1 < attempts => {
                let delay_ms = BASE_RETRY_DELAY_MS * 2_u64.pow(attempt);
                tracing::warn!(
                    "[Shortcut] Registration attempt {} failed: {}. Retrying in {}ms...",
                    attempt + 1,
                    e,
                    delay_ms
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!(
                    "[Shortcut] Failed to register {} after {} attempts: {}",
                    accelerator,
                    attempts,
                    e
                );
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::AppError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Fails the first `failures` registrations
    #[derive(Default)]
    struct FlakyRegistrar {
        failures: usize,
        attempts: AtomicUsize,
        bound: Mutex<HashMap<String, ShortcutHandler>>,
        unregister_calls: AtomicUsize,
    }

    impl FlakyRegistrar {
        fn press(&self, accelerator: &str) {
            let handler = self.bound.lock().expect("lock").get(accelerator).cloned();
            if let Some(handler) = handler {
                handler();
            }
        }
    }

    impl ShortcutRegistrar for FlakyRegistrar {
        fn register(&self, accelerator: &str, handler: ShortcutHandler) -> AppResult<()> {
            let n = self.attempts.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                return Err(AppError::Shortcut("already taken".to_string()));
            }
            self.bound.lock().expect("lock").insert(accelerator.to_string(), handler);
            Ok(())
        }

        fn unregister(&self, accelerator: &str) -> AppResult<()> {
            self.unregister_calls.fetch_add(1, Ordering::SeqCst);
            match self.bound.lock().expect("lock").remove(accelerator) {
                Some(_) => Ok(()),
                None => Err(AppError::Shortcut("not registered".to_string())),
            }
        }

        fn is_registered(&self, accelerator: &str) -> bool {
            self.bound.lock().expect("lock").contains_key(accelerator)
        }
    }

    fn counting_handler() -> (ShortcutHandler, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        (Arc::new(move || { c.fetch_add(1, Ordering::SeqCst); }), count)
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_until_registered() {
        let registrar = FlakyRegistrar { failures: 2, ..Default::default() };
        let (handler, presses) = counting_handler();

        register_with_retry(&registrar, "Alt+V", handler, MAX_REGISTER_ATTEMPTS)
            .await
            .expect("third attempt succeeds");

        assert_eq!(registrar.attempts.load(Ordering::SeqCst), 3);
        registrar.press("Alt+V");
        assert_eq!(presses.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_max_attempts() {
        let registrar = FlakyRegistrar { failures: usize::MAX, ..Default::default() };
        let (handler, _) = counting_handler();

        let result = register_with_retry(&registrar, "Alt+V", handler, MAX_REGISTER_ATTEMPTS).await;

        assert!(matches!(result, Err(AppError::Shortcut(_))));
        assert_eq!(registrar.attempts.load(Ordering::SeqCst), MAX_REGISTER_ATTEMPTS as usize);
    }

    #[tokio::test]
    async fn test_reregister_replaces_previous_binding() {
        let registrar = FlakyRegistrar::default();
        let (first, first_presses) = counting_handler();
        let (second, second_presses) = counting_handler();

        register_with_retry(&registrar, "Alt+V", first, 1).await.expect("first");
        register_with_retry(&registrar, "Alt+V", second, 1).await.expect("second");

        registrar.press("Alt+V");
        assert_eq!(first_presses.load(Ordering::SeqCst), 0);
        assert_eq!(second_presses.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unregister_unknown_is_noop() {
        let registrar = FlakyRegistrar::default();
        unregister_quietly(&registrar, "Alt+V");
        unregister_quietly(&registrar, "Alt+V");
        assert_eq!(registrar.unregister_calls.load(Ordering::SeqCst), 0);
    }
}
