//! Runs the reducer and its effects.
//!
//! Background work (the quote fetch, the unlock timer) lives in a `JoinSet`
//! owned by the controller and reports back over an mpsc channel. Dropping
//! or shutting down the controller aborts whatever is still in flight.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::defaults::Defaults;
use crate::quotes::QuoteSource;
use crate::state::{reduce, Action, AppState, Effect};
use crate::store::KeyValueStore;

pub struct Controller {
    state: AppState,
    store: Box<dyn KeyValueStore>,
    source: Arc<dyn QuoteSource>,
    unlock_delay: Duration,
    tasks: JoinSet<()>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Action>,
}

impl Controller {
    /// Reads the saved reflection once; nothing is spawned until `load_quotes`.
    pub fn new(
        store: Box<dyn KeyValueStore>,
        source: Arc<dyn QuoteSource>,
        unlock_delay: Duration,
    ) -> Self {
        let reflection = store.get(Defaults::REFLECTION_KEY).unwrap_or_default();
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(reflection),
            store,
            source,
            unlock_delay,
            tasks: JoinSet::new(),
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// One request, no retry. On failure the home screen keeps its placeholder.
    pub fn load_quotes(&mut self) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.tasks.spawn(async move {
            match source.fetch().await {
                Ok(raw) => {
                    let _ = tx.send(Action::QuotesLoaded(raw));
                }
                Err(e) => warn!("quote fetch failed: {e}"),
            }
        });
    }

    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");
        let (next, effects) = reduce(&self.state, action);
        self.state = next;
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::PersistReflection(text) => {
                let outcome = match self.store.set(Defaults::REFLECTION_KEY, &text) {
                    Ok(()) => {
                        info!(bytes = text.len(), "reflection saved");
                        Action::ReflectionSaved
                    }
                    Err(e) => {
                        error!("reflection save failed: {e}");
                        Action::ReflectionSaveFailed(e.to_string())
                    }
                };
                let _ = self.tx.send(outcome);
            }
            Effect::ScheduleUnlock => {
                let tx = self.tx.clone();
                let delay = self.unlock_delay;
                info!(?delay, "theme unlock scheduled");
                self.tasks.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(Action::ThemeUnlocked);
                });
            }
        }
    }

    /// Apply every outcome that has arrived so far. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        self.reap();
        let mut applied = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action);
            applied += 1;
        }
        applied
    }

    /// Wait for the next outcome and apply it.
    #[cfg(test)]
    pub async fn settle_next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    fn reap(&mut self) {
        while let Some(done) = self.tasks.try_join_next() {
            if let Err(e) = done {
                if e.is_panic() {
                    error!("background task panicked: {e}");
                }
            }
        }
    }

    #[cfg(test)]
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn shutdown(&mut self) {
        if !self.tasks.is_empty() {
            info!(tasks = self.tasks.len(), "aborting background tasks");
        }
        self.tasks.abort_all();
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.tasks.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::{Quote, QuoteError};
    use crate::state::{Notice, Screen};
    use crate::store::memory::MemoryStore;
    use async_trait::async_trait;

    struct CannedSource(Vec<Quote>);

    #[async_trait]
    impl QuoteSource for CannedSource {
        async fn fetch(&self) -> Result<Vec<Quote>, QuoteError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl QuoteSource for BrokenSource {
        async fn fetch(&self) -> Result<Vec<Quote>, QuoteError> {
            Err(QuoteError::Decode(serde_json::from_str::<Vec<Quote>>("{").unwrap_err()))
        }
    }

    fn controller(store: MemoryStore, source: impl QuoteSource + 'static) -> Controller {
        Controller::new(Box::new(store), Arc::new(source), Duration::from_secs(2))
    }

    fn q(text: &str) -> Quote {
        Quote { text: text.into(), author: None }
    }

    #[tokio::test]
    async fn test_startup_reads_saved_reflection() {
        let mut store = MemoryStore::default();
        store.entries.insert("reflection".into(), "yesterday".into());
        let ctl = controller(store, CannedSource(vec![]));
        assert_eq!(ctl.state().reflection, "yesterday");
    }

    #[tokio::test]
    async fn test_load_quotes_curates_fetch_result() {
        let raw = vec![q("Be kind."), q(&"x".repeat(130))];
        let mut ctl = controller(MemoryStore::default(), CannedSource(raw));

        ctl.load_quotes();
        assert!(ctl.settle_next().await);

        assert_eq!(ctl.state().quotes, vec![q("Be kind.")]);
        assert_eq!(ctl.state().current_quote_text(), "Be kind.");
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_placeholder() {
        let mut ctl = controller(MemoryStore::default(), BrokenSource);
        ctl.load_quotes();
        tokio::task::yield_now().await;
        while ctl.pending_tasks() > 0 {
            tokio::task::yield_now().await;
            ctl.pump();
        }

        assert!(ctl.state().quotes.is_empty());
        assert_eq!(ctl.state().current_quote_text(), "Loading inspirational quote...");
        ctl.dispatch(Action::NextQuote);
        assert_eq!(ctl.state().quote_index, 0);
    }

    #[tokio::test]
    async fn test_save_persists_exact_value_and_notifies() {
        let mut ctl = controller(MemoryStore::default(), CannedSource(vec![]));
        let value = "line one\nline two  ✨";

        ctl.dispatch(Action::SetReflection(value.into()));
        ctl.dispatch(Action::SaveReflection);
        assert_eq!(ctl.pump(), 1);

        assert_eq!(ctl.store.get("reflection").as_deref(), Some(value));
        assert_eq!(ctl.state().notice, Some(Notice::ReflectionSaved));
    }

    #[tokio::test]
    async fn test_failed_save_surfaces_notice() {
        let store = MemoryStore { failing: true, ..MemoryStore::default() };
        let mut ctl = controller(store, CannedSource(vec![]));

        ctl.dispatch(Action::SetReflection("draft".into()));
        ctl.dispatch(Action::SaveReflection);
        ctl.pump();

        assert!(matches!(ctl.state().notice, Some(Notice::SaveFailed(_))));
        assert_eq!(ctl.state().reflection, "draft");
    }

    #[tokio::test(start_paused = true)]
    async fn test_theme_unlocks_only_after_delay() {
        let mut ctl = controller(MemoryStore::default(), CannedSource(vec![]));

        ctl.dispatch(Action::UnlockTheme);
        assert_eq!(ctl.state().notice, Some(Notice::UnlockPrompt));
        assert!(!ctl.state().theme_unlocked);

        ctl.dispatch(Action::DismissNotice);
        ctl.dispatch(Action::NavigateTo(Screen::Profile));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        ctl.pump();
        assert!(!ctl.state().theme_unlocked);

        tokio::time::sleep(Duration::from_millis(2)).await;
        ctl.pump();
        assert!(ctl.state().theme_unlocked);
        assert_eq!(ctl.state().active_screen, Screen::Profile);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_unlock() {
        let mut ctl = controller(MemoryStore::default(), CannedSource(vec![]));
        ctl.dispatch(Action::UnlockTheme);
        assert_eq!(ctl.pending_tasks(), 1);

        ctl.shutdown();
        tokio::time::sleep(Duration::from_secs(5)).await;
        ctl.pump();

        assert!(!ctl.state().theme_unlocked);
        assert_eq!(ctl.pending_tasks(), 0);
    }
}
