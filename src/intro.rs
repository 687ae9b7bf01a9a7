//! First-visit intro sequencing for the landing page.
//!
//! The landing page shows a short name/title splash before revealing the
//! full grid. The splash plays at most once per browsing session: when it
//! completes, a flag is written to session-scoped storage and later mounts
//! start directly in [`IntroPhase::Revealed`].
//!
//! Storage and timers are injected through [`SessionStore`] and
//! [`Scheduler`] so the sequencing can run outside a browser.

#[cfg(feature = "hydrate")]
pub mod browser;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use thiserror::Error;

/// Session storage key remembering that the splash already played.
pub const SESSION_FLAG_KEY: &str = "hasInitialAnimationShown";

/// How long the splash stays on screen before the grid is revealed.
pub const SPLASH_DURATION: Duration = Duration::from_millis(1500);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage access failed: {0}")]
    Access(String),
    #[error("couldn't decode stored value {0:?}")]
    Decode(String),
    #[error("couldn't encode value for storage")]
    Encode,
}

/// Key/value storage scoped to the browsing session.
pub trait SessionStore: Send + Sync {
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<bool>, StorageError>;
    fn set(&self, key: &str, value: bool) -> Result<(), StorageError>;
}

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<bool>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: bool) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Cancellation handle for a task returned by [`Scheduler::schedule`].
///
/// Dropping the handle does not cancel the task.
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle for a task that has already run or can't be cancelled.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

/// Runs a task once after a delay.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntroPhase {
    /// Name/title overlay, shown on the first landing visit of a session.
    Splash,
    /// Full landing grid. Terminal for the session.
    Revealed,
}

impl IntroPhase {
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

#[derive(Debug)]
struct IntroState {
    phase: IntroPhase,
    // generation of the currently armed transition, if any
    armed: Option<u64>,
    pending: Option<TaskHandle>,
    generation: u64,
}

/// Drives the `Splash -> Revealed` transition for one landing view.
///
/// Cloning shares the underlying state.
pub struct IntroSequencer<S> {
    store: Arc<S>,
    state: Arc<Mutex<IntroState>>,
}

impl<S> Clone for IntroSequencer<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            state: self.state.clone(),
        }
    }
}

fn lock(state: &Mutex<IntroState>) -> MutexGuard<'_, IntroState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S: SessionStore + 'static> IntroSequencer<S> {
    /// Reads the session flag once to pick the starting phase.
    ///
    /// Storage errors are treated as "flag absent", so the splash replays.
    pub fn new(store: S) -> Self {
        let seen = match store.get(SESSION_FLAG_KEY) {
            Ok(flag) => flag.unwrap_or(false),
            Err(e) => {
                log::warn!("couldn't read intro flag, replaying splash: {e}");
                false
            }
        };
        let phase = if seen {
            IntroPhase::Revealed
        } else {
            IntroPhase::Splash
        };
        log::debug!("intro sequencer starting in {phase:?}");
        Self {
            store: Arc::new(store),
            state: Arc::new(Mutex::new(IntroState {
                phase,
                armed: None,
                pending: None,
                generation: 0,
            })),
        }
    }

    pub fn phase(&self) -> IntroPhase {
        lock(&self.state).phase
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.state).armed.is_some()
    }

    /// Arms the reveal transition and returns the phase to render now.
    ///
    /// Does nothing when already revealed or when a transition is armed.
    /// `on_reveal` runs once, after the flag is written, if the transition
    /// fires before [`unmount`](Self::unmount).
    pub fn mount<T, F>(&self, scheduler: &T, on_reveal: F) -> IntroPhase
    where
        T: Scheduler + ?Sized,
        F: FnOnce() + Send + 'static,
    {
        let generation = {
            let mut state = lock(&self.state);
            if state.phase.is_revealed() || state.armed.is_some() {
                return state.phase;
            }
            state.generation += 1;
            state.armed = Some(state.generation);
            state.generation
        };

        let weak = Arc::downgrade(&self.state);
        let store = self.store.clone();
        let handle = scheduler.schedule(
            SPLASH_DURATION,
            Box::new(move || reveal(weak, store.as_ref(), generation, on_reveal)),
        );

        let mut state = lock(&self.state);
        if state.armed == Some(generation) {
            state.pending = Some(handle);
        }
        state.phase
    }

    /// Cancels any armed transition. Safe to call in any phase.
    pub fn unmount(&self) {
        let pending = {
            let mut state = lock(&self.state);
            state.armed = None;
            state.pending.take()
        };
        if let Some(handle) = pending {
            log::debug!("intro view torn down during splash, cancelling reveal");
            handle.cancel();
        }
    }
}

fn reveal<S, F>(state: Weak<Mutex<IntroState>>, store: &S, generation: u64, on_reveal: F)
where
    S: SessionStore + ?Sized,
    F: FnOnce(),
{
    let Some(state) = state.upgrade() else {
        return;
    };
    {
        let mut state = lock(&state);
        if state.armed != Some(generation) || state.phase.is_revealed() {
            return;
        }
        state.armed = None;
        state.pending = None;
        state.phase = IntroPhase::Revealed;
    }
    if let Err(e) = store.set(SESSION_FLAG_KEY, true) {
        log::warn!("couldn't persist intro flag: {e}");
    }
    log::info!("intro splash complete");
    on_reveal();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Default)]
    struct MemoryStore {
        values: Mutex<HashMap<String, bool>>,
        writes: AtomicUsize,
        broken: AtomicBool,
    }

    impl MemoryStore {
        fn with_flag() -> Self {
            let store = Self::default();
            store
                .values
                .lock()
                .unwrap()
                .insert(SESSION_FLAG_KEY.to_string(), true);
            store
        }

        fn broken() -> Self {
            let store = Self::default();
            store.broken.store(true, Ordering::SeqCst);
            store
        }

        fn flag(&self) -> Option<bool> {
            self.values.lock().unwrap().get(SESSION_FLAG_KEY).copied()
        }

        fn writes(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        // a new browsing session starts with empty storage
        fn clear(&self) {
            self.values.lock().unwrap().clear();
        }
    }

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<bool>, StorageError> {
            if self.broken.load(Ordering::SeqCst) {
                return Err(StorageError::Unavailable);
            }
            Ok(self.values.lock().unwrap().get(key).copied())
        }

        fn set(&self, key: &str, value: bool) -> Result<(), StorageError> {
            if self.broken.load(Ordering::SeqCst) {
                return Err(StorageError::Access("quota exceeded".to_string()));
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.values.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        }
    }

    struct Timer {
        due: Duration,
        task: Option<Task>,
        cancelled: Arc<AtomicBool>,
    }

    /// Virtual clock; tasks only run from `advance`.
    #[derive(Default)]
    struct ManualScheduler {
        now: Mutex<Duration>,
        timers: Mutex<Vec<Timer>>,
    }

    impl ManualScheduler {
        fn advance(&self, by: Duration) {
            let now = {
                let mut now = self.now.lock().unwrap();
                *now += by;
                *now
            };
            let due = {
                let mut timers = self.timers.lock().unwrap();
                timers
                    .iter_mut()
                    .filter(|t| t.due <= now && !t.cancelled.load(Ordering::SeqCst))
                    .filter_map(|t| t.task.take())
                    .collect::<Vec<_>>()
            };
            for task in due {
                task();
            }
        }

        fn live_timers(&self) -> usize {
            self.timers
                .lock()
                .unwrap()
                .iter()
                .filter(|t| t.task.is_some() && !t.cancelled.load(Ordering::SeqCst))
                .count()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
            let due = *self.now.lock().unwrap() + delay;
            let cancelled = Arc::new(AtomicBool::new(false));
            self.timers.lock().unwrap().push(Timer {
                due,
                task: Some(task),
                cancelled: cancelled.clone(),
            });
            TaskHandle::new(move || cancelled.store(true, Ordering::SeqCst))
        }
    }

    /// Runs tasks immediately, like a browser that failed to arm a timer.
    struct ImmediateScheduler;

    impl Scheduler for ImmediateScheduler {
        fn schedule(&self, _delay: Duration, task: Task) -> TaskHandle {
            task();
            TaskHandle::noop()
        }
    }

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        (count, move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_fresh_session_reveals_after_splash() {
        let store = Arc::new(MemoryStore::default());
        let scheduler = ManualScheduler::default();
        let intro = IntroSequencer::new(store.clone());
        let (reveals, on_reveal) = counter();

        assert_eq!(intro.mount(&scheduler, on_reveal), IntroPhase::Splash);
        assert!(intro.is_pending());

        scheduler.advance(Duration::from_millis(1499));
        assert_eq!(intro.phase(), IntroPhase::Splash);
        assert_eq!(store.flag(), None);
        assert_eq!(reveals.load(Ordering::SeqCst), 0);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(intro.phase(), IntroPhase::Revealed);
        assert!(!intro.is_pending());
        assert_eq!(store.flag(), Some(true));
        assert_eq!(reveals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_flag_present_starts_revealed_without_timer() {
        let store = Arc::new(MemoryStore::with_flag());
        let scheduler = ManualScheduler::default();
        let intro = IntroSequencer::new(store.clone());
        let (reveals, on_reveal) = counter();

        assert_eq!(intro.phase(), IntroPhase::Revealed);
        assert_eq!(intro.mount(&scheduler, on_reveal), IntroPhase::Revealed);
        assert_eq!(scheduler.live_timers(), 0);
        assert!(!intro.is_pending());

        scheduler.advance(SPLASH_DURATION * 2);
        assert_eq!(store.writes(), 0);
        assert_eq!(reveals.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unmount_during_splash_cancels_reveal() {
        let store = Arc::new(MemoryStore::default());
        let scheduler = ManualScheduler::default();
        let intro = IntroSequencer::new(store.clone());
        let (reveals, on_reveal) = counter();

        intro.mount(&scheduler, on_reveal);
        scheduler.advance(Duration::from_millis(700));
        intro.unmount();
        assert_eq!(scheduler.live_timers(), 0);

        scheduler.advance(SPLASH_DURATION);
        assert_eq!(intro.phase(), IntroPhase::Splash);
        assert_eq!(store.flag(), None);
        assert_eq!(reveals.load(Ordering::SeqCst), 0);

        // unmounting again is harmless
        intro.unmount();
    }

    #[test]
    fn test_late_firing_after_unmount_is_ignored() {
        // scheduler that ignores cancellation
        struct Leaky(Mutex<Option<Task>>);
        impl Scheduler for Leaky {
            fn schedule(&self, _delay: Duration, task: Task) -> TaskHandle {
                *self.0.lock().unwrap() = Some(task);
                TaskHandle::noop()
            }
        }

        let store = Arc::new(MemoryStore::default());
        let scheduler = Leaky(Mutex::new(None));
        let intro = IntroSequencer::new(store.clone());
        let (reveals, on_reveal) = counter();

        intro.mount(&scheduler, on_reveal);
        intro.unmount();
        let task = scheduler.0.lock().unwrap().take().unwrap();
        task();

        assert_eq!(intro.phase(), IntroPhase::Splash);
        assert_eq!(store.flag(), None);
        assert_eq!(reveals.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_firing_after_view_dropped_is_ignored() {
        let store = Arc::new(MemoryStore::default());
        let scheduler = ManualScheduler::default();
        let (reveals, on_reveal) = counter();
        {
            let intro = IntroSequencer::new(store.clone());
            intro.mount(&scheduler, on_reveal);
        }
        scheduler.advance(SPLASH_DURATION);
        assert_eq!(store.flag(), None);
        assert_eq!(reveals.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_flag_persists_within_session_but_not_across() {
        let store = Arc::new(MemoryStore::default());
        let scheduler = ManualScheduler::default();

        let first = IntroSequencer::new(store.clone());
        first.mount(&scheduler, || {});
        scheduler.advance(SPLASH_DURATION);
        first.unmount();
        assert_eq!(first.phase(), IntroPhase::Revealed);

        // navigate away and back within the session
        for _ in 0..3 {
            let again = IntroSequencer::new(store.clone());
            assert_eq!(again.mount(&scheduler, || {}), IntroPhase::Revealed);
            again.unmount();
        }
        assert_eq!(store.writes(), 1);

        store.clear();
        let fresh = IntroSequencer::new(store.clone());
        assert_eq!(fresh.mount(&scheduler, || {}), IntroPhase::Splash);
        assert!(fresh.is_pending());
    }

    #[test]
    fn test_remount_does_not_rearm_or_rewrite() {
        let store = Arc::new(MemoryStore::default());
        let scheduler = ManualScheduler::default();
        let intro = IntroSequencer::new(store.clone());
        let (reveals, on_reveal) = counter();
        let (extra, on_extra) = counter();

        intro.mount(&scheduler, on_reveal);
        // second mount while armed keeps the original timer
        assert_eq!(intro.mount(&scheduler, on_extra), IntroPhase::Splash);
        assert_eq!(scheduler.live_timers(), 1);

        scheduler.advance(SPLASH_DURATION);
        assert_eq!(reveals.load(Ordering::SeqCst), 1);
        assert_eq!(extra.load(Ordering::SeqCst), 0);

        let (late, on_late) = counter();
        assert_eq!(intro.mount(&scheduler, on_late), IntroPhase::Revealed);
        scheduler.advance(SPLASH_DURATION);
        assert_eq!(scheduler.live_timers(), 0);
        assert_eq!(store.writes(), 1);
        assert_eq!(late.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_remount_after_unmount_rearms_splash() {
        let store = Arc::new(MemoryStore::default());
        let scheduler = ManualScheduler::default();
        let intro = IntroSequencer::new(store.clone());

        intro.mount(&scheduler, || {});
        intro.unmount();
        assert!(!intro.is_pending());

        let (reveals, on_reveal) = counter();
        assert_eq!(intro.mount(&scheduler, on_reveal), IntroPhase::Splash);
        scheduler.advance(SPLASH_DURATION);
        assert_eq!(intro.phase(), IntroPhase::Revealed);
        assert_eq!(reveals.load(Ordering::SeqCst), 1);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_unavailable_storage_replays_splash() {
        let store = Arc::new(MemoryStore::broken());
        let scheduler = ManualScheduler::default();
        let (reveals, on_reveal) = counter();

        let intro = IntroSequencer::new(store.clone());
        assert_eq!(intro.mount(&scheduler, on_reveal), IntroPhase::Splash);
        scheduler.advance(SPLASH_DURATION);

        // the write fails but the view still reveals
        assert_eq!(intro.phase(), IntroPhase::Revealed);
        assert_eq!(reveals.load(Ordering::SeqCst), 1);

        let next = IntroSequencer::new(store);
        assert_eq!(next.phase(), IntroPhase::Splash);
    }

    #[test]
    fn test_immediate_scheduler_reveals_during_mount() {
        let store = Arc::new(MemoryStore::default());
        let intro = IntroSequencer::new(store.clone());
        let (reveals, on_reveal) = counter();

        assert_eq!(intro.mount(&ImmediateScheduler, on_reveal), IntroPhase::Revealed);
        assert!(!intro.is_pending());
        assert_eq!(store.flag(), Some(true));
        assert_eq!(reveals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stored_false_counts_as_unseen() {
        let store = Arc::new(MemoryStore::default());
        store.set(SESSION_FLAG_KEY, false).unwrap();
        let intro = IntroSequencer::new(store);
        assert_eq!(intro.phase(), IntroPhase::Splash);
    }
}
