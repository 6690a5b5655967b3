use crate::error::{GalaxyError, GxResult};
use crate::transition::phase::{Phase, TransitionRequest, TransitionSnapshot};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

/// Receives the midpoint notification and every phase change.
pub trait TransitionObserver: Send + Sync {
    /// Fired once per activating `begin()`, at the melt/reform boundary,
    /// before the phase flips. The caller swaps page content here.
    fn on_transition_complete(&self, request: &TransitionRequest);

    fn on_phase_change(&self, _phase: Phase, _request: &TransitionRequest) {}
}

impl<F> TransitionObserver for F
where
    F: Fn(&TransitionRequest) + Send + Sync,
{
    fn on_transition_complete(&self, request: &TransitionRequest) {
        self(request)
    }
}

struct SequenceState {
    phase: Phase,
    active: bool,
    /// Bumped on every restart and on teardown. A timer acts only while its
    /// generation is current.
    generation: u64,
    request: Option<TransitionRequest>,
}

fn lock(state: &Mutex<SequenceState>) -> MutexGuard<'_, SequenceState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drives the melt → reform → complete cover between two pages.
///
/// Each activating [`begin`](Self::begin) owns one timer task. Restarting or
/// tearing down invalidates the previous task twice over: its generation goes
/// stale and its handle is aborted. Observers are always invoked without the
/// state lock held.
pub struct TransitionController {
    state: Arc<Mutex<SequenceState>>,
    observer: Arc<dyn TransitionObserver>,
    runtime: Handle,
    pending: Option<JoinHandle<()>>,
    torn_down: bool,
}

impl TransitionController {
    /// Binds to the ambient tokio runtime. Fails outside one.
    pub fn new(observer: Arc<dyn TransitionObserver>) -> GxResult<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| GalaxyError::Config(format!("No tokio runtime: {}", e)))?;
        Self::with_handle(runtime, observer)
    }

    /// Only current-thread runtimes are accepted: timer tasks must not run
    /// concurrently with `begin()` or `shutdown()`.
    pub fn with_handle(
        runtime: Handle,
        observer: Arc<dyn TransitionObserver>,
    ) -> GxResult<Self> {
        let flavor = runtime.runtime_flavor();
        if flavor != RuntimeFlavor::CurrentThread {
            return Err(GalaxyError::InvalidParameter {
                name: "runtime_flavor",
                value: format!("{:?}", flavor),
            });
        }

        Ok(Self {
            state: Arc::new(Mutex::new(SequenceState {
                phase: Phase::Complete,
                active: false,
                generation: 0,
                request: None,
            })),
            observer,
            runtime,
            pending: None,
            torn_down: false,
        })
    }

    /// Starts, or restarts from `melt`, a transition.
    ///
    /// An inactive request only records that the caller lowered its flag;
    /// a sequence already running is left to finish.
    pub fn begin(&mut self, request: TransitionRequest) {
        if self.torn_down {
            warn!(
                "Ignoring transition {} -> {} on a torn down controller",
                request.from_page, request.to_page
            );
            return;
        }

        if !request.is_active {
            let mut st = lock(&self.state);
            st.active = false;
            debug!("Transition flag lowered (phase {})", st.phase);
            return;
        }

        let generation = {
            let mut st = lock(&self.state);
            st.generation += 1;
            st.phase = Phase::Melt;
            st.active = true;
            st.request = Some(request.clone());
            st.generation
        };

        if let Some(previous) = self.pending.take() {
            debug!("Superseding transition sequence {}", generation - 1);
            previous.abort();
        }

        info!(
            "Transition {} -> {} started (sequence {})",
            request.from_page, request.to_page, generation
        );
        self.observer.on_phase_change(Phase::Melt, &request);

        let started = Instant::now();
        self.pending = Some(self.runtime.spawn(run_sequence(
            Arc::clone(&self.state),
            Arc::clone(&self.observer),
            generation,
            request,
            started,
        )));
    }

    /// Tears the controller down. No timer fires afterwards and further
    /// `begin()` calls are ignored. Also runs on drop.
    pub fn shutdown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        lock(&self.state).generation += 1;
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        debug!("Transition controller torn down");
    }

    pub fn phase(&self) -> Phase {
        lock(&self.state).phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.snapshot().is_transitioning()
    }

    pub fn snapshot(&self) -> TransitionSnapshot {
        let st = lock(&self.state);
        TransitionSnapshot {
            phase: st.phase,
            is_active: st.active,
            from_page: st.request.as_ref().map(|r| r.from_page.clone()),
            to_page: st.request.as_ref().map(|r| r.to_page.clone()),
        }
    }
}

impl Drop for TransitionController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn is_current(state: &Mutex<SequenceState>, generation: u64) -> bool {
    lock(state).generation == generation
}

fn advance(state: &Mutex<SequenceState>, generation: u64, to: Phase) -> bool {
    let mut st = lock(state);
    if st.generation != generation {
        debug!("Dropping stale timer for sequence {}", generation);
        return false;
    }
    debug_assert_eq!(st.phase.next(), Some(to));
    st.phase = to;
    true
}

// Runs on the controller's current-thread runtime, so nothing interleaves
// between a generation check and the observer call that follows it.
async fn run_sequence(
    state: Arc<Mutex<SequenceState>>,
    observer: Arc<dyn TransitionObserver>,
    generation: u64,
    request: TransitionRequest,
    started: Instant,
) {
    let mut phase = Phase::Melt;

    while let (Some(ends_at), Some(next)) = (phase.ends_at(), phase.next()) {
        time::sleep_until(started + ends_at).await;

        if phase == Phase::Melt {
            if !is_current(&state, generation) {
                return;
            }
            debug!(
                "Midpoint reached: {} -> {}",
                request.from_page, request.to_page
            );
            observer.on_transition_complete(&request);
        }

        if !advance(&state, generation, next) {
            return;
        }
        observer.on_phase_change(next, &request);
        phase = next;
    }

    info!(
        "Transition {} -> {} complete (sequence {})",
        request.from_page, request.to_page, generation
    );
}
