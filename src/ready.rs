use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

/// Join barrier over N independent completion signals.
///
/// The sketch only cares about joint completion; the order in which the
/// signals arrive is irrelevant. Unlike the unbounded promise join it
/// replaces, waiting takes a timeout so a missing asset surfaces as an
/// error instead of a hang.
pub struct ReadyGate {
    state: Arc<GateState>,
}

/// Cloneable completion handle for one slot of a [`ReadyGate`]. Clones
/// share the slot: the gate counts each slot at most once no matter how
/// many handles complete it.
#[derive(Clone)]
pub struct ReadySignal {
    state: Arc<GateState>,
    done: Arc<AtomicBool>,
}

struct GateState {
    pending: Mutex<usize>,
    all_done: Condvar,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ReadyError {
    /// The deadline passed with this many signals still outstanding.
    TimedOut { pending: usize },
}

impl fmt::Display for ReadyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadyError::TimedOut { pending } => {
                write!(f, "readiness gate timed out with {} signal(s) pending", pending)
            }
        }
    }
}

impl std::error::Error for ReadyError {}

impl ReadyGate {
    /// Create a gate expecting `count` completions, along with one signal
    /// handle per slot.
    pub fn new(count: usize) -> (Self, Vec<ReadySignal>) {
        let state = Arc::new(GateState {
            pending: Mutex::new(count),
            all_done: Condvar::new(),
        });

        let signals = (0..count)
            .map(|_| ReadySignal {
                state: state.clone(),
                done: Arc::new(AtomicBool::new(false)),
            })
            .collect();

        (Self { state }, signals)
    }

    /// Block until every signal has completed or the timeout passes.
    pub fn wait(&self, timeout: Duration) -> Result<(), ReadyError> {
        let deadline = Instant::now() + timeout;
        let mut pending = self
            .state
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        while *pending > 0 {
            let now = Instant::now();
            if now >= deadline {
                return Err(ReadyError::TimedOut { pending: *pending });
            }
            let (guard, result) = self
                .state
                .all_done
                .wait_timeout(pending, deadline - now)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            pending = guard;
            if result.timed_out() && *pending > 0 {
                return Err(ReadyError::TimedOut { pending: *pending });
            }
        }

        Ok(())
    }
}

impl ReadySignal {
    /// Mark this slot complete, consuming the handle. Only the first
    /// completion of a slot counts; later clones are no-ops.
    pub fn complete(self) {
        if self.done.swap(true, Ordering::AcqRel) {
            return;
        }
        let mut pending = self
            .state
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if *pending > 0 {
            *pending -= 1;
        }
        if *pending == 0 {
            self.state.all_done.notify_all();
        }
    }
}
