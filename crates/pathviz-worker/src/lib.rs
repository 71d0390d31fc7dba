//! Worker-thread execution for pathviz runs.
//!
//! A run (one search or one maze carve) executes on a dedicated worker
//! thread, mutating the shared [`Grid`] in place as it goes. The only
//! synchronized state between the worker and the caller is a one-shot
//! [`Signal`]: the worker sets it immediately before exiting, and the
//! presentation layer polls it once per frame, then joins the handle and
//! re-enables interaction.
//!
//! There is no cancellation: a started run always completes (success, path
//! exhaustion, or a finished carve) before signalling.
//!
//! # Preconditions
//!
//! At most one worker may be active per grid at a time, and the caller must
//! not edit cells or start another run while one is active. This is a
//! cooperative convention, not enforced here; cell accesses themselves are
//! unordered.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use pathviz_core::{Grid, Pacing};
pub use pathviz_maze::MazeKind;
pub use pathviz_search::SearchKind;

// ---------------------------------------------------------------------------
// Signal
// ---------------------------------------------------------------------------

/// A one-shot completion flag shared between a worker and its poller.
///
/// The worker's [`set`](Signal::set) releases, the poller's
/// [`is_set`](Signal::is_set) acquires: observing the flag guarantees the
/// worker's grid writes are visible.
#[derive(Clone, Debug, Default)]
pub struct Signal {
    done: Arc<AtomicBool>,
}

impl Signal {
    /// Create a new, unset signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the run complete.
    #[inline]
    pub fn set(&self) {
        self.done.store(true, Ordering::Release);
    }

    /// Whether the run has completed.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}

// ---------------------------------------------------------------------------
// Run entry points
// ---------------------------------------------------------------------------

/// Launch a search run on a worker thread. Fire-and-forget: the worker runs
/// to completion, sets `signal`, and exits; the grid is mutated in place and
/// nothing else is returned. Join the handle after observing the signal.
///
/// `start` and `end` must be in bounds, distinct, and not walls; this is not
/// validated. See the crate docs for the single-active-worker convention.
pub fn run_search(
    kind: SearchKind,
    grid: Grid,
    start: usize,
    end: usize,
    pacing: Pacing,
    signal: Signal,
) -> JoinHandle<()> {
    thread::spawn(move || {
        log::debug!("search worker started: {kind:?}, {start} -> {end}");
        match pathviz_search::search(kind, &grid, start, end, pacing) {
            Some(path) => log::debug!("search worker finished: path of {} cells", path.len()),
            None => log::debug!("search worker finished: no path"),
        }
        signal.set();
    })
}

/// Launch a maze carve on a worker thread. Fire-and-forget, like
/// [`run_search`]; the grid is reset to walls and carved in place.
pub fn run_maze(kind: MazeKind, grid: Grid, pacing: Pacing, signal: Signal) -> JoinHandle<()> {
    thread::spawn(move || {
        log::debug!("maze worker started: {kind:?}");
        let mut rng = rand::rng();
        pathviz_maze::generate(kind, &grid, &mut rng, pacing);
        log::debug!("maze worker finished");
        signal.set();
    })
}
