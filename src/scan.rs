//! Parallel scans over the live region of a `DoubleBufferedList`.
//!
//! The live elements are split into contiguous chunks and each chunk is
//! handed to a scoped worker thread. The call joins every worker before it
//! returns, so no thread outlives the scan. Observers only ever see element
//! references, never the list, so they cannot add, remove or resize.

use std::panic;
use std::thread;

use tracing::trace;

use crate::core::DoubleBufferedList;

/// Minimum number of elements per worker before another worker is used.
pub const DEFAULT_MIN_CHUNK_LEN: usize = 1024;

const MAX_WORKERS: usize = 64;
const FALLBACK_WORKERS: usize = 4;

/// Tuning for [`DoubleBufferedList::par_for_each_with`] and
/// [`DoubleBufferedList::par_for_each_mut_with`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Number of worker threads. `None` = auto-detect from
    /// `available_parallelism`.
    pub workers: Option<usize>,
    /// Smallest chunk worth its own worker. Default: 1024.
    pub min_chunk_len: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            workers: None,
            min_chunk_len: DEFAULT_MIN_CHUNK_LEN,
        }
    }
}

impl ScanConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    #[must_use]
    pub fn resolved_workers(&self) -> usize {
        match self.workers {
            Some(n) => n.clamp(1, MAX_WORKERS),
            None => thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(FALLBACK_WORKERS)
                .min(MAX_WORKERS),
        }
    }

    /// Length of each chunk when scanning `len` elements.
    ///
    /// The last chunk may be shorter. A result `>= len` means the scan runs
    /// on the calling thread alone.
    #[must_use]
    pub fn chunk_len(&self, len: usize) -> usize {
        let chunks = len
            .div_ceil(self.min_chunk_len.max(1))
            .clamp(1, self.resolved_workers());
        len.div_ceil(chunks).max(1)
    }
}

impl<T> DoubleBufferedList<T> {
    /// Calls `observer` once for every live element, in no particular order,
    /// using the default [`ScanConfig`].
    ///
    /// Blocks until every element has been visited. A panic in `observer` is
    /// re-raised here once all workers have stopped.
    pub fn par_for_each<F>(&self, observer: F)
    where
        T: Sync,
        F: Fn(&T) + Sync,
    {
        self.par_for_each_with(&ScanConfig::default(), observer);
    }

    /// Like [`par_for_each`](Self::par_for_each) with explicit tuning.
    pub fn par_for_each_with<F>(&self, config: &ScanConfig, observer: F)
    where
        T: Sync,
        F: Fn(&T) + Sync,
    {
        let len = self.primary.len();
        if len == 0 {
            return;
        }

        let chunk_len = config.chunk_len(len);
        trace!(elements = len, chunks = len.div_ceil(chunk_len), "parallel scan");

        let mut chunks = self.primary.chunks(chunk_len);
        if let Some(local) = chunks.next() {
            fan_out(local, chunks, |chunk| chunk.iter().for_each(&observer));
        }
    }

    /// Calls `observer` once for every live element, in no particular order,
    /// letting it mutate that element, using the default [`ScanConfig`].
    ///
    /// Unlike [`retain_mut`](Self::retain_mut) this cannot drop elements; run
    /// a compacting pass afterwards to remove the ones the scan marked.
    pub fn par_for_each_mut<F>(&mut self, observer: F)
    where
        T: Send,
        F: Fn(&mut T) + Sync,
    {
        self.par_for_each_mut_with(&ScanConfig::default(), observer);
    }

    /// Like [`par_for_each_mut`](Self::par_for_each_mut) with explicit tuning.
    pub fn par_for_each_mut_with<F>(&mut self, config: &ScanConfig, observer: F)
    where
        T: Send,
        F: Fn(&mut T) + Sync,
    {
        let len = self.primary.len();
        if len == 0 {
            return;
        }

        let chunk_len = config.chunk_len(len);
        trace!(elements = len, chunks = len.div_ceil(chunk_len), "parallel scan");

        let mut chunks = self.primary.chunks_mut(chunk_len);
        if let Some(local) = chunks.next() {
            fan_out(local, chunks, |chunk| chunk.iter_mut().for_each(&observer));
        }
    }
}

/// Runs `work` on every chunk of `rest` in its own scoped thread and on
/// `local` in the calling thread, then joins.
///
/// The first worker panic is resumed on the calling thread with its original
/// payload.
fn fan_out<C, I, W>(local: C, rest: I, work: W)
where
    C: Send,
    I: Iterator<Item = C>,
    W: Fn(C) + Sync,
{
    let work = &work;
    thread::scope(|scope| {
        let workers: Vec<_> = rest
            .map(|chunk| scope.spawn(move || work(chunk)))
            .collect();
        work(local);
        for worker in workers {
            if let Err(payload) = worker.join() {
                panic::resume_unwind(payload);
            }
        }
    });
}
