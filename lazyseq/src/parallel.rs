//! Mapping over a sequence with a pool of worker threads.
//!
//! Sequences themselves stay on the thread that built them. A parallel map
//! computes the input up front and hands the elements, not the sequence,
//! to the workers. The result is a finite sequence in input order.
use std::num::NonZeroUsize;
use std::panic;
use std::thread;

use crossbeam_channel::{bounded, unbounded};
use log::{debug, trace};

use crate::sequence::Sequence;

/// Configuration for a parallel map.
///
/// ```rust
/// use lazyseq::{seq, ParallelMap};
///
/// let squares = ParallelMap::new().workers(2).map(|x: u64| x * x, seq![1, 2, 3]);
/// assert_eq!(squares.to_vec(), vec![1, 4, 9]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelMap {
    workers: usize,
    queue_capacity: Option<usize>,
}

impl ParallelMap {
    /// One worker per unit of available parallelism.
    pub fn new() -> Self {
        ParallelMap {
            workers: default_workers(),
            queue_capacity: None,
        }
    }

    /// The number of worker threads. At least one is always used, and never
    /// more than there are elements.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// How many elements may wait for a worker at once. Defaults to twice
    /// the number of workers.
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity.max(1));
        self
    }

    /// Apply `f` to every element on the worker pool.
    ///
    /// Computes the whole of `sequence` first, so it must be finite. If `f`
    /// panics on any element the panic is resumed on the calling thread
    /// once the workers have stopped.
    pub fn map<T, U, F>(&self, f: F, sequence: Sequence<T>) -> Sequence<U>
    where
        T: Clone + Send,
        U: Send,
        F: Fn(T) -> U + Sync,
    {
        let items = sequence.to_vec();
        let len = items.len();
        if len == 0 {
            return Sequence::empty();
        }
        let workers = self.workers.min(len);
        let capacity = self.queue_capacity.unwrap_or(2 * workers);
        debug!(
            "parallel map over {} elements with {} workers (queue capacity {})",
            len, workers, capacity
        );

        let (task_sender, task_receiver) = bounded::<(usize, T)>(capacity);
        let (result_sender, result_receiver) = unbounded::<(usize, U)>();
        let mut results: Vec<Option<U>> = (0..len).map(|_| None).collect();
        let f = &f;

        thread::scope(|scope| {
            let handles = (0..workers)
                .map(|_| {
                    let task_receiver = task_receiver.clone();
                    let result_sender = result_sender.clone();
                    scope.spawn(move || {
                        for (index, item) in task_receiver.iter() {
                            if result_sender.send((index, f(item))).is_err() {
                                break;
                            }
                        }
                    })
                })
                .collect::<Vec<_>>();
            drop(task_receiver);
            drop(result_sender);

            for task in items.into_iter().enumerate() {
                // fails only once every worker is gone
                if task_sender.send(task).is_err() {
                    break;
                }
            }
            drop(task_sender);

            for (index, value) in result_receiver.iter() {
                results[index] = Some(value);
            }
            for handle in handles {
                if let Err(payload) = handle.join() {
                    panic::resume_unwind(payload);
                }
            }
        });

        debug!("parallel map over {} elements done", len);
        results.into_iter().flatten().collect::<Vec<_>>().into()
    }
}

impl Default for ParallelMap {
    fn default() -> Self {
        Self::new()
    }
}

fn default_workers() -> usize {
    let workers = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    trace!("available parallelism: {}", workers);
    workers
}

/// [`ParallelMap::map`] with the default configuration.
pub fn parallel_map<T, U, F>(f: F, sequence: Sequence<T>) -> Sequence<U>
where
    T: Clone + Send,
    U: Send,
    F: Fn(T) -> U + Sync,
{
    ParallelMap::new().map(f, sequence)
}
