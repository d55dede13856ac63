use std::cell::RefCell;
use std::rc::Rc;

use super::core::Sequence;

pub(crate) type Producer<T> = Box<dyn FnOnce() -> Sequence<T>>;

enum State<T> {
    Pending(Producer<T>),
    // also left behind if a producer panics
    Evaluating,
    Done(Sequence<T>),
}

enum Step<T> {
    Cached(Sequence<T>),
    Produced(Sequence<T>),
}

/// A write-once slot for a sequence that has not been computed yet.
///
/// The producer runs at most once. Once it has run the slot holds the
/// resolved sequence, which is never itself a delayed sequence: chains of
/// delayed sequences are followed iteratively and every slot on the way is
/// filled with the same final value.
pub(crate) struct Thunk<T> {
    state: RefCell<State<T>>,
}

impl<T> Thunk<T> {
    pub(crate) fn new(producer: Producer<T>) -> Self {
        Thunk {
            state: RefCell::new(State::Pending(producer)),
        }
    }

    pub(crate) fn ready(sequence: Sequence<T>) -> Self {
        Thunk {
            state: RefCell::new(State::Done(sequence)),
        }
    }

    /// The computed sequence, if the producer already ran. Never runs it.
    pub(crate) fn peek(&self) -> Option<Sequence<T>> {
        let state = self.state.try_borrow().ok()?;
        match &*state {
            State::Done(sequence) => Some(sequence.clone()),
            _ => None,
        }
    }

    /// Run the producer if needed and return the resolved sequence.
    pub(crate) fn force(&self) -> Sequence<T> {
        let (mut sequence, mut changed) = match self.step() {
            Step::Cached(sequence) => (sequence, false),
            Step::Produced(sequence) => (sequence, true),
        };
        let mut produced: Vec<Rc<Thunk<T>>> = Vec::new();
        loop {
            let thunk = match &sequence {
                Sequence::Delayed(delayed) => delayed.thunk().clone(),
                _ => break,
            };
            sequence = match thunk.step() {
                Step::Cached(sequence) => sequence,
                Step::Produced(sequence) => {
                    produced.push(thunk);
                    sequence
                }
            };
            changed = true;
        }
        for thunk in produced {
            thunk.store(sequence.clone());
        }
        if changed {
            self.store(sequence.clone());
        }
        sequence
    }

    fn step(&self) -> Step<T> {
        let mut state = self.state.borrow_mut();
        match std::mem::replace(&mut *state, State::Evaluating) {
            State::Done(sequence) => {
                *state = State::Done(sequence.clone());
                Step::Cached(sequence)
            }
            State::Pending(producer) => {
                // the producer may query other sequences, so release the
                // borrow first
                drop(state);
                Step::Produced(producer())
            }
            State::Evaluating => panic!(
                "sequence queried while its remainder is being produced \
                 (re-entrant query, or an earlier producer panicked)"
            ),
        }
    }

    fn store(&self, sequence: Sequence<T>) {
        *self.state.borrow_mut() = State::Done(sequence);
    }

    fn take_done(&mut self) -> Option<Sequence<T>> {
        match std::mem::replace(self.state.get_mut(), State::Evaluating) {
            State::Done(sequence) => Some(sequence),
            other => {
                *self.state.get_mut() = other;
                None
            }
        }
    }
}

// Dropping the head of a long evaluated chain would otherwise recurse once
// per element.
impl<T> Drop for Thunk<T> {
    fn drop(&mut self) {
        let mut next = self.take_done();
        while let Some(sequence) = next {
            next = match sequence {
                Sequence::Deferred(deferred) => deferred
                    .into_rest()
                    .and_then(|rest| Rc::try_unwrap(rest).ok())
                    .and_then(|mut thunk| thunk.take_done()),
                Sequence::Delayed(delayed) => Rc::try_unwrap(delayed.into_thunk())
                    .ok()
                    .and_then(|mut thunk| thunk.take_done()),
                Sequence::Empty(_) | Sequence::Many(_) => None,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_producer_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let thunk = Thunk::new(Box::new(move || {
            counter.set(counter.get() + 1);
            Sequence::from(vec![1, 2])
        }));
        assert!(thunk.peek().is_none());
        assert_eq!(calls.get(), 0);
        assert_eq!(thunk.force().to_vec(), vec![1, 2]);
        assert_eq!(thunk.force().to_vec(), vec![1, 2]);
        assert_eq!(calls.get(), 1);
        assert!(thunk.peek().is_some());
    }

    #[test]
    fn test_force_resolves_delayed_chain() {
        let mut sequence = Sequence::from(vec![7]);
        for _ in 0..100_000 {
            let inner = sequence;
            sequence = Sequence::delay(move || inner);
        }
        let thunk = Thunk::new(Box::new(move || sequence));
        let resolved = thunk.force();
        assert!(matches!(resolved, Sequence::Many(_)));
        assert_eq!(resolved.to_vec(), vec![7]);
    }

    #[test]
    #[should_panic(expected = "re-entrant")]
    fn test_reentrant_force_panics() {
        let slot: Rc<RefCell<Option<Rc<Thunk<i32>>>>> = Rc::new(RefCell::new(None));
        let inner = slot.clone();
        let thunk = Rc::new(Thunk::new(Box::new(move || {
            let own = inner.borrow().clone();
            match own {
                Some(thunk) => thunk.force(),
                None => Sequence::empty(),
            }
        })));
        *slot.borrow_mut() = Some(thunk.clone());
        thunk.force();
    }
}
