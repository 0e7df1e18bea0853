//! Observable - A live value read through a getter.
//!
//! An `Observable<T>` wraps a getter that reads one or more spark-signals.
//! Mapping composes the transform onto the getter, so derived observables
//! stay connected to the original signals without any re-wiring.

use std::fmt;
use std::rc::Rc;

use spark_signals::{effect, Signal};
use tracing::trace;

use super::Cleanup;

/// A value that changes over time, driven by spark-signals.
///
/// Reading it inside an `effect` (or a `derived`) tracks every signal the
/// getter touches. Values are recomputed on each read; nothing is cached.
pub struct Observable<T> {
    read: Rc<dyn Fn() -> T>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            read: Rc::clone(&self.read),
        }
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable").finish_non_exhaustive()
    }
}

impl<T: 'static> Observable<T> {
    /// Create an observable from a getter.
    ///
    /// The getter should read signals (or deriveds) so that subscribers are
    /// notified when they change.
    pub fn from_getter(getter: impl Fn() -> T + 'static) -> Self {
        Self {
            read: Rc::new(getter),
        }
    }

    /// Read the current value.
    pub fn get(&self) -> T {
        (self.read)()
    }

    /// Derive a new observable by applying `transform` to every value.
    ///
    /// `transform` must be pure: it runs on every read of the result and
    /// once per firing for each subscriber.
    pub fn map<U: 'static>(&self, transform: impl Fn(T) -> U + 'static) -> Observable<U> {
        let read = Rc::clone(&self.read);
        Observable {
            read: Rc::new(move || transform(read())),
        }
    }

    /// Deliver the current value now, then again after every upstream change.
    ///
    /// Delivery is synchronous and in firing order. Call the returned
    /// cleanup to stop it.
    pub fn subscribe(&self, mut callback: impl FnMut(T) + 'static) -> Cleanup {
        let read = Rc::clone(&self.read);

        trace!("observable subscription started");
        let stop = effect(move || callback(read()));

        Box::new(move || {
            stop();
            trace!("observable subscription stopped");
        })
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Create an observable that follows a signal.
    pub fn from_signal(signal: Signal<T>) -> Self {
        Self::from_getter(move || signal.get())
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for Observable<T> {
    fn from(signal: Signal<T>) -> Self {
        Self::from_signal(signal)
    }
}

// =============================================================================
// Tests
// =============================================================================
