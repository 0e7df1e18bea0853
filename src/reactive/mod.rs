//! Reactive values - constant or live.
//!
//! A [`Reactive<T>`] is either a fixed value known when the element is
//! built, or an [`Observable<T>`] that changes over the lifetime of the
//! surrounding UI. Mapping always preserves the kind:
//!
//! ```text
//! Constant(T)   --map(f)-->  Constant(U)     (f runs once, now)
//! Observable(T) --map(f)-->  Observable(U)   (f runs on every read/firing)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use spark_signals::signal;
//! use spark_spritesheet::reactive::Reactive;
//!
//! let progress = signal(0.25f64);
//! let alpha: Reactive<f64> = progress.clone().into();
//! let percent = alpha.map(|a| (a * 100.0) as u32);
//!
//! assert!(percent.is_observable());
//! progress.set(0.5);
//! assert_eq!(percent.get(), 50);
//! ```

mod observable;

pub use observable::Observable;

use spark_signals::Signal;

/// Cleanup function returned by subscriptions.
///
/// Call this to stop receiving updates.
pub type Cleanup = Box<dyn FnOnce()>;

/// A value that is either constant or observable.
#[derive(Clone, Debug)]
pub enum Reactive<T> {
    /// Fixed value (not reactive).
    Constant(T),
    /// Live value (changes propagate automatically).
    Observable(Observable<T>),
}

impl<T: Clone + 'static> Reactive<T> {
    /// Wrap a fixed value.
    pub fn constant(value: T) -> Self {
        Reactive::Constant(value)
    }

    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            Reactive::Constant(v) => v.clone(),
            Reactive::Observable(o) => o.get(),
        }
    }

    /// Apply a pure transform, preserving the kind.
    pub fn map<U: 'static>(&self, transform: impl Fn(T) -> U + 'static) -> Reactive<U> {
        match self {
            Reactive::Constant(v) => Reactive::Constant(transform(v.clone())),
            Reactive::Observable(o) => Reactive::Observable(o.map(transform)),
        }
    }

    /// Deliver the current value now and, for observables, after every change.
    ///
    /// A constant delivers exactly once and returns a no-op cleanup.
    pub fn subscribe(&self, mut callback: impl FnMut(T) + 'static) -> Cleanup {
        match self {
            Reactive::Constant(v) => {
                callback(v.clone());
                Box::new(|| {})
            }
            Reactive::Observable(o) => o.subscribe(callback),
        }
    }
}

impl<T> Reactive<T> {
    pub fn is_constant(&self) -> bool {
        matches!(self, Reactive::Constant(_))
    }

    pub fn is_observable(&self) -> bool {
        matches!(self, Reactive::Observable(_))
    }

    /// The observable behind this value, if any.
    pub fn as_observable(&self) -> Option<&Observable<T>> {
        match self {
            Reactive::Constant(_) => None,
            Reactive::Observable(o) => Some(o),
        }
    }
}

impl<T: Default> Default for Reactive<T> {
    fn default() -> Self {
        Reactive::Constant(T::default())
    }
}

impl<T> From<T> for Reactive<T> {
    fn from(value: T) -> Self {
        Reactive::Constant(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for Reactive<T> {
    fn from(signal: Signal<T>) -> Self {
        Reactive::Observable(Observable::from_signal(signal))
    }
}

impl<T> From<Observable<T>> for Reactive<T> {
    fn from(observable: Observable<T>) -> Self {
        Reactive::Observable(observable)
    }
}

/// Map a reactive value with a pure transform.
///
/// Free-function form of [`Reactive::map`].
pub fn map_reactive<T, U>(
    source: &Reactive<T>,
    transform: impl Fn(T) -> U + 'static,
) -> Reactive<U>
where
    T: Clone + 'static,
    U: 'static,
{
    source.map(transform)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn live<T: Clone + PartialEq + 'static>(source: &Signal<T>) -> Reactive<T> {
        Reactive::from(source.clone())
    }

    #[test]
    fn test_constant_maps_to_constant() {
        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();

        let mapped = Reactive::constant(3i32).map(move |v| {
            calls_clone.set(calls_clone.get() + 1);
            v * 3
        });

        assert!(mapped.is_constant());
        assert_eq!(calls.get(), 1);
        assert_eq!(mapped.get(), 9);
        // Reading a constant never re-runs the transform
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_observable_maps_to_observable() {
        let source = signal(1i32);
        let mapped = live(&source).map(|v| v + 1);

        assert!(mapped.is_observable());
        assert_eq!(mapped.get(), 2);
        source.set(41);
        assert_eq!(mapped.get(), 42);
    }

    #[test]
    fn test_chained_maps_preserve_kind() {
        let constant = Reactive::constant(1.5f64).map(|v| v * 2.0).map(|v| v as i64);
        assert!(constant.is_constant());
        assert_eq!(constant.get(), 3);

        let observed = live(&signal(1.5f64)).map(|v| v * 2.0).map(|v| v as i64);
        assert!(observed.is_observable());
        assert!(observed.as_observable().is_some());
    }

    #[test]
    fn test_map_reactive_free_function() {
        let source = live(&signal(10u32));
        let halved = map_reactive(&source, |v| v / 2);
        assert!(halved.is_observable());
        assert_eq!(halved.get(), 5);

        let fixed = map_reactive(&Reactive::constant(10u32), |v| v / 2);
        assert!(fixed.is_constant());
        assert_eq!(fixed.get(), 5);
    }

    #[test]
    fn test_constant_subscribe_delivers_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();

        let stop = Reactive::constant("idle").subscribe(move |v| seen_clone.borrow_mut().push(v));
        stop();

        assert_eq!(*seen.borrow(), vec!["idle"]);
    }

    #[test]
    fn test_observable_subscribe_in_firing_order() {
        let source = signal(0u8);
        let reactive = live(&source).map(|v| v * 10);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let _stop = reactive.subscribe(move |v| seen_clone.borrow_mut().push(v));

        for v in 1..=4 {
            source.set(v);
        }
        assert_eq!(*seen.borrow(), vec![0, 10, 20, 30, 40]);
    }

    #[test]
    fn test_default_is_constant() {
        let value: Reactive<f64> = Reactive::default();
        assert!(value.is_constant());
        assert_eq!(value.get(), 0.0);
    }
}
