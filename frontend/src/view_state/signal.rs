use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Slot<T> = Rc<dyn Fn(&T)>;

struct Slots<T> {
    next_id: u64,
    listeners: Vec<(u64, Slot<T>)>,
}

/// Single-threaded publish/subscribe channel.
///
/// Cloning a `Signal` yields another handle to the same listener list.
pub struct Signal<T> {
    slots: Rc<RefCell<Slots<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Signal<T> {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Registers `listener`. It stays registered until the returned
    /// subscription is dropped.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.listeners.push((id, Rc::new(listener)));
            id
        };
        let weak: Weak<RefCell<Slots<T>>> = Rc::downgrade(&self.slots);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(slots) = weak.upgrade() {
                    slots.borrow_mut().listeners.retain(|(slot_id, _)| *slot_id != id);
                }
            })),
        }
    }

    /// Delivers `value` to every listener in subscription order.
    pub fn emit(&self, value: &T) {
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<Slot<T>> = self
            .slots
            .borrow()
            .listeners
            .iter()
            .map(|(_, slot)| Rc::clone(slot))
            .collect();
        for listener in listeners {
            listener(value);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.slots.borrow().listeners.len()
    }
}

/// Handle for a registered listener; unregisters it on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn delivers_to_all_subscribers_in_order() {
        let signal = Signal::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let a = {
            let seen = seen.clone();
            signal.subscribe(move |v| seen.borrow_mut().push(("a", *v)))
        };
        let b = {
            let seen = seen.clone();
            signal.subscribe(move |v| seen.borrow_mut().push(("b", *v)))
        };
        signal.emit(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
        drop((a, b));
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let signal = Signal::<u32>::new();
        let hits = Rc::new(Cell::new(0));
        let sub = {
            let hits = hits.clone();
            signal.subscribe(move |_| hits.set(hits.get() + 1))
        };
        signal.emit(&1);
        drop(sub);
        signal.emit(&2);
        assert_eq!(hits.get(), 1);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn unsubscribe_only_removes_own_listener() {
        let signal = Signal::<()>::new();
        let first = signal.subscribe(|_| {});
        let _second = signal.subscribe(|_| {});
        first.unsubscribe();
        assert_eq!(signal.listener_count(), 1);
    }

    #[test]
    fn subscription_outliving_signal_is_harmless() {
        let signal = Signal::<()>::new();
        let sub = signal.subscribe(|_| {});
        drop(signal);
        drop(sub);
    }

    #[test]
    fn listener_may_subscribe_during_emit() {
        let signal = Signal::<()>::new();
        let extra = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let inner = signal.clone();
            let extra = extra.clone();
            signal.subscribe(move |_| {
                extra.borrow_mut().push(inner.subscribe(|_| {}));
            })
        };
        signal.emit(&());
        assert_eq!(signal.listener_count(), 2);
    }
}
