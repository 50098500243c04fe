//! Change subscription for stores.

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatcherId(u64);

/// A registry of change callbacks.
///
/// Stores call `notify` after every successful mutation, passing a typed
/// event. Callbacks run synchronously on the caller's thread in subscription
/// order. Rejected mutations notify nothing.
pub struct Watchers<E> {
    next_id: u64,
    entries: Vec<(WatcherId, Box<dyn Fn(&E)>)>,
}

impl<E> Watchers<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a callback for future events.
    pub fn subscribe(&mut self, callback: impl Fn(&E) + 'static) -> WatcherId {
        let id = WatcherId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: WatcherId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() < len_before
    }

    /// Deliver an event to every registered callback.
    pub fn notify(&self, event: &E) {
        for (_, callback) in &self.entries {
            callback(event);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Watchers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Watchers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watchers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_subscribe_and_notify() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut watchers: Watchers<u32> = Watchers::new();

        let sink = Rc::clone(&seen);
        watchers.subscribe(move |event| sink.borrow_mut().push(*event));

        watchers.notify(&1);
        watchers.notify(&2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let seen = Rc::new(RefCell::new(0));
        let mut watchers: Watchers<()> = Watchers::new();

        let sink = Rc::clone(&seen);
        let id = watchers.subscribe(move |_| *sink.borrow_mut() += 1);

        watchers.notify(&());
        assert!(watchers.unsubscribe(id));
        watchers.notify(&());

        assert_eq!(*seen.borrow(), 1);
        assert!(!watchers.unsubscribe(id));
    }

    #[test]
    fn test_multiple_subscribers_run_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut watchers: Watchers<()> = Watchers::new();

        for tag in ["first", "second"] {
            let sink = Rc::clone(&seen);
            watchers.subscribe(move |_| sink.borrow_mut().push(tag));
        }

        watchers.notify(&());
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }
}
