//! Multi-subscriber event broadcasting.

/// Identifies one subscription on one [`Signal`]. Ids are monotonically
/// increasing per signal instance and carry no meaning across instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

/// An ordered broadcaster: slots fire in connection order.
pub struct Signal<T = ()> {
    slots: Vec<(ConnectionId, Box<dyn FnMut(&T)>)>,
    next_id: u64,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self { slots: Vec::new(), next_id: 0 }
    }
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal").field("slots", &self.slots.len()).finish()
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe. The returned id can later be passed to [`disconnect`].
    ///
    /// [`disconnect`]: Signal::disconnect
    pub fn connect(&mut self, slot: impl FnMut(&T) + 'static) -> ConnectionId {
        let id = ConnectionId(self.next_id);
        self.next_id += 1;
        self.slots.push((id, Box::new(slot)));
        id
    }

    /// Remove one subscription. Unknown ids are ignored.
    pub fn disconnect(&mut self, id: ConnectionId) {
        self.slots.retain(|(slot_id, _)| *slot_id != id);
    }

    /// Invoke every slot in connection order.
    pub fn emit(&mut self, value: &T) {
        for (_, slot) in &mut self.slots {
            slot(value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn slots_fire_in_connection_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut sig = Signal::<i32>::new();
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            sig.connect(move |v| order.borrow_mut().push((tag, *v)));
        }
        sig.emit(&7);
        assert_eq!(*order.borrow(), vec![("first", 7), ("second", 7), ("third", 7)]);
    }

    #[test]
    fn disconnect_removes_only_the_named_slot() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut sig = Signal::new();
        let a = {
            let hits = hits.clone();
            sig.connect(move |_: &()| hits.borrow_mut().push('a'))
        };
        let _b = {
            let hits = hits.clone();
            sig.connect(move |_| hits.borrow_mut().push('b'))
        };
        sig.disconnect(a);
        sig.emit(&());
        assert_eq!(*hits.borrow(), vec!['b']);
    }

    #[test]
    fn ids_are_unique_within_an_instance() {
        let mut sig = Signal::<()>::new();
        let a = sig.connect(|_| {});
        let b = sig.connect(|_| {});
        sig.disconnect(a);
        let c = sig.connect(|_| {});
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn emit_on_empty_signal_is_a_noop() {
        let mut sig = Signal::<bool>::new();
        sig.emit(&true);
        assert!(sig.is_empty());
    }
}
