//! Explicit invalidation contract over the cached backend collections.
//!
//! Mutations call [`QueryBus::invalidate`]; every active reader of that key
//! is notified and refetches on its own schedule. This replaces an implicit
//! process-wide cache with a subscription the views opt into.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// The cacheable backend collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Players,
    Divisions,
    DivisionGroups,
    CurrentUser,
}

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: Vec<(u64, QueryKey, Listener)>,
}

/// Shared handle to the invalidation bus. Cheap to clone; all clones point
/// at the same subscriber list.
#[derive(Clone, Default)]
pub struct QueryBus {
    inner: Rc<RefCell<BusInner>>,
}

impl PartialEq for QueryBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl QueryBus {
    pub fn new() -> Self {
        QueryBus::default()
    }

    /// Registers a listener for `key`. Dropping the returned subscription
    /// unregisters it.
    pub fn subscribe(&self, key: QueryKey, listener: Listener) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, key, listener));
        Subscription {
            bus: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Notifies every active subscriber of `key` that its data is stale.
    pub fn invalidate(&self, key: QueryKey) {
        // Listeners may subscribe or drop subscriptions while running, so
        // they are called outside the borrow.
        let stale: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|(_, listener_key, _)| *listener_key == key)
            .map(|(_, _, listener)| listener.clone())
            .collect();
        for listener in stale {
            listener();
        }
    }
}

/// Keeps a bus subscription alive; unregisters on drop.
pub struct Subscription {
    bus: Weak<RefCell<BusInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(id, _, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn invalidation_reaches_matching_subscribers_only() {
        let bus = QueryBus::new();
        let players_hits = Rc::new(Cell::new(0));
        let divisions_hits = Rc::new(Cell::new(0));

        let _players = {
            let hits = players_hits.clone();
            bus.subscribe(QueryKey::Players, Rc::new(move || hits.set(hits.get() + 1)))
        };
        let _divisions = {
            let hits = divisions_hits.clone();
            bus.subscribe(
                QueryKey::Divisions,
                Rc::new(move || hits.set(hits.get() + 1)),
            )
        };

        bus.invalidate(QueryKey::Players);
        bus.invalidate(QueryKey::Players);

        assert_eq!(players_hits.get(), 2);
        assert_eq!(divisions_hits.get(), 0);
    }

    #[test]
    fn dropped_subscription_stops_receiving() {
        let bus = QueryBus::new();
        let hits = Rc::new(Cell::new(0));

        let subscription = {
            let hits = hits.clone();
            bus.subscribe(QueryKey::Players, Rc::new(move || hits.set(hits.get() + 1)))
        };
        bus.invalidate(QueryKey::Players);
        drop(subscription);
        bus.invalidate(QueryKey::Players);

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn listener_may_touch_the_bus_reentrantly() {
        let bus = QueryBus::new();
        let hits = Rc::new(Cell::new(0));

        let _subscription = {
            let bus = bus.clone();
            let hits = hits.clone();
            bus.clone().subscribe(
                QueryKey::Players,
                Rc::new(move || {
                    hits.set(hits.get() + 1);
                    // A reader reacting to invalidation may register fresh
                    // subscriptions; this must not panic.
                    drop(bus.subscribe(QueryKey::Divisions, Rc::new(|| {})));
                }),
            )
        };

        bus.invalidate(QueryKey::Players);
        assert_eq!(hits.get(), 1);
    }
}
