use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Watching,
    Fired,
}

/// What to do with an element the first time it becomes visible.
pub trait OnVisible<E> {
    fn on_visible(&self, element: &E);
}

/// Tracks a set of elements and runs the action at most once per element.
pub struct OneShotWatcher<E, A> {
    watched: Vec<(E, WatchState)>,
    action: A,
}

impl<E: PartialEq, A: OnVisible<E>> OneShotWatcher<E, A> {
    pub fn new(action: A) -> Self {
        Self {
            watched: Vec::new(),
            action,
        }
    }

    pub fn watch(&mut self, element: E) {
        if self.state(&element).is_none() {
            self.watched.push((element, WatchState::Watching));
        }
    }

    pub fn state(&self, element: &E) -> Option<WatchState> {
        self.watched
            .iter()
            .find(|(e, _)| e == element)
            .map(|(_, state)| *state)
    }

    pub fn pending(&self) -> usize {
        self.watched
            .iter()
            .filter(|(_, state)| *state == WatchState::Watching)
            .count()
    }

    /// Feeds one visibility change. Returns true when this call fired the
    /// action, meaning the caller should stop observing `target`.
    pub fn notify(&mut self, target: &E, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        let Some(slot) = self
            .watched
            .iter_mut()
            .find(|(e, state)| e == target && *state == WatchState::Watching)
        else {
            return false;
        };

        slot.1 = WatchState::Fired;
        self.action.on_visible(target);
        debug!("Visibility action fired, {} still pending", self.pending());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Record(RefCell<Vec<u32>>);

    impl OnVisible<u32> for &Record {
        fn on_visible(&self, element: &u32) {
            self.0.borrow_mut().push(*element);
        }
    }

    #[test]
    fn fires_once_per_element_across_visibility_flaps() {
        let record = Record::default();
        let mut watcher = OneShotWatcher::new(&record);
        watcher.watch(1);
        watcher.watch(2);

        assert!(!watcher.notify(&1, false));
        assert!(watcher.notify(&1, true));
        assert!(!watcher.notify(&1, false));
        assert!(!watcher.notify(&1, true));
        assert!(watcher.notify(&2, true));

        assert_eq!(*record.0.borrow(), vec![1, 2]);
        assert_eq!(watcher.state(&1), Some(WatchState::Fired));
        assert_eq!(watcher.pending(), 0);
    }

    #[test]
    fn unknown_targets_and_duplicate_watches_are_ignored() {
        let record = Record::default();
        let mut watcher = OneShotWatcher::new(&record);
        watcher.watch(7);
        watcher.watch(7);

        assert_eq!(watcher.pending(), 1);
        assert!(!watcher.notify(&8, true));
        assert!(record.0.borrow().is_empty());
        assert_eq!(watcher.state(&8), None);
    }
}
