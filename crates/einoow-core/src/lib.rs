pub mod card;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metadata;
pub mod pages;
pub mod play;
pub mod route;
pub mod timer;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use std::time::Duration;

    use crate::catalog::{Catalog, GameId, GameRecord, GameStatus};
    use crate::metadata::{MetaSlot, MetadataSink};
    use crate::play::Navigator;
    use crate::timer::{Scheduler, TimerHandle};

    /// A record with predictable fields; its url is `https://<id>.example`.
    pub fn make_record(id: &str, status: GameStatus) -> GameRecord {
        GameRecord {
            id: GameId::new(id),
            name: format!("Game {id}"),
            description: format!("Description of {id}"),
            url: format!("https://{id}.example"),
            image: None,
            status,
            featured: false,
            tags: vec![],
        }
    }

    /// Build a catalog, panicking on duplicate ids.
    pub fn make_catalog(records: Vec<GameRecord>) -> Catalog {
        Catalog::new(records).expect("test catalog ids must be unique")
    }

    /// One element in the fake document head.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct HeadElement {
        pub slot: MetaSlot,
        pub value: String,
    }

    /// In-memory document head with upsert-by-selector semantics.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        elements: Vec<HeadElement>,
        writes: usize,
    }

    impl RecordingSink {
        /// Seed an element as if it were present in the static HTML.
        pub fn preload(&mut self, slot: MetaSlot, value: &str) {
            self.elements.push(HeadElement {
                slot,
                value: value.to_string(),
            });
        }

        pub fn value(&self, slot: MetaSlot) -> Option<&str> {
            self.elements
                .iter()
                .find(|e| e.slot.selector() == slot.selector())
                .map(|e| e.value.as_str())
        }

        /// Number of elements matching the slot's selector.
        pub fn count(&self, slot: MetaSlot) -> usize {
            self.elements
                .iter()
                .filter(|e| e.slot.selector() == slot.selector())
                .count()
        }

        pub fn element_count(&self) -> usize {
            self.elements.len()
        }

        pub fn writes(&self) -> usize {
            self.writes
        }
    }

    impl MetadataSink for RecordingSink {
        fn upsert(&mut self, slot: MetaSlot, value: &str) {
            self.writes += 1;
            let selector = slot.selector();
            match self.elements.iter_mut().find(|e| e.slot.selector() == selector) {
                Some(element) => element.value = value.to_string(),
                None => self.elements.push(HeadElement {
                    slot,
                    value: value.to_string(),
                }),
            }
        }
    }

    /// Sink shared between a synchronizer and the test that inspects it.
    impl MetadataSink for Rc<RefCell<RecordingSink>> {
        fn upsert(&mut self, slot: MetaSlot, value: &str) {
            self.borrow_mut().upsert(slot, value);
        }
    }

    struct PendingTask {
        id: u64,
        due: Duration,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct ClockState {
        now: Duration,
        next_id: u64,
        pending: Vec<PendingTask>,
        scheduled: usize,
        cancelled: usize,
    }

    /// Deterministic scheduler driven by [`ManualScheduler::advance`].
    #[derive(Default)]
    pub struct ManualScheduler {
        state: Rc<RefCell<ClockState>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Move the clock forward, running every task that falls due in deadline order.
        pub fn advance(&self, by: Duration) {
            let target = self.state.borrow().now + by;
            loop {
                let next = {
                    let mut state = self.state.borrow_mut();
                    let due = state
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.id))
                        .map(|(i, _)| i);
                    due.map(|i| {
                        let task = state.pending.remove(i);
                        state.now = task.due;
                        task
                    })
                };
                match next {
                    Some(task) => (task.task)(),
                    None => break,
                }
            }
            self.state.borrow_mut().now = target;
        }

        pub fn pending(&self) -> usize {
            self.state.borrow().pending.len()
        }

        pub fn scheduled(&self) -> usize {
            self.state.borrow().scheduled
        }

        pub fn cancelled(&self) -> usize {
            self.state.borrow().cancelled
        }

        /// Deadline of the earliest pending task, relative to the current clock.
        pub fn next_due_in(&self) -> Option<Duration> {
            let state = self.state.borrow();
            state.pending.iter().map(|p| p.due - state.now).min()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
            let id = {
                let mut state = self.state.borrow_mut();
                let id = state.next_id;
                state.next_id += 1;
                state.scheduled += 1;
                let due = state.now + delay;
                state.pending.push(PendingTask { id, due, task });
                id
            };

            let weak: Weak<RefCell<ClockState>> = Rc::downgrade(&self.state);
            TimerHandle::new(move || {
                if let Some(state) = weak.upgrade() {
                    let mut state = state.borrow_mut();
                    let before = state.pending.len();
                    state.pending.retain(|p| p.id != id);
                    if state.pending.len() < before {
                        state.cancelled += 1;
                    }
                }
            })
        }
    }

    /// Records every external navigation.
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        visits: RefCell<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn visits(&self) -> Vec<String> {
            self.visits.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate_external(&self, url: &str) {
            self.visits.borrow_mut().push(url.to_string());
        }
    }
}
