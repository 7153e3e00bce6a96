use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use log::{error, trace};
use crate::data::NoteEvent;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SubscriptionId(u64);

type Observer = Arc<dyn Fn(&NoteEvent) + Send + Sync>;

#[derive(Default)]
pub(super) struct NoteObservers {
    next_id: AtomicU64,
    observers: Mutex<Vec<(SubscriptionId, Observer)>>,
}

impl NoteObservers {
    pub fn subscribe(
        &self,
        observer: impl Fn(&NoteEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, Arc::new(observer)));
        trace!("added observer {id:?}");
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.lock();
        let before = observers.len();
        observers.retain(|(observer_id, _)| *observer_id != id);
        before != observers.len()
    }

    /// Calls every observer registered at the moment of the call, in
    /// subscription order. The registry is not locked while they run.
    pub fn notify(&self, event: &NoteEvent) {
        let snapshot: Vec<(SubscriptionId, Observer)> = self.lock().clone();
        for (id, observer) in snapshot {
            if catch_unwind(AssertUnwindSafe(|| observer(event))).is_err() {
                error!("observer {id:?} panicked on {event:?}");
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Observer)>> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
