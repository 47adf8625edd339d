//! Proximity-triggered visibility observer for grid cards.
//!
//! Targets are registered with their vertical [`Span`] in grid rows. A
//! [`ViewportObserver::check`] against the visible rows reports every target
//! within `margin` rows of the viewport and unregisters it: each target fires
//! at most once. Registrations are owned [`Observation`] handles and are
//! released on drop, so an unmounted card can never fire.

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

pub type TargetId = u64;

/// Half-open row range `[top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub top: u32,
    pub bottom: u32,
}

impl Span {
    pub fn new(top: u32, height: u32) -> Self {
        Self {
            top,
            bottom: top.saturating_add(height),
        }
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    fn expanded(&self, margin: u32) -> Span {
        Span {
            top: self.top.saturating_sub(margin),
            bottom: self.bottom.saturating_add(margin),
        }
    }

    pub fn intersects(&self, other: &Span) -> bool {
        self.top < other.bottom && other.top < self.bottom
    }
}

#[derive(Debug, Default)]
struct ObserverInner {
    next_id: TargetId,
    targets: BTreeMap<TargetId, Span>,
}

#[derive(Debug, Clone)]
pub struct ViewportObserver {
    inner: Arc<Mutex<ObserverInner>>,
    margin: u32,
}

impl ViewportObserver {
    pub fn new(margin_rows: u16) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ObserverInner::default())),
            margin: u32::from(margin_rows),
        }
    }

    /// Start observing a target occupying `span`.
    pub fn observe(&self, span: Span) -> Observation {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.targets.insert(id, span);
        Observation {
            id,
            observer: Arc::downgrade(&self.inner),
        }
    }

    /// Targets that entered the trigger region, in id order.
    ///
    /// Fired targets are unobserved before returning.
    pub fn check(&self, viewport: Span) -> Vec<TargetId> {
        let region = viewport.expanded(self.margin);
        let mut inner = self.inner.lock();
        let fired: Vec<TargetId> = inner
            .targets
            .iter()
            .filter(|(_, span)| span.intersects(&region))
            .map(|(id, _)| *id)
            .collect();
        for id in &fired {
            inner.targets.remove(id);
        }
        fired
    }

    /// Number of targets still waiting for their trigger.
    pub fn observed_count(&self) -> usize {
        self.inner.lock().targets.len()
    }
}

/// Owned registration of one target. Dropping it unobserves the target.
#[derive(Debug)]
pub struct Observation {
    id: TargetId,
    observer: Weak<Mutex<ObserverInner>>,
}

impl Observation {
    pub fn id(&self) -> TargetId {
        self.id
    }

    /// Move the target after a relayout. No-op once it has fired.
    pub fn set_span(&self, span: Span) {
        if let Some(observer) = self.observer.upgrade() {
            if let Some(slot) = observer.lock().targets.get_mut(&self.id) {
                *slot = span;
            }
        }
    }

    /// Still registered with a live observer.
    pub fn is_attached(&self) -> bool {
        self.observer
            .upgrade()
            .is_some_and(|observer| observer.lock().targets.contains_key(&self.id))
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.upgrade() {
            observer.lock().targets.remove(&self.id);
        }
    }
}
