use log::debug;

use crate::{BodyPartId, Property};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Observer = Box<dyn FnMut(Option<BodyPartId>)>;

/// The currently selected body part, observable by the views that depend on it.
#[derive(Default)]
pub struct Selection {
    current: Option<BodyPartId>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: usize,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<BodyPartId> {
        self.current
    }

    #[must_use]
    pub fn is_selected(&self, id: BodyPartId) -> bool {
        self.current == Some(id)
    }

    /// Selecting the already selected part notifies again, so a dismissed detail view
    /// can be reopened by tapping the same part.
    pub fn select(&mut self, id: BodyPartId) {
        debug!("select {}", id.name());
        self.current = Some(id);
        self.notify();
    }

    pub fn clear(&mut self) {
        if let Some(id) = self.current.take() {
            debug!("deselect {}", id.name());
            self.notify();
        }
    }

    pub fn subscribe(
        &mut self,
        observer: impl FnMut(Option<BodyPartId>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len = self.observers.len();
        self.observers.retain(|(i, _)| *i != id);
        self.observers.len() != len
    }

    fn notify(&mut self) {
        let current = self.current;
        for (_, observer) in &mut self.observers {
            observer(current);
        }
    }
}
