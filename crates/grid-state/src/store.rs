//! Single-owner grid store with change subscriptions.

use crate::snapshot::GridSnapshot;
use crate::state::GridState;
use crate::view::GridView;
use std::fmt;
use tracing::debug;

/// Handle returned by [`GridStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&GridState)>;

/// Owns a [`GridState`] and notifies subscribers after every action.
#[derive(Default)]
pub struct GridStore {
    state: GridState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for GridStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GridStore {
    pub fn new(state: GridState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Store seeded with `views`, none of them active.
    pub fn with_views(views: Vec<GridView>) -> Self {
        let mut state = GridState::new();
        state.set_views(views);
        Self::new(state)
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn into_state(self) -> GridState {
        self.state
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&GridState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Run `action` against the state, then notify every subscriber.
    pub fn update<T>(&mut self, action: impl FnOnce(&mut GridState) -> T) -> T {
        let result = action(&mut self.state);
        self.notify();
        result
    }

    pub fn create_view(&mut self, name: impl Into<String>, description: Option<String>) -> String {
        self.update(|state| state.create_view(name, description))
    }

    pub fn apply_view(&mut self, id: &str) -> bool {
        self.update(|state| state.apply_view(id))
    }

    pub fn delete_view(&mut self, id: &str) {
        self.update(|state| state.delete_view(id))
    }

    pub fn hydrate(&mut self, snapshot: GridSnapshot) {
        self.update(|state| state.hydrate(snapshot))
    }

    fn notify(&mut self) {
        debug!("Notifying {} grid store subscribers", self.listeners.len());
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}
