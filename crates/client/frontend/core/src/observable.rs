//! An owned, observable sequence with an explicit notification channel.
//!
//! UI layers hold a shared reference to the list for reading and register
//! callbacks to learn about content changes. Mutation happens only through
//! the owning component, so observers never see a partially applied update.

/// Change notification delivered to subscribers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListChange {
    /// The entire contents were swapped out. `len` is the new length.
    Replaced { len: usize },
}

/// Identifies a registered subscriber so it can be removed later.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&[T], ListChange) + Send>;

/// A mutable ordered sequence that notifies subscribers on every change.
///
/// The list instance is created once and lives as long as its owner; updates
/// mutate it in place, so references handed out earlier keep observing all
/// future contents.
pub struct ObservableList<T> {
    items: Vec<T>,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_subscription: u64,
}

impl<T> ObservableList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Registers a callback invoked after every content change.
    ///
    /// The callback receives the post-change contents and the change that
    /// produced them. Panics raised by a callback propagate to the caller of
    /// the mutating operation; the list does not suppress them.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&[T], ListChange) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Swaps the contents for `items` in place and notifies subscribers once.
    pub fn replace_with(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.clear();
        self.items.extend(items);
        self.notify(ListChange::Replaced {
            len: self.items.len(),
        });
    }

    fn notify(&mut self, change: ListChange) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.items, change);
        }
    }
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableList")
            .field("items", &self.items)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
