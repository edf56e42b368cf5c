use tracing::debug;

/// Slots reserved by a registry before the first registration.
pub const DEFAULT_CAPACITY: usize = 3;

/// Ordered, append-only collection of registered strategies.
///
/// Capacity starts at [`DEFAULT_CAPACITY`] and doubles whenever an append
/// would overflow it. It never shrinks, and `len() <= capacity()` always holds.
/// Iteration yields elements in registration order.
pub struct Registry<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A zero capacity is bumped to one so doubling can make progress.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            let grown = self.capacity * 2;
            debug!(from = self.capacity, to = grown, "Growing registry");
            self.items.reserve_exact(grown - self.items.len());
            self.capacity = grown;
        }
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
