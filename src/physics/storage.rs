use std::collections::HashMap;

use crate::error::EngineError;
use crate::Result;

/// A unique identifier for a collider registered in a physics space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderHandle(pub(crate) u32);

/// Handle-keyed storage for the colliders owned by a physics space
#[derive(Debug)]
pub struct ColliderStorage<T> {
    items: HashMap<ColliderHandle, T>,
    next_id: u32,
}

impl<T> Default for ColliderStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ColliderStorage<T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1, // Start at 1, so 0 can represent invalid handle
        }
    }

    /// Adds an item to the storage and returns its handle
    pub fn add(&mut self, item: T) -> ColliderHandle {
        let handle = ColliderHandle(self.next_id);
        self.next_id += 1;
        self.items.insert(handle, item);
        handle
    }

    /// Gets a reference to an item by its handle
    pub fn get(&self, handle: ColliderHandle) -> Option<&T> {
        self.items.get(&handle)
    }

    /// Gets a mutable reference to an item by its handle
    pub fn get_mut(&mut self, handle: ColliderHandle) -> Option<&mut T> {
        self.items.get_mut(&handle)
    }

    /// Removes an item from the storage
    pub fn remove(&mut self, handle: ColliderHandle) -> Option<T> {
        self.items.remove(&handle)
    }

    /// Returns the number of items in the storage
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all items from the storage
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns whether the handle refers to a stored item
    pub fn contains(&self, handle: ColliderHandle) -> bool {
        self.items.contains_key(&handle)
    }

    /// Returns all handles in ascending order.
    ///
    /// The physics tick iterates in this order so a step is deterministic for
    /// a given insertion history.
    pub fn sorted_handles(&self) -> Vec<ColliderHandle> {
        let mut handles: Vec<ColliderHandle> = self.items.keys().copied().collect();
        handles.sort();
        handles
    }

    /// Returns an iterator over all items
    pub fn iter(&self) -> impl Iterator<Item = (ColliderHandle, &T)> {
        self.items.iter().map(|(h, item)| (*h, item))
    }

    /// Returns a mutable iterator over all items
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ColliderHandle, &mut T)> {
        self.items.iter_mut().map(|(h, item)| (*h, item))
    }

    /// Gets a collider by its handle, returning an error if not found
    pub fn get_collider(&self, handle: ColliderHandle) -> Result<&T> {
        self.get(handle).ok_or_else(|| {
            EngineError::ResourceNotFound(format!("Collider with handle {:?} not found", handle))
        })
    }

    /// Gets a mutable reference to a collider by its handle, returning an error if not found
    pub fn get_collider_mut(&mut self, handle: ColliderHandle) -> Result<&mut T> {
        self.get_mut(handle).ok_or_else(|| {
            EngineError::ResourceNotFound(format!("Collider with handle {:?} not found", handle))
        })
    }
}
