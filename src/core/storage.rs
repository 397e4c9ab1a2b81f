use crate::core::{BallHandle, ColliderHandle};
use crate::error::PhysicsError;
use crate::Result;

/// Generic storage trait for simulation objects
pub trait Storage<T, H> {
    /// Creates a new empty storage
    fn new() -> Self;

    /// Adds an item to the storage and returns its handle
    fn add(&mut self, item: T) -> H;

    /// Gets a reference to an item by its handle
    fn get(&self, handle: H) -> Option<&T>;

    /// Gets a mutable reference to an item by its handle
    fn get_mut(&mut self, handle: H) -> Option<&mut T>;

    /// Removes an item from the storage
    fn remove(&mut self, handle: H) -> Option<T>;

    /// Returns the number of items in the storage
    fn len(&self) -> usize;

    /// Returns whether the storage is empty
    fn is_empty(&self) -> bool;

    /// Clears all items from the storage
    fn clear(&mut self);

    /// Returns all handles, in registration order
    fn handles(&self) -> Vec<H>;

    /// Returns an iterator over all items, in registration order
    fn iter<'a>(&'a self) -> impl Iterator<Item = (H, &'a T)> + 'a
    where
        T: 'a;

    /// Returns a mutable iterator over all items, in registration order
    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = (H, &'a mut T)> + 'a
    where
        T: 'a;
}

/// Dense, insertion-ordered storage for balls. The vector order is the
/// registration order, so index 0 is always the oldest live ball; the
/// handles stay stable across removals.
pub struct BallSet<T> {
    entries: Vec<(BallHandle, T)>,
    next_id: u32,
}

impl<T> Storage<T, BallHandle> for BallSet<T> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1, // 0 is reserved for an invalid handle
        }
    }

    fn add(&mut self, item: T) -> BallHandle {
        let handle = BallHandle(self.next_id);
        self.next_id += 1;
        self.entries.push((handle, item));
        handle
    }

    fn get(&self, handle: BallHandle) -> Option<&T> {
        self.entries
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, item)| item)
    }

    fn get_mut(&mut self, handle: BallHandle) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|(h, _)| *h == handle)
            .map(|(_, item)| item)
    }

    fn remove(&mut self, handle: BallHandle) -> Option<T> {
        let index = self.entries.iter().position(|(h, _)| *h == handle)?;
        Some(self.entries.remove(index).1)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn handles(&self) -> Vec<BallHandle> {
        self.entries.iter().map(|(h, _)| *h).collect()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (BallHandle, &'a T)> + 'a
    where
        T: 'a,
    {
        self.entries.iter().map(|(h, item)| (*h, item))
    }

    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = (BallHandle, &'a mut T)> + 'a
    where
        T: 'a,
    {
        self.entries.iter_mut().map(|(h, item)| (*h, item))
    }
}

impl<T> BallSet<T> {
    /// Gets a ball by registration index
    pub fn get_at(&self, index: usize) -> Option<&T> {
        self.entries.get(index).map(|(_, item)| item)
    }

    /// Gets a mutable reference to a ball by registration index
    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index).map(|(_, item)| item)
    }

    /// Returns the handle of the ball at a registration index
    pub fn handle_at(&self, index: usize) -> Option<BallHandle> {
        self.entries.get(index).map(|(h, _)| *h)
    }

    /// Removes and returns the ball at a registration index
    pub fn remove_at(&mut self, index: usize) -> (BallHandle, T) {
        self.entries.remove(index)
    }

    /// Gets a ball by its handle, returning an error if not found
    pub fn get_ball(&self, handle: BallHandle) -> Result<&T> {
        self.get(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("ball with handle {:?} not found", handle))
        })
    }

    /// Gets a mutable reference to a ball by its handle, returning an error
    /// if not found
    pub fn get_ball_mut(&mut self, handle: BallHandle) -> Result<&mut T> {
        self.get_mut(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("ball with handle {:?} not found", handle))
        })
    }
}

/// Dense, insertion-ordered storage for static colliders
pub struct ColliderSet<T> {
    entries: Vec<(ColliderHandle, T)>,
    next_id: u32,
}

impl<T> Storage<T, ColliderHandle> for ColliderSet<T> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1, // 0 is reserved for an invalid handle
        }
    }

    fn add(&mut self, item: T) -> ColliderHandle {
        let handle = ColliderHandle(self.next_id);
        self.next_id += 1;
        self.entries.push((handle, item));
        handle
    }

    fn get(&self, handle: ColliderHandle) -> Option<&T> {
        self.entries
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, item)| item)
    }

    fn get_mut(&mut self, handle: ColliderHandle) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|(h, _)| *h == handle)
            .map(|(_, item)| item)
    }

    fn remove(&mut self, handle: ColliderHandle) -> Option<T> {
        let index = self.entries.iter().position(|(h, _)| *h == handle)?;
        Some(self.entries.remove(index).1)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn handles(&self) -> Vec<ColliderHandle> {
        self.entries.iter().map(|(h, _)| *h).collect()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (ColliderHandle, &'a T)> + 'a
    where
        T: 'a,
    {
        self.entries.iter().map(|(h, item)| (*h, item))
    }

    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = (ColliderHandle, &'a mut T)> + 'a
    where
        T: 'a,
    {
        self.entries.iter_mut().map(|(h, item)| (*h, item))
    }
}

impl<T> ColliderSet<T> {
    /// Gets a collider by its handle, returning an error if not found
    pub fn get_collider(&self, handle: ColliderHandle) -> Result<&T> {
        self.get(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("collider with handle {:?} not found", handle))
        })
    }
}
