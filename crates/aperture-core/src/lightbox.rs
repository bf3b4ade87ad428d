//! Gallery lightbox
//!
//! Opening the lightbox locks document scrolling through the injected
//! `ScrollLock`; closing or unmounting unlocks it. The lock is toggled only
//! on open/closed transitions, never twice in a row.

use tracing::debug;

use crate::capability::ScrollLock;

#[derive(Debug, Clone)]
pub struct Lightbox<T> {
    items: Vec<T>,
    open_index: Option<usize>,
}

impl<T> Lightbox<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            open_index: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open_index.is_some()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    /// Item on display, if open
    pub fn current(&self) -> Option<&T> {
        self.open_index.and_then(|i| self.items.get(i))
    }

    /// Show item `index`. Out-of-range indices are ignored.
    pub fn open<L>(&mut self, lock: &mut L, index: usize) -> bool
    where
        L: ScrollLock + ?Sized,
    {
        if index >= self.items.len() {
            return false;
        }
        if self.open_index.is_none() {
            lock.set_locked(true);
        }
        debug!(index, "lightbox opened");
        self.open_index = Some(index);
        true
    }

    pub fn close<L>(&mut self, lock: &mut L)
    where
        L: ScrollLock + ?Sized,
    {
        if self.open_index.take().is_some() {
            lock.set_locked(false);
            debug!("lightbox closed");
        }
    }

    /// Step forward, wrapping to the first item
    pub fn next(&mut self) -> Option<usize> {
        let len = self.items.len();
        let index = self.open_index.map(|i| (i + 1) % len)?;
        self.open_index = Some(index);
        Some(index)
    }

    /// Step backward, wrapping to the last item
    pub fn prev(&mut self) -> Option<usize> {
        let len = self.items.len();
        let index = self.open_index.map(|i| (i + len - 1) % len)?;
        self.open_index = Some(index);
        Some(index)
    }

    /// Release the scroll lock if the owner goes away while open
    pub fn unmount<L>(&mut self, lock: &mut L)
    where
        L: ScrollLock + ?Sized,
    {
        self.close(lock);
    }
}
