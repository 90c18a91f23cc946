//! Append-only storage for values that must stay put for the life of the system.
//!
//! Elements are boxed and never removed, so a reference handed out by [LockedVecStatic::push]
//! or [LockedVecStatic::get] stays valid as long as the container does. For a `static`
//! container that is `'static`.
use alloc::{boxed::Box, vec, vec::Vec};
use core::{cell::UnsafeCell, fmt::Debug};
use spin::RwLock;

pub struct LockedVecStatic<T: ?Sized> {
    lock: RwLock<()>,
    cell: UnsafeCell<Vec<Box<T>>>,
}

// Elements are only reachable through shared references once pushed.
unsafe impl<T: ?Sized + Send + Sync> Sync for LockedVecStatic<T> {}

impl<T: ?Sized> LockedVecStatic<T> {
    pub const fn new() -> LockedVecStatic<T> {
        LockedVecStatic {
            lock: RwLock::new(()),
            cell: UnsafeCell::new(vec![]),
        }
    }

    /// Push a boxed value and return a reference to it together with its index.
    pub fn push_boxed(&self, value: Box<T>) -> (&T, usize) {
        let guard = self.lock.write();
        // SAFETY: the write lock is held, and pushing never moves the boxed contents.
        let vec = unsafe { &mut *self.cell.get() };
        let index = vec.len();
        vec.push(value);
        let ptr: *const T = &*vec[index];
        drop(guard);
        // SAFETY: the box is never dropped or moved while `self` is alive.
        (unsafe { &*ptr }, index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        let guard = self.lock.read();
        // SAFETY: the read lock is held.
        let vec = unsafe { &*self.cell.get() };
        let res = vec.get(index).map(|b| &**b as *const T);
        drop(guard);
        // SAFETY: see push_boxed.
        res.map(|ptr| unsafe { &*ptr })
    }

    pub fn len(&self) -> usize {
        let _guard = self.lock.read();
        // SAFETY: the read lock is held.
        unsafe { &*self.cell.get() }.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of references to every element, in push order.
    pub fn snapshot(&self) -> Vec<&T> {
        let guard = self.lock.read();
        // SAFETY: the read lock is held.
        let vec = unsafe { &*self.cell.get() };
        let ptrs: Vec<*const T> = vec.iter().map(|b| &**b as *const T).collect();
        drop(guard);
        // SAFETY: see push_boxed.
        ptrs.into_iter().map(|ptr| unsafe { &*ptr }).collect()
    }
}

impl<T> LockedVecStatic<T> {
    pub fn push(&self, value: T) -> (&T, usize) {
        self.push_boxed(Box::new(value))
    }
}

impl<T: ?Sized> Default for LockedVecStatic<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Debug> Debug for LockedVecStatic<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.snapshot()).finish()
    }
}
