use std::ptr::NonNull;

/// Strategy for destroying an owned allocation.
///
/// Stateless deleters of the same configuration can back any number of
/// handles without interference since they are invoked, not mutated.
pub trait Deleter<T> {
    /// Destroys the allocation behind `ptr`.
    ///
    /// # Safety
    /// `ptr` must point to a live allocation compatible with this deleter,
    /// the caller must hold sole ownership of it, and it must not be used
    /// afterwards. Invoking this twice for the same allocation is undefined.
    unsafe fn delete(&self, ptr: NonNull<T>);
}

/// Destroys by reconstructing the `Box` the allocation came from.
///
/// Only valid for allocations that originated from `Box<T>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoxDeleter;

impl<T> Deleter<T> for BoxDeleter {
    unsafe fn delete(&self, ptr: NonNull<T>) {
        drop(Box::from_raw(ptr.as_ptr()));
    }
}

// A bare reclamation routine is a deleter as well.
impl<T> Deleter<T> for unsafe fn(NonNull<T>) {
    unsafe fn delete(&self, ptr: NonNull<T>) {
        (*self)(ptr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Probe(Rc<Cell<u32>>);

    impl Drop for Probe {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn box_deleter_destroys_once() {
        let drops = Rc::new(Cell::new(0));
        let ptr = NonNull::from(Box::leak(Box::new(Probe(drops.clone()))));
        unsafe { BoxDeleter.delete(ptr) };
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn routine_as_deleter() {
        static RECLAIMED: AtomicU32 = AtomicU32::new(0);

        unsafe fn reclaim(ptr: NonNull<u32>) {
            drop(Box::from_raw(ptr.as_ptr()));
            RECLAIMED.fetch_add(1, Ordering::Relaxed);
        }

        let routine: unsafe fn(NonNull<u32>) = reclaim;
        let ptr = NonNull::from(Box::leak(Box::new(3u32)));
        unsafe { routine.delete(ptr) };
        assert_eq!(RECLAIMED.load(Ordering::Relaxed), 1);
    }
}
