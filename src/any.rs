use crate::deleter::{BoxDeleter, Deleter};
use crate::error::{CastError, TypeInfo};
use crate::own::Own;
use getset::CopyGetters;
use log::trace;
use std::{fmt, mem::forget, ptr::NonNull};

/// Type-erased exclusive owner.
///
/// The in-transit form of [`Own`]: one concrete element type for containers
/// whose elements point at heterogeneous payloads. Constructed only by
/// erasing a typed owner, so the tag and the recorded drop glue always match
/// the payload.
///
/// Consuming it with [`Self::downcast`] spends it and hands ownership to the
/// produced typed handle. An `AnyOwn` dropped while still holding its payload
/// destroys it through the recorded glue, so a discarded unconsumed one can't
/// leak.
// NOTE: Deliberately neither Send nor Sync since the thread affinity of the
// erased payload is unknown.
#[derive(CopyGetters)]
pub struct AnyOwn<D = BoxDeleter> {
    ptr: NonNull<()>,
    drop_fn: unsafe fn(NonNull<()>, &D),
    /// Tag of the erased pointee type.
    #[getset(get_copy = "pub")]
    ty: TypeInfo,
    deleter: D,
}

unsafe fn drop_erased<T, D: Deleter<T>>(ptr: NonNull<()>, deleter: &D) {
    deleter.delete(ptr.cast::<T>());
}

impl<D> AnyOwn<D> {
    /// Erases the pointee type of `own`.
    pub fn new<T: 'static>(own: Own<T, D>) -> Self
    where
        D: Deleter<T>,
    {
        let (ptr, deleter) = own.into_raw_parts();
        Self {
            ptr: ptr.cast(),
            drop_fn: drop_erased::<T, D>,
            ty: TypeInfo::of::<T>(),
            deleter,
        }
    }

    /// True if the payload is a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.ty.is::<T>()
    }

    /// Narrows back to the concrete type, consuming self.
    ///
    /// On mismatch the owner is handed back intact inside the error.
    pub fn downcast<T: 'static>(self) -> Result<Own<T, D>, CastError<D>>
    where
        D: Deleter<T>,
    {
        if self.is::<T>() {
            let (ptr, deleter) = self.into_raw_parts();
            // SAFETY: Tag was just checked so the payload is a T.
            Ok(unsafe { Own::from_raw_parts(ptr.cast::<T>(), deleter) })
        } else {
            Err(CastError::new(TypeInfo::of::<T>(), self))
        }
    }

    /// Typed view of the payload, if it is a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        if self.is::<T>() {
            // SAFETY: Tag matches and we solely own the payload.
            Some(unsafe { self.ptr.cast::<T>().as_ref() })
        } else {
            None
        }
    }

    /// Exclusive typed view of the payload, if it is a `T`.
    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        if self.is::<T>() {
            // SAFETY: Tag matches and we solely own the payload.
            Some(unsafe { self.ptr.cast::<T>().as_mut() })
        } else {
            None
        }
    }

    /// Returns the held address without giving up ownership.
    pub fn as_ptr(&self) -> *mut () {
        self.ptr.as_ptr()
    }

    /// Gives up ownership without destroying the payload.
    ///
    /// The caller assumes the obligation to reclaim the allocation and must
    /// know the concrete type to do so.
    pub fn release(self) -> NonNull<()> {
        let (ptr, _deleter) = self.into_raw_parts();
        ptr
    }

    fn into_raw_parts(self) -> (NonNull<()>, D) {
        // SAFETY: We are immediately forgetting self so read is safe.
        unsafe {
            let ptr = self.ptr;
            let deleter = std::ptr::read(&self.deleter);
            forget(self);
            (ptr, deleter)
        }
    }
}

// From
impl<T: 'static, D: Deleter<T>> From<Own<T, D>> for AnyOwn<D> {
    fn from(own: Own<T, D>) -> Self {
        Self::new(own)
    }
}

// Debug
impl<D> fmt::Debug for AnyOwn<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnyOwn({})", self.ty)
    }
}

// Drop
impl<D> Drop for AnyOwn<D> {
    fn drop(&mut self) {
        trace!("Destroying unconsumed {}", self.ty);
        // SAFETY: Glue was recorded at erase time for exactly this payload.
        unsafe { (self.drop_fn)(self.ptr, &self.deleter) }
    }
}
