use crate::any::AnyOwn;
use crate::deleter::BoxDeleter;
use getset::CopyGetters;
use std::{any::TypeId, fmt};

/// Type tag of an erased payload.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub ty: TypeId,
    pub ty_name: &'static str,
}

impl TypeInfo {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            ty: TypeId::of::<T>(),
            ty_name: std::any::type_name::<T>(),
        }
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.ty == TypeId::of::<T>()
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.ty_name, self.ty)
    }
}

/// Failed narrowing of an erased owner.
///
/// Carries the owner back intact so the payload is neither lost nor
/// destroyed by the failed attempt.
#[derive(CopyGetters)]
pub struct CastError<D = BoxDeleter> {
    /// Tag the caller asked for.
    #[getset(get_copy = "pub")]
    expected: TypeInfo,
    value: AnyOwn<D>,
}

impl<D> CastError<D> {
    pub(crate) fn new(expected: TypeInfo, value: AnyOwn<D>) -> Self {
        Self { expected, value }
    }

    /// Tag of the payload actually held.
    pub fn found(&self) -> TypeInfo {
        self.value.ty()
    }

    /// Recovers the erased owner.
    pub fn into_inner(self) -> AnyOwn<D> {
        self.value
    }
}

impl<D> fmt::Display for CastError<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value of type {} can't be casted to {}.",
            self.found(),
            self.expected
        )
    }
}

impl<D> fmt::Debug for CastError<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CastError {{ expected: {}, found: {} }}",
            self.expected,
            self.found()
        )
    }
}
