//! Handler marker traits

/// Marker for values an `on_result` handler may produce.
///
/// A handler resolves the error itself and hands back a plain value: a
/// verdict, a rendered signature, an optional record. Crates that define
/// their own output types implement it for them.
pub trait NotResult {}

impl NotResult for () {}
impl NotResult for bool {}
impl NotResult for String {}
impl<T> NotResult for Option<T> {}
impl<T> NotResult for Vec<T> {}
