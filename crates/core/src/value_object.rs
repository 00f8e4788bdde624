//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute values
/// are equal. Stock transactions and analytics summaries are value objects; they are
/// never mutated after construction.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
