//! Target enumeration
//!
//! The closed set of dictionary instantiations that get key-reporting hooks,
//! and the two operations hooked on each.

use crate::error::ErrorKind;
use std::any::{type_name, TypeId};
use std::fmt;

/// Runtime identity of a concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path.
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

/// One concrete `Dictionary<K, V>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetInstantiation {
    pub key: TypeDescriptor,
    pub value: TypeDescriptor,
}

impl TargetInstantiation {
    pub fn new(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self { key, value }
    }

    pub fn of<K: 'static, V: 'static>() -> Self {
        Self::new(TypeDescriptor::of::<K>(), TypeDescriptor::of::<V>())
    }
}

impl fmt::Display for TargetInstantiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dictionary<{}, {}>",
            self.key.short_name(),
            self.value.short_name()
        )
    }
}

/// A hooked dictionary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Keyed lookup (`get`).
    Lookup,
    /// Keyed insertion (`add`).
    Insert,
}

impl OperationKind {
    pub const ALL: [OperationKind; 2] = [OperationKind::Lookup, OperationKind::Insert];

    pub fn method_name(&self) -> &'static str {
        match self {
            OperationKind::Lookup => "get",
            OperationKind::Insert => "add",
        }
    }

    /// The failure this operation raises for the key it was given.
    pub fn keyed_failure(&self) -> ErrorKind {
        match self {
            OperationKind::Lookup => ErrorKind::KeyNotFound,
            OperationKind::Insert => ErrorKind::DuplicateKey,
        }
    }
}

/// An operation on one instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterceptionPoint {
    pub target: TargetInstantiation,
    pub operation: OperationKind,
}

impl InterceptionPoint {
    pub fn new(target: TargetInstantiation, operation: OperationKind) -> Self {
        Self { target, operation }
    }

    /// Method path used in diagnostics, e.g. `Dictionary<i32, String>::get`.
    pub fn method(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InterceptionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.target, self.operation.method_name())
    }
}

/// Passes the hooked key and value type lists to `$apply!`.
macro_rules! with_target_types {
    ($apply:ident) => {
        $apply!(
            keys: [i32, String],
            values: [
                i32,
                String,
                $crate::records::HomeRenovation,
                $crate::records::MovieData,
                $crate::records::SpecialOrderData
            ]
        )
    };
}

pub(crate) use with_target_types;

macro_rules! key_descriptors {
    (keys: [$($key:ty),*], values: [$($value:ty),*]) => {
        vec![$(TypeDescriptor::of::<$key>()),*]
    };
}

macro_rules! value_descriptors {
    (keys: [$($key:ty),*], values: [$($value:ty),*]) => {
        vec![$(TypeDescriptor::of::<$value>()),*]
    };
}

pub fn key_types() -> Vec<TypeDescriptor> {
    with_target_types!(key_descriptors)
}

pub fn value_types() -> Vec<TypeDescriptor> {
    with_target_types!(value_descriptors)
}

/// Cross product of [`key_types`] and [`value_types`].
pub fn enumerate() -> Vec<TargetInstantiation> {
    let mut targets = Vec::with_capacity(key_types().len() * value_types().len());
    for key in key_types() {
        for value in value_types() {
            targets.push(TargetInstantiation::new(key, value));
        }
    }
    targets
}

/// Every operation on every enumerated target.
pub fn interception_points() -> Vec<InterceptionPoint> {
    enumerate()
        .into_iter()
        .flat_map(|target| {
            OperationKind::ALL
                .into_iter()
                .map(move |operation| InterceptionPoint::new(target, operation))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{HomeRenovation, MovieData, SpecialOrderData};
    use std::collections::HashSet;

    #[test]
    fn test_type_lists() {
        assert_eq!(key_types()[0], TypeDescriptor::of::<i32>());
        assert_eq!(key_types()[1].short_name(), "String");
        assert_eq!(
            value_types().last().copied(),
            Some(TypeDescriptor::of::<SpecialOrderData>())
        );
        assert_eq!(value_types().len(), 5);
    }

    #[test]
    fn test_enumerate_is_full_cross_product() {
        let targets = enumerate();
        assert_eq!(targets.len(), 10);

        let unique: HashSet<_> = targets.iter().collect();
        assert_eq!(unique.len(), 10);

        assert!(targets.contains(&TargetInstantiation::of::<i32, String>()));
        assert!(targets.contains(&TargetInstantiation::of::<String, MovieData>()));
        assert!(!targets.contains(&TargetInstantiation::of::<bool, String>()));
        assert!(!targets.contains(&TargetInstantiation::of::<String, bool>()));
    }

    #[test]
    fn test_enumerate_is_deterministic() {
        assert_eq!(enumerate(), enumerate());
    }

    #[test]
    fn test_interception_points() {
        let points = interception_points();
        assert_eq!(points.len(), 20);

        let unique: HashSet<_> = points.iter().collect();
        assert_eq!(unique.len(), 20);

        let lookups = points
            .iter()
            .filter(|p| p.operation == OperationKind::Lookup)
            .count();
        assert_eq!(lookups, 10);
    }

    #[test]
    fn test_method_string() {
        let point = InterceptionPoint::new(
            TargetInstantiation::of::<i32, HomeRenovation>(),
            OperationKind::Insert,
        );
        assert_eq!(point.method(), "Dictionary<i32, HomeRenovation>::add");
        assert_eq!(point.to_string(), point.method());
    }

    #[test]
    fn test_keyed_failure() {
        assert_eq!(OperationKind::Lookup.keyed_failure(), ErrorKind::KeyNotFound);
        assert_eq!(OperationKind::Insert.keyed_failure(), ErrorKind::DuplicateKey);
    }
}
