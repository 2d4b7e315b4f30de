//! Installation of key-reporting hooks
//!
//! An [`Installer`] resolves every [`InterceptionPoint`] against a
//! [`ContainerSurface`] and produces an [`Instrumentation`]: the immutable
//! table of installed hooks plus the field accessor they use. Dictionaries
//! wrapped through it report their keys on failure.
//!
//! Installation is all-or-nothing: a single unresolvable point fails the whole
//! install.

use crate::accessor::FieldAccessor;
use crate::dictionary::Dictionary;
use crate::error::KvError;
use crate::instrumented::InstrumentedDictionary;
use crate::targets::{
    self, with_target_types, InterceptionPoint, OperationKind, TargetInstantiation,
};
use std::any::type_name_of_val;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;
use tracing::{debug, error, info};

/// `DictionarySurface` registering every key type against every value type.
macro_rules! register_targets {
    (@key $surface:ident, $key:ty, [$($value:ty),*]) => {
        $surface$(.with::<$key, $value>())*
    };
    (keys: [$($key:ty),*], values: $values:tt) => {{
        let surface = DictionarySurface::new();
        $(let surface = register_targets!(@key surface, $key, $values);)*
        surface
    }};
}

/// The real implementation a hook is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationHandle {
    pub point: InterceptionPoint,
    /// Fully qualified path of the implementing function.
    pub signature: &'static str,
}

/// Locates container operations for installation.
pub trait ContainerSurface {
    /// Resolve `point` to its implementation, or `None` if the container
    /// doesn't provide it.
    fn locate(&self, point: &InterceptionPoint) -> Option<OperationHandle>;
}

/// The dictionary instantiations a process actually compiles in.
#[derive(Debug, Clone, Default)]
pub struct DictionarySurface {
    operations: HashMap<InterceptionPoint, &'static str>,
}

impl DictionarySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the lookup and insert implementations of `Dictionary<K, V>`.
    pub fn with<K, V>(mut self) -> Self
    where
        K: Eq + Hash + Display + 'static,
        V: 'static,
    {
        let target = TargetInstantiation::of::<K, V>();
        self.operations.insert(
            InterceptionPoint::new(target, OperationKind::Lookup),
            type_name_of_val(&Dictionary::<K, V>::get),
        );
        self.operations.insert(
            InterceptionPoint::new(target, OperationKind::Insert),
            type_name_of_val(&Dictionary::<K, V>::add),
        );
        self
    }

    /// Every instantiation of the enumerated key and value sets.
    pub fn host() -> Self {
        with_target_types!(register_targets)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl ContainerSurface for DictionarySurface {
    fn locate(&self, point: &InterceptionPoint) -> Option<OperationHandle> {
        self.operations
            .get(point)
            .map(|&signature| OperationHandle {
                point: *point,
                signature,
            })
    }
}

/// One-shot installer. [`install`](Self::install) consumes it.
#[derive(Debug)]
pub struct Installer {
    accessor: FieldAccessor,
    points: Vec<InterceptionPoint>,
}

impl Installer {
    /// Installer for every point from [`targets::interception_points`].
    pub fn new(accessor: FieldAccessor) -> Self {
        Self::with_points(accessor, targets::interception_points())
    }

    pub fn with_points(accessor: FieldAccessor, points: Vec<InterceptionPoint>) -> Self {
        Self { accessor, points }
    }

    pub fn points(&self) -> &[InterceptionPoint] {
        &self.points
    }

    /// Resolve and install every point.
    ///
    /// # Errors
    ///
    /// - [`KvError::Installation`] if `surface` can't locate a point
    /// - [`KvError::AlreadyInstalled`] if a point is listed twice
    pub fn install<S>(self, surface: &S) -> Result<Instrumentation, KvError>
    where
        S: ContainerSurface + ?Sized,
    {
        let mut hooks: HashMap<InterceptionPoint, OperationHandle> =
            HashMap::with_capacity(self.points.len());

        for point in self.points {
            let Some(handle) = surface.locate(&point) else {
                error!(method = %point, "dictionary operation not found, aborting install");
                return Err(KvError::Installation {
                    method: point.method(),
                });
            };

            if hooks.contains_key(&point) {
                error!(method = %point, "dictionary operation listed twice");
                return Err(KvError::AlreadyInstalled {
                    method: point.method(),
                });
            }

            debug!(method = %point, implementation = handle.signature, "hooked");
            hooks.insert(point, handle);
        }

        info!(points = hooks.len(), "dictionary key reporting installed");

        Ok(Instrumentation {
            inner: Arc::new(Installed {
                hooks,
                accessor: self.accessor,
            }),
        })
    }
}

#[derive(Debug)]
struct Installed {
    hooks: HashMap<InterceptionPoint, OperationHandle>,
    accessor: FieldAccessor,
}

/// Installed hooks, shared read-only by every instrumented dictionary.
///
/// Cloning is cheap; all clones refer to the same table.
#[derive(Debug, Clone)]
pub struct Instrumentation {
    inner: Arc<Installed>,
}

impl Instrumentation {
    pub fn covers(&self, point: &InterceptionPoint) -> bool {
        self.inner.hooks.contains_key(point)
    }

    /// Whether `operation` on `Dictionary<K, V>` is hooked.
    pub fn covers_operation<K: 'static, V: 'static>(&self, operation: OperationKind) -> bool {
        self.covers(&InterceptionPoint::new(
            TargetInstantiation::of::<K, V>(),
            operation,
        ))
    }

    pub fn handle(&self, point: &InterceptionPoint) -> Option<&OperationHandle> {
        self.inner.hooks.get(point)
    }

    /// Number of installed interception points.
    pub fn len(&self) -> usize {
        self.inner.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.hooks.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &InterceptionPoint> {
        self.inner.hooks.keys()
    }

    pub fn accessor(&self) -> FieldAccessor {
        self.inner.accessor
    }

    /// Adopt `dictionary` behind the installed hooks.
    pub fn wrap<K, V>(&self, dictionary: Dictionary<K, V>) -> InstrumentedDictionary<K, V>
    where
        K: Eq + Hash + Display + 'static,
        V: 'static,
    {
        InstrumentedDictionary::new(dictionary, self)
    }
}
