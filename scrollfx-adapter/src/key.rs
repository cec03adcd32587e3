#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Identifier a host uses for the elements a view animates.
#[cfg(feature = "std")]
pub trait ElementKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> ElementKey for T {}

#[cfg(not(feature = "std"))]
pub trait ElementKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> ElementKey for T {}

#[cfg(feature = "std")]
pub(crate) type ElementMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type ElementMap<K, V> = BTreeMap<K, V>;
