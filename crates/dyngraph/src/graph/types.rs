//! Vertex identifier trait.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Opaque vertex identifier.
///
/// Any cloneable, hashable, printable type qualifies: integers, `String`,
/// `&'static str`. Vertices have no creation step of their own; they appear
/// the first time an edge names them.
pub trait Vertex: Clone + Eq + Hash + Debug + Display {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug + Display {}
