//! Physics module: the vertex-model force engine.
//!
//! The engine is deliberately decoupled from any concrete tissue type; it
//! consumes the read-only [`crate::geometry::Topology`] and
//! [`crate::geometry::GeometryGradients`] queries plus the per-cell
//! [`crate::growth::GrowthState`], and delivers results through a
//! [`ForceSink`].

mod farhadifar;

pub use farhadifar::{FarhadifarForce, ForceError, ForceSink};
