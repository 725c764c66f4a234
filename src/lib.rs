//! ## About
//!
//! This crate contains the coordinate-mapping layer of a trajectory-optimization stack for a
//! robot moving among tracked obstacles. It reconciles two state representations: the
//! optimizer's flat state/input vectors (stacked blocks per tracked body) and a physics
//! engine's generalized coordinates (one concatenated position/velocity/acceleration vector
//! over all bodies, robot joints first, then obstacles in tracking order). It also remaps
//! Jacobians computed against the engine's joint coordinates back into derivatives with
//! respect to the optimizer's state and input vectors.
//!
//! See [CompositeMapping] to get started; [StateMapping] is the seam for plugging in
//! robot-specific kinematic structures.
//!
//! All numerics are generic over a scalar `F:`[`num_traits::Float`] so the same mapping logic
//! runs at plain floating-point precision and under automatic-differentiation scalar types.
//!
//! ## Naming conventions
//! * Traits – capabilities that indicate behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             are substantives (i.e., omit a `get_` prefix) much like the standard library

pub mod composite;
pub mod dims;
pub mod dummy;
pub mod errors;
pub mod mapping;
pub mod matrix;
pub mod triple_integrator;

pub use composite::CompositeMapping;
pub use dims::{BodyDims, CompositeDims};
pub use errors::MappingError;
pub use mapping::StateMapping;
pub use matrix::ColumnMatrix;
pub use triple_integrator::TripleIntegrator;

// Backends
#[cfg(feature = "ndarray")]
pub mod ndarray;
