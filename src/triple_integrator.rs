/*! Mapping for a body modeled as a pure integrator chain.
 *
 * The body's state is exactly `[position(q), velocity(v), acceleration(v)]` with no internal
 * articulation, so every operation is a slice of the state vector.
 */

use crate::{BodyDims, ColumnMatrix, MappingError, StateMapping};
use num_traits::Float;
use tracing::instrument;

/// State/joint mapping of a triple-integrator body.
///
/// Holds no per-body data beyond its dimension descriptor and is scalar-agnostic: one value
/// implements [StateMapping] for every `F: Float`, so a single instance can serve all
/// evaluation contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripleIntegrator {
    dims: BodyDims,
}

impl TripleIntegrator {
    /// Mapping for the fixed 3-D point-mass shape used for tracked obstacles.
    pub const POINT_MASS_3D: Self = Self {
        dims: BodyDims::point_mass_3d(),
    };

    /// Builds the mapping, enforcing the integrator-chain layout `x = q + 2v`.
    #[instrument]
    pub fn new(dims: BodyDims) -> Result<Self, MappingError> {
        if dims.x != dims.q + 2 * dims.v {
            return Err(MappingError::NotTripleIntegrator {
                q: dims.q,
                v: dims.v,
                x: dims.x,
            });
        }
        Ok(Self { dims })
    }

    pub fn dims(&self) -> &BodyDims {
        &self.dims
    }
}

impl<F: Float> StateMapping<F> for TripleIntegrator {
    fn joint_position(&self, state: &[F]) -> Vec<F> {
        debug_assert!(state.len() >= self.dims.x);
        state[..self.dims.q].to_vec()
    }

    // `input` is unused here: acceleration is itself a state component of this body, not a
    // quantity derived from input.
    fn joint_velocity(&self, state: &[F], _input: &[F]) -> Vec<F> {
        debug_assert!(state.len() >= self.dims.x);
        state[self.dims.q..self.dims.q + self.dims.v].to_vec()
    }

    fn joint_acceleration(&self, state: &[F], _input: &[F]) -> Vec<F> {
        debug_assert!(state.len() >= self.dims.x);
        state[self.dims.x - self.dims.v..self.dims.x].to_vec()
    }

    fn jacobians(
        &self,
        _state: &[F],
        jq: &ColumnMatrix<F>,
        jv: &ColumnMatrix<F>,
    ) -> (ColumnMatrix<F>, ColumnMatrix<F>) {
        debug_assert_eq!(jq.cols(), self.dims.q);
        debug_assert_eq!(jv.cols(), self.dims.v);
        debug_assert_eq!(jq.rows(), jv.rows());
        let rows = jq.rows();

        // [Jq | Jv | 0]: the trailing zero block is the acceleration part of the state, on
        // which pose- and velocity-dependent quantities do not depend.
        let mut dfdx = ColumnMatrix::zeros(rows, self.dims.x);
        dfdx.assign(0, jq);
        dfdx.assign(self.dims.q, jv);

        let dfdu = ColumnMatrix::zeros(rows, self.dims.u);
        (dfdx, dfdu)
    }
}
