/*! Dummy implementation of a robot mapping used for testing */

use crate::{BodyDims, ColumnMatrix, StateMapping};
use num_traits::Float;

/// Triple-integrator-shaped robot whose outputs are scaled by a gain.
///
/// The gain is the only mutable knob in the crate and exists so tests can observe that a
/// cloned mapping is value-independent of the original.
#[derive(Debug, Clone, PartialEq)]
pub struct DummyRobot<F: Float> {
    dims: BodyDims,
    gain: F,
}

impl<F: Float> DummyRobot<F> {
    pub fn new(dims: BodyDims, gain: F) -> Self {
        DummyRobot { dims, gain }
    }

    pub fn set_gain(&mut self, gain: F) {
        self.gain = gain;
    }
}

impl<F: Float> StateMapping<F> for DummyRobot<F> {
    fn joint_position(&self, state: &[F]) -> Vec<F> {
        state[..self.dims.q].iter().map(|&s| s * self.gain).collect()
    }

    fn joint_velocity(&self, state: &[F], _input: &[F]) -> Vec<F> {
        state[self.dims.q..self.dims.q + self.dims.v]
            .iter()
            .map(|&s| s * self.gain)
            .collect()
    }

    fn joint_acceleration(&self, state: &[F], _input: &[F]) -> Vec<F> {
        state[self.dims.x - self.dims.v..self.dims.x]
            .iter()
            .map(|&s| s * self.gain)
            .collect()
    }

    fn jacobians(
        &self,
        _state: &[F],
        jq: &ColumnMatrix<F>,
        jv: &ColumnMatrix<F>,
    ) -> (ColumnMatrix<F>, ColumnMatrix<F>) {
        // same [Jq | Jv | 0] layout as the triple integrator, scaled by the gain
        let rows = jq.rows();
        let mut dfdx = ColumnMatrix::zeros(rows, self.dims.x);
        for col in 0..jq.cols() {
            for row in 0..rows {
                dfdx.set(row, col, jq.get(row, col) * self.gain);
            }
        }
        for col in 0..jv.cols() {
            for row in 0..rows {
                dfdx.set(row, self.dims.q + col, jv.get(row, col) * self.gain);
            }
        }

        let dfdu = ColumnMatrix::zeros(rows, self.dims.u);
        (dfdx, dfdu)
    }
}
