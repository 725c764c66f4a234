/*! Stitches one robot mapping and N fixed point-mass obstacle mappings into the single
 * joint-space translation the physics engine expects.
 *
 * Vector and Jacobian layout is fixed: the robot block leads, obstacle blocks follow in
 * ascending tracking order. This matches the physics model's internal body ordering
 * established once at model construction and is never re-derived here.
 */

use crate::{dims::OBSTACLE_DIMS, ColumnMatrix, CompositeDims, StateMapping, TripleIntegrator};
use itertools::izip;
use num_traits::Float;
use tracing::debug;

/// Mapping over the optimizer's combined state/input vectors for a robot plus tracked
/// obstacles.
///
/// The robot mapping is embedded by value behind the [StateMapping] capability; the obstacle
/// mapping is one stateless [TripleIntegrator] applied per obstacle. Cloning produces a
/// value-independent copy including the embedded robot mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeMapping<M> {
    dims: CompositeDims,
    robot: M,
    obstacle: TripleIntegrator,
}

impl<M> CompositeMapping<M> {
    /// Builds the composite over an externally supplied robot mapping.
    ///
    /// Descriptor consistency is the constructor's concern; the per-call operations assume
    /// it and stay branch-free.
    pub fn new(dims: CompositeDims, robot: M) -> Self {
        debug!(obstacles = dims.obstacles, "composite mapping");
        Self {
            dims,
            robot,
            obstacle: TripleIntegrator::POINT_MASS_3D,
        }
    }

    pub fn dims(&self) -> &CompositeDims {
        &self.dims
    }

    pub fn robot(&self) -> &M {
        &self.robot
    }
}

impl<F, M> StateMapping<F> for CompositeMapping<M>
where
    F: Float,
    M: StateMapping<F>,
{
    fn joint_position(&self, state: &[F]) -> Vec<F> {
        let dims = &self.dims;
        debug_assert_eq!(state.len(), dims.x());

        let mut q_out = vec![F::zero(); dims.q()];

        // Physics model order: robot joints first, then appended obstacles
        let robot_q = self.robot.joint_position(&state[..dims.robot.x]);
        q_out[..dims.robot.q].copy_from_slice(&robot_q);

        for (x_obs, q_obs) in izip!(
            state[dims.robot.x..].chunks_exact(OBSTACLE_DIMS.x),
            q_out[dims.robot.q..].chunks_exact_mut(OBSTACLE_DIMS.q),
        ) {
            q_obs.copy_from_slice(&self.obstacle.joint_position(x_obs));
        }

        q_out
    }

    fn joint_velocity(&self, state: &[F], input: &[F]) -> Vec<F> {
        let dims = &self.dims;
        debug_assert_eq!(state.len(), dims.x());
        debug_assert_eq!(input.len(), dims.u());

        let mut v_out = vec![F::zero(); dims.v()];
        // Obstacles accept no input; a zero 3-vector stands in (fixed policy, their
        // trajectories are predicted externally, not decided by the optimizer)
        let u_obs = [F::zero(); 3];

        let robot_v = self
            .robot
            .joint_velocity(&state[..dims.robot.x], &input[..dims.robot.u]);
        v_out[..dims.robot.v].copy_from_slice(&robot_v);

        for (x_obs, v_obs) in izip!(
            state[dims.robot.x..].chunks_exact(OBSTACLE_DIMS.x),
            v_out[dims.robot.v..].chunks_exact_mut(OBSTACLE_DIMS.v),
        ) {
            v_obs.copy_from_slice(&self.obstacle.joint_velocity(x_obs, &u_obs));
        }

        v_out
    }

    fn joint_acceleration(&self, state: &[F], input: &[F]) -> Vec<F> {
        let dims = &self.dims;
        debug_assert_eq!(state.len(), dims.x());
        debug_assert_eq!(input.len(), dims.u());

        let mut a_out = vec![F::zero(); dims.v()];
        let u_obs = [F::zero(); 3];

        let robot_a = self
            .robot
            .joint_acceleration(&state[..dims.robot.x], &input[..dims.robot.u]);
        a_out[..dims.robot.v].copy_from_slice(&robot_a);

        for (x_obs, a_obs) in izip!(
            state[dims.robot.x..].chunks_exact(OBSTACLE_DIMS.x),
            a_out[dims.robot.v..].chunks_exact_mut(OBSTACLE_DIMS.v),
        ) {
            a_obs.copy_from_slice(&self.obstacle.joint_acceleration(x_obs, &u_obs));
        }

        a_out
    }

    fn jacobians(
        &self,
        state: &[F],
        jq: &ColumnMatrix<F>,
        jv: &ColumnMatrix<F>,
    ) -> (ColumnMatrix<F>, ColumnMatrix<F>) {
        let dims = &self.dims;
        debug_assert_eq!(jq.cols(), dims.q());
        debug_assert_eq!(jv.cols(), dims.v());
        debug_assert_eq!(jq.rows(), jv.rows());
        let rows = jq.rows();

        let mut dfdx = ColumnMatrix::zeros(rows, dims.x());
        let mut dfdu = ColumnMatrix::zeros(rows, dims.u());

        // Robot columns lead in joint space and in state/input space alike
        let (robot_dfdx, robot_dfdu) = self.robot.jacobians(
            &state[..dims.robot.x],
            &jq.block(0, dims.robot.q),
            &jv.block(0, dims.robot.v),
        );
        dfdx.assign(0, &robot_dfdx);
        dfdu.assign(0, &robot_dfdu);

        // Obstacle columns follow in tracking order. Obstacles have no input dimension, so
        // they contribute no dfdu columns at all.
        for i in 0..dims.obstacles {
            let offset = dims.robot.x + OBSTACLE_DIMS.x * i;
            let x_obs = &state[offset..offset + OBSTACLE_DIMS.x];

            let (obs_dfdx, _) = self.obstacle.jacobians(
                x_obs,
                &jq.block(dims.robot.q + OBSTACLE_DIMS.q * i, OBSTACLE_DIMS.q),
                &jv.block(dims.robot.v + OBSTACLE_DIMS.v * i, OBSTACLE_DIMS.v),
            );
            dfdx.assign(offset, &obs_dfdx);
        }

        (dfdx, dfdu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy::DummyRobot;
    use crate::BodyDims;
    use itertools::Itertools;

    const ROBOT: BodyDims = BodyDims { q: 2, v: 2, x: 6, u: 2 };

    fn robot_state() -> Vec<f64> {
        (1..=6).map(f64::from).collect_vec()
    }

    #[test]
    fn no_obstacles_reduces_to_robot() {
        let robot = TripleIntegrator::new(ROBOT).unwrap();
        let mapping = CompositeMapping::new(CompositeDims::new(ROBOT, 0), robot);

        let state = robot_state();
        let input = [0.1, 0.2];

        assert_eq!(mapping.joint_position(&state), robot.joint_position(&state));
        assert_eq!(
            mapping.joint_velocity(&state, &input),
            robot.joint_velocity(&state, &input)
        );
        assert_eq!(
            mapping.joint_acceleration(&state, &input),
            robot.joint_acceleration(&state, &input)
        );

        let jq = ColumnMatrix::from_vec(vec![1.0, 2.0], 1, 2).unwrap();
        let jv = ColumnMatrix::from_vec(vec![3.0, 4.0], 1, 2).unwrap();
        assert_eq!(
            mapping.jacobians(&state, &jq, &jv),
            robot.jacobians(&state, &jq, &jv)
        );
    }

    #[test_log::test]
    fn obstacle_blocks_follow_robot() {
        let robot = TripleIntegrator::new(ROBOT).unwrap();
        let mapping = CompositeMapping::new(CompositeDims::new(ROBOT, 2), robot);

        // robot state [1..6], obstacle 0 state [10..18], obstacle 1 state [20..28]
        let state = robot_state()
            .into_iter()
            .chain((10..19).map(f64::from))
            .chain((20..29).map(f64::from))
            .collect_vec();
        let input = [0.0, 0.0];

        let q = mapping.joint_position(&state);
        assert_eq!(q.len(), mapping.dims().q());
        assert_eq!(q, vec![1.0, 2.0, 10.0, 11.0, 12.0, 20.0, 21.0, 22.0]);

        let v = mapping.joint_velocity(&state, &input);
        assert_eq!(v, vec![3.0, 4.0, 13.0, 14.0, 15.0, 23.0, 24.0, 25.0]);

        let a = mapping.joint_acceleration(&state, &input);
        assert_eq!(a, vec![5.0, 6.0, 16.0, 17.0, 18.0, 26.0, 27.0, 28.0]);
    }

    #[test]
    fn single_obstacle_triple_split() {
        let robot = TripleIntegrator::new(ROBOT).unwrap();
        let mapping = CompositeMapping::new(CompositeDims::new(ROBOT, 1), robot);

        let state = robot_state()
            .into_iter()
            .chain((1..10).map(f64::from))
            .collect_vec();
        let input = [0.0, 0.0];

        assert_eq!(mapping.joint_position(&state)[2..], [1.0, 2.0, 3.0]);
        assert_eq!(mapping.joint_velocity(&state, &input)[2..], [4.0, 5.0, 6.0]);
        assert_eq!(mapping.joint_acceleration(&state, &input)[2..], [7.0, 8.0, 9.0]);
    }

    #[test]
    fn zero_jacobians_stay_zero() {
        let robot = TripleIntegrator::new(ROBOT).unwrap();
        let mapping = CompositeMapping::new(CompositeDims::new(ROBOT, 2), robot);
        let state = vec![0.0; mapping.dims().x()];

        let jq = ColumnMatrix::zeros(3, mapping.dims().q());
        let jv = ColumnMatrix::zeros(3, mapping.dims().v());

        let (dfdx, dfdu) = mapping.jacobians(&state, &jq, &jv);
        assert!(dfdx.as_slice().iter().all(|&e| e == 0.0));
        assert!(dfdu.as_slice().iter().all(|&e| e == 0.0));
    }

    /// Every state column is written exactly once; distinct per-column markers make a
    /// double write or a skipped column visible.
    #[test_log::test]
    fn jacobian_column_partition() {
        let robot = TripleIntegrator::new(ROBOT).unwrap();
        let mapping = CompositeMapping::new(CompositeDims::new(ROBOT, 2), robot);
        let dims = *mapping.dims();
        let state = vec![0.0; dims.x()];

        // column j of jq carries j + 1, column j of jv carries 101 + j
        let mut jq = ColumnMatrix::zeros(1, dims.q());
        let mut jv = ColumnMatrix::zeros(1, dims.v());
        for j in 0..dims.q() {
            jq.set(0, j, (j + 1) as f64);
        }
        for j in 0..dims.v() {
            jv.set(0, j, (101 + j) as f64);
        }

        let (dfdx, dfdu) = mapping.jacobians(&state, &jq, &jv);

        assert_eq!(dfdx.dims(), (1, dims.x()));
        #[rustfmt::skip]
        let expected = [
            // robot: [Jq | Jv | 0]
            1.0, 2.0, 101.0, 102.0, 0.0, 0.0,
            // obstacle 0
            3.0, 4.0, 5.0, 103.0, 104.0, 105.0, 0.0, 0.0, 0.0,
            // obstacle 1
            6.0, 7.0, 8.0, 106.0, 107.0, 108.0, 0.0, 0.0, 0.0,
        ];
        assert_eq!(dfdx.as_slice(), &expected);

        // dfdu is exactly the robot's input width, all zero
        assert_eq!(dfdu.dims(), (1, ROBOT.u));
        assert!(dfdu.as_slice().iter().all(|&e| e == 0.0));
    }

    #[test]
    fn clone_is_value_independent() {
        let robot = DummyRobot::new(ROBOT, 1.0);
        let mut original = CompositeMapping::new(CompositeDims::new(ROBOT, 1), robot);
        let clone = original.clone();

        let state = robot_state()
            .into_iter()
            .chain((1..10).map(f64::from))
            .collect_vec();

        let before = clone.joint_position(&state);
        original.robot.set_gain(2.0);

        // the original now scales its joint positions, the clone must not
        assert_eq!(original.joint_position(&state)[..2], [2.0, 4.0]);
        assert_eq!(clone.joint_position(&state), before);
    }
}
