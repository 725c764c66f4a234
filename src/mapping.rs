/*! Defines the capability implemented by every body mapping.
 *
 * The trait is the single extension point for robot kinematic structures: the composite
 * mapping holds one implementor for the robot and never needs to know the concrete variant.
 */

use crate::ColumnMatrix;
use num_traits::Float;

/// Translates between a body's flat state/input representation and the generalized
/// coordinates the physics engine evaluates functions in, and remaps the engine's Jacobians
/// back into state/input derivatives.
///
/// Implementors are value types constructed once from a dimension descriptor and immutable
/// for their lifetime. The `Clone` supertrait carries the deep-copy contract: the embedding
/// optimizer clones mappings across parallel evaluation contexts, so a clone must hold its
/// own copies and share no state with the original.
///
/// All operations are pure index/algebra transforms without error states; undersized vectors
/// or inconsistent descriptors are precondition violations that fail fast.
pub trait StateMapping<F: Float>: Clone {
    /// Joint positions for `state`.
    fn joint_position(&self, state: &[F]) -> Vec<F>;

    /// Joint velocities for `state` and `input`.
    fn joint_velocity(&self, state: &[F], input: &[F]) -> Vec<F>;

    /// Joint accelerations for `state` and `input`.
    fn joint_acceleration(&self, state: &[F], input: &[F]) -> Vec<F>;

    /// Remaps the Jacobians `jq` and `jv` of an arbitrary function with respect to the joint
    /// positions and velocities into the pair (Jacobian w.r.t. state, Jacobian w.r.t. input).
    ///
    /// The returned input Jacobian is identically zero. This is a deliberate simplification
    /// valid only for call sites without input sensitivity (collision-distance evaluation);
    /// a call site that needs true input sensitivity requires its own remap path, not this
    /// one.
    fn jacobians(
        &self,
        state: &[F],
        jq: &ColumnMatrix<F>,
        jv: &ColumnMatrix<F>,
    ) -> (ColumnMatrix<F>, ColumnMatrix<F>);
}
