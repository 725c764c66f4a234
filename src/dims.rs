/*! Dimension descriptors for the bodies tracked by the optimizer.
 *
 * A body contributes `q` generalized-position and `v` generalized-velocity coordinates to the
 * physics model, and occupies `x` state and `u` input slots in the optimizer's flat vectors.
 * The composite descriptor fixes the layout shared by both representations: robot block
 * first, then one block per obstacle in ascending tracking order.
 */

use tracing::debug;

/// Coordinate-space sizes of a single tracked body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyDims {
    /// Generalized-position size
    pub q: usize,
    /// Generalized-velocity size
    pub v: usize,
    /// State size
    pub x: usize,
    /// Input size
    pub u: usize,
}

impl BodyDims {
    /// Shape of a 3-D point mass evolving as `[position, velocity, acceleration]` with no
    /// control input. Every tracked obstacle has this shape.
    pub const fn point_mass_3d() -> Self {
        Self { q: 3, v: 3, x: 9, u: 0 }
    }
}

/// Fixed obstacle shape shared by all composite mappings.
pub(crate) const OBSTACLE_DIMS: BodyDims = BodyDims::point_mass_3d();

/// Robot descriptor plus the number of tracked obstacles.
///
/// The accessors are the totals of the concatenated joint-space and optimizer vectors. They
/// are definitionally consistent with the per-body slicing performed by
/// [CompositeMapping](crate::CompositeMapping); a mismatch between these totals and the
/// vectors handed in is a programming error upstream, not a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeDims {
    pub robot: BodyDims,
    pub obstacles: usize,
}

impl CompositeDims {
    pub fn new(robot: BodyDims, obstacles: usize) -> Self {
        let dims = Self { robot, obstacles };
        debug!(?dims, "composite dimensions");
        dims
    }

    /// Combined joint-position size (robot joints first, then obstacles in tracking order)
    pub fn q(&self) -> usize {
        self.robot.q + OBSTACLE_DIMS.q * self.obstacles
    }

    /// Combined joint-velocity size
    pub fn v(&self) -> usize {
        self.robot.v + OBSTACLE_DIMS.v * self.obstacles
    }

    /// Combined state size
    pub fn x(&self) -> usize {
        self.robot.x + OBSTACLE_DIMS.x * self.obstacles
    }

    /// Combined input size. Obstacles contribute no input slots.
    pub fn u(&self) -> usize {
        self.robot.u
    }
}
