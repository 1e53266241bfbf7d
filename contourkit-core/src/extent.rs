//! Inclusive index boxes into a logical 3D lattice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive index bounds `[i_min, i_max, j_min, j_max, k_min, k_max]`.
///
/// An axis whose maximum is below its minimum makes the whole extent empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extent(pub [i32; 6]);

impl Extent {
    pub const fn new(i_min: i32, i_max: i32, j_min: i32, j_max: i32, k_min: i32, k_max: i32) -> Self {
        Self([i_min, i_max, j_min, j_max, k_min, k_max])
    }

    /// Extent covering `[0, dims - 1]` on every axis.
    pub fn from_dimensions(dims: [usize; 3]) -> Self {
        Self([
            0,
            dims[0] as i32 - 1,
            0,
            dims[1] as i32 - 1,
            0,
            dims[2] as i32 - 1,
        ])
    }

    /// The canonical empty extent.
    pub const fn empty() -> Self {
        Self([0, -1, 0, -1, 0, -1])
    }

    pub fn is_empty(&self) -> bool {
        (0..3).any(|axis| self.0[axis * 2 + 1] < self.0[axis * 2])
    }

    pub fn min(&self, axis: usize) -> i32 {
        self.0[axis * 2]
    }

    pub fn max(&self, axis: usize) -> i32 {
        self.0[axis * 2 + 1]
    }

    /// Number of points along `axis` (zero when the axis is inverted).
    pub fn axis_len(&self, axis: usize) -> usize {
        (self.max(axis) - self.min(axis) + 1).max(0) as usize
    }

    /// Point counts along the three axes.
    pub fn dims(&self) -> [usize; 3] {
        [self.axis_len(0), self.axis_len(1), self.axis_len(2)]
    }

    /// Whether `axis` holds a single layer of points.
    pub fn is_degenerate(&self, axis: usize) -> bool {
        self.max(axis) <= self.min(axis)
    }

    /// Number of axes with more than one point.
    pub fn dimensionality(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (0..3).filter(|&axis| !self.is_degenerate(axis)).count()
    }

    /// Axes with more than one point, in increasing order.
    pub fn non_degenerate_axes(&self) -> Vec<usize> {
        (0..3).filter(|&axis| !self.is_degenerate(axis)).collect()
    }

    pub fn num_points(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.dims().iter().product()
    }

    /// Number of cells, treating degenerate axes as one cell thick.
    pub fn num_cells(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.cell_dims().iter().product()
    }

    /// Cell counts per axis, with degenerate axes counted as one.
    pub fn cell_dims(&self) -> [usize; 3] {
        let d = self.dims();
        [d[0].saturating_sub(1).max(1), d[1].saturating_sub(1).max(1), d[2].saturating_sub(1).max(1)]
    }

    pub fn contains_point(&self, ijk: [i32; 3]) -> bool {
        (0..3).all(|axis| ijk[axis] >= self.min(axis) && ijk[axis] <= self.max(axis))
    }

    /// Whether `other` lies completely inside this extent.
    pub fn contains(&self, other: &Extent) -> bool {
        !other.is_empty()
            && (0..3).all(|axis| other.min(axis) >= self.min(axis) && other.max(axis) <= self.max(axis))
    }

    /// Overlap of two extents, empty when they do not touch.
    pub fn intersect(&self, other: &Extent) -> Extent {
        let mut out = [0; 6];
        for axis in 0..3 {
            out[axis * 2] = self.min(axis).max(other.min(axis));
            out[axis * 2 + 1] = self.max(axis).min(other.max(axis));
        }
        let out = Extent(out);
        if out.is_empty() {
            Extent::empty()
        } else {
            out
        }
    }

    /// Grows every axis by `by` points on both sides, never leaving `whole`.
    pub fn grow_clamped(&self, by: i32, whole: &Extent) -> Extent {
        let mut out = self.0;
        for axis in 0..3 {
            out[axis * 2] = (out[axis * 2] - by).max(whole.min(axis));
            out[axis * 2 + 1] = (out[axis * 2 + 1] + by).min(whole.max(axis));
        }
        Extent(out)
    }

    /// Flat index of point `ijk`, x fastest.
    pub fn point_id(&self, ijk: [i32; 3]) -> usize {
        let d = self.dims();
        let i = (ijk[0] - self.min(0)) as usize;
        let j = (ijk[1] - self.min(1)) as usize;
        let k = (ijk[2] - self.min(2)) as usize;
        i + j * d[0] + k * d[0] * d[1]
    }

    /// Lattice coordinates of a flat point index.
    pub fn point_ijk(&self, id: usize) -> [i32; 3] {
        let d = self.dims();
        let nx = d[0].max(1);
        let nxy = (d[0] * d[1]).max(1);
        [
            self.min(0) + (id % nx) as i32,
            self.min(1) + ((id / nx) % d[1].max(1)) as i32,
            self.min(2) + (id / nxy) as i32,
        ]
    }

    /// Flat index of the cell whose minimum corner is `ijk`.
    ///
    /// Degenerate axes do not contribute, so a plane of quads in any
    /// orientation is numbered row by row over its two live axes.
    pub fn cell_id(&self, ijk: [i32; 3]) -> usize {
        let d = self.dims();
        let mut id = 0;
        let mut stride = 1;
        for axis in 0..3 {
            if d[axis] > 1 {
                id += (ijk[axis] - self.min(axis)) as usize * stride;
                stride *= d[axis] - 1;
            }
        }
        id
    }

    /// Minimum-corner lattice coordinates of a flat cell index.
    pub fn cell_ijk(&self, id: usize) -> [i32; 3] {
        let d = self.dims();
        let mut rest = id;
        let mut ijk = [self.min(0), self.min(1), self.min(2)];
        for axis in 0..3 {
            if d[axis] > 1 {
                let n = d[axis] - 1;
                ijk[axis] += (rest % n) as i32;
                rest /= n;
            }
        }
        ijk
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<[i32; 6]> for Extent {
    fn from(ext: [i32; 6]) -> Self {
        Self(ext)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.0;
        write!(f, "({}, {}, {}, {}, {}, {})", e[0], e[1], e[2], e[3], e[4], e[5])
    }
}
