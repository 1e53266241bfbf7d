//! Geometry of the lattices the contourers sweep.
//!
//! A [`Lattice`] turns an edge crossing into a position, estimates the
//! field gradient at a lattice point and answers cell visibility. The sweep
//! is generic over it so each lattice kind gets its own instantiation.

use crate::field::ScalarField;
use contourkit_core::{Extent, Matrix3, Point3d, Scalar, StructuredGrid, Vector3d};

pub trait Lattice: Sync {
    /// Position at parameter `t` along the edge from `ijk` to its +1
    /// neighbour on `axis`.
    fn edge_point(&self, ijk: [i32; 3], axis: usize, t: f64) -> Point3d;

    /// Writes the field gradient at `ijk` into `g`. An implementation that
    /// cannot estimate the gradient leaves `g` untouched.
    fn gradient<T: Scalar>(&self, field: &ScalarField<'_, T>, ijk: [i32; 3], g: &mut [f64; 3]);

    fn is_cell_visible(&self, _cell_id: usize) -> bool {
        true
    }
}

/// Axis-aligned lattice with uniform spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformLattice {
    pub origin: [f64; 3],
    pub spacing: [f64; 3],
}

impl UniformLattice {
    pub fn new(origin: [f64; 3], spacing: [f64; 3]) -> Self {
        Self { origin, spacing }
    }
}

impl Lattice for UniformLattice {
    #[inline]
    fn edge_point(&self, ijk: [i32; 3], axis: usize, t: f64) -> Point3d {
        let mut x = [0.0; 3];
        for a in 0..3 {
            let offset = if a == axis { ijk[a] as f64 + t } else { ijk[a] as f64 };
            x[a] = self.origin[a] + self.spacing[a] * offset;
        }
        Point3d::new(x[0], x[1], x[2])
    }

    /// Central differences, one-sided on the boundary of the samples.
    fn gradient<T: Scalar>(&self, field: &ScalarField<'_, T>, ijk: [i32; 3], g: &mut [f64; 3]) {
        let ext = field.extent();
        for axis in 0..3 {
            if ext.is_degenerate(axis) {
                g[axis] = 0.0;
                continue;
            }
            let mut plus = ijk;
            plus[axis] += 1;
            let mut minus = ijk;
            minus[axis] -= 1;
            g[axis] = if ijk[axis] == ext.min(axis) {
                (field.value(plus) - field.value(ijk)) / self.spacing[axis]
            } else if ijk[axis] == ext.max(axis) {
                (field.value(ijk) - field.value(minus)) / self.spacing[axis]
            } else {
                0.5 * (field.value(plus) - field.value(minus)) / self.spacing[axis]
            };
        }
    }
}

/// Lattice with explicit point positions and blanking.
#[derive(Debug, Clone, Copy)]
pub struct CurvilinearLattice<'a> {
    grid: &'a StructuredGrid,
    extent: Extent,
}

impl<'a> CurvilinearLattice<'a> {
    pub fn new(grid: &'a StructuredGrid) -> Self {
        Self { grid, extent: *grid.extent() }
    }

    #[inline]
    fn point(&self, ijk: [i32; 3]) -> Point3d {
        self.grid.points[self.extent.point_id(ijk)]
    }
}

impl Lattice for CurvilinearLattice<'_> {
    #[inline]
    fn edge_point(&self, ijk: [i32; 3], axis: usize, t: f64) -> Point3d {
        let mut next = ijk;
        next[axis] += 1;
        let p0 = self.point(ijk);
        let p1 = self.point(next);
        p0 + (p1 - p0) * t
    }

    /// Least-squares fit over the differences to the available neighbours.
    ///
    /// Solves `NᵀN g = Nᵀs` where each row of `N` is the offset to a
    /// neighbour and `s` the matching change in value.
    fn gradient<T: Scalar>(&self, field: &ScalarField<'_, T>, ijk: [i32; 3], g: &mut [f64; 3]) {
        let ext = field.extent();
        let p0 = self.point(ijk);
        let s0 = field.value(ijk);
        let mut ntn = Matrix3::<f64>::zeros();
        let mut nts = Vector3d::zeros();

        for axis in 0..3 {
            if ext.is_degenerate(axis) {
                continue;
            }
            let mut steps = [0i32; 2];
            let count = if ijk[axis] == ext.min(axis) {
                steps[0] = 1;
                1
            } else if ijk[axis] == ext.max(axis) {
                steps[0] = -1;
                1
            } else {
                steps = [1, -1];
                2
            };
            for &step in &steps[..count] {
                let mut other = ijk;
                other[axis] += step;
                let n = self.point(other) - p0;
                let ds = field.value(other) - s0;
                ntn += n * n.transpose();
                nts += n * ds;
            }
        }

        match ntn.try_inverse() {
            Some(inverse) => {
                let solved = inverse * nts;
                g.copy_from_slice(solved.as_slice());
            }
            None => log::warn!("cannot compute gradient of grid at {:?}", ijk),
        }
    }

    fn is_cell_visible(&self, cell_id: usize) -> bool {
        self.grid.is_cell_visible(cell_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(dims: [usize; 3]) -> Vec<f64> {
        let mut values = Vec::new();
        for k in 0..dims[2] {
            for j in 0..dims[1] {
                for i in 0..dims[0] {
                    values.push(2.0 * i as f64 + 3.0 * j as f64 - k as f64);
                }
            }
        }
        values
    }

    #[test]
    fn test_uniform_edge_point() {
        let lattice = UniformLattice::new([1.0, 2.0, 3.0], [0.5, 1.0, 2.0]);
        let p = lattice.edge_point([2, 1, 1], 2, 0.25);
        assert_relative_eq!(p, Point3d::new(2.0, 3.0, 5.5));
    }

    #[test]
    fn test_uniform_gradient_on_ramp() {
        let values = ramp([4, 4, 4]);
        let ext = Extent::new(0, 3, 0, 3, 0, 3);
        let field = ScalarField::new(&values, ext).unwrap();
        let lattice = UniformLattice::new([0.0; 3], [0.5, 1.0, 2.0]);
        let mut g = [0.0; 3];
        lattice.gradient(&field, [1, 2, 1], &mut g);
        assert_relative_eq!(g[0], 4.0);
        assert_relative_eq!(g[1], 3.0);
        assert_relative_eq!(g[2], -0.5);
        lattice.gradient(&field, [0, 3, 3], &mut g);
        assert_relative_eq!(g[0], 4.0);
        assert_relative_eq!(g[1], 3.0);
        assert_relative_eq!(g[2], -0.5);
    }

    #[test]
    fn test_uniform_gradient_is_one_sided_on_boundary() {
        // Quadratic along x: central and one-sided differences disagree.
        let values: Vec<f64> = (0..27).map(|n| ((n % 3) * (n % 3)) as f64).collect();
        let field = ScalarField::new(&values, Extent::new(0, 2, 0, 2, 0, 2)).unwrap();
        let lattice = UniformLattice::new([0.0; 3], [1.0; 3]);
        let mut g = [0.0; 3];
        lattice.gradient(&field, [0, 1, 1], &mut g);
        assert_relative_eq!(g[0], 1.0);
        lattice.gradient(&field, [1, 1, 1], &mut g);
        assert_relative_eq!(g[0], 2.0);
        lattice.gradient(&field, [2, 1, 1], &mut g);
        assert_relative_eq!(g[0], 3.0);
    }

    fn sheared_grid(dims: [usize; 3]) -> StructuredGrid {
        let ext = Extent::from_dimensions(dims);
        let mut points = Vec::new();
        for k in 0..dims[2] {
            for j in 0..dims[1] {
                for i in 0..dims[0] {
                    let (x, y, z) = (i as f64, j as f64, k as f64);
                    points.push(Point3d::new(x + 0.3 * y, 1.5 * y, z + 0.2 * x));
                }
            }
        }
        StructuredGrid::new(ext, points).unwrap()
    }

    #[test]
    fn test_least_squares_gradient_recovers_linear_field() {
        let grid = sheared_grid([3, 3, 3]);
        let values: Vec<f64> = grid.points.iter().map(|p| 2.0 * p.x - p.y + 0.5 * p.z).collect();
        let field = ScalarField::new(&values, *grid.extent()).unwrap();
        let lattice = CurvilinearLattice::new(&grid);
        for ijk in [[1, 1, 1], [0, 0, 0], [2, 1, 0]] {
            let mut g = [0.0; 3];
            lattice.gradient(&field, ijk, &mut g);
            assert_relative_eq!(g[0], 2.0, epsilon = 1e-9);
            assert_relative_eq!(g[1], -1.0, epsilon = 1e-9);
            assert_relative_eq!(g[2], 0.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_singular_gradient_leaves_output_untouched() {
        let ext = Extent::new(0, 1, 0, 1, 0, 1);
        let grid = StructuredGrid::new(ext, vec![Point3d::origin(); 8]).unwrap();
        let values = vec![0.0f32; 8];
        let field = ScalarField::new(&values, ext).unwrap();
        let mut g = [7.0, 8.0, 9.0];
        CurvilinearLattice::new(&grid).gradient(&field, [0, 0, 0], &mut g);
        assert_eq!(g, [7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_curvilinear_edge_point() {
        let grid = sheared_grid([2, 2, 2]);
        let lattice = CurvilinearLattice::new(&grid);
        let p = lattice.edge_point([0, 1, 0], 0, 0.5);
        assert_relative_eq!(p, Point3d::new(0.8, 1.5, 0.1));
    }
}
