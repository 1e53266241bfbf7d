//! Synchronized templates isolines on a single lattice plane.
//!
//! The plane is whichever two axes of the execution extent hold more than
//! one point. Rows run along the second of those axes; each point owns the
//! edges towards its neighbours on both axes, and a pixel is resolved once
//! its upper row has been visited.

use crate::config::ContourOptions;
use crate::edge_buffer::{IntersectionRows, NO_INTERSECTION};
use crate::emitter::PointEmitter;
use crate::field::ScalarField;
use crate::lattice::{CurvilinearLattice, Lattice, UniformLattice};
use crate::synchronized_3d::{check_execute_extent, is_above};
use crate::tables::LINE_CASES;
use contourkit_core::{AttributeData, CellType, Extent, ImageData, PolyData, Result, Scalar, StructuredGrid};

/// Isolines of a planar image over `exec`.
pub fn contour_image_2d<T: Scalar>(
    image: &ImageData,
    field: &ScalarField<'_, T>,
    exec: &Extent,
    options: &ContourOptions,
) -> Result<PolyData> {
    let lattice = UniformLattice::new(image.origin, image.spacing);
    sweep(&lattice, field, &image.point_data, &image.cell_data, exec, options)
}

/// Isolines of a planar curvilinear grid over `exec`.
pub fn contour_grid_2d<T: Scalar>(
    grid: &StructuredGrid,
    field: &ScalarField<'_, T>,
    exec: &Extent,
    options: &ContourOptions,
) -> Result<PolyData> {
    let lattice = CurvilinearLattice::new(grid);
    sweep(&lattice, field, &grid.point_data, &grid.cell_data, exec, options)
}

pub(crate) fn sweep<T: Scalar, L: Lattice>(
    lattice: &L,
    field: &ScalarField<'_, T>,
    in_pd: &AttributeData,
    in_cd: &AttributeData,
    exec: &Extent,
    options: &ContourOptions,
) -> Result<PolyData> {
    check_execute_extent(field, exec, 2)?;

    let axes = exec.non_degenerate_axes();
    let (a0, a1) = (axes[0], axes[1]);
    let (d0, d1) = (exec.axis_len(a0), exec.axis_len(a1));
    let base = [exec.min(0), exec.min(1), exec.min(2)];
    let at = |c: usize, r: usize| {
        let mut ijk = base;
        ijk[a0] += c as i32;
        ijk[a1] += r as i32;
        ijk
    };

    let data_extent = *field.extent();
    let mut rows = IntersectionRows::new(d0);
    let mut emitter = PointEmitter::new(lattice, field, in_pd, in_cd, options, false);

    for &value in &options.values {
        for r in 0..d1 {
            rows.begin_row(r);
            let (prev, cur) = (rows.previous(), rows.current());

            for c in 0..d0 {
                let ijk = at(c, r);
                let s0 = field.value(ijk);
                let v0 = is_above(s0, value);
                rows.clear_point(cur + c * 2);

                if c + 1 < d0 {
                    let s1 = field.value(at(c + 1, r));
                    if v0 != is_above(s1, value) {
                        let id = emitter.edge_point(value, ijk, a0, s0, s1);
                        rows.set(cur + c * 2, id as i64);
                    }
                }
                if r + 1 < d1 {
                    let s2 = field.value(at(c, r + 1));
                    if v0 != is_above(s2, value) {
                        let id = emitter.edge_point(value, ijk, a1, s0, s2);
                        rows.set(cur + c * 2 + 1, id as i64);
                    }
                }

                // The pixel with corners (c, r - 1) and (c + 1, r) is complete.
                if r > 0 && c + 1 < d0 {
                    let edges = [
                        rows.get(prev + c * 2),
                        rows.get(prev + (c + 1) * 2 + 1),
                        rows.get(cur + c * 2),
                        rows.get(prev + c * 2 + 1),
                    ];
                    let crossed = |e: usize| edges[e] != NO_INTERSECTION;
                    let c3 = v0;
                    let c0 = c3 ^ crossed(3);
                    let c1 = c0 ^ crossed(0);
                    let c2 = c3 ^ crossed(2);
                    let case = c0 as usize | (c1 as usize) << 1 | (c2 as usize) << 2 | (c3 as usize) << 3;

                    let cell_id = data_extent.cell_id(at(c, r - 1));
                    if !lattice.is_cell_visible(cell_id) {
                        continue;
                    }
                    for segment in LINE_CASES[case] {
                        let a = edges[segment[0]];
                        let b = edges[segment[1]];
                        if a == b {
                            continue;
                        }
                        emitter.insert_cell(CellType::Line, &[a as usize, b as usize], cell_id);
                    }
                }
            }
        }
    }

    Ok(emitter.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use contourkit_core::{DataArray, Point3d};

    fn bump(plane: Extent) -> (ImageData, Vec<f64>) {
        let image = ImageData::new(plane, [0.0; 3], [1.0; 3]);
        let values = (0..plane.num_points())
            .map(|id| {
                let ijk = plane.point_ijk(id);
                if (0..3).all(|a| plane.is_degenerate(a) || ijk[a] == plane.min(a) + 1) {
                    1.0
                } else {
                    0.0
                }
            })
            .collect();
        (image, values)
    }

    #[test]
    fn test_diamond_around_peak() {
        let (image, values) = bump(Extent::new(0, 2, 0, 2, 0, 0));
        let field = ScalarField::new(&values, *image.extent()).unwrap();
        let out = contour_image_2d(&image, &field, image.extent(), &ContourOptions::new(&[0.5])).unwrap();
        assert_eq!(out.number_of_points(), 4);
        assert_eq!(out.number_of_lines(), 4);
        for p in &out.points {
            assert_relative_eq!((p - Point3d::new(1.0, 1.0, 0.0)).norm(), 0.5, epsilon = 1e-12);
        }
        // Every point joins exactly two segments.
        let mut uses = vec![0; 4];
        for line in out.lines() {
            for &id in line {
                uses[id] += 1;
            }
        }
        assert_eq!(uses, vec![2; 4]);
    }

    #[test]
    fn test_any_plane_orientation() {
        for plane in [Extent::new(0, 2, 4, 4, 0, 2), Extent::new(3, 3, 0, 2, 0, 2)] {
            let (image, values) = bump(plane);
            let field = ScalarField::new(&values, plane).unwrap();
            let out = contour_image_2d(&image, &field, &plane, &ContourOptions::new(&[0.5])).unwrap();
            assert_eq!(out.number_of_lines(), 4);
            let fixed = (0..3).find(|&a| plane.is_degenerate(a)).unwrap();
            for p in &out.points {
                assert_relative_eq!(p[fixed], plane.min(fixed) as f64);
            }
        }
    }

    #[test]
    fn test_saddle_keeps_high_corners_apart() {
        let image = ImageData::with_dimensions([2, 2, 1], [0.0; 3], [1.0; 3]);
        let values = vec![1.0, 0.0, 0.0, 1.0];
        let field = ScalarField::new(&values, *image.extent()).unwrap();
        let out = contour_image_2d(&image, &field, image.extent(), &ContourOptions::new(&[0.5])).unwrap();
        assert_eq!(out.number_of_lines(), 2);
        // Each segment cuts off one of the two high corners.
        for line in out.lines() {
            let mid = (out.points[line[0]].coords + out.points[line[1]].coords) * 0.5;
            let near_origin = mid.norm() < 0.75;
            let near_far = (mid - Point3d::new(1.0, 1.0, 0.0).coords).norm() < 0.75;
            assert!(near_origin || near_far);
        }
    }

    #[test]
    fn test_scalars_and_cell_data() {
        let (mut image, values) = bump(Extent::new(0, 2, 0, 2, 0, 0));
        image.cell_data.add_array(DataArray::from_scalars("id", vec![10u16, 11, 12, 13]));
        let field = ScalarField::new(&values, *image.extent()).unwrap();
        let out = contour_image_2d(&image, &field, image.extent(), &ContourOptions::new(&[0.5])).unwrap();
        let ids = out.cell_data.array("id").unwrap();
        let mut seen: Vec<f64> = (0..4).map(|c| ids.component(c, 0)).collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(seen, vec![10.0, 11.0, 12.0, 13.0]);
        assert!(out.point_data.scalars().is_some());
        assert!(out.point_data.normals().is_none());
    }

    #[test]
    fn test_rejects_volume() {
        let image = ImageData::with_dimensions([2, 2, 2], [0.0; 3], [1.0; 3]);
        let values = vec![0.0f32; 8];
        let field = ScalarField::new(&values, *image.extent()).unwrap();
        assert!(contour_image_2d(&image, &field, image.extent(), &ContourOptions::new(&[0.5])).is_err());
    }
}
