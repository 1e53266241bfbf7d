//! Synchronized templates isosurfaces on 3D lattices.
//!
//! The lattice is swept slice by slice along z, row by row along y and
//! point by point along x. Each point owns the three edges leading to its
//! +x, +y and +z neighbours; a crossing on one of them becomes an output
//! point whose id is stored in [`IntersectionSlabs`]. As soon as the edges
//! of a cube are known on both of its slices, the case table turns them
//! into triangles, or into the polygons those triangles outline when
//! triangle output is off.

use crate::config::ContourOptions;
use crate::edge_buffer::IntersectionSlabs;
use crate::emitter::PointEmitter;
use crate::field::ScalarField;
use crate::lattice::{CurvilinearLattice, Lattice, UniformLattice};
use crate::polygon_builder::PolygonBuilder;
use contourkit_core::{AttributeData, CellType, Error, Extent, ImageData, PolyData, Result, Scalar, StructuredGrid};

/// Samples equal to the iso-value, and NaN samples, count as above it.
#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub(crate) fn is_above(sample: f64, value: f64) -> bool {
    !(sample < value)
}

pub(crate) fn check_execute_extent<T: Scalar>(
    field: &ScalarField<'_, T>,
    exec: &Extent,
    dimension: usize,
) -> Result<()> {
    if exec.is_empty() || exec.dimensionality() != dimension {
        return Err(Error::Dimension { expected: dimension, actual: exec.dimensionality() });
    }
    if !field.extent().contains(exec) {
        return Err(Error::InvalidExtent {
            extent: exec.0,
            reason: format!("outside the sampled extent {}", field.extent()),
        });
    }
    Ok(())
}

/// Isosurface of a uniform image over `exec`.
///
/// `field` must cover `exec`; neighbours outside `exec` but inside the field
/// are used for gradients.
pub fn contour_image<T: Scalar>(
    image: &ImageData,
    field: &ScalarField<'_, T>,
    exec: &Extent,
    options: &ContourOptions,
) -> Result<PolyData> {
    let lattice = UniformLattice::new(image.origin, image.spacing);
    sweep(&lattice, field, &image.point_data, &image.cell_data, exec, options)
}

/// Isosurface of a curvilinear grid over `exec`, skipping blanked cells.
pub fn contour_grid<T: Scalar>(
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
    check_execute_extent(field, exec, 3)?;

    let [x_min, x_max, y_min, y_max, z_min, z_max] = exec.0;
    let mut slabs = IntersectionSlabs::new(exec.axis_len(0), exec.axis_len(1));
    let row = slabs.row_step();
    let merge = options.merge_degenerate_points;
    let data_extent = *field.extent();
    let mut emitter = PointEmitter::new(lattice, field, in_pd, in_cd, options, true);
    let mut builder = PolygonBuilder::new();
    let mut polygons = Vec::new();

    for &value in &options.values {
        for k in z_min..=z_max {
            slabs.begin_slice(k);
            // `prev` and `cur` walk the previous and the current slab in step.
            let mut prev = slabs.previous();
            let mut cur = slabs.current();

            for j in y_min..=y_max {
                let mut s1 = field.value([x_min, j, k]);
                let mut v1 = is_above(s1, value);

                for i in x_min..=x_max {
                    let s0 = s1;
                    let v0 = v1;
                    emitter.begin_point();
                    slabs.clear_point(cur);

                    if i < x_max {
                        s1 = field.value([i + 1, j, k]);
                        v1 = is_above(s1, value);
                        if v0 != v1 {
                            if merge {
                                if s0 == value {
                                    if i > x_min && slabs.has(cur - 3) {
                                        slabs.set(cur, slabs.get(cur - 3));
                                    } else if j > y_min && slabs.has(cur - row + 1) {
                                        slabs.set(cur, slabs.get(cur - row + 1));
                                    } else if k > z_min && slabs.has(prev + 2) {
                                        slabs.set(cur, slabs.get(prev + 2));
                                    }
                                } else if s1 == value {
                                    if j > y_min && slabs.has(cur - row + 4) {
                                        slabs.set(cur, slabs.get(cur - row + 4));
                                    } else if k > z_min && slabs.has(prev + 5) {
                                        slabs.set(cur, slabs.get(prev + 5));
                                    }
                                }
                            }
                            if !slabs.has(cur) {
                                let id = emitter.edge_point(value, [i, j, k], 0, s0, s1);
                                slabs.set(cur, id as i64);
                            }
                        }
                    }

                    if j < y_max {
                        let s2 = field.value([i, j + 1, k]);
                        if v0 != is_above(s2, value) {
                            if merge {
                                if s0 == value {
                                    if slabs.has(cur) {
                                        slabs.set(cur + 1, slabs.get(cur));
                                    } else if i > x_min && slabs.has(cur - 3) {
                                        slabs.set(cur + 1, slabs.get(cur - 3));
                                    } else if j > y_min && slabs.has(cur - row + 1) {
                                        slabs.set(cur + 1, slabs.get(cur - row + 1));
                                    } else if k > z_min && slabs.has(prev + 2) {
                                        slabs.set(cur + 1, slabs.get(prev + 2));
                                    }
                                } else if s2 == value && k > z_min && slabs.has(prev + row + 2) {
                                    slabs.set(cur + 1, slabs.get(prev + row + 2));
                                }
                            }
                            if !slabs.has(cur + 1) {
                                let id = emitter.edge_point(value, [i, j, k], 1, s0, s2);
                                slabs.set(cur + 1, id as i64);
                            }
                        }
                    }

                    if k < z_max {
                        let s3 = field.value([i, j, k + 1]);
                        if v0 != is_above(s3, value) {
                            if merge && s0 == value {
                                if slabs.has(cur) {
                                    slabs.set(cur + 2, slabs.get(cur));
                                } else if slabs.has(cur + 1) {
                                    slabs.set(cur + 2, slabs.get(cur + 1));
                                } else if i > x_min && slabs.has(cur - 3) {
                                    slabs.set(cur + 2, slabs.get(cur - 3));
                                } else if j > y_min && slabs.has(cur - row + 1) {
                                    slabs.set(cur + 2, slabs.get(cur - row + 1));
                                } else if k > z_min && slabs.has(prev + 2) {
                                    slabs.set(cur + 2, slabs.get(prev + 2));
                                }
                            }
                            if !slabs.has(cur + 2) {
                                let id = emitter.edge_point(value, [i, j, k], 2, s0, s3);
                                slabs.set(cur + 2, id as i64);
                            }
                        }
                    }

                    // The cube spanning (i..i+1, j-1..j, k-1..k) is complete.
                    if j > y_min && i < x_max && k > z_min {
                        let cell_id = data_extent.cell_id([i, j - 1, k - 1]);
                        if lattice.is_cell_visible(cell_id) {
                            let case = slabs.case_index(v0, prev, cur);
                            builder.reset();
                            for ids in slabs.triangles(case, prev) {
                                if ids[0] == ids[1] || ids[0] == ids[2] || ids[1] == ids[2] {
                                    continue;
                                }
                                let tri = [ids[0] as usize, ids[1] as usize, ids[2] as usize];
                                if options.generate_triangles {
                                    emitter.insert_cell(CellType::Triangle, &tri, cell_id);
                                } else {
                                    builder.insert_triangle(tri);
                                }
                            }
                            if !options.generate_triangles {
                                builder.polygons(&mut polygons);
                                for polygon in &polygons {
                                    emitter.insert_cell(CellType::Polygon, polygon, cell_id);
                                }
                            }
                        }
                    }

                    prev += 3;
                    cur += 3;
                }
            }
        }
    }

    log::debug!(
        "contoured {} over {}: {} points, {} cells",
        options.values.len(),
        exec,
        emitter.out.number_of_points(),
        emitter.out.number_of_cells()
    );
    Ok(emitter.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use contourkit_core::{DataArray, Point3d};

    /// 3x3x3 zeros with a single 1 in the middle.
    fn spike() -> (ImageData, Vec<f32>) {
        let mut values = vec![0.0f32; 27];
        values[13] = 1.0;
        let image = ImageData::with_dimensions([3, 3, 3], [0.0; 3], [1.0; 3]);
        (image, values)
    }

    fn contour_spike(options: &ContourOptions) -> PolyData {
        let (image, values) = spike();
        let field = ScalarField::new(&values, *image.extent()).unwrap();
        contour_image(&image, &field, image.extent(), options).unwrap()
    }

    #[test]
    fn test_spike_gives_octahedron() {
        let out = contour_spike(&ContourOptions::new(&[0.5]));
        assert_eq!(out.number_of_points(), 6);
        assert_eq!(out.number_of_polys(), 8);
        for p in &out.points {
            assert_relative_eq!((p - Point3d::new(1.0, 1.0, 1.0)).norm(), 0.5, epsilon = 1e-12);
        }
        // Closed shell: every edge is shared by exactly two triangles.
        let mut edges = std::collections::HashMap::new();
        for tri in out.polys() {
            for e in 0..3 {
                let (a, b) = (tri[e], tri[(e + 1) % 3]);
                *edges.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
        assert_eq!(edges.len(), 12);
        assert!(edges.values().all(|&n| n == 2));
    }

    #[test]
    fn test_normals_point_away_from_high_values() {
        let mut options = ContourOptions::new(&[0.5]);
        options.compute_normals = true;
        options.compute_gradients = true;
        let out = contour_spike(&options);
        let normals = out.point_data.normals().unwrap();
        let gradients = out.point_data.gradients().unwrap();
        assert_eq!(normals.num_tuples(), 6);
        assert_eq!(gradients.num_tuples(), 6);
        let center = Point3d::new(1.0, 1.0, 1.0);
        for (id, p) in out.points.iter().enumerate() {
            let n = normals.tuple(id);
            let outward = (p - center).normalize();
            let dot = n[0] * outward.x + n[1] * outward.y + n[2] * outward.z;
            assert_relative_eq!(dot, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_scalars_hold_the_iso_value() {
        let out = contour_spike(&ContourOptions::new(&[0.25, 0.75]));
        assert_eq!(out.number_of_polys(), 16);
        let scalars = out.point_data.scalars().unwrap();
        assert_eq!(scalars.name, "Scalars");
        assert_eq!(scalars.component(0, 0), 0.25);
        assert_eq!(scalars.component(out.number_of_points() - 1, 0), 0.75);
    }

    #[test]
    fn test_uniform_field_at_iso_value_is_empty() {
        let image = ImageData::with_dimensions([4, 4, 4], [0.0; 3], [1.0; 3]);
        let values = vec![2u8; 64];
        let field = ScalarField::new(&values, *image.extent()).unwrap();
        let out = contour_image(&image, &field, image.extent(), &ContourOptions::new(&[2.0])).unwrap();
        assert_eq!(out.number_of_points(), 0);
        assert_eq!(out.number_of_cells(), 0);
    }

    #[test]
    fn test_degenerate_points_are_shared() {
        // The middle slice sits exactly on the iso-value and both outer
        // slices are below it, so the crossings above and below coincide.
        let image = ImageData::with_dimensions([2, 2, 3], [0.0; 3], [1.0; 3]);
        let values: Vec<f64> = (0..12).map(|n| if n / 4 == 1 { 1.0 } else { 0.0 }).collect();
        let field = ScalarField::new(&values, *image.extent()).unwrap();

        let merged = contour_image(&image, &field, image.extent(), &ContourOptions::new(&[1.0])).unwrap();
        let mut options = ContourOptions::new(&[1.0]);
        options.merge_degenerate_points = false;
        let unmerged = contour_image(&image, &field, image.extent(), &options).unwrap();

        assert_eq!(merged.number_of_points(), 4);
        assert_eq!(unmerged.number_of_points(), 8);
        for p in merged.points.iter().chain(unmerged.points.iter()) {
            assert_relative_eq!(p.z, 1.0);
        }
    }

    #[test]
    fn test_cell_data_is_copied_from_source_cube() {
        let (mut image, values) = spike();
        image.cell_data.add_array(DataArray::from_scalars("cell", (0..8).map(|c| c as i32).collect()));
        let field = ScalarField::new(&values, *image.extent()).unwrap();
        let out = contour_image(&image, &field, image.extent(), &ContourOptions::new(&[0.5])).unwrap();
        let cells = out.cell_data.array("cell").unwrap();
        assert_eq!(cells.num_tuples(), 8);
        let mut seen: Vec<i64> = (0..8).map(|c| cells.component(c, 0) as i64).collect();
        seen.sort();
        assert_eq!(seen, (0..8).collect::<Vec<i64>>());
    }

    #[test]
    fn test_point_data_is_interpolated() {
        let (mut image, values) = spike();
        let x: Vec<f64> = (0..27).map(|n| (n % 3) as f64).collect();
        image.point_data.add_array(DataArray::from_scalars("x", x));
        let field = ScalarField::new(&values, *image.extent()).unwrap();
        let out = contour_image(&image, &field, image.extent(), &ContourOptions::new(&[0.5])).unwrap();
        let x = out.point_data.array("x").unwrap();
        for (id, p) in out.points.iter().enumerate() {
            assert_relative_eq!(x.component(id, 0), p.x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_polygons_replace_triangles() {
        let (mut image, values) = spike();
        image.cell_data.add_array(DataArray::from_scalars("cell", (0..8).map(|c| c as i32).collect()));
        let field = ScalarField::new(&values, *image.extent()).unwrap();
        let mut options = ContourOptions::new(&[0.5]);
        options.generate_triangles = false;
        let out = contour_image(&image, &field, image.extent(), &options).unwrap();

        // Each cube holds a single corner triangle, so nothing merges.
        assert_eq!(out.number_of_points(), 6);
        assert_eq!(out.number_of_polys(), 8);
        assert!(out.cells.iter().all(|(kind, ids)| kind == CellType::Polygon && ids.len() == 3));
        assert_eq!(out.cell_data.array("cell").unwrap().num_tuples(), 8);
    }

    #[test]
    fn test_rejects_flat_extent() {
        let (image, values) = spike();
        let field = ScalarField::new(&values, *image.extent()).unwrap();
        let flat = Extent::new(0, 2, 0, 2, 1, 1);
        let err = contour_image(&image, &field, &flat, &ContourOptions::new(&[0.5])).unwrap_err();
        assert_eq!(err, Error::Dimension { expected: 3, actual: 2 });
    }

    #[test]
    fn test_sub_extent_uses_halo_for_gradients() {
        let image = ImageData::with_dimensions([5, 5, 5], [0.0; 3], [1.0; 3]);
        let values: Vec<f64> = (0..125).map(|n| (n % 5) as f64 * (n % 5) as f64).collect();
        let field = ScalarField::new(&values, *image.extent()).unwrap();
        let mut options = ContourOptions::new(&[2.5]);
        options.compute_gradients = true;
        let exec = Extent::new(1, 2, 1, 3, 1, 3);
        let out = contour_image(&image, &field, &exec, &options).unwrap();
        assert!(out.number_of_points() > 0);
        let gradients = out.point_data.gradients().unwrap();
        // x^2 crosses 2.5 between 1 and 2; central differences there give 2 and 4.
        let t = (2.5 - 1.0) / 3.0;
        for id in 0..out.number_of_points() {
            assert_relative_eq!(gradients.component(id, 0), 2.0 + t * 2.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_curvilinear_grid_matches_uniform_geometry() {
        let (image, values) = spike();
        let points: Vec<Point3d> = (0..27).map(|id| image.point(id)).collect();
        let grid = StructuredGrid::new(*image.extent(), points).unwrap();
        let field = ScalarField::new(&values, *grid.extent()).unwrap();
        let out = contour_grid(&grid, &field, grid.extent(), &ContourOptions::new(&[0.5])).unwrap();
        let expected = contour_spike(&ContourOptions::new(&[0.5]));
        assert_eq!(out.number_of_polys(), expected.number_of_polys());
        for (a, b) in out.points.iter().zip(expected.points.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_blanked_cells_are_skipped() {
        let (image, values) = spike();
        let points: Vec<Point3d> = (0..27).map(|id| image.point(id)).collect();
        let mut grid = StructuredGrid::new(*image.extent(), points).unwrap();
        grid.blank_cell(0);
        let field = ScalarField::new(&values, *grid.extent()).unwrap();
        let out = contour_grid(&grid, &field, grid.extent(), &ContourOptions::new(&[0.5])).unwrap();
        assert_eq!(out.number_of_polys(), 7);
    }
}
