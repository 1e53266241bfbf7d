//! Outer faces of lattice datasets.
//!
//! A face of the data extent is part of the outer surface only when it lies
//! on the boundary of the whole extent. Each such face is copied out as a
//! grid of quads, or as one triangle strip per row.

use crate::builder::SurfaceBuilder;
use crate::config::SurfaceConfig;
use contourkit_core::{CellType, DataSet, Extent, PolyData};

/// The six faces as `(max face, normal axis, row axis, column axis)`.
///
/// The in-plane axis order makes every face wind outward.
const FACES: [(bool, [usize; 3]); 6] = [
    (false, [0, 1, 2]),
    (true, [0, 2, 1]),
    (false, [1, 2, 0]),
    (true, [1, 0, 2]),
    (false, [2, 0, 1]),
    (true, [2, 1, 0]),
];

/// Outer surface of a lattice `input` sampled over `ext` inside `whole`.
///
/// A single point becomes a vertex and a single row of points becomes line
/// segments; anything thicker yields its boundary faces.
pub fn structured_surface(input: &DataSet, ext: &Extent, whole: &Extent, config: &SurfaceConfig) -> PolyData {
    let mut builder = SurfaceBuilder::new(input, config, !config.use_strips);
    if ext.is_empty() {
        return builder.finish(config);
    }

    match ext.non_degenerate_axes().as_slice() {
        [] => {
            let p = builder.copy_point(0);
            builder.insert_cell(CellType::Vertex, &[p], Some(0));
        }
        [axis] => {
            let start = builder.out.number_of_points();
            for id in 0..ext.axis_len(*axis) {
                builder.copy_point(id);
            }
            for segment in 0..ext.axis_len(*axis) - 1 {
                let p = start + segment;
                builder.insert_cell(CellType::Line, &[p, p + 1], Some(segment));
            }
        }
        _ => {
            for (max_face, axes) in FACES {
                if config.use_strips {
                    face_strips(&mut builder, ext, whole, max_face, axes);
                } else {
                    face_quads(&mut builder, ext, whole, max_face, axes);
                }
            }
        }
    }
    builder.finish(config)
}

/// Lattice coordinates with `a`, `b` and `c` placed on their axes.
#[inline]
fn place(axes: [usize; 3], a: i32, b: i32, c: i32) -> [i32; 3] {
    let mut ijk = [0; 3];
    ijk[axes[0]] = a;
    ijk[axes[1]] = b;
    ijk[axes[2]] = c;
    ijk
}

/// Copies the points of the face at layer `a` and returns the output id of
/// its first point.
fn copy_face_points(builder: &mut SurfaceBuilder<'_>, ext: &Extent, axes: [usize; 3], a: i32) -> usize {
    let [_, b_axis, c_axis] = axes;
    let start = builder.out.number_of_points();
    for ic in ext.min(c_axis)..=ext.max(c_axis) {
        for ib in ext.min(b_axis)..=ext.max(b_axis) {
            builder.copy_point(ext.point_id(place(axes, a, ib, ic)));
        }
    }
    start
}

fn face_quads(builder: &mut SurfaceBuilder<'_>, ext: &Extent, whole: &Extent, max_face: bool, axes: [usize; 3]) {
    let [a_axis, b_axis, c_axis] = axes;
    if ext.is_degenerate(b_axis) || ext.is_degenerate(c_axis) {
        return;
    }
    if max_face {
        if ext.max(a_axis) < whole.max(a_axis) {
            return;
        }
    } else if ext.is_degenerate(a_axis) || ext.min(a_axis) > whole.min(a_axis) {
        // A flat extent is emitted once, by its max face.
        return;
    }

    // A flat max face takes its cells from the only layer there is.
    let (point_a, cell_a) = if max_face && !ext.is_degenerate(a_axis) {
        (ext.max(a_axis), ext.max(a_axis) - 1)
    } else {
        (ext.min(a_axis), ext.min(a_axis))
    };

    let start = copy_face_points(builder, ext, axes, point_a);
    let row = ext.axis_len(b_axis);
    for ic in ext.min(c_axis)..ext.max(c_axis) {
        for ib in ext.min(b_axis)..ext.max(b_axis) {
            let p = start + (ib - ext.min(b_axis)) as usize + (ic - ext.min(c_axis)) as usize * row;
            let cell = ext.cell_id(place(axes, cell_a, ib, ic));
            builder.insert_cell(CellType::Quad, &[p, p + row, p + row + 1, p + 1], Some(cell));
        }
    }
}

fn face_strips(builder: &mut SurfaceBuilder<'_>, ext: &Extent, whole: &Extent, max_face: bool, axes: [usize; 3]) {
    let [a_axis, b_axis, c_axis] = axes;
    if ext.is_degenerate(b_axis) || ext.is_degenerate(c_axis) {
        return;
    }
    if max_face {
        // A flat extent is emitted once, by its min face.
        if ext.is_degenerate(a_axis) || ext.max(a_axis) < whole.max(a_axis) {
            return;
        }
    } else if ext.min(a_axis) > whole.min(a_axis) {
        return;
    }

    let point_a = if max_face { ext.max(a_axis) } else { ext.min(a_axis) };

    // Strips run along the longer in-plane axis; swapping the axes flips
    // the winding, which the point order below restores.
    let rotated = ext.axis_len(b_axis) < ext.axis_len(c_axis);
    let (b_axis, c_axis) = if rotated { (c_axis, b_axis) } else { (b_axis, c_axis) };
    let axes = [a_axis, b_axis, c_axis];

    let start = copy_face_points(builder, ext, axes, point_a);
    let row = ext.axis_len(b_axis);
    let mut strip = Vec::with_capacity(2 * row);
    for ic in 0..ext.axis_len(c_axis) - 1 {
        strip.clear();
        for ib in 0..row {
            let p = start + ic * row + ib;
            if rotated {
                strip.extend([p + row, p]);
            } else {
                strip.extend([p, p + row]);
            }
        }
        builder.insert_cell(CellType::TriangleStrip, &strip, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contourkit_core::{DataArray, ImageData, Point3d};

    fn image(extent: Extent, whole: Extent) -> DataSet {
        let mut image = ImageData::new(extent, [0.0; 3], [1.0; 3]).with_whole_extent(whole).unwrap();
        let cells: Vec<i32> = (0..image.number_of_cells() as i32).collect();
        image.cell_data.add_array(DataArray::from_scalars("cell", cells));
        image.into()
    }

    fn surface(data: &DataSet, config: &SurfaceConfig) -> PolyData {
        let (ext, whole) = data.extents().unwrap();
        structured_surface(data, &ext, &whole, config)
    }

    /// `(p1 - p0) x (p3 - p0)` of every quad, dotted with the direction from
    /// `center` to the quad.
    fn outwardness(poly: &PolyData, center: Point3d) -> Vec<f64> {
        poly.polys()
            .map(|q| {
                let p = |i: usize| poly.points[q[i]];
                let normal = (p(1) - p(0)).cross(&(p(3) - p(0)));
                let mid = (p(0).coords + p(1).coords + p(2).coords + p(3).coords) / 4.0;
                normal.dot(&(mid - center.coords))
            })
            .collect()
    }

    #[test]
    fn test_box_faces() {
        let ext = Extent::new(0, 2, 0, 2, 0, 2);
        let out = surface(&image(ext, ext), &SurfaceConfig::default());
        assert_eq!(out.number_of_polys(), 6 * 4);
        assert_eq!(out.number_of_points(), 6 * 9);
        assert_eq!(out.cell_data.array("cell").unwrap().num_tuples(), 24);
    }

    #[test]
    fn test_faces_wind_outward() {
        let ext = Extent::new(0, 2, 0, 2, 0, 2);
        let out = surface(&image(ext, ext), &SurfaceConfig::default());
        assert!(outwardness(&out, Point3d::new(1.0, 1.0, 1.0)).iter().all(|&d| d > 0.0));
    }

    #[test]
    fn test_max_face_copies_boundary_cells() {
        let ext = Extent::new(0, 2, 0, 1, 0, 1);
        let out = surface(&image(ext, ext), &SurfaceConfig::default());
        // The +x face sits on the second cell.
        let cells = out.cell_data.array("cell").unwrap();
        let x_max: Vec<f64> = out
            .polys()
            .enumerate()
            .filter(|(_, q)| q.iter().all(|&p| out.points[p].x == 2.0))
            .map(|(id, _)| cells.component(id, 0))
            .collect();
        assert_eq!(x_max, vec![1.0]);
    }

    #[test]
    fn test_interior_piece_has_no_faces() {
        let whole = Extent::new(0, 9, 0, 9, 0, 9);
        let out = surface(&image(Extent::new(3, 5, 3, 5, 3, 5), whole), &SurfaceConfig::default());
        assert!(out.is_empty());
        assert_eq!(out.number_of_points(), 0);
    }

    #[test]
    fn test_piece_on_one_boundary() {
        let whole = Extent::new(0, 9, 0, 9, 0, 9);
        let out = surface(&image(Extent::new(0, 4, 2, 5, 3, 5), whole), &SurfaceConfig::default());
        // Only the -x face: 3 x 2 quads.
        assert_eq!(out.number_of_polys(), 6);
        assert!(out.points.iter().all(|p| p.x == 0.0));
    }

    #[test]
    fn test_flat_extent_is_emitted_once() {
        let ext = Extent::new(0, 3, 0, 2, 0, 0);
        let quads = surface(&image(ext, ext), &SurfaceConfig::default());
        assert_eq!(quads.number_of_polys(), 6);
        assert_eq!(quads.cell_data.array("cell").unwrap().tuple(5), vec![5.0]);

        let strips = surface(&image(ext, ext), &SurfaceConfig::default().with_strips(true));
        assert_eq!(strips.number_of_strips(), 2);
        assert!(strips.cell_data.array("cell").is_none());
    }

    #[test]
    fn test_strips_follow_longer_axis() {
        let ext = Extent::new(0, 1, 0, 4, 0, 0);
        let strips = surface(&image(ext, ext), &SurfaceConfig::default().with_strips(true));
        assert_eq!(strips.number_of_strips(), 1);
        assert_eq!(strips.strips().next().unwrap().len(), 10);
    }

    #[test]
    fn test_line_and_vertex_reductions() {
        let line = Extent::new(0, 0, 0, 3, 0, 0);
        let out = surface(&image(line, line), &SurfaceConfig::default());
        assert_eq!(out.number_of_lines(), 3);
        assert_eq!(out.cells.cell_points(2), &[2, 3]);
        assert_eq!(out.cell_data.array("cell").unwrap().tuple(2), vec![2.0]);

        let point = Extent::new(4, 4, 1, 1, 0, 0);
        let out = surface(&image(point, point), &SurfaceConfig::default());
        assert_eq!(out.number_of_verts(), 1);
        assert_eq!(out.points[0], Point3d::new(4.0, 1.0, 0.0));
    }

    #[test]
    fn test_original_ids() {
        let ext = Extent::new(0, 1, 0, 1, 0, 1);
        let config = SurfaceConfig::default().with_point_ids(true).with_cell_ids(true);
        let out = surface(&image(ext, ext), &config);
        let points = out.point_data.array("OriginalPointIds").unwrap();
        let cells = out.cell_data.array("OriginalCellIds").unwrap();
        assert_eq!(points.num_tuples(), out.number_of_points());
        assert_eq!(cells.num_tuples(), 6);
        for id in 0..out.number_of_points() {
            let source = points.component(id, 0) as usize;
            assert_eq!(out.points[id], Point3d::from(ext.point_ijk(source).map(f64::from)));
        }

        let strips = surface(&image(ext, ext), &config.with_strips(true));
        assert!(strips.cell_data.array("OriginalCellIds").is_none());
        assert!(strips.point_data.array("OriginalPointIds").is_some());
    }
}
