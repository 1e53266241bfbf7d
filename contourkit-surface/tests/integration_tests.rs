//! Integration tests for contourkit-surface
//!
//! These tests extract surfaces of whole datasets and of partitioned
//! pieces and check counts, areas and pass-through data.

use approx::assert_relative_eq;
use contourkit_core::{
    CellType, DataArray, DataSet, Extent, ImageData, Point3d, PolyData, StructuredGrid, UnstructuredGrid,
};
use contourkit_surface::*;
use proptest::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn image(extent: Extent, whole: Extent) -> ImageData {
    let mut image = ImageData::new(extent, [0.0; 3], [1.0; 3]).with_whole_extent(whole).unwrap();
    let cells: Vec<f32> = (0..image.number_of_cells()).map(|c| c as f32).collect();
    image.cell_data.add_array(DataArray::from_scalars("cell", cells));
    let points: Vec<f64> = (0..image.number_of_points()).map(|p| p as f64 * 0.5).collect();
    image.point_data.add_array(DataArray::from_scalars("point", points));
    image
}

fn triangle_area(a: Point3d, b: Point3d, c: Point3d) -> f64 {
    (b - a).cross(&(c - a)).norm() / 2.0
}

/// Total area of the polygons and strips of `poly`.
fn area(poly: &PolyData) -> f64 {
    let quads: f64 = poly
        .polys()
        .map(|q| {
            let p = |i: usize| poly.points[q[i]];
            triangle_area(p(0), p(1), p(2)) + triangle_area(p(0), p(2), p(3))
        })
        .sum();
    let strips: f64 = poly
        .strips()
        .flat_map(|s| s.windows(3).map(|t| triangle_area(poly.points[t[0]], poly.points[t[1]], poly.points[t[2]])))
        .sum();
    quads + strips
}

fn box_faces(dims: [usize; 3]) -> usize {
    let [cx, cy, cz] = dims.map(|d| d - 1);
    2 * (cx * cy + cy * cz + cx * cz)
}

#[test]
fn test_image_box_surface() {
    init_logging();
    let ext = Extent::from_dimensions([4, 3, 5]);
    let out = DataSetSurfaceFilter::default().try_execute(&image(ext, ext).into()).unwrap();

    assert_eq!(out.number_of_polys(), box_faces([4, 3, 5]));
    assert_relative_eq!(area(&out), 52.0, epsilon = 1e-12);
    let (lo, hi) = out.bounds().unwrap();
    assert_eq!(lo, Point3d::new(0.0, 0.0, 0.0));
    assert_eq!(hi, Point3d::new(3.0, 2.0, 4.0));
    assert_eq!(out.cell_data.array("cell").unwrap().num_tuples(), out.number_of_polys());
    assert_eq!(out.point_data.array("point").unwrap().num_tuples(), out.number_of_points());
}

#[test]
fn test_interior_piece_has_no_surface() {
    let out = DataSetSurfaceFilter::default()
        .try_execute(&image(Extent::new(1, 2, 1, 2, 1, 2), Extent::new(0, 4, 0, 4, 0, 4)).into())
        .unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_pieces_share_out_the_whole_surface() {
    let whole = Extent::new(0, 4, 0, 2, 0, 2);
    let filter = DataSetSurfaceFilter::default();
    let full = filter.try_execute(&image(whole, whole).into()).unwrap();
    let left = filter.try_execute(&image(Extent::new(0, 2, 0, 2, 0, 2), whole).into()).unwrap();
    let right = filter.try_execute(&image(Extent::new(2, 4, 0, 2, 0, 2), whole).into()).unwrap();

    assert_eq!(left.number_of_polys(), 20);
    assert_eq!(right.number_of_polys(), 20);
    assert_eq!(left.number_of_polys() + right.number_of_polys(), full.number_of_polys());
    assert_relative_eq!(area(&left) + area(&right), area(&full), epsilon = 1e-12);
}

#[test]
fn test_strips_cover_the_same_surface_without_cell_data() {
    let ext = Extent::from_dimensions([4, 3, 5]);
    let data: DataSet = image(ext, ext).into();
    let quads = DataSetSurfaceFilter::default().try_execute(&data).unwrap();
    let strips = DataSetSurfaceFilter::new(SurfaceConfig::default().with_strips(true))
        .try_execute(&data)
        .unwrap();

    assert_eq!(strips.number_of_polys(), 0);
    let triangles: usize = strips.strips().map(|s| s.len() - 2).sum();
    assert_eq!(triangles, 2 * quads.number_of_polys());
    assert_relative_eq!(area(&strips), area(&quads), epsilon = 1e-12);
    assert_eq!(strips.bounds(), quads.bounds());
    assert!(strips.cell_data.array("cell").is_none());
    assert!(strips.point_data.array("point").is_some());
}

#[test]
fn test_original_ids_map_back_to_input() {
    let ext = Extent::from_dimensions([3, 3, 3]);
    let input = image(ext, ext);
    let data: DataSet = input.clone().into();
    let out = DataSetSurfaceFilter::new(SurfaceConfig::default().with_point_ids(true).with_cell_ids(true))
        .try_execute(&data)
        .unwrap();

    let point_ids = out.point_data.array(ORIGINAL_POINT_IDS_NAME).unwrap();
    for (out_id, p) in out.points.iter().enumerate() {
        let source = point_ids.component(out_id, 0) as usize;
        assert_eq!(*p, input.point(source));
    }
    let cell_ids = out.cell_data.array(ORIGINAL_CELL_IDS_NAME).unwrap();
    let cells = out.cell_data.array("cell").unwrap();
    for out_id in 0..out.number_of_polys() {
        assert_eq!(cell_ids.component(out_id, 0), cells.component(out_id, 0));
    }
}

#[test]
fn test_unstructured_tetrahedra() {
    let points = vec![
        Point3d::new(0.0, 0.0, 0.0),
        Point3d::new(1.0, 0.0, 0.0),
        Point3d::new(0.0, 1.0, 0.0),
        Point3d::new(0.0, 0.0, 1.0),
        Point3d::new(1.0, 1.0, 1.0),
        Point3d::new(5.0, 5.0, 5.0),
        Point3d::new(9.0, 9.0, 9.0),
    ];
    let mut grid = UnstructuredGrid::new(points);
    grid.insert_next_cell(CellType::Tetra, &[0, 1, 2, 3]);
    grid.insert_next_cell(CellType::Tetra, &[1, 2, 3, 4]);
    grid.insert_next_cell(CellType::Vertex, &[5]);

    let out = DataSetSurfaceFilter::default().try_execute(&grid.into()).unwrap();
    assert_eq!(out.number_of_verts(), 1);
    assert_eq!(out.number_of_polys(), 6);
    // The unused point is dropped.
    assert_eq!(out.number_of_points(), 6);
    assert!(out.points.iter().all(|p| p.x != 9.0));
}

#[test]
fn test_progress_reaches_callback() {
    let ext = Extent::from_dimensions([3, 3, 3]);
    let mut grid = StructuredGrid::new(ext, (0..ext.num_points()).map(|id| Point3d::from(ext.point_ijk(id).map(f64::from))).collect())
        .unwrap();
    grid.blank_cell(0);
    let mut calls = Vec::new();
    let out = DataSetSurfaceFilter::default()
        .try_execute_with_progress(&grid.into(), &mut |p: f64| {
            calls.push(p);
            true
        })
        .unwrap();
    assert_eq!(out.number_of_polys(), 24);
    assert_eq!(calls.first().copied(), Some(0.0));
    assert!(calls.iter().all(|&p| (0.0..1.0).contains(&p)));
}

#[test]
fn test_geometry_filter_slices_sheared_grid() {
    let ext = Extent::from_dimensions([3, 3, 3]);
    let points = (0..ext.num_points())
        .map(|id| {
            let [i, j, k] = ext.point_ijk(id).map(f64::from);
            Point3d::new(i + 0.5 * k, j, k)
        })
        .collect();
    let mut grid = StructuredGrid::new(ext, points).unwrap();
    let values: Vec<f64> = (0..ext.num_points()).map(|p| p as f64).collect();
    grid.set_point_scalars(DataArray::from_scalars("id", values)).unwrap();

    let filter = StructuredGridGeometryFilter::new(GeometryFilterConfig::default().with_extent(Extent::new(0, 2, 0, 2, 2, 2)));
    let out = filter.try_execute(&grid.into()).unwrap();
    assert_eq!(out.number_of_polys(), 4);
    assert!(out.points.iter().all(|p| p.z == 2.0 && p.x >= 1.0));
    let ids = out.point_data.array("id").unwrap();
    assert_eq!(ids.component(0, 0), 18.0);
    assert_eq!(ids.component(8, 0), 26.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_box_surface_counts(nx in 2usize..6, ny in 2usize..6, nz in 2usize..6, strips in any::<bool>()) {
        let ext = Extent::from_dimensions([nx, ny, nz]);
        let filter = DataSetSurfaceFilter::new(SurfaceConfig::default().with_strips(strips));
        let out = filter.try_execute(&image(ext, ext).into()).unwrap();
        let triangles: usize = out.strips().map(|s| s.len() - 2).sum();
        let faces = out.number_of_polys() + triangles / 2;
        prop_assert_eq!(faces, box_faces([nx, ny, nz]));
        let expected = 2.0 * (((nx - 1) * (ny - 1) + (ny - 1) * (nz - 1) + (nx - 1) * (nz - 1)) as f64);
        prop_assert!((area(&out) - expected).abs() < 1e-9);
    }
}
