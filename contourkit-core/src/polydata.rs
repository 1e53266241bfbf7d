//! Polygonal output meshes.

use crate::attributes::AttributeData;
use crate::cell::{CellArray, CellType};
use crate::Point3d;
use serde::{Deserialize, Serialize};

/// Points, mixed polygonal cells and their attributes.
///
/// Cell ids follow insertion order regardless of cell kind, and row `n` of
/// `cell_data` belongs to cell `n`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyData {
    pub points: Vec<Point3d>,
    pub cells: CellArray,
    pub point_data: AttributeData,
    pub cell_data: AttributeData,
}

impl PolyData {
    pub fn new() -> Self {
        Self { cells: CellArray::new(), ..Self::default() }
    }

    pub fn insert_next_point(&mut self, point: Point3d) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    pub fn insert_next_cell(&mut self, cell_type: CellType, ids: &[usize]) -> usize {
        self.cells.insert_next_cell(cell_type, ids)
    }

    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    pub fn number_of_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.cells.is_empty()
    }

    fn cells_where(&self, keep: fn(CellType) -> bool) -> impl Iterator<Item = &[usize]> + '_ {
        self.cells.iter().filter(move |(t, _)| keep(*t)).map(|(_, ids)| ids)
    }

    pub fn verts(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.cells_where(|t| matches!(t, CellType::Vertex | CellType::PolyVertex))
    }

    pub fn lines(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.cells_where(|t| matches!(t, CellType::Line | CellType::PolyLine))
    }

    pub fn polys(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.cells_where(|t| {
            matches!(t, CellType::Triangle | CellType::Quad | CellType::Polygon | CellType::Pixel)
        })
    }

    pub fn strips(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.cells_where(|t| t == CellType::TriangleStrip)
    }

    pub fn number_of_polys(&self) -> usize {
        self.polys().count()
    }

    pub fn number_of_lines(&self) -> usize {
        self.lines().count()
    }

    pub fn number_of_strips(&self) -> usize {
        self.strips().count()
    }

    pub fn number_of_verts(&self) -> usize {
        self.verts().count()
    }

    /// Axis-aligned bounds of the points.
    pub fn bounds(&self) -> Option<(Point3d, Point3d)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Point3d::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Point3d::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        }))
    }

    /// Releases spare capacity once the mesh is complete.
    pub fn squeeze(&mut self) {
        self.points.shrink_to_fit();
        self.cells.squeeze();
        self.point_data.squeeze();
        self.cell_data.squeeze();
    }
}
