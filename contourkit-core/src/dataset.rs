//! Dataset kinds accepted by the filters.

use crate::array::DataArray;
use crate::attributes::AttributeData;
use crate::cell::{CellArray, CellType};
use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::polydata::PolyData;
use crate::Point3d;
use serde::{Deserialize, Serialize};

fn check_whole_extent(extent: &Extent, whole: &Extent) -> Result<()> {
    if !extent.is_empty() && !whole.contains(extent) {
        return Err(Error::InvalidExtent {
            extent: extent.0,
            reason: format!("not contained in whole extent {}", whole),
        });
    }
    Ok(())
}

fn check_tuples(array: &DataArray, expected: usize, what: &str) -> Result<()> {
    if array.num_tuples() != expected {
        return Err(Error::InvalidData(format!(
            "{} array '{}' has {} tuples, expected {}",
            what,
            array.name,
            array.num_tuples(),
            expected
        )));
    }
    Ok(())
}

/// Connectivity of cell `cell_id` of a lattice over `extent`.
///
/// `axis_aligned` selects voxel/pixel point ordering (image and rectilinear
/// data); otherwise hexahedron/quad ordering is used.
pub fn structured_cell(extent: &Extent, cell_id: usize, axis_aligned: bool) -> (CellType, Vec<usize>) {
    let dims = extent.dims();
    let p = extent.point_id(extent.cell_ijk(cell_id));
    let inc = [1, dims[0], dims[0] * dims[1]];
    let axes = extent.non_degenerate_axes();
    match axes.len() {
        0 => (CellType::Vertex, vec![p]),
        1 => (CellType::Line, vec![p, p + inc[axes[0]]]),
        2 => {
            let (a, b) = (inc[axes[0]], inc[axes[1]]);
            if axis_aligned {
                (CellType::Pixel, vec![p, p + a, p + b, p + a + b])
            } else {
                (CellType::Quad, vec![p, p + a, p + a + b, p + b])
            }
        }
        _ => {
            let (x, y, z) = (inc[0], inc[1], inc[2]);
            if axis_aligned {
                (
                    CellType::Voxel,
                    vec![p, p + x, p + y, p + x + y, p + z, p + x + z, p + y + z, p + x + y + z],
                )
            } else {
                (
                    CellType::Hexahedron,
                    vec![p, p + x, p + x + y, p + y, p + z, p + x + z, p + x + y + z, p + y + z],
                )
            }
        }
    }
}

/// Uniformly spaced samples on an axis-aligned lattice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    pub origin: [f64; 3],
    pub spacing: [f64; 3],
    extent: Extent,
    whole_extent: Extent,
    pub point_data: AttributeData,
    pub cell_data: AttributeData,
}

impl ImageData {
    /// Image whose data extent is also its whole extent.
    pub fn new(extent: Extent, origin: [f64; 3], spacing: [f64; 3]) -> Self {
        Self {
            origin,
            spacing,
            extent,
            whole_extent: extent,
            point_data: AttributeData::new(),
            cell_data: AttributeData::new(),
        }
    }

    /// Image with `dims` points per axis starting at index zero.
    pub fn with_dimensions(dims: [usize; 3], origin: [f64; 3], spacing: [f64; 3]) -> Self {
        Self::new(Extent::from_dimensions(dims), origin, spacing)
    }

    /// Declares the data to be a piece of a larger whole extent.
    pub fn with_whole_extent(mut self, whole: Extent) -> Result<Self> {
        check_whole_extent(&self.extent, &whole)?;
        self.whole_extent = whole;
        Ok(self)
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn whole_extent(&self) -> &Extent {
        &self.whole_extent
    }

    pub fn dims(&self) -> [usize; 3] {
        self.extent.dims()
    }

    pub fn number_of_points(&self) -> usize {
        self.extent.num_points()
    }

    pub fn number_of_cells(&self) -> usize {
        self.extent.num_cells()
    }

    pub fn point_at(&self, ijk: [i32; 3]) -> Point3d {
        Point3d::new(
            self.origin[0] + self.spacing[0] * ijk[0] as f64,
            self.origin[1] + self.spacing[1] * ijk[1] as f64,
            self.origin[2] + self.spacing[2] * ijk[2] as f64,
        )
    }

    pub fn point(&self, id: usize) -> Point3d {
        self.point_at(self.extent.point_ijk(id))
    }

    /// Attaches a point array as the active scalars.
    pub fn set_point_scalars(&mut self, array: DataArray) -> Result<()> {
        check_tuples(&array, self.number_of_points(), "point")?;
        self.point_data.set_scalars(array);
        Ok(())
    }
}

/// Axis-aligned lattice with per-axis coordinate lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectilinearGrid {
    pub coordinates: [Vec<f64>; 3],
    extent: Extent,
    whole_extent: Extent,
    pub point_data: AttributeData,
    pub cell_data: AttributeData,
}

impl RectilinearGrid {
    pub fn new(extent: Extent, coordinates: [Vec<f64>; 3]) -> Result<Self> {
        let dims = extent.dims();
        for axis in 0..3 {
            if coordinates[axis].len() != dims[axis] {
                return Err(Error::InvalidData(format!(
                    "axis {} has {} coordinates for {} points",
                    axis,
                    coordinates[axis].len(),
                    dims[axis]
                )));
            }
        }
        Ok(Self {
            coordinates,
            extent,
            whole_extent: extent,
            point_data: AttributeData::new(),
            cell_data: AttributeData::new(),
        })
    }

    pub fn with_whole_extent(mut self, whole: Extent) -> Result<Self> {
        check_whole_extent(&self.extent, &whole)?;
        self.whole_extent = whole;
        Ok(self)
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn whole_extent(&self) -> &Extent {
        &self.whole_extent
    }

    pub fn number_of_points(&self) -> usize {
        self.extent.num_points()
    }

    pub fn point_at(&self, ijk: [i32; 3]) -> Point3d {
        let local = |axis: usize| (ijk[axis] - self.extent.min(axis)) as usize;
        Point3d::new(
            self.coordinates[0][local(0)],
            self.coordinates[1][local(1)],
            self.coordinates[2][local(2)],
        )
    }

    pub fn point(&self, id: usize) -> Point3d {
        self.point_at(self.extent.point_ijk(id))
    }

    /// The same lattice with every point written out explicitly.
    pub fn to_structured_grid(&self) -> StructuredGrid {
        let points = (0..self.number_of_points()).map(|id| self.point(id)).collect();
        StructuredGrid {
            points,
            extent: self.extent,
            whole_extent: self.whole_extent,
            point_visibility: None,
            cell_visibility: None,
            point_data: self.point_data.clone(),
            cell_data: self.cell_data.clone(),
        }
    }
}

/// Curvilinear lattice with explicit point positions and optional blanking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredGrid {
    pub points: Vec<Point3d>,
    extent: Extent,
    whole_extent: Extent,
    point_visibility: Option<Vec<bool>>,
    cell_visibility: Option<Vec<bool>>,
    pub point_data: AttributeData,
    pub cell_data: AttributeData,
}

impl StructuredGrid {
    pub fn new(extent: Extent, points: Vec<Point3d>) -> Result<Self> {
        if points.len() != extent.num_points() {
            return Err(Error::InvalidData(format!(
                "structured grid over {} needs {} points, got {}",
                extent,
                extent.num_points(),
                points.len()
            )));
        }
        Ok(Self {
            points,
            extent,
            whole_extent: extent,
            point_visibility: None,
            cell_visibility: None,
            point_data: AttributeData::new(),
            cell_data: AttributeData::new(),
        })
    }

    pub fn with_whole_extent(mut self, whole: Extent) -> Result<Self> {
        check_whole_extent(&self.extent, &whole)?;
        self.whole_extent = whole;
        Ok(self)
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn whole_extent(&self) -> &Extent {
        &self.whole_extent
    }

    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    pub fn number_of_cells(&self) -> usize {
        self.extent.num_cells()
    }

    pub fn point_at(&self, ijk: [i32; 3]) -> Point3d {
        self.points[self.extent.point_id(ijk)]
    }

    pub fn set_point_scalars(&mut self, array: DataArray) -> Result<()> {
        check_tuples(&array, self.number_of_points(), "point")?;
        self.point_data.set_scalars(array);
        Ok(())
    }

    /// Hides the given points; any cell using one of them is hidden too.
    pub fn blank_point(&mut self, id: usize) {
        let n = self.points.len();
        let visibility = self.point_visibility.get_or_insert_with(|| vec![true; n]);
        if let Some(flag) = visibility.get_mut(id) {
            *flag = false;
        }
    }

    pub fn blank_cell(&mut self, id: usize) {
        let n = self.number_of_cells();
        let visibility = self.cell_visibility.get_or_insert_with(|| vec![true; n]);
        if let Some(flag) = visibility.get_mut(id) {
            *flag = false;
        }
    }

    pub fn has_blanking(&self) -> bool {
        self.point_visibility.is_some() || self.cell_visibility.is_some()
    }

    pub fn is_point_visible(&self, id: usize) -> bool {
        self.point_visibility.as_ref().map_or(true, |v| v.get(id).copied().unwrap_or(true))
    }

    /// A cell is visible when it is not blanked and none of its points are.
    pub fn is_cell_visible(&self, cell_id: usize) -> bool {
        if let Some(cells) = &self.cell_visibility {
            if !cells.get(cell_id).copied().unwrap_or(true) {
                return false;
            }
        }
        let Some(points) = &self.point_visibility else {
            return true;
        };
        let dims = self.extent.dims();
        let base = self.extent.point_id(self.extent.cell_ijk(cell_id));
        // Degenerate axes contribute no step, so some corners repeat.
        let step = |axis: usize| -> usize {
            if dims[axis] > 1 {
                dims[..axis].iter().product()
            } else {
                0
            }
        };
        let steps = [step(0), step(1), step(2)];
        (0..8usize).all(|corner| {
            let id = base + (0..3).filter(|&a| (corner >> a) & 1 == 1).map(|a| steps[a]).sum::<usize>();
            points.get(id).copied().unwrap_or(true)
        })
    }
}

/// Explicit cells of mixed kinds over a point list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnstructuredGrid {
    pub points: Vec<Point3d>,
    pub cells: CellArray,
    pub point_data: AttributeData,
    pub cell_data: AttributeData,
}

impl UnstructuredGrid {
    pub fn new(points: Vec<Point3d>) -> Self {
        Self { points, cells: CellArray::new(), ..Self::default() }
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

    /// Checks that every cell has the right number of points and only
    /// references existing points.
    pub fn validate_cells(&self) -> Result<()> {
        self.cells.validate(self.points.len())
    }
}

/// Any dataset a filter can be asked to process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataSet {
    Image(ImageData),
    Rectilinear(RectilinearGrid),
    Structured(StructuredGrid),
    Unstructured(UnstructuredGrid),
    Poly(PolyData),
}

impl DataSet {
    pub fn kind_name(&self) -> &'static str {
        match self {
            DataSet::Image(_) => "image data",
            DataSet::Rectilinear(_) => "rectilinear grid",
            DataSet::Structured(_) => "structured grid",
            DataSet::Unstructured(_) => "unstructured grid",
            DataSet::Poly(_) => "poly data",
        }
    }

    pub fn number_of_points(&self) -> usize {
        match self {
            DataSet::Image(d) => d.number_of_points(),
            DataSet::Rectilinear(d) => d.number_of_points(),
            DataSet::Structured(d) => d.number_of_points(),
            DataSet::Unstructured(d) => d.number_of_points(),
            DataSet::Poly(d) => d.number_of_points(),
        }
    }

    pub fn number_of_cells(&self) -> usize {
        match self {
            DataSet::Image(d) => d.number_of_cells(),
            DataSet::Rectilinear(d) => d.extent().num_cells(),
            DataSet::Structured(d) => d.number_of_cells(),
            DataSet::Unstructured(d) => d.number_of_cells(),
            DataSet::Poly(d) => d.number_of_cells(),
        }
    }

    pub fn point(&self, id: usize) -> Point3d {
        match self {
            DataSet::Image(d) => d.point(id),
            DataSet::Rectilinear(d) => d.point(id),
            DataSet::Structured(d) => d.points[id],
            DataSet::Unstructured(d) => d.points[id],
            DataSet::Poly(d) => d.points[id],
        }
    }

    /// Kind and point ids of cell `id`.
    pub fn cell(&self, id: usize) -> (CellType, Vec<usize>) {
        match self {
            DataSet::Image(d) => structured_cell(d.extent(), id, true),
            DataSet::Rectilinear(d) => structured_cell(d.extent(), id, true),
            DataSet::Structured(d) => structured_cell(d.extent(), id, false),
            DataSet::Unstructured(d) => (d.cells.cell_type(id), d.cells.cell_points(id).to_vec()),
            DataSet::Poly(d) => (d.cells.cell_type(id), d.cells.cell_points(id).to_vec()),
        }
    }

    pub fn is_cell_visible(&self, id: usize) -> bool {
        match self {
            DataSet::Structured(d) => d.is_cell_visible(id),
            _ => true,
        }
    }

    pub fn point_data(&self) -> &AttributeData {
        match self {
            DataSet::Image(d) => &d.point_data,
            DataSet::Rectilinear(d) => &d.point_data,
            DataSet::Structured(d) => &d.point_data,
            DataSet::Unstructured(d) => &d.point_data,
            DataSet::Poly(d) => &d.point_data,
        }
    }

    pub fn cell_data(&self) -> &AttributeData {
        match self {
            DataSet::Image(d) => &d.cell_data,
            DataSet::Rectilinear(d) => &d.cell_data,
            DataSet::Structured(d) => &d.cell_data,
            DataSet::Unstructured(d) => &d.cell_data,
            DataSet::Poly(d) => &d.cell_data,
        }
    }

    /// Checks that every point array holds one tuple per point and every
    /// cell array one tuple per cell.
    pub fn validate_attributes(&self) -> Result<()> {
        for array in self.point_data().arrays() {
            check_tuples(array, self.number_of_points(), "point")?;
        }
        for array in self.cell_data().arrays() {
            check_tuples(array, self.number_of_cells(), "cell")?;
        }
        Ok(())
    }

    /// Data and whole extents of lattice datasets.
    pub fn extents(&self) -> Option<(Extent, Extent)> {
        match self {
            DataSet::Image(d) => Some((*d.extent(), *d.whole_extent())),
            DataSet::Rectilinear(d) => Some((*d.extent(), *d.whole_extent())),
            DataSet::Structured(d) => Some((*d.extent(), *d.whole_extent())),
            _ => None,
        }
    }
}

impl From<ImageData> for DataSet {
    fn from(d: ImageData) -> Self {
        DataSet::Image(d)
    }
}

impl From<RectilinearGrid> for DataSet {
    fn from(d: RectilinearGrid) -> Self {
        DataSet::Rectilinear(d)
    }
}

impl From<StructuredGrid> for DataSet {
    fn from(d: StructuredGrid) -> Self {
        DataSet::Structured(d)
    }
}

impl From<UnstructuredGrid> for DataSet {
    fn from(d: UnstructuredGrid) -> Self {
        DataSet::Unstructured(d)
    }
}

impl From<PolyData> for DataSet {
    fn from(d: PolyData) -> Self {
        DataSet::Poly(d)
    }
}
