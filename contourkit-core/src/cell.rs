//! Cell kinds and packed cell connectivity.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Linear cell kinds, numbered as in the legacy VTK file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellType {
    Vertex = 1,
    PolyVertex = 2,
    Line = 3,
    PolyLine = 4,
    Triangle = 5,
    TriangleStrip = 6,
    Polygon = 7,
    Pixel = 8,
    Quad = 9,
    Tetra = 10,
    Voxel = 11,
    Hexahedron = 12,
    Wedge = 13,
    Pyramid = 14,
    PentagonalPrism = 15,
    HexagonalPrism = 16,
}

const TETRA_FACES: &[&[usize]] = &[&[0, 1, 3], &[1, 2, 3], &[2, 0, 3], &[0, 2, 1]];

const VOXEL_FACES: &[&[usize]] = &[
    &[0, 4, 6, 2],
    &[1, 3, 7, 5],
    &[0, 1, 5, 4],
    &[2, 6, 7, 3],
    &[0, 2, 3, 1],
    &[4, 5, 7, 6],
];

const HEXAHEDRON_FACES: &[&[usize]] = &[
    &[0, 4, 7, 3],
    &[1, 2, 6, 5],
    &[0, 1, 5, 4],
    &[3, 7, 6, 2],
    &[0, 3, 2, 1],
    &[4, 5, 6, 7],
];

const WEDGE_FACES: &[&[usize]] = &[&[0, 1, 2], &[3, 5, 4], &[0, 3, 4, 1], &[1, 4, 5, 2], &[2, 5, 3, 0]];

const PYRAMID_FACES: &[&[usize]] = &[&[0, 3, 2, 1], &[0, 1, 4], &[1, 2, 4], &[2, 3, 4], &[3, 0, 4]];

const PENTAGONAL_PRISM_FACES: &[&[usize]] = &[
    &[0, 4, 3, 2, 1],
    &[5, 6, 7, 8, 9],
    &[0, 1, 6, 5],
    &[1, 2, 7, 6],
    &[2, 3, 8, 7],
    &[3, 4, 9, 8],
    &[4, 0, 5, 9],
];

const HEXAGONAL_PRISM_FACES: &[&[usize]] = &[
    &[0, 5, 4, 3, 2, 1],
    &[6, 7, 8, 9, 10, 11],
    &[0, 1, 7, 6],
    &[1, 2, 8, 7],
    &[2, 3, 9, 8],
    &[3, 4, 10, 9],
    &[4, 5, 11, 10],
    &[5, 0, 6, 11],
];

impl CellType {
    /// Topological dimension.
    pub fn dimension(self) -> usize {
        match self {
            CellType::Vertex | CellType::PolyVertex => 0,
            CellType::Line | CellType::PolyLine => 1,
            CellType::Triangle
            | CellType::TriangleStrip
            | CellType::Polygon
            | CellType::Pixel
            | CellType::Quad => 2,
            _ => 3,
        }
    }

    /// Faces of a 3D cell as local point indices, outward oriented.
    pub fn faces(self) -> &'static [&'static [usize]] {
        match self {
            CellType::Tetra => TETRA_FACES,
            CellType::Voxel => VOXEL_FACES,
            CellType::Hexahedron => HEXAHEDRON_FACES,
            CellType::Wedge => WEDGE_FACES,
            CellType::Pyramid => PYRAMID_FACES,
            CellType::PentagonalPrism => PENTAGONAL_PRISM_FACES,
            CellType::HexagonalPrism => HEXAGONAL_PRISM_FACES,
            _ => &[],
        }
    }

    /// Point count of fixed-size kinds; `None` for polygons, poly-lines,
    /// poly-vertices and strips.
    pub fn point_count(self) -> Option<usize> {
        match self {
            CellType::Vertex => Some(1),
            CellType::Line => Some(2),
            CellType::Triangle => Some(3),
            CellType::Pixel | CellType::Quad | CellType::Tetra => Some(4),
            CellType::Pyramid => Some(5),
            CellType::Wedge => Some(6),
            CellType::Voxel | CellType::Hexahedron => Some(8),
            CellType::PentagonalPrism => Some(10),
            CellType::HexagonalPrism => Some(12),
            CellType::PolyVertex | CellType::PolyLine | CellType::TriangleStrip | CellType::Polygon => None,
        }
    }

    /// Polygon kind for a face with `n` points.
    pub fn polygon_for(n: usize) -> CellType {
        match n {
            3 => CellType::Triangle,
            4 => CellType::Quad,
            _ => CellType::Polygon,
        }
    }
}

/// Packed connectivity of a sequence of cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellArray {
    types: Vec<CellType>,
    offsets: Vec<usize>,
    connectivity: Vec<usize>,
}

impl CellArray {
    pub fn new() -> Self {
        Self { types: Vec::new(), offsets: vec![0], connectivity: Vec::new() }
    }

    pub fn with_capacity(cells: usize, ids: usize) -> Self {
        let mut offsets = Vec::with_capacity(cells + 1);
        offsets.push(0);
        Self { types: Vec::with_capacity(cells), offsets, connectivity: Vec::with_capacity(ids) }
    }

    /// Appends a cell and returns its id.
    pub fn insert_next_cell(&mut self, cell_type: CellType, ids: &[usize]) -> usize {
        if self.offsets.is_empty() {
            self.offsets.push(0);
        }
        self.connectivity.extend_from_slice(ids);
        self.offsets.push(self.connectivity.len());
        self.types.push(cell_type);
        self.types.len() - 1
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn cell_type(&self, id: usize) -> CellType {
        self.types[id]
    }

    pub fn cell_points(&self, id: usize) -> &[usize] {
        &self.connectivity[self.offsets[id]..self.offsets[id + 1]]
    }

    pub fn connectivity_len(&self) -> usize {
        self.connectivity.len()
    }

    /// `(cell type, point ids)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CellType, &[usize])> + '_ {
        (0..self.len()).map(move |id| (self.types[id], self.cell_points(id)))
    }

    /// Checks the packed layout, the point count of every cell and that
    /// every id is below `num_points`.
    pub fn validate(&self, num_points: usize) -> Result<()> {
        if self.types.is_empty() {
            return Ok(());
        }
        let consistent = self.offsets.len() == self.types.len() + 1
            && self.offsets.first() == Some(&0)
            && self.offsets.windows(2).all(|w| w[0] <= w[1])
            && self.offsets.last() == Some(&self.connectivity.len());
        if !consistent {
            return Err(Error::InvalidData(format!(
                "cell offsets do not describe {} cells over {} ids",
                self.types.len(),
                self.connectivity.len()
            )));
        }
        for (id, (cell_type, ids)) in self.iter().enumerate() {
            let expected = cell_type.point_count();
            if expected.map_or(ids.is_empty(), |n| ids.len() != n) {
                return Err(Error::InvalidData(format!(
                    "cell {} of kind {:?} has {} points",
                    id,
                    cell_type,
                    ids.len()
                )));
            }
            if let Some(&bad) = ids.iter().find(|&&p| p >= num_points) {
                return Err(Error::InvalidData(format!(
                    "cell {} uses point {} of {}",
                    id, bad, num_points
                )));
            }
        }
        Ok(())
    }

    pub fn squeeze(&mut self) {
        self.types.shrink_to_fit();
        self.offsets.shrink_to_fit();
        self.connectivity.shrink_to_fit();
    }
}
