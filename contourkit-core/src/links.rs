//! Point-to-cell adjacency for neighbour queries.

use crate::dataset::DataSet;

/// For every point, the cells that use it.
#[derive(Debug, Clone, Default)]
pub struct CellLinks {
    cells_of_point: Vec<Vec<usize>>,
}

impl CellLinks {
    pub fn build(dataset: &DataSet) -> Self {
        let mut cells_of_point = vec![Vec::new(); dataset.number_of_points()];
        for cell_id in 0..dataset.number_of_cells() {
            let (_, ids) = dataset.cell(cell_id);
            for id in ids {
                if let Some(cells) = cells_of_point.get_mut(id) {
                    if cells.last() != Some(&cell_id) {
                        cells.push(cell_id);
                    }
                }
            }
        }
        Self { cells_of_point }
    }

    pub fn cells_of_point(&self, point: usize) -> &[usize] {
        self.cells_of_point.get(point).map_or(&[][..], Vec::as_slice)
    }

    /// Cells other than `cell_id` that use every point in `points`.
    pub fn cell_neighbors(&self, cell_id: usize, points: &[usize]) -> Vec<usize> {
        let Some((&first, rest)) = points.split_first() else {
            return Vec::new();
        };
        self.cells_of_point(first)
            .iter()
            .copied()
            .filter(|&candidate| candidate != cell_id)
            .filter(|candidate| rest.iter().all(|&p| self.cells_of_point(p).contains(candidate)))
            .collect()
    }
}
