//! Output assembly shared by the surface extractors.

use crate::config::SurfaceConfig;
use contourkit_core::{AttributeData, AttributeMap, CellType, DataArray, DataSet, PolyData};

/// A mesh being copied out of `input`, one point and one cell at a time,
/// with the optional original-id arrays recorded in step.
pub(crate) struct SurfaceBuilder<'a> {
    input: &'a DataSet,
    point_map: AttributeMap<'a>,
    cell_map: AttributeMap<'a>,
    pub(crate) out: PolyData,
    point_ids: Option<Vec<u32>>,
    cell_ids: Option<Vec<u32>>,
}

impl<'a> SurfaceBuilder<'a> {
    /// Without `copy_cell_data` the output gets no cell arrays and no cell
    /// ids.
    pub(crate) fn new(input: &'a DataSet, config: &SurfaceConfig, copy_cell_data: bool) -> Self {
        let mut out = PolyData::new();
        out.point_data = AttributeData::copy_allocate(input.point_data());
        if copy_cell_data {
            out.cell_data = AttributeData::copy_allocate(input.cell_data());
        }
        Self {
            input,
            point_map: AttributeMap::new(&out.point_data, input.point_data()),
            cell_map: AttributeMap::new(&out.cell_data, input.cell_data()),
            out,
            point_ids: config.pass_through_point_ids.then(Vec::new),
            cell_ids: (copy_cell_data && config.pass_through_cell_ids).then(Vec::new),
        }
    }

    pub(crate) fn input(&self) -> &'a DataSet {
        self.input
    }

    /// Copies input point `id` and its point data; returns the output id.
    pub(crate) fn copy_point(&mut self, id: usize) -> usize {
        let out_id = self.out.insert_next_point(self.input.point(id));
        self.point_map.copy_data(&mut self.out.point_data, id, out_id);
        if let Some(ids) = &mut self.point_ids {
            ids.push(id as u32);
        }
        out_id
    }

    /// Adds a cell over output points `ids`, copying the cell data of input
    /// cell `source` when there is one.
    pub(crate) fn insert_cell(&mut self, cell_type: CellType, ids: &[usize], source: Option<usize>) -> usize {
        let out_id = self.out.insert_next_cell(cell_type, ids);
        if let Some(source) = source {
            self.cell_map.copy_data(&mut self.out.cell_data, source, out_id);
            if let Some(cell_ids) = &mut self.cell_ids {
                cell_ids.push(source as u32);
            }
        }
        out_id
    }

    pub(crate) fn finish(mut self, config: &SurfaceConfig) -> PolyData {
        if let Some(ids) = self.point_ids.take() {
            self.out
                .point_data
                .add_array(DataArray::from_scalars(config.original_point_ids_name.clone(), ids));
        }
        if let Some(ids) = self.cell_ids.take() {
            self.out
                .cell_data
                .add_array(DataArray::from_scalars(config.original_cell_ids_name.clone(), ids));
        }
        self.out.squeeze();
        self.out
    }
}
