//! Joining per-thread fragments into one mesh.

use contourkit_core::{AttributeMap, CellArray, FieldList, PolyData};

/// Appends `fragments` in order, shifting each fragment's point ids by the
/// number of points before it.
///
/// Fragments without points are dropped. Only the point and cell arrays
/// present in every remaining fragment survive.
pub fn merge_fragments(fragments: Vec<PolyData>) -> PolyData {
    let mut fragments: Vec<PolyData> = fragments.into_iter().filter(|f| f.number_of_points() > 0).collect();
    match fragments.len() {
        0 => return PolyData::new(),
        1 => return fragments.remove(0),
        _ => {}
    }

    let point_fields = FieldList::intersection(fragments.iter().map(|f| &f.point_data));
    let cell_fields = FieldList::intersection(fragments.iter().map(|f| &f.cell_data));
    let num_points: usize = fragments.iter().map(PolyData::number_of_points).sum();
    let num_cells: usize = fragments.iter().map(PolyData::number_of_cells).sum();
    let num_ids: usize = fragments.iter().map(|f| f.cells.connectivity_len()).sum();

    let mut out = PolyData {
        points: Vec::with_capacity(num_points),
        cells: CellArray::with_capacity(num_cells, num_ids),
        point_data: point_fields.allocate(&fragments[0].point_data),
        cell_data: cell_fields.allocate(&fragments[0].cell_data),
    };

    let mut ids = Vec::new();
    for fragment in fragments {
        let offset = out.number_of_points();
        let point_map = AttributeMap::new(&out.point_data, &fragment.point_data);
        let cell_map = AttributeMap::new(&out.cell_data, &fragment.cell_data);
        for (id, point) in fragment.points.iter().enumerate() {
            let new_id = out.insert_next_point(*point);
            point_map.copy_data(&mut out.point_data, id, new_id);
        }
        for (cell_id, (cell_type, cell_points)) in fragment.cells.iter().enumerate() {
            ids.clear();
            ids.extend(cell_points.iter().map(|&p| p + offset));
            let new_id = out.insert_next_cell(cell_type, &ids);
            cell_map.copy_data(&mut out.cell_data, cell_id, new_id);
        }
    }
    log::debug!(
        "merged fragments into {} points and {} cells",
        out.number_of_points(),
        out.number_of_cells()
    );
    out
}
