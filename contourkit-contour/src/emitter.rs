//! Output point creation shared by the 2D and 3D sweeps.

use crate::config::ContourOptions;
use crate::field::ScalarField;
use crate::lattice::Lattice;
use contourkit_core::{AttributeData, AttributeMap, CellType, DataArray, PolyData, Scalar};

pub const SCALARS_NAME: &str = "Scalars";
pub const GRADIENTS_NAME: &str = "Gradients";
pub const NORMALS_NAME: &str = "Normals";

/// Appends crossing points to an output mesh together with their
/// interpolated attributes and, when asked, the iso-value, the blended
/// gradient and the normal.
pub(crate) struct PointEmitter<'a, T, L> {
    lattice: &'a L,
    field: &'a ScalarField<'a, T>,
    point_map: AttributeMap<'a>,
    cell_map: AttributeMap<'a>,
    pub(crate) out: PolyData,
    scalars: Option<Vec<f32>>,
    gradients: Option<Vec<f32>>,
    normals: Option<Vec<f32>>,
    n0: [f64; 3],
    n1: [f64; 3],
    have_n0: bool,
}

impl<'a, T: Scalar, L: Lattice> PointEmitter<'a, T, L> {
    pub(crate) fn new(
        lattice: &'a L,
        field: &'a ScalarField<'a, T>,
        in_pd: &'a AttributeData,
        in_cd: &'a AttributeData,
        options: &ContourOptions,
        with_gradients: bool,
    ) -> Self {
        let mut skip: Vec<&str> = options.skip_point_array.iter().map(String::as_str).collect();
        if options.compute_scalars {
            skip.push(SCALARS_NAME);
        }
        let gradients = with_gradients && options.compute_gradients;
        let normals = with_gradients && options.compute_normals;
        if gradients {
            skip.push(GRADIENTS_NAME);
        }
        if normals {
            skip.push(NORMALS_NAME);
        }

        let mut out = PolyData::new();
        out.point_data = AttributeData::interpolate_allocate(in_pd, &skip);
        out.cell_data = AttributeData::copy_allocate(in_cd);
        Self {
            lattice,
            field,
            point_map: AttributeMap::new(&out.point_data, in_pd),
            cell_map: AttributeMap::new(&out.cell_data, in_cd),
            out,
            scalars: options.compute_scalars.then(Vec::new),
            gradients: gradients.then(Vec::new),
            normals: normals.then(Vec::new),
            n0: [0.0; 3],
            n1: [0.0; 3],
            have_n0: false,
        }
    }

    /// Forgets the cached gradient of the sweep's current lattice point.
    #[inline]
    pub(crate) fn begin_point(&mut self) {
        self.have_n0 = false;
    }

    fn needs_gradients(&self) -> bool {
        self.gradients.is_some() || self.normals.is_some()
    }

    /// Inserts the crossing of `value` on the edge from `ijk` along `axis`,
    /// whose end samples are `s0` and `s1`, and returns the new point id.
    pub(crate) fn edge_point(&mut self, value: f64, ijk: [i32; 3], axis: usize, s0: f64, s1: f64) -> usize {
        let t = (value - s0) / (s1 - s0);
        let id = self.out.insert_next_point(self.lattice.edge_point(ijk, axis, t));
        let mut end = ijk;
        end[axis] += 1;

        if self.needs_gradients() {
            if !self.have_n0 {
                self.lattice.gradient(self.field, ijk, &mut self.n0);
                self.have_n0 = true;
            }
            self.lattice.gradient(self.field, end, &mut self.n1);
            let mut n = [0.0; 3];
            for c in 0..3 {
                n[c] = self.n0[c] + t * (self.n1[c] - self.n0[c]);
            }
            if let Some(gradients) = &mut self.gradients {
                gradients.extend(n.iter().map(|&c| c as f32));
            }
            if let Some(normals) = &mut self.normals {
                let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
                if length != 0.0 {
                    for c in &mut n {
                        *c /= length;
                    }
                }
                normals.extend(n.iter().map(|&c| -c as f32));
            }
        }
        if let Some(scalars) = &mut self.scalars {
            scalars.push(value as f32);
        }

        let extent = self.field.extent();
        self.point_map
            .interpolate_edge(&mut self.out.point_data, id, extent.point_id(ijk), extent.point_id(end), t);
        id
    }

    /// Appends a cell and copies the data of input cell `source` onto it.
    pub(crate) fn insert_cell(&mut self, cell_type: CellType, ids: &[usize], source: usize) -> usize {
        let out_id = self.out.insert_next_cell(cell_type, ids);
        self.cell_map.copy_data(&mut self.out.cell_data, source, out_id);
        out_id
    }

    /// Attaches the computed arrays and hands back the mesh.
    pub(crate) fn finish(mut self) -> PolyData {
        if let Some(scalars) = self.scalars.take() {
            self.out.point_data.set_scalars(DataArray::from_scalars(SCALARS_NAME, scalars));
        }
        if let Some(gradients) = self.gradients.take() {
            let array = DataArray { name: GRADIENTS_NAME.to_string(), num_components: 3, values: gradients.into() };
            self.out.point_data.active_gradients = Some(GRADIENTS_NAME.to_string());
            self.out.point_data.add_array(array);
        }
        if let Some(normals) = self.normals.take() {
            let array = DataArray { name: NORMALS_NAME.to_string(), num_components: 3, values: normals.into() };
            self.out.point_data.set_normals(array);
        }
        self.out.squeeze();
        self.out
    }
}
