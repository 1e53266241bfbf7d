//! Point and cell attribute containers.

use crate::array::DataArray;
use crate::scalars::ScalarType;
use serde::{Deserialize, Serialize};

/// Named arrays attached to the points or the cells of a dataset, with the
/// names of the arrays playing the scalar, vector, normal and gradient roles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeData {
    arrays: Vec<DataArray>,
    pub active_scalars: Option<String>,
    pub active_vectors: Option<String>,
    pub active_normals: Option<String>,
    pub active_gradients: Option<String>,
}

impl AttributeData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an array, replacing any array of the same name.
    pub fn add_array(&mut self, array: DataArray) -> usize {
        if let Some(index) = self.arrays.iter().position(|a| a.name == array.name) {
            self.arrays[index] = array;
            index
        } else {
            self.arrays.push(array);
            self.arrays.len() - 1
        }
    }

    pub fn remove_array(&mut self, name: &str) -> Option<DataArray> {
        let index = self.arrays.iter().position(|a| a.name == name)?;
        for role in self.roles_mut() {
            if role.as_deref() == Some(name) {
                *role = None;
            }
        }
        Some(self.arrays.remove(index))
    }

    pub fn array(&self, name: &str) -> Option<&DataArray> {
        self.arrays.iter().find(|a| a.name == name)
    }

    pub fn array_mut(&mut self, name: &str) -> Option<&mut DataArray> {
        self.arrays.iter_mut().find(|a| a.name == name)
    }

    pub fn arrays(&self) -> &[DataArray] {
        &self.arrays
    }

    pub fn number_of_arrays(&self) -> usize {
        self.arrays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Tuple count of the first array, zero without arrays.
    pub fn number_of_tuples(&self) -> usize {
        self.arrays.first().map_or(0, DataArray::num_tuples)
    }

    pub fn set_scalars(&mut self, array: DataArray) {
        self.active_scalars = Some(array.name.clone());
        self.add_array(array);
    }

    pub fn set_normals(&mut self, array: DataArray) {
        self.active_normals = Some(array.name.clone());
        self.add_array(array);
    }

    pub fn scalars(&self) -> Option<&DataArray> {
        self.active_scalars.as_deref().and_then(|name| self.array(name))
    }

    pub fn normals(&self) -> Option<&DataArray> {
        self.active_normals.as_deref().and_then(|name| self.array(name))
    }

    pub fn gradients(&self) -> Option<&DataArray> {
        self.active_gradients.as_deref().and_then(|name| self.array(name))
    }

    fn roles_mut(&mut self) -> [&mut Option<String>; 4] {
        [
            &mut self.active_scalars,
            &mut self.active_vectors,
            &mut self.active_normals,
            &mut self.active_gradients,
        ]
    }

    /// Keeps only the roles whose arrays survived, taking names from `src`.
    fn inherit_roles(&mut self, src: &AttributeData) {
        let keep = |role: &Option<String>, arrays: &[DataArray]| {
            role.as_ref().filter(|name| arrays.iter().any(|a| &a.name == *name)).cloned()
        };
        self.active_scalars = keep(&src.active_scalars, &self.arrays);
        self.active_vectors = keep(&src.active_vectors, &self.arrays);
        self.active_normals = keep(&src.active_normals, &self.arrays);
        self.active_gradients = keep(&src.active_gradients, &self.arrays);
    }

    /// Empty arrays mirroring `src`, leaving out the arrays named in `skip`.
    pub fn interpolate_allocate(src: &AttributeData, skip: &[&str]) -> Self {
        let mut out = Self {
            arrays: src
                .arrays
                .iter()
                .filter(|a| !skip.contains(&a.name.as_str()))
                .map(DataArray::empty_like)
                .collect(),
            ..Self::default()
        };
        out.inherit_roles(src);
        out
    }

    /// Empty arrays mirroring every array of `src`.
    pub fn copy_allocate(src: &AttributeData) -> Self {
        Self::interpolate_allocate(src, &[])
    }

    /// Copies tuple `from` of each matching source array into tuple `to`.
    pub fn copy_data(&mut self, src: &AttributeData, from: usize, to: usize) {
        AttributeMap::new(self, src).copy_data(self, from, to);
    }

    /// Writes `a + t * (b - a)` of each matching source array into tuple `to`.
    pub fn interpolate_edge(&mut self, src: &AttributeData, to: usize, a: usize, b: usize, t: f64) {
        AttributeMap::new(self, src).interpolate_edge(self, to, a, b, t);
    }

    pub fn squeeze(&mut self) {
        for array in &mut self.arrays {
            array.values.shrink_to_fit();
        }
    }
}

/// Output arrays paired by name with their source arrays.
///
/// Resolving the pairs once keeps name lookups out of per-point and
/// per-cell copies.
#[derive(Debug, Clone)]
pub struct AttributeMap<'a> {
    pairs: Vec<(usize, &'a DataArray)>,
}

impl<'a> AttributeMap<'a> {
    /// Pairs each array of `target` with the array of the same name in `source`.
    pub fn new(target: &AttributeData, source: &'a AttributeData) -> Self {
        let pairs = target
            .arrays
            .iter()
            .enumerate()
            .filter_map(|(index, array)| source.array(&array.name).map(|src| (index, src)))
            .collect();
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Copies tuple `from` of every source array into tuple `to` of its target.
    pub fn copy_data(&self, target: &mut AttributeData, from: usize, to: usize) {
        for &(index, source) in &self.pairs {
            if let Some(array) = target.arrays.get_mut(index) {
                let n = array.num_components.min(source.num_components);
                for c in 0..n {
                    array.values.set_f64(to * array.num_components + c, source.component(from, c));
                }
            }
        }
    }

    /// Writes `a + t * (b - a)` of every source array into tuple `to`.
    pub fn interpolate_edge(&self, target: &mut AttributeData, to: usize, a: usize, b: usize, t: f64) {
        for &(index, source) in &self.pairs {
            if let Some(array) = target.arrays.get_mut(index) {
                let n = array.num_components.min(source.num_components);
                for c in 0..n {
                    let va = source.component(a, c);
                    let vb = source.component(b, c);
                    array.values.set_f64(to * array.num_components + c, va + t * (vb - va));
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSpec {
    name: String,
    scalar_type: ScalarType,
    num_components: usize,
}

/// The arrays common to several attribute containers.
///
/// An array takes part only when every container has an array of that name
/// with the same element type and tuple size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList {
    fields: Vec<FieldSpec>,
    initialized: bool,
}

impl FieldList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intersection over all `sources`.
    pub fn intersection<'a>(sources: impl IntoIterator<Item = &'a AttributeData>) -> Self {
        let mut list = Self::new();
        for source in sources {
            list.intersect_with(source);
        }
        list
    }

    /// Narrows the list to the arrays also present in `data`.
    pub fn intersect_with(&mut self, data: &AttributeData) {
        let specs = data.arrays.iter().map(|a| FieldSpec {
            name: a.name.clone(),
            scalar_type: a.scalar_type(),
            num_components: a.num_components,
        });
        if !self.initialized {
            self.fields = specs.collect();
            self.initialized = true;
        } else {
            let present: Vec<FieldSpec> = specs.collect();
            self.fields.retain(|f| present.contains(f));
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Empty container with the listed arrays, roles taken from `roles`.
    pub fn allocate(&self, roles: &AttributeData) -> AttributeData {
        let mut out = AttributeData {
            arrays: self
                .fields
                .iter()
                .map(|f| DataArray::empty(f.name.clone(), f.scalar_type, f.num_components))
                .collect(),
            ..AttributeData::default()
        };
        out.inherit_roles(roles);
        out
    }

    /// Copies one tuple of every listed array from `src` into `dst`.
    pub fn copy_data(&self, dst: &mut AttributeData, src: &AttributeData, from: usize, to: usize) {
        for field in &self.fields {
            if let (Some(source), Some(target)) = (src.array(&field.name), dst.array_mut(&field.name)) {
                target.set_tuple(to, &source.tuple(from));
            }
        }
    }
}
