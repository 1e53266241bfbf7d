//! Boundary faces of unstructured volumes.
//!
//! Every face of every 3D cell is hashed under its smallest point id. A face
//! seen a second time, in either orientation, is shared by two cells and is
//! hidden; the faces still visible at the end form the boundary.

#[derive(Debug, Clone, PartialEq, Eq)]
struct HashedFace {
    /// Point ids, rotated to start at the smallest one.
    points: Vec<usize>,
    /// Owning cell, `None` once the face turned out to be shared.
    source: Option<usize>,
}

impl HashedFace {
    /// Same polygon as `points` (already rotated), in either orientation.
    fn matches(&self, points: &[usize]) -> bool {
        self.points.len() == points.len()
            && (self.points[1..] == points[1..] || self.points[1..].iter().eq(points[1..].iter().rev()))
    }
}

/// Faces binned by their smallest point id.
#[derive(Debug, Clone, Default)]
pub struct FaceHash {
    bins: Vec<Vec<HashedFace>>,
}

impl FaceHash {
    pub fn new(num_points: usize) -> Self {
        Self { bins: vec![Vec::new(); num_points] }
    }

    /// Records face `points` of cell `source`, hiding it if it is already
    /// known.
    pub fn insert(&mut self, points: &[usize], source: usize) {
        let Some(start) = (0..points.len()).min_by_key(|&i| points[i]) else {
            return;
        };
        let rotated: Vec<usize> = points[start..].iter().chain(&points[..start]).copied().collect();
        let smallest = rotated[0];
        if smallest >= self.bins.len() {
            self.bins.resize(smallest + 1, Vec::new());
        }

        let bin = &mut self.bins[smallest];
        if let Some(face) = bin.iter_mut().find(|face| face.matches(&rotated)) {
            face.source = None;
            return;
        }
        bin.push(HashedFace { points: rotated, source: Some(source) });
    }

    /// Faces seen exactly once, as `(points, source cell)`, ordered by
    /// smallest point id and then by insertion.
    pub fn visible_faces(&self) -> impl Iterator<Item = (&[usize], usize)> + '_ {
        self.bins
            .iter()
            .flatten()
            .filter_map(|face| face.source.map(|source| (face.points.as_slice(), source)))
    }
}
