//! Joining the triangles of one cube into polygons.

/// Merges triangles that share edges into their boundary loops.
///
/// An interior edge is inserted once in each direction and cancels out;
/// the directed edges left over are chained into closed loops that keep the
/// orientation of the triangles. When an edge is used by more than two
/// triangles the set is not a surface patch and no polygons are produced.
#[derive(Debug, Default)]
pub(crate) struct PolygonBuilder {
    edges: Vec<(usize, usize)>,
    uses: Vec<((usize, usize), usize)>,
}

impl PolygonBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self) {
        self.edges.clear();
        self.uses.clear();
    }

    pub(crate) fn insert_triangle(&mut self, ids: [usize; 3]) {
        for e in 0..3 {
            let (a, b) = (ids[e], ids[(e + 1) % 3]);
            let key = (a.min(b), a.max(b));
            match self.uses.iter_mut().find(|(edge, _)| *edge == key) {
                Some((_, count)) => *count += 1,
                None => self.uses.push((key, 1)),
            }
            match self.edges.iter().position(|&edge| edge == (b, a)) {
                Some(pos) => {
                    self.edges.swap_remove(pos);
                }
                None => self.edges.push((a, b)),
            }
        }
    }

    /// Replaces the contents of `out` with the closed boundary loops and
    /// empties the builder's edge set.
    pub(crate) fn polygons(&mut self, out: &mut Vec<Vec<usize>>) {
        out.clear();
        if self.uses.iter().any(|&(_, count)| count > 2) {
            self.edges.clear();
            return;
        }
        while let Some((start, mut next)) = self.edges.pop() {
            let mut polygon = vec![start];
            while next != start {
                polygon.push(next);
                match self.edges.iter().position(|&(from, _)| from == next) {
                    Some(pos) => next = self.edges.swap_remove(pos).1,
                    None => break,
                }
            }
            // Open chains are dropped.
            if next == start && polygon.len() >= 3 {
                out.push(polygon);
            }
        }
    }
}
