//! Rolling buffers of edge-intersection point ids.

use crate::tables::{CASE_START, CASE_TRIANGLES, END_OF_CASE};

/// Marks an edge without a crossing at the current iso-value.
pub const NO_INTERSECTION: i64 = -1;

/// Two z-slabs of edge-intersection ids, three edges (x, y, z) per point.
///
/// The slab being filled for slice `k` is the current slab; the slab of
/// slice `k - 1` is the previous one. Every cube between the two slices is
/// resolved through `offsets`, measured from a point's entry in the
/// previous slab. Slots `0..8` stay inside the previous slab and slots
/// `8..12` reach the current slab, so they are rewritten whenever the two
/// slabs swap roles.
#[derive(Debug, Clone)]
pub struct IntersectionSlabs {
    ids: Vec<i64>,
    slab_len: usize,
    row: usize,
    offsets: [isize; 12],
    previous: usize,
    current: usize,
}

impl IntersectionSlabs {
    /// Buffers for an `xdim` by `ydim` slice, every entry starting as
    /// [`NO_INTERSECTION`] so reads past the far row or column find nothing.
    pub fn new(xdim: usize, ydim: usize) -> Self {
        let slab_len = xdim * ydim * 3;
        let r = (xdim * 3) as isize;
        let mut offsets = [0isize; 12];
        offsets[..8].copy_from_slice(&[-r, -r + 1, -r + 2, -r + 4, -r + 5, 0, 2, 5]);
        Self {
            ids: vec![NO_INTERSECTION; slab_len * 2],
            slab_len,
            row: xdim * 3,
            offsets,
            previous: 0,
            current: slab_len,
        }
    }

    /// Swaps slab roles for slice `k`.
    pub fn begin_slice(&mut self, k: i32) {
        let zstep = (self.slab_len / 3) as isize;
        let xdim = (self.row / 3) as isize;
        let sign = if k % 2 != 0 { 1 } else { -1 };
        self.offsets[8] = (sign * zstep - xdim) * 3;
        self.offsets[9] = self.offsets[8] + 1;
        self.offsets[10] = self.offsets[8] + 4;
        self.offsets[11] = sign * zstep * 3;
        if sign > 0 {
            self.previous = 0;
            self.current = self.slab_len;
        } else {
            self.previous = self.slab_len;
            self.current = 0;
        }
    }

    /// Entry of the first point of the slice in the previous slab.
    pub fn previous(&self) -> usize {
        self.previous
    }

    /// Entry of the first point of the slice in the current slab.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Distance between the same edge of two consecutive rows.
    pub fn row_step(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn get(&self, at: usize) -> i64 {
        self.ids[at]
    }

    #[inline]
    pub fn has(&self, at: usize) -> bool {
        self.ids[at] > NO_INTERSECTION
    }

    #[inline]
    pub fn set(&mut self, at: usize, id: i64) {
        self.ids[at] = id;
    }

    /// Clears the three edges of the point at `at`.
    #[inline]
    pub fn clear_point(&mut self, at: usize) {
        self.ids[at..at + 3].fill(NO_INTERSECTION);
    }

    /// Case index of the cube whose +x, +y, +z corner is the point at
    /// `current` and whose other edges were recorded earlier.
    #[inline]
    pub fn case_index(&self, above: bool, previous: usize, current: usize) -> usize {
        let r = self.row;
        let bit = |at: usize, value: usize| if self.has(at) { value } else { 0 };
        (if above { 4096 } else { 0 })
            + bit(previous - r, 2048)
            + bit(previous - r + 1, 1024)
            + bit(previous - r + 2, 512)
            + bit(previous - r + 4, 256)
            + bit(previous - r + 5, 128)
            + bit(previous, 64)
            + bit(previous + 2, 32)
            + bit(previous + 5, 16)
            + bit(current - r, 8)
            + bit(current - r + 1, 4)
            + bit(current - r + 4, 2)
            + bit(current, 1)
    }

    /// Point-id triples of the triangles of `case`, resolved from the
    /// previous-slab entry `previous`.
    pub fn triangles(&self, case: usize, previous: usize) -> impl Iterator<Item = [i64; 3]> + '_ {
        let start = CASE_START[case] as usize;
        let run = CASE_TRIANGLES[start..]
            .iter()
            .position(|&slot| slot == END_OF_CASE)
            .unwrap_or(0);
        CASE_TRIANGLES[start..start + run].chunks_exact(3).map(move |slots| {
            let resolve = |slot: i8| self.ids[(previous as isize + self.offsets[slot as usize]) as usize];
            [resolve(slots[0]), resolve(slots[1]), resolve(slots[2])]
        })
    }
}

/// Two rows of edge-intersection ids for the 2D sweep, two edges per point
/// (along the first and the second in-plane axis).
#[derive(Debug, Clone)]
pub struct IntersectionRows {
    ids: Vec<i64>,
    row_len: usize,
    previous: usize,
    current: usize,
}

impl IntersectionRows {
    pub fn new(points_per_row: usize) -> Self {
        let row_len = points_per_row * 2;
        Self { ids: vec![NO_INTERSECTION; row_len * 2], row_len, previous: row_len, current: 0 }
    }

    /// Swaps row roles for row `r`.
    pub fn begin_row(&mut self, r: usize) {
        if r % 2 == 0 {
            self.current = 0;
            self.previous = self.row_len;
        } else {
            self.current = self.row_len;
            self.previous = 0;
        }
    }

    pub fn previous(&self) -> usize {
        self.previous
    }

    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn get(&self, at: usize) -> i64 {
        self.ids[at]
    }

    #[inline]
    pub fn set(&mut self, at: usize, id: i64) {
        self.ids[at] = id;
    }

    #[inline]
    pub fn clear_point(&mut self, at: usize) {
        self.ids[at] = NO_INTERSECTION;
        self.ids[at + 1] = NO_INTERSECTION;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slab_roles_alternate() {
        let mut slabs = IntersectionSlabs::new(3, 2);
        slabs.begin_slice(1);
        assert_eq!((slabs.previous(), slabs.current()), (0, 18));
        slabs.begin_slice(2);
        assert_eq!((slabs.previous(), slabs.current()), (18, 0));
        slabs.begin_slice(-1);
        assert_eq!(slabs.previous(), 0);
    }

    #[test]
    fn test_z_offsets_reach_current_slab() {
        let mut slabs = IntersectionSlabs::new(3, 2);
        slabs.begin_slice(1);
        // Point (1, 1) of the slice: previous slab entry 12, current 30.
        let previous = 12;
        slabs.set(30 + 2, 99);
        assert_eq!(previous as isize + slabs.offsets[11], 30);
        assert_eq!((previous as isize + slabs.offsets[8]) as usize, 30 - 9);
        slabs.begin_slice(2);
        let previous = 18 + 12;
        assert_eq!(previous as isize + slabs.offsets[11], 12);
        assert_eq!(slabs.get(32), 99);
    }

    #[test]
    fn test_empty_cube_has_no_triangles() {
        let mut slabs = IntersectionSlabs::new(2, 2);
        slabs.begin_slice(1);
        let case = slabs.case_index(true, 6, 18);
        assert_eq!(case, 4096);
        assert_eq!(slabs.triangles(case, 6).count(), 0);
    }

    #[test]
    fn test_rows_alternate() {
        let mut rows = IntersectionRows::new(4);
        rows.begin_row(0);
        rows.set(rows.current() + 2, 5);
        rows.begin_row(1);
        assert_eq!(rows.get(rows.previous() + 2), 5);
        rows.clear_point(rows.current());
        assert_eq!(rows.get(rows.current()), NO_INTERSECTION);
    }
}
