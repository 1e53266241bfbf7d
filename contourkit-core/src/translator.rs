//! Splitting an extent into pieces for threads.

use crate::extent::Extent;
use serde::{Deserialize, Serialize};

/// Maps a piece index to the sub-extent it owns.
///
/// Implementations must be pure functions of their arguments so that the
/// same request always yields the same partition.
pub trait ExtentTranslator: Send + Sync {
    /// Sub-extent of `piece` out of `num_pieces`, grown by `ghost_level`
    /// inside `whole`. `None` when the piece receives no points.
    fn piece_to_extent(
        &self,
        piece: usize,
        num_pieces: usize,
        ghost_level: i32,
        whole: &Extent,
    ) -> Option<Extent>;
}

/// Preferred axis when bisecting an extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitMode {
    XSlab,
    YSlab,
    ZSlab,
    /// Always split the longest axis, preferring z, then y, then x.
    Block,
}

impl SplitMode {
    fn axis(self) -> Option<usize> {
        match self {
            SplitMode::XSlab => Some(0),
            SplitMode::YSlab => Some(1),
            SplitMode::ZSlab => Some(2),
            SplitMode::Block => None,
        }
    }
}

/// Recursive bisection of the whole extent.
///
/// Each round halves the remaining piece count and cuts the chosen axis at
/// the proportional cell boundary. The two halves share the points on the
/// cut, so neighbouring pieces overlap by one layer of points and no cell
/// is lost or counted twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockExtentTranslator {
    pub split_mode: SplitMode,
}

impl BlockExtentTranslator {
    pub fn new(split_mode: SplitMode) -> Self {
        Self { split_mode }
    }

    fn choose_axis(&self, sizes: [i64; 3]) -> Option<usize> {
        if let Some(axis) = self.split_mode.axis() {
            if sizes[axis] > 1 {
                return Some(axis);
            }
        }
        if sizes[2] >= sizes[1] && sizes[2] >= sizes[0] && sizes[2] / 2 >= 1 {
            Some(2)
        } else if sizes[1] >= sizes[0] && sizes[1] / 2 >= 1 {
            Some(1)
        } else if sizes[0] / 2 >= 1 {
            Some(0)
        } else {
            None
        }
    }

    /// Bisects `ext` down to the part owned by `piece`.
    pub fn split_extent(&self, piece: usize, num_pieces: usize, ext: &Extent) -> Option<Extent> {
        if piece >= num_pieces {
            return None;
        }
        let mut ext = ext.0;
        let mut piece = piece;
        let mut num_pieces = num_pieces;

        while num_pieces > 1 {
            let sizes = [
                (ext[1] - ext[0]) as i64,
                (ext[3] - ext[2]) as i64,
                (ext[5] - ext[4]) as i64,
            ];
            match self.choose_axis(sizes) {
                None => {
                    // Nothing left to cut: the first piece keeps the rest.
                    if piece == 0 {
                        num_pieces = 1;
                    } else {
                        return None;
                    }
                }
                Some(axis) => {
                    let first_half = num_pieces / 2;
                    let mid = (sizes[axis] * first_half as i64 / num_pieces as i64
                        + ext[axis * 2] as i64) as i32;
                    if piece < first_half {
                        ext[axis * 2 + 1] = mid;
                        num_pieces = first_half;
                    } else {
                        ext[axis * 2] = mid;
                        num_pieces -= first_half;
                        piece -= first_half;
                    }
                }
            }
        }
        Some(Extent(ext))
    }
}

impl Default for BlockExtentTranslator {
    fn default() -> Self {
        Self::new(SplitMode::Block)
    }
}

impl ExtentTranslator for BlockExtentTranslator {
    fn piece_to_extent(
        &self,
        piece: usize,
        num_pieces: usize,
        ghost_level: i32,
        whole: &Extent,
    ) -> Option<Extent> {
        if whole.is_empty() {
            return None;
        }
        let ext = self.split_extent(piece, num_pieces, whole)?;
        if ghost_level > 0 {
            Some(ext.grow_clamped(ghost_level, whole))
        } else {
            Some(ext)
        }
    }
}
