//! Thread pool set-up and piecewise execution.
//!
//! A threaded run splits the execution extent into one piece per thread,
//! contours every piece into its own fragment on a dedicated rayon pool and
//! merges the fragments in piece order, so the result does not depend on
//! which thread finishes first.

use crate::merge::merge_fragments;
use contourkit_core::{Error, Extent, ExtentTranslator, PolyData, Result};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of worker threads.
pub const MAX_THREADS: usize = 64;

/// Hardware concurrency, clamped to `1..=MAX_THREADS`.
pub fn default_thread_count() -> usize {
    num_cpus::get().clamp(1, MAX_THREADS)
}

/// Thread pool configuration for parallel processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadPoolConfig {
    /// Number of threads to use (None = hardware concurrency)
    pub num_threads: Option<usize>,
    /// Thread stack size in bytes
    pub stack_size: Option<usize>,
    /// Thread name prefix
    pub thread_name_prefix: String,
    /// Enable parallel processing (can be disabled for debugging)
    pub enabled: bool,
}

impl Default for ThreadPoolConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            stack_size: None,
            thread_name_prefix: "contourkit".to_string(),
            enabled: true,
        }
    }
}

impl ThreadPoolConfig {
    /// Set number of threads
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Set stack size
    pub fn with_stack_size(mut self, stack_size: usize) -> Self {
        self.stack_size = Some(stack_size);
        self
    }

    pub fn with_thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Enable or disable parallel processing
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Threads a run will use; one when parallelism is disabled.
    pub fn effective_threads(&self) -> usize {
        if !self.enabled {
            return 1;
        }
        self.num_threads.unwrap_or_else(default_thread_count).clamp(1, MAX_THREADS)
    }

    pub fn build_pool(&self) -> Result<ThreadPool> {
        let mut builder = ThreadPoolBuilder::new().num_threads(self.effective_threads());

        if let Some(stack_size) = self.stack_size {
            builder = builder.stack_size(stack_size);
        }

        if !self.thread_name_prefix.is_empty() {
            let prefix = self.thread_name_prefix.clone();
            builder = builder.thread_name(move |index| format!("{}-{}", prefix, index));
        }

        builder
            .build()
            .map_err(|e| Error::Algorithm(format!("Failed to create thread pool: {}", e)))
    }
}

/// Runs `body` over `whole`, split into one piece per thread.
///
/// With a single thread `body` runs on the calling thread over `whole` and
/// its result is returned untouched. Otherwise `translator` assigns each
/// piece its extent; without a translator only the first piece runs, over
/// the whole extent. A piece whose body fails contributes nothing and the
/// failure is logged.
pub fn execute_pieces<F>(
    config: &ThreadPoolConfig,
    whole: &Extent,
    translator: Option<&dyn ExtentTranslator>,
    body: F,
) -> Result<PolyData>
where
    F: Fn(&Extent) -> Result<PolyData> + Sync,
{
    let num_pieces = config.effective_threads();
    if num_pieces <= 1 {
        return body(whole);
    }

    let pool = config.build_pool()?;
    log::debug!("splitting {} into {} pieces", whole, num_pieces);
    let fragments: Vec<PolyData> = pool.install(|| {
        (0..num_pieces)
            .into_par_iter()
            .map(|piece| run_piece(piece, num_pieces, whole, translator, &body))
            .collect()
    });
    Ok(merge_fragments(fragments))
}

fn run_piece<F>(
    piece: usize,
    num_pieces: usize,
    whole: &Extent,
    translator: Option<&dyn ExtentTranslator>,
    body: &F,
) -> PolyData
where
    F: Fn(&Extent) -> Result<PolyData> + Sync,
{
    let extent = match translator {
        Some(translator) => translator.piece_to_extent(piece, num_pieces, 0, whole),
        None if piece == 0 => Some(*whole),
        None => None,
    };
    let Some(extent) = extent else {
        return PolyData::new();
    };
    match body(&extent) {
        Ok(fragment) => fragment,
        Err(e) => {
            log::error!("piece {} of {} over {} failed: {}", piece, num_pieces, extent, e);
            PolyData::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contourkit_core::{BlockExtentTranslator, CellType, Point3d};

    /// One vertex per piece at the piece's minimum corner.
    fn corner(extent: &Extent) -> Result<PolyData> {
        let mut poly = PolyData::new();
        let id = poly.insert_next_point(Point3d::new(
            extent.min(0) as f64,
            extent.min(1) as f64,
            extent.min(2) as f64,
        ));
        poly.insert_next_cell(CellType::Vertex, &[id]);
        Ok(poly)
    }

    #[test]
    fn test_single_thread_runs_inline() {
        let config = ThreadPoolConfig::default().with_threads(1);
        let whole = Extent::new(0, 4, 0, 4, 0, 4);
        let out = execute_pieces(&config, &whole, None, corner).unwrap();
        assert_eq!(out.number_of_points(), 1);
    }

    #[test]
    fn test_pieces_merge_in_order() {
        let config = ThreadPoolConfig::default().with_threads(4);
        let whole = Extent::new(0, 7, 0, 3, 0, 3);
        let translator = BlockExtentTranslator::default();
        let out = execute_pieces(&config, &whole, Some(&translator), corner).unwrap();
        let xs: Vec<f64> = out.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 0.0, 3.0, 3.0]);
        assert_eq!(out.cells.cell_points(3), &[3]);
    }

    #[test]
    fn test_no_translator_runs_first_piece_only() {
        let config = ThreadPoolConfig::default().with_threads(3);
        let whole = Extent::new(0, 7, 0, 7, 0, 7);
        let out = execute_pieces(&config, &whole, None, corner).unwrap();
        assert_eq!(out.number_of_points(), 1);
    }

    #[test]
    fn test_failed_piece_contributes_nothing() {
        let config = ThreadPoolConfig::default().with_threads(2);
        let whole = Extent::new(0, 3, 0, 3, 0, 3);
        let translator = BlockExtentTranslator::default();
        let out = execute_pieces(&config, &whole, Some(&translator), |extent| {
            if extent.min(2) > 0 {
                Err(Error::Algorithm("boom".to_string()))
            } else {
                corner(extent)
            }
        })
        .unwrap();
        assert_eq!(out.number_of_points(), 1);
    }

    #[test]
    fn test_disabled_pool_is_single_threaded() {
        let config = ThreadPoolConfig::default().with_threads(8).with_enabled(false);
        assert_eq!(config.effective_threads(), 1);
        assert!(ThreadPoolConfig::default().with_threads(2).build_pool().is_ok());
    }
}
