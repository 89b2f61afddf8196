use super::*;
use crate::par_slice;

/// Parallel max-reduction of |a - b|.
#[derive(Copy, Clone, Debug)]
pub struct DirectMonitor {
    chunk_size: usize,
}

impl DirectMonitor {
    pub fn new(chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0);
        DirectMonitor { chunk_size }
    }
}

impl ConvergenceMonitor for DirectMonitor {
    fn measure(&mut self, a: &Grid, b: &Grid) -> f64 {
        profiling::scope!("DirectMonitor::measure");
        debug_assert_eq!(a.bounds(), b.bounds());
        par_slice::max_abs_diff(a.buffer(), b.buffer(), self.chunk_size)
    }
}
