use super::*;
use crate::error::{Error, Result};

/// Measures the error through a borrowed `ReductionBackend`:
/// copy a into scratch, scratch -= b, find the index of the largest
/// magnitude and read back that single value.
pub struct DelegatedMonitor<'a, B: ReductionBackend + ?Sized> {
    backend: &'a B,
    scratch: Vec<f64>,
}

impl<'a, B: ReductionBackend + ?Sized> DelegatedMonitor<'a, B> {
    /// Fails with `BackendUnavailable` if the handle is not usable.
    /// There is no fallback, callers pick `DirectMonitor` explicitly.
    pub fn new(backend: &'a B) -> Result<Self> {
        if !backend.is_available() {
            return Err(Error::BackendUnavailable(
                "reduction handle is not initialized".to_string(),
            ));
        }
        Ok(DelegatedMonitor {
            backend,
            scratch: Vec::new(),
        })
    }
}

impl<B: ReductionBackend + ?Sized> ConvergenceMonitor for DelegatedMonitor<'_, B> {
    fn measure(&mut self, a: &Grid, b: &Grid) -> f64 {
        profiling::scope!("DelegatedMonitor::measure");
        debug_assert_eq!(a.bounds(), b.bounds());
        let n = a.buffer().len();
        self.scratch.resize(n, 0.0);

        self.backend.copy(a.buffer(), &mut self.scratch);
        self.backend.axpy(-1.0, b.buffer(), &mut self.scratch);
        match self.backend.iamax(&self.scratch) {
            Some(index) => self.scratch[index].abs(),
            None => 0.0,
        }
    }
}
