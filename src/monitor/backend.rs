use crate::par_slice;

/// The three dense vector primitives the delegated strategy needs.
/// Calls are strictly sequenced within one run,
/// implementations are free to parallelize inside each call.
///
/// Callers must check `is_available` before using the primitives.
/// Implementations panic when a primitive is called on an unusable handle.
pub trait ReductionBackend: Sync {
    /// Whether the handle is initialized and usable.
    fn is_available(&self) -> bool;

    /// y := x
    fn copy(&self, x: &[f64], y: &mut [f64]);

    /// y := y + alpha * x
    fn axpy(&self, alpha: f64, x: &[f64], y: &mut [f64]);

    /// 0-based index of the first element with the largest magnitude,
    /// `None` for an empty vector.
    fn iamax(&self, x: &[f64]) -> Option<usize>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum HandleState {
    Uninitialized,
    Created,
    Destroyed,
}

/// Host side BLAS-like handle backed by the rayon slice kernels.
/// Created and destroyed by the caller, borrowed by the solver for a run.
#[derive(Debug)]
pub struct HostBlas {
    chunk_size: usize,
    state: HandleState,
}

impl HostBlas {
    pub fn create(chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0);
        tracing::debug!(chunk_size, "host reduction handle created");
        HostBlas {
            chunk_size,
            state: HandleState::Created,
        }
    }

    /// A handle that was never created, unusable until `init`.
    pub fn uninitialized() -> Self {
        HostBlas {
            chunk_size: 1,
            state: HandleState::Uninitialized,
        }
    }

    pub fn init(&mut self, chunk_size: usize) {
        debug_assert!(chunk_size > 0);
        self.chunk_size = chunk_size;
        self.state = HandleState::Created;
    }

    #[track_caller]
    fn ensure_available(&self) {
        assert!(
            self.is_available(),
            "reduction handle used while {:?}",
            self.state
        );
    }

    pub fn destroy(&mut self) {
        if self.state == HandleState::Created {
            tracing::debug!("host reduction handle destroyed");
        }
        self.state = HandleState::Destroyed;
    }
}

impl ReductionBackend for HostBlas {
    fn is_available(&self) -> bool {
        self.state == HandleState::Created
    }

    fn copy(&self, x: &[f64], y: &mut [f64]) {
        self.ensure_available();
        par_slice::copy(x, y, self.chunk_size);
    }

    fn axpy(&self, alpha: f64, x: &[f64], y: &mut [f64]) {
        self.ensure_available();
        par_slice::axpy(alpha, x, y, self.chunk_size);
    }

    fn iamax(&self, x: &[f64]) -> Option<usize> {
        self.ensure_available();
        par_slice::iamax(x, self.chunk_size)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn lifecycle() {
        let mut h = HostBlas::uninitialized();
        assert!(!h.is_available());
        h.init(16);
        assert!(h.is_available());
        h.destroy();
        assert!(!h.is_available());

        let mut h = HostBlas::create(4);
        assert!(h.is_available());
        h.destroy();
        assert!(!h.is_available());
    }

    #[test]
    fn primitives() {
        let h = HostBlas::create(2);
        let x = [3.0, -1.0, 4.0, -1.5, 5.0];
        let mut y = [0.0; 5];
        h.copy(&x, &mut y);
        assert_eq!(x, y);
        h.axpy(-1.0, &[3.0, -1.0, 4.0, -9.5, 5.0], &mut y);
        assert_eq!(y, [0.0, 0.0, 0.0, 8.0, 0.0]);
        assert_eq!(h.iamax(&y), Some(3));
        assert_eq!(h.iamax(&[]), None);
    }

    #[test]
    #[should_panic(expected = "Destroyed")]
    fn destroyed_handle_panics() {
        let mut h = HostBlas::create(4);
        h.destroy();
        let mut y = [0.0; 3];
        h.copy(&[1.0, 2.0, 3.0], &mut y);
    }

    #[test]
    #[should_panic(expected = "Uninitialized")]
    fn uninitialized_handle_panics() {
        let h = HostBlas::uninitialized();
        h.iamax(&[1.0]);
    }
}
