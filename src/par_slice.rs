//! Chunked data-parallel slice kernels.
//! `chunk_size` breaks the work into tasks for multi-threading.

use rayon::prelude::*;

/// Sets each element to the same value.
pub fn set_value(a_slice: &mut [f64], value: f64, chunk_size: usize) {
    a_slice
        .par_chunks_mut(chunk_size)
        .for_each(|a_chunk: &mut [f64]| {
            for a in a_chunk {
                *a = value;
            }
        });
}

/// y := x
pub fn copy(x_slice: &[f64], y_slice: &mut [f64], chunk_size: usize) {
    debug_assert_eq!(x_slice.len(), y_slice.len());
    y_slice
        .par_chunks_mut(chunk_size)
        .zip(x_slice.par_chunks(chunk_size))
        .for_each(|(y_chunk, x_chunk)| {
            y_chunk.copy_from_slice(x_chunk);
        });
}

/// y := y + alpha * x
pub fn axpy(
    alpha: f64,
    x_slice: &[f64],
    y_slice: &mut [f64],
    chunk_size: usize,
) {
    debug_assert_eq!(x_slice.len(), y_slice.len());
    y_slice
        .par_chunks_mut(chunk_size)
        .zip(x_slice.par_chunks(chunk_size))
        .for_each(|(y_chunk, x_chunk)| {
            for (y, x) in y_chunk.iter_mut().zip(x_chunk) {
                *y += alpha * *x;
            }
        });
}

/// Magnitude ordering used by `iamax`: NaN ranks above every number,
/// the first NaN is never displaced.
#[inline]
fn magnitude_exceeds(m: f64, best: f64) -> bool {
    !best.is_nan() && (m.is_nan() || m > best)
}

/// Index of the first element with the largest absolute value,
/// `None` for an empty slice.
/// A NaN element counts as the largest, so it is never hidden.
pub fn iamax(x_slice: &[f64], chunk_size: usize) -> Option<usize> {
    x_slice
        .par_chunks(chunk_size)
        .enumerate()
        .filter_map(|(i, x_chunk)| {
            let offset = i * chunk_size;
            let mut best: Option<(usize, f64)> = None;
            for (j, x) in x_chunk.iter().enumerate() {
                let m = x.abs();
                match best {
                    Some((_, b)) if !magnitude_exceeds(m, b) => {}
                    _ => best = Some((offset + j, m)),
                }
            }
            best
        })
        .reduce_with(|a, b| {
            // Ties resolve to the lower index.
            let (low, high) = if a.0 < b.0 { (a, b) } else { (b, a) };
            if magnitude_exceeds(high.1, low.1) {
                high
            } else {
                low
            }
        })
        .map(|(index, _)| index)
}

/// Max that propagates NaN instead of dropping it like `f64::max`.
#[inline]
fn nan_max(acc: f64, d: f64) -> f64 {
    if d.is_nan() || d > acc {
        d
    } else {
        acc
    }
}

/// max(|a[i] - b[i]|), 0.0 for empty slices.
/// NaN if any difference is NaN.
pub fn max_abs_diff(
    a_slice: &[f64],
    b_slice: &[f64],
    chunk_size: usize,
) -> f64 {
    debug_assert_eq!(a_slice.len(), b_slice.len());
    a_slice
        .par_chunks(chunk_size)
        .zip(b_slice.par_chunks(chunk_size))
        .map(|(a_chunk, b_chunk)| {
            a_chunk
                .iter()
                .zip(b_chunk)
                .fold(0.0_f64, |acc, (a, b)| nan_max(acc, (a - b).abs()))
        })
        .reduce(|| 0.0, nan_max)
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn set_values_test() {
        {
            let mut a = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
            set_value(&mut a, 7.0, 6);
            for v in a {
                assert_eq!(v, 7.0);
            }
        }

        {
            let n = 1000;
            let chunk_size = 10;
            let value = n as f64 + 1.0;
            let mut a: Vec<f64> = (0..n).map(|i| i as f64).collect();

            set_value(&mut a, value, chunk_size);

            for v in a {
                assert_eq!(v, value);
            }
        }
    }

    #[test]
    fn copy_axpy_test() {
        let x: Vec<f64> = (0..17).map(|i| i as f64).collect();
        let mut y = vec![0.0; 17];
        copy(&x, &mut y, 4);
        assert_eq!(x, y);

        axpy(-1.0, &x, &mut y, 3);
        for v in &y {
            assert_eq!(*v, 0.0);
        }

        axpy(2.0, &x, &mut y, 5);
        for (i, v) in y.iter().enumerate() {
            assert_eq!(*v, 2.0 * i as f64);
        }
    }

    #[test]
    fn iamax_test() {
        assert_eq!(iamax(&[], 4), None);
        assert_eq!(iamax(&[0.0], 4), Some(0));
        let x = [1.0, -7.0, 3.0, 7.0, 0.5, -2.0];
        for chunk_size in 1..8 {
            assert_eq!(iamax(&x, chunk_size), Some(1));
        }
        let x = [0.0, 0.0, 0.0, 0.0, 0.0, -0.25];
        for chunk_size in 1..8 {
            assert_eq!(iamax(&x, chunk_size), Some(5));
        }
    }

    #[test]
    fn max_abs_diff_test() {
        assert_eq!(max_abs_diff(&[], &[], 3), 0.0);
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [1.0, 2.5, 3.0, 1.0, 5.0];
        for chunk_size in 1..6 {
            assert_eq!(max_abs_diff(&a, &b, chunk_size), 3.0);
            assert_eq!(max_abs_diff(&b, &a, chunk_size), 3.0);
        }
    }

    #[test]
    fn iamax_nan_is_largest() {
        let x = [1.0, f64::INFINITY, f64::NAN, 2.0, f64::NAN, -9.0];
        for chunk_size in 1..8 {
            assert_eq!(iamax(&x, chunk_size), Some(2));
        }
        let x = [f64::NAN, 3.0, -4.0];
        for chunk_size in 1..4 {
            assert_eq!(iamax(&x, chunk_size), Some(0));
        }
    }

    #[test]
    fn max_abs_diff_propagates_nan() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        for nan_at in 0..a.len() {
            let mut b = a;
            b[nan_at] = f64::NAN;
            b[(nan_at + 3) % a.len()] += 100.0;
            for chunk_size in 1..8 {
                assert!(max_abs_diff(&a, &b, chunk_size).is_nan());
                assert!(max_abs_diff(&b, &a, chunk_size).is_nan());
            }
        }
        let mut b = a;
        b[4] = f64::INFINITY;
        assert_eq!(max_abs_diff(&a, &b, 2), f64::INFINITY);
    }
}
