use crate::util::*;

/// For linear stencils, we can extract the weight for a neighbor
/// by passing in 1.0 for that neighbor and 0.0 for the others.
pub fn extract_weights<
    const NEIGHBORHOOD_SIZE: usize,
    F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
>(
    f: F,
) -> Values<NEIGHBORHOOD_SIZE> {
    let mut weights = Values::zero();
    let mut arg_buffer = [0.0; NEIGHBORHOOD_SIZE];
    for n in 0..NEIGHBORHOOD_SIZE {
        arg_buffer[n] = 1.0;
        weights[n] = f(&arg_buffer);
        arg_buffer[n] = 0.0;
    }
    weights
}

/// A linear 2D stencil, a combination of neighbor offsets and weights.
pub struct Stencil<const NEIGHBORHOOD_SIZE: usize> {
    pub weights: Values<NEIGHBORHOOD_SIZE>,
    pub offsets: [Coord; NEIGHBORHOOD_SIZE],
}

impl<const NEIGHBORHOOD_SIZE: usize> Stencil<NEIGHBORHOOD_SIZE> {
    pub fn new<F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64>(
        offsets: [[i32; 2]; NEIGHBORHOOD_SIZE],
        operation: F,
    ) -> Self {
        let weights = extract_weights(operation);
        Stencil {
            offsets: std::array::from_fn(|i| {
                Coord::from_column_slice(&offsets[i])
            }),
            weights,
        }
    }

    pub fn weights(&self) -> &Values<NEIGHBORHOOD_SIZE> {
        &self.weights
    }

    pub fn offsets(&self) -> &[Coord; NEIGHBORHOOD_SIZE] {
        &self.offsets
    }

    /// Largest reach of any neighbor along either axis.
    pub fn radius(&self) -> i32 {
        self.offsets
            .iter()
            .map(|o| o[0].abs().max(o[1].abs()))
            .max()
            .unwrap_or(0)
    }

    pub fn apply(&self, args: &Values<NEIGHBORHOOD_SIZE>) -> f64 {
        self.weights.dot(args)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn extract_weights() {
        {
            let s = Stencil::new([[1, 0]], |args: &[f64; 1]| 2.0 * args[0]);
            let w = s.weights()[0];
            assert_approx_eq!(f64, w, 2.0);
        }

        {
            let s = Stencil::new([[1, 0], [0, 2], [-3, 0]], |args: &[f64; 3]| {
                2.0 * args[0] + 3.0 * args[1] + 5.0 * args[2]
            });
            let w = s.weights();
            assert_approx_eq!(f64, w[0], 2.0, ulps = 1);
            assert_approx_eq!(f64, w[1], 3.0, ulps = 1);
            assert_approx_eq!(f64, w[2], 5.0, ulps = 1);
            assert_eq!(s.radius(), 3);
        }
    }

    #[test]
    fn apply() {
        let s = Stencil::new([[0, 1], [0, -1]], |args: &[f64; 2]| {
            args[0] - args[1]
        });
        assert_eq!(s.offsets()[1], vector![0, -1]);
        assert_approx_eq!(f64, s.apply(&vector![4.0, 1.5]), 2.5);
    }
}
