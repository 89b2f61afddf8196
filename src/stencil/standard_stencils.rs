use crate::stencil::*;

/// Steady state diffusion, each cell becomes the average
/// of its four orthogonal neighbors.
pub fn jacobi_2d() -> Stencil<4> {
    Stencil::new([[1, 0], [-1, 0], [0, -1], [0, 1]], |args: &[f64; 4]| {
        let down = args[0];
        let up = args[1];
        let left = args[2];
        let right = args[3];
        0.25 * (down + up + left + right)
    })
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn jacobi_2d_weights() {
        let s = jacobi_2d();
        for w in s.weights().iter() {
            assert_eq!(*w, 0.25);
        }
        assert_eq!(s.radius(), 1);
    }
}
