use crate::domain::*;
use crate::stencil::*;
use crate::util::*;
use rayon::prelude::*;

/// Gather the neighbor values of `coord` from `input`.
/// Caller guarantees all neighbors are in bounds.
pub fn gather_args<const NEIGHBORHOOD_SIZE: usize>(
    stencil: &Stencil<NEIGHBORHOOD_SIZE>,
    input: &Grid,
    coord: &Coord,
) -> Values<NEIGHBORHOOD_SIZE> {
    let mut args = Values::zero();
    for (n, offset) in stencil.offsets().iter().enumerate() {
        args[n] = input.view(&(coord + offset));
    }
    args
}

/// One stencil pass over the interior of `output`, reading only from `input`.
/// Boundary cells of `output` are left untouched.
/// Each output cell is written by exactly one task,
/// so no ordering between cells is needed.
pub fn apply<const NEIGHBORHOOD_SIZE: usize>(
    stencil: &Stencil<NEIGHBORHOOD_SIZE>,
    input: &Grid,
    output: &mut Grid,
    chunk_size: usize,
) {
    profiling::scope!("par_stencil::apply");
    debug_assert_eq!(input.bounds(), output.bounds());
    debug_assert!(stencil.radius() <= 1);
    output
        .par_modify_access(chunk_size)
        .for_each(|mut d: GridChunk<'_>| {
            d.interior_iter_mut()
                .for_each(|(coord, value_mut): (Coord, &mut f64)| {
                    let args = gather_args(stencil, input, &coord);
                    *value_mut = stencil.apply(&args);
                })
        })
}
