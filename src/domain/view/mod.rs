mod chunk;
mod owned;
mod pair;

pub use chunk::*;
pub use owned::*;
pub use pair::*;

use crate::util::*;
use rayon::prelude::*;

pub trait GridView: Sync {
    fn bounds(&self) -> &SquareBounds;

    fn buffer(&self) -> &[f64];

    fn buffer_mut(&mut self) -> &mut [f64];

    fn bounds_buffer_mut(&mut self) -> (&SquareBounds, &mut [f64]);

    fn view(&self, coord: &Coord) -> f64;

    fn set_coord(&mut self, coord: &Coord, value: f64);

    fn par_modify_access<'a>(
        &'a mut self,
        chunk_size: usize,
    ) -> impl ParallelIterator<Item = GridChunk<'a>> {
        let (bounds, buffer) = self.bounds_buffer_mut();
        par_modify_access_impl(buffer, bounds, chunk_size)
    }

    fn par_set_values<F: Fn(Coord) -> f64 + Send + Sync + Copy>(
        &mut self,
        f: F,
        chunk_size: usize,
    ) {
        self.par_modify_access(chunk_size)
            .for_each(|mut d: GridChunk<'_>| {
                d.coord_iter_mut().for_each(|(coord, value_mut)| {
                    *value_mut = f(coord);
                })
            });
    }
}

/// Rust compiler can't figure out how to borrow bounds and buffer
/// at the same time inside the trait's default method.
/// By putting their borrows into one function call first we work around it.
fn par_modify_access_impl<'a>(
    buffer: &'a mut [f64],
    bounds: &'a SquareBounds,
    chunk_size: usize,
) -> impl ParallelIterator<Item = GridChunk<'a>> + 'a {
    buffer[0..bounds.buffer_size()]
        .par_chunks_mut(chunk_size)
        .enumerate()
        .map(move |(i, buffer_chunk): (usize, &mut [f64])| {
            let offset = i * chunk_size;
            GridChunk::new(offset, bounds, buffer_chunk)
        })
}
