use crate::domain::*;
use crate::error::Result;
use crate::util::*;

/// Min and max over the grid, used to normalize colors.
pub fn value_range(grid: &Grid) -> (f64, f64) {
    grid.buffer()
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        })
}

/// Render the grid as a TURBO heatmap, one pixel per cell,
/// row 0 at the top of the image.
pub fn grid_to_image(grid: &Grid) -> image::RgbImage {
    let gradient = colorous::TURBO;
    let size = grid.size() as u32;
    let (lo, hi) = value_range(grid);
    let span = hi - lo;
    let mut img = image::RgbImage::new(size, size);
    for c in grid.bounds().coord_iter() {
        let v = grid.view(&c);
        let t = if span > 0.0 { (v - lo) / span } else { 0.5 };
        let color = gradient.eval_continuous(t);
        let pixel = image::Rgb(color.as_array());
        img.put_pixel(c[1] as u32, c[0] as u32, pixel);
    }
    img
}

pub fn write_image<P: AsRef<std::path::Path>>(
    grid: &Grid,
    path: &P,
) -> Result<()> {
    tracing::info!(path = ?path.as_ref(), "writing heatmap");
    grid_to_image(grid).save(path)?;
    Ok(())
}
