//! Block average downsampling.
//!
//! An image is tiled into `vertical x horizontal` blocks starting at the top left
//! corner. Every block becomes one output pixel holding the block mean. Rows and
//! columns that do not fill a whole block are dropped.

use crate::raster::Image;
use crate::types::{invalid_argument, Result};
use itertools::Itertools;
use ndarray::{Array2, ArrayBase, Data, Ix2, Zip};

/// Shrink `image` by the given vertical and horizontal ratios.
pub fn shrink_by_ratio(image: &Image, vertical: usize, horizontal: usize) -> Result<Image> {
    if vertical == 0 || horizontal == 0 {
        return invalid_argument(format!(
            "shrink ratios must be positive, got {}x{}",
            vertical, horizontal
        ));
    }

    image.validate()?;

    match image {
        Image::Gray(data) => Image::gray(shrink_plane(data, vertical, horizontal)),
        Image::Rgb(_) => {
            let planes = image
                .planes()
                .iter()
                .map(|plane| shrink_plane(plane, vertical, horizontal))
                .collect_tuple();
            match planes {
                Some((red, green, blue)) => Image::from_planes(red, green, blue),
                None => invalid_argument("RGB image must have exactly three planes"),
            }
        }
    }
}

fn shrink_plane<S>(plane: &ArrayBase<S, Ix2>, vertical: usize, horizontal: usize) -> Array2<f64>
where
    S: Data<Elem = f64>,
{
    let area = (vertical * horizontal) as f64;
    Zip::from(plane.exact_chunks((vertical, horizontal))).map_collect(|block| block.sum() / area)
}
