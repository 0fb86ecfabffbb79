//! Test utilities for imageops-median
//!
//! This module provides common fixtures for testing the median filter.
//! It is only compiled when running tests.

use crate::Image;
use image::{Luma, Pixel, Rgba};

/// Creates a 3x3 RGBA image in which every pixel is distinct.
///
/// Pixel `(x, y)` is `[10 * (x + 3y), 100 + x, 200 - y, 255]`, so the red
/// channel alone identifies the source coordinate.
pub fn create_test_rgba_image() -> Image<Rgba<u8>> {
    Image::from_fn(3, 3, |x, y| {
        let index = (x + 3 * y) as u8;
        Rgba([10 * index, 100 + x as u8, 200 - y as u8, 255])
    })
}

/// Creates a single-row grayscale image holding `values` from left to right.
pub fn create_luma_row(values: &[u8]) -> Image<Luma<u8>> {
    Image::from_fn(values.len() as u32, 1, |x, _| Luma([values[x as usize]]))
}

/// Creates an RGBA image filled with a deterministic pseudo-random pattern.
///
/// Uses a small linear congruential generator so tests are reproducible
/// without pulling in a random number crate.
pub fn create_noise_rgba_image(width: u32, height: u32, seed: u32) -> Image<Rgba<u8>> {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    Image::from_fn(width, height, |_, _| {
        let mut channel = || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        };
        Rgba([channel(), channel(), channel(), channel()])
    })
}

/// Reference median filter: full sort of every channel of every window.
///
/// Deliberately naive and single-threaded; used to cross-check the
/// parallel implementation.
pub fn reference_median_filter<P>(image: &Image<P>, window_size: u32) -> Image<P>
where
    P: Pixel,
    P::Subpixel: Ord,
{
    let (width, height) = image.dimensions();
    let radius = i64::from((window_size - 1) / 2);
    Image::from_fn(width, height, |x, y| {
        let mut neighborhood = Vec::new();
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                let nx = (i64::from(x) + dx).clamp(0, i64::from(width) - 1) as u32;
                let ny = (i64::from(y) + dy).clamp(0, i64::from(height) - 1) as u32;
                neighborhood.push(*image.get_pixel(nx, ny));
            }
        }
        let mut output = neighborhood[0];
        for (channel, value) in output.channels_mut().iter_mut().enumerate() {
            let mut values: Vec<P::Subpixel> =
                neighborhood.iter().map(|p| p.channels()[channel]).collect();
            values.sort();
            *value = values[values.len() / 2];
        }
        output
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_test_rgba_image_has_distinct_pixels() {
        let image = create_test_rgba_image();
        assert_eq!(image.dimensions(), (3, 3));
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 100, 200, 255]));
        assert_eq!(image.get_pixel(2, 2), &Rgba([80, 102, 198, 255]));

        let mut reds: Vec<u8> = image.pixels().map(|p| p[0]).collect();
        reds.dedup();
        assert_eq!(reds.len(), 9);
    }

    #[test]
    fn create_luma_row_preserves_order() {
        let image = create_luma_row(&[10, 20, 30]);
        assert_eq!(image.dimensions(), (3, 1));
        assert_eq!(image.get_pixel(2, 0), &Luma([30]));
    }

    #[test]
    fn create_noise_rgba_image_is_reproducible() {
        let first = create_noise_rgba_image(8, 8, 7);
        let second = create_noise_rgba_image(8, 8, 7);
        let other = create_noise_rgba_image(8, 8, 8);
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn reference_median_filter_on_ramp() {
        let image = create_luma_row(&[10, 20, 30, 40, 50]);
        let filtered = reference_median_filter(&image, 3);
        let values: Vec<u8> = filtered.pixels().map(|p| p[0]).collect();
        assert_eq!(values, vec![10, 20, 30, 40, 50]);
    }
}
