mod error;
mod imageops_median;
#[cfg(test)]
mod test_utils;
mod utils;

use image::{ImageBuffer, Pixel};

pub use error::MedianFilterError;
pub use imageops_median::config::FilterConfig;
pub use imageops_median::engine::{median_filter, median_filter_with, MedianFilter};
pub use imageops_median::partition::{partition, Region};
pub use imageops_median::pool::WorkerPool;
pub use imageops_median::reducer::{channel_median, ChannelMedianReducer};
pub use imageops_median::window::Window;

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
