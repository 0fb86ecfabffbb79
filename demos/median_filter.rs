use std::env;
use std::time::Instant;

use flexi_logger::Logger;
use image::{DynamicImage, ImageFormat};
use imageops_median::{FilterConfig, MedianFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let args: Vec<String> = env::args().collect();

    if args.len() != 4 && args.len() != 5 {
        eprintln!(
            "Usage: {} <input_image> <window_size> <output_image> [workers]",
            args[0]
        );
        eprintln!("Example: {} noisy.jpg 3 clean.jpg 8", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let window_size: u32 = args[2].parse().map_err(|_| "Invalid window size")?;
    let output_path = &args[3];
    let defaults = FilterConfig::default();
    let worker_count = match args.get(4) {
        Some(workers) => workers.parse().map_err(|_| "Invalid worker count")?,
        None => defaults.worker_count().get(),
    };
    let config = FilterConfig::new(window_size, worker_count)?;

    let img = image::open(input_path)?;
    log::info!(
        "Loaded {}: {}x{} {:?}",
        input_path,
        img.width(),
        img.height(),
        img.color()
    );

    let start = Instant::now();
    let processed_img = match img {
        DynamicImage::ImageLuma8(luma_img) => {
            DynamicImage::ImageLuma8(luma_img.median_filter_with(&config)?)
        }
        DynamicImage::ImageLumaA8(luma_a_img) => {
            DynamicImage::ImageLumaA8(luma_a_img.median_filter_with(&config)?)
        }
        DynamicImage::ImageRgb8(rgb_img) => {
            DynamicImage::ImageRgb8(rgb_img.median_filter_with(&config)?)
        }
        DynamicImage::ImageRgba8(rgba_img) => {
            DynamicImage::ImageRgba8(rgba_img.median_filter_with(&config)?)
        }
        DynamicImage::ImageLuma16(luma_img) => {
            DynamicImage::ImageLuma16(luma_img.median_filter_with(&config)?)
        }
        DynamicImage::ImageLumaA16(luma_a_img) => {
            DynamicImage::ImageLumaA16(luma_a_img.median_filter_with(&config)?)
        }
        DynamicImage::ImageRgb16(rgb_img) => {
            DynamicImage::ImageRgb16(rgb_img.median_filter_with(&config)?)
        }
        DynamicImage::ImageRgba16(rgba_img) => {
            DynamicImage::ImageRgba16(rgba_img.median_filter_with(&config)?)
        }
        other => {
            log::warn!("Unsupported color type {:?}, converting to RGBA8", other.color());
            DynamicImage::ImageRgba8(other.to_rgba8().median_filter_with(&config)?)
        }
    };
    let elapsed = start.elapsed();

    log::info!(
        "Filtered with window {} on {} workers in {:.3}s",
        config.window().size(),
        config.worker_count(),
        elapsed.as_secs_f64()
    );

    // The JPEG encoder only accepts 8-bit color without alpha
    let processed_img = match ImageFormat::from_path(output_path)? {
        ImageFormat::Jpeg if processed_img.color() != image::ColorType::L8 => {
            DynamicImage::ImageRgb8(processed_img.to_rgb8())
        }
        _ => processed_img,
    };
    processed_img.save(output_path)?;
    log::info!("Output image saved in {}", output_path);

    Ok(())
}
