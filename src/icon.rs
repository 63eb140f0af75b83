use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use std::path::Path;

use crate::constants::{palette, sizes::ICON_SIZES};

/// Render the cross icon at the given edge length. Pure function of `edge`:
/// the same size always produces an identical pixel buffer.
pub fn render(edge: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(edge, edge, palette::BACKGROUND);

    // Vertical bar of the cross
    let bar_w = edge / 8;
    let bar_h = edge / 2;
    fill_rect(&mut img, (edge - bar_w) / 2, (edge - bar_h) / 2, bar_w, bar_h, palette::CROSS);

    // Horizontal bar (overlap with the vertical bar is just painted twice)
    fill_rect(&mut img, (edge - bar_h) / 2, (edge - bar_w) / 2, bar_h, bar_w, palette::CROSS);

    // Border ring around the full perimeter
    let border = (edge / 40).max(1);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if x < border || x >= edge - border || y < border || y >= edge - border {
            *pixel = palette::BORDER;
        }
    }

    img
}

/// Render one icon and persist it as a PNG, overwriting any existing file.
/// The containing directory must already exist.
pub fn render_icon(edge: u32, path: &Path) -> Result<()> {
    let img = render(edge);
    img.save(path)
        .with_context(|| format!("Failed to save icon to {}", path.display()))?;
    println!("Created {}x{} icon: {}", edge, edge, path.display());
    Ok(())
}

/// Generate every icon in the appiconset table into `out_dir`, in order.
/// Aborts on the first filesystem error; returns the number of files written.
pub fn generate_all(out_dir: &Path) -> Result<usize> {
    for (edge, filename) in ICON_SIZES {
        render_icon(edge, &out_dir.join(filename))?;
    }
    Ok(ICON_SIZES.len())
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    for py in y..(y + h).min(img.height()) {
        for px in x..(x + w).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_sizes_render_without_panicking() {
        // Bars round to zero below edge 8; degenerate but valid
        for edge in 1..8 {
            let img = render(edge);
            assert_eq!(img.dimensions(), (edge, edge));
        }
    }

    #[test]
    fn cross_center_is_white() {
        let img = render(64);
        assert_eq!(*img.get_pixel(32, 32), palette::CROSS);
    }

    #[test]
    fn corner_is_border_colored() {
        let img = render(64);
        assert_eq!(*img.get_pixel(0, 0), palette::BORDER);
        assert_eq!(*img.get_pixel(63, 63), palette::BORDER);
    }
}
