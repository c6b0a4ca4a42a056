// Renders a 65×65 diamond-square grid (detail 6, noisiness 3) to a
// hill-shaded, colour-ramped PNG. Light comes from azimuth 270°, altitude 45°.

use std::error::Error;
use std::path::Path;

use diamond_square::{DiamondSquare2D, Grid, normalize};
use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

// Lambertian hillshade, `z_scale` adjusts vertical exaggeration
fn hillshade(grid: &Grid, z_scale: f64) -> Vec<f64> {
    let n = grid.side_length();
    let mut shade = vec![1.0; n * n];
    let azimuth = 270f64.to_radians();
    let altitude = 45f64.to_radians();
    let (sin_alt, cos_alt) = altitude.sin_cos();
    let (lx, ly, lz) = (azimuth.cos() * cos_alt, azimuth.sin() * cos_alt, sin_alt);

    for y in 1..n - 1 {
        for x in 1..n - 1 {
            let dzdx = (grid[(y, x + 1)] - grid[(y, x - 1)]) / 2.0 * z_scale;
            let dzdy = (grid[(y + 1, x)] - grid[(y - 1, x)]) / 2.0 * z_scale;
            let len = (dzdx * dzdx + dzdy * dzdy + 1.0).sqrt();
            let (nx, ny, nz) = (-dzdx / len, -dzdy / len, 1.0 / len);
            shade[y * n + x] = (nx * lx + ny * ly + nz * lz).max(0.0);
        }
    }
    shade
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let grid = DiamondSquare2D::new(6, 2025, 3.0).generate()?;
    let size = grid.side_length();
    let heights = normalize(&grid);
    let shade = hillshade(&grid, 0.1);

    // Blue lows through green and yellow to red highs
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)),
        (0.35, LinSrgb::new(0.0, 0.5, 1.0)),
        (0.50, LinSrgb::new(0.1, 0.8, 0.3)),
        (0.75, LinSrgb::new(1.0, 0.9, 0.1)),
        (1.00, LinSrgb::new(0.6, 0.0, 0.0)),
    ]);

    let mut img = RgbImage::new(size as u32, size as u32);
    for y in 0..size {
        for x in 0..size {
            let col: LinSrgb = gradient.get(heights[y * size + x]);
            let rgb = col.into_format::<u8>();
            let light = (shade[y * size + x] * 0.5 + 0.5).clamp(0.0, 1.0) as f32;
            img.put_pixel(
                x as u32,
                y as u32,
                Rgb([
                    (rgb.red as f32 * light) as u8,
                    (rgb.green as f32 * light) as u8,
                    (rgb.blue as f32 * light) as u8,
                ]),
            );
        }
    }

    let path = Path::new("terrain_diamond_square.png");
    img.save(path)?;
    println!("Saved {:?}", path);
    Ok(())
}
