// Distance-based grayscale shading.
// Visual: pixels near the reference point are black, fading to white with distance.

use crate::types::{Coord, FrameBuffer};

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Coord, b: Coord) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Distance from `point` to the farthest window corner.
/// The corners are (0,0), (w,0), (0,h), (w,h); the farthest one always lies in the
/// quadrant opposite the point, so this is the largest distance any pixel can have.
pub fn max_distance(width: usize, height: usize, point: Coord) -> f32 {
    let (w, h) = (width as f32, height as f32);
    [Coord::new(0.0, 0.0), Coord::new(w, 0.0), Coord::new(0.0, h), Coord::new(w, h)]
        .into_iter()
        .map(|corner| distance(point, corner))
        .fold(0.0, f32::max)
}

/// Pack one gray level into 0x00RRGGBB.
#[inline]
pub const fn val_to_grayscale(v: u8) -> u32 {
    let v = v as u32;
    (v << 16) | (v << 8) | v
}

/// Map `d / max` onto 0..=255 (floored). A zero `max` maps everything to 0.
#[inline]
fn level(d: f32, max: f32) -> u8 {
    if max <= 0.0 {
        return 0;
    }
    (d / max * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Shade every pixel by its distance to `point`, scaled by the farthest corner.
pub fn shade_from_point(fb: &mut FrameBuffer, point: Coord) {
    let max = max_distance(fb.width, fb.height, point);
    let width = fb.width;
    for (i, px) in fb.pixels.iter_mut().enumerate() {
        let pixel = Coord::new((i % width) as f32, (i / width) as f32);
        *px = val_to_grayscale(level(distance(point, pixel), max));
    }
}

/// Linearly map `[min, max]` of `values` onto `[0, 255]`.
/// An empty or constant input gives all zeros.
pub fn normalize_min_max(values: &[f32]) -> Vec<u8> {
    let (min, max) = values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;
    values
        .iter()
        .map(|&v| if range > 0.0 { level(v - min, range) } else { 0 })
        .collect()
}

/// Shade by distance to `point`, stretched so the nearest pixel is black and the
/// farthest pixel is white.
pub fn shade_normalized(fb: &mut FrameBuffer, point: Coord) {
    let distances: Vec<f32> = (0..fb.pixels.len())
        .map(|i| {
            let (x, y) = fb.index_to_coord(i);
            distance(point, Coord::new(x as f32, y as f32))
        })
        .collect();

    for (px, v) in fb.pixels.iter_mut().zip(normalize_min_max(&distances)) {
        *px = val_to_grayscale(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(px: u32) -> u8 {
        (px & 0xFF) as u8
    }

    #[test]
    fn test_distance_3_4_5() {
        let d = distance(Coord::new(0.0, 0.0), Coord::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_max_distance_picks_opposite_corner() {
        // Top-left quadrant: farthest corner is bottom-right.
        let d = max_distance(100, 50, Coord::new(10.0, 10.0));
        assert!((d - distance(Coord::new(10.0, 10.0), Coord::new(100.0, 50.0))).abs() < 1e-4);
        // Bottom-right quadrant: farthest corner is the origin.
        let d = max_distance(100, 50, Coord::new(90.0, 40.0));
        assert!((d - distance(Coord::new(90.0, 40.0), Coord::new(0.0, 0.0))).abs() < 1e-4);
        // Top-right quadrant: farthest corner is bottom-left.
        let d = max_distance(100, 50, Coord::new(90.0, 5.0));
        assert!((d - distance(Coord::new(90.0, 5.0), Coord::new(0.0, 50.0))).abs() < 1e-4);
    }

    #[test]
    fn test_val_to_grayscale_packs_all_channels() {
        assert_eq!(val_to_grayscale(0), 0x00000000);
        assert_eq!(val_to_grayscale(0x80), 0x00808080);
        assert_eq!(val_to_grayscale(255), 0x00FFFFFF);
    }

    #[test]
    fn test_shade_from_point_black_under_cursor() {
        let mut fb = FrameBuffer::new(40, 30).unwrap();
        shade_from_point(&mut fb, Coord::new(5.0, 7.0));
        assert_eq!(fb.pixels[fb.coord_to_index(5, 7)], 0);
        // Farther pixels are never darker than nearer ones along a row.
        let row: Vec<u8> = (5..40).map(|x| gray(fb.pixels[fb.coord_to_index(x, 7)])).collect();
        assert!(row.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_shade_from_point_stays_below_white() {
        // Corners are at (w,h), one past the last pixel, so no pixel reaches 255.
        let mut fb = FrameBuffer::new(16, 16).unwrap();
        shade_from_point(&mut fb, Coord::new(0.0, 0.0));
        let far = gray(fb.pixels[fb.coord_to_index(15, 15)]);
        assert!(far > 200 && far < 255);
    }

    #[test]
    fn test_normalize_min_max_stretches_range() {
        let out = normalize_min_max(&[2.0, 4.0, 6.0]);
        assert_eq!(out, vec![0, 127, 255]);
    }

    #[test]
    fn test_normalize_min_max_constant_input() {
        assert_eq!(normalize_min_max(&[3.0, 3.0]), vec![0, 0]);
        assert!(normalize_min_max(&[]).is_empty());
    }

    #[test]
    fn test_shade_normalized_spans_full_range() {
        let mut fb = FrameBuffer::new(20, 10).unwrap();
        shade_normalized(&mut fb, Coord::new(0.0, 0.0));
        assert_eq!(gray(fb.pixels[0]), 0);
        assert_eq!(gray(fb.pixels[fb.coord_to_index(19, 9)]), 255);
    }
}
