// Saves what is on screen to a PNG file.
// Visual expectation: the saved image matches the window pixel for pixel (no HUD offset, no alpha).

use crate::error::Error;
use crate::types::FrameBuffer;
use image::{ImageBuffer, Rgb};
use std::path::{Path, PathBuf};

/// Convert the 0x00RRGGBB buffer into an 8-bit RGB image.
pub fn to_rgb_image(fb: &FrameBuffer) -> Result<ImageBuffer<Rgb<u8>, Vec<u8>>, Error> {
    let (w, h) = (fb.width as u32, fb.height as u32);
    let mut raw = Vec::with_capacity(fb.pixels.len() * 3);
    for &px in &fb.pixels {
        raw.push(((px >> 16) & 0xFF) as u8);
        raw.push(((px >> 8) & 0xFF) as u8);
        raw.push((px & 0xFF) as u8);
    }
    ImageBuffer::from_raw(w, h, raw)
        .ok_or_else(|| Error::Snapshot(format!("buffer does not hold {w}x{h} pixels")))
}

/// Write `fb` to `path`; the format comes from the extension (use `.png`).
pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    to_rgb_image(fb)?
        .save(path)
        .map_err(|e| Error::Snapshot(format!("{}: {e}", path.display())))
}

/// `<dir>/<demo>-0007.png`
pub fn next_snapshot_path(dir: &Path, demo: &str, n: u32) -> PathBuf {
    dir.join(format!("{demo}-{n:04}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_conversion_unpacks_channels() {
        let mut fb = FrameBuffer::new(2, 1).unwrap();
        fb.pixels = vec![0x00112233, 0x00FF0080];
        let img = to_rgb_image(&fb).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0x11, 0x22, 0x33]);
        assert_eq!(img.get_pixel(1, 0).0, [0xFF, 0x00, 0x80]);
    }

    #[test]
    fn test_mismatched_buffer_is_an_error() {
        let mut fb = FrameBuffer::new(4, 4).unwrap();
        fb.pixels.truncate(3);
        assert!(matches!(to_rgb_image(&fb), Err(Error::Snapshot(_))));
    }

    #[test]
    fn test_snapshot_path_is_zero_padded() {
        let p = next_snapshot_path(Path::new("shots"), "drag", 7);
        assert_eq!(p, Path::new("shots").join("drag-0007.png"));
    }

    #[test]
    fn test_save_png_round_trips_through_disk() {
        let mut fb = FrameBuffer::new(3, 2).unwrap();
        fb.clear(0x00_40_80_C0);
        let path = std::env::temp_dir().join(format!("pixel-demos-{}.png", std::process::id()));
        save_png(&fb, &path).unwrap();
        let back = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();
        assert_eq!(back.dimensions(), (3, 2));
        assert_eq!(back.get_pixel(2, 1).0, [0x40, 0x80, 0xC0]);
    }

    #[test]
    fn test_save_png_into_missing_dir_fails() {
        let fb = FrameBuffer::new(1, 1).unwrap();
        let path = std::env::temp_dir().join("pixel-demos-no-such-dir").join("x.png");
        assert!(matches!(save_png(&fb, &path), Err(Error::Snapshot(_))));
    }
}
