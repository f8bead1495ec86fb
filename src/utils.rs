//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

// Leaf mark for the header logo
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><path fill="#22c55e" d="M54 6C30 6 12 18 12 38c0 6 2 11 5 15l-7 7 4 4 7-7c4 3 9 5 15 5 20 0 28-20 28-56z"/><path fill="none" stroke="#052e16" stroke-width="3" stroke-linecap="round" d="M20 48C28 36 38 26 50 16"/></svg>"##;

// Square version on a dark tile, for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="12" fill="#052e16"/><path fill="#4ade80" d="M50 10C30 10 16 20 16 37c0 5 2 9 4 12l-6 6 3 3 6-6c3 2 7 4 12 4 17 0 23-17 15-46z"/></svg>"##;

/// Rasterize the logo SVG at the given width, preserving aspect ratio.
pub fn rasterize_logo(width: u32) -> (Vec<u8>, u32, u32) {
    rasterize(LOGO_SVG, width)
}

/// Rasterize the icon SVG to a square image (for window/taskbar icons).
pub fn rasterize_icon(size: u32) -> (Vec<u8>, u32, u32) {
    rasterize(ICON_SVG, size)
}

fn rasterize(svg: &str, width: u32) -> (Vec<u8>, u32, u32) {
    let Ok(tree) = resvg::usvg::Tree::from_str(svg, &resvg::usvg::Options::default()) else {
        return blank(width);
    };
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let Some(mut pixmap) = resvg::tiny_skia::Pixmap::new(width, height) else {
        return blank(width);
    };
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), width, height)
}

fn blank(size: u32) -> (Vec<u8>, u32, u32) {
    (vec![0; (size * size * 4) as usize], size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_rasterizes_to_requested_width() {
        let (rgba, w, h) = rasterize_logo(80);
        assert_eq!(w, 80);
        assert_eq!(h, 80);
        assert_eq!(rgba.len(), (w * h * 4) as usize);
        assert!(rgba.chunks(4).any(|px| px[3] > 0));
    }

    #[test]
    fn icon_is_square() {
        let (rgba, w, h) = rasterize_icon(64);
        assert_eq!((w, h), (64, 64));
        assert_eq!(rgba.len(), 64 * 64 * 4);
    }
}
