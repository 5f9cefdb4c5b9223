//! Page placement for images
//!
//! Computes where an image lands on a fixed-size page: scaled to fit
//! without cropping, horizontally centered, and vertically centered
//! whenever the height leaves room for it.

/// Fraction of the page width an image is allowed to fill.
const PAGE_FILL: f32 = 0.98;

/// A rectangular area on the page, in millimeters.
///
/// `x`/`y` is the offset of the placed image from the page corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Calculate the placement of an image on a page.
///
/// The image is first scaled so its width fills `PAGE_FILL` of the page
/// width. If the resulting height still fits on the page, the image is
/// centered on both axes. If it would overflow, the image is scaled down
/// until its height fills the page exactly, horizontally centered and
/// flush with the page edge.
///
/// The overflow check is strict (`>`): an image whose scaled height equals
/// the page height exactly takes the centered branch.
///
/// Pure function of the four dimensions; page dimensions are in mm, image
/// dimensions in pixels.
pub fn fit_to_page(page_width: f32, page_height: f32, img_width: f32, img_height: f32) -> Rect {
    let ratio = page_width / img_width;
    let width = page_width * PAGE_FILL;
    let height = img_height * ratio * PAGE_FILL;

    if height > page_height {
        let scale = page_height / height;
        Rect::new(
            (page_width - width * scale) / 2.0,
            0.0,
            width * scale,
            height * scale,
        )
    } else {
        Rect::new(
            (page_width - width) / 2.0,
            (page_height - height) / 2.0,
            width,
            height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A4_W: f32 = 210.0;
    const A4_H: f32 = 297.0;

    #[test]
    fn test_wide_image_centered_both_axes() {
        // 2000x1000 on A4: width-limited, plenty of vertical room
        let rect = fit_to_page(A4_W, A4_H, 2000.0, 1000.0);

        assert!((rect.width - A4_W * 0.98).abs() < 0.001);
        assert!((rect.height - A4_W * 0.98 / 2.0).abs() < 0.001);
        assert!((rect.x - (A4_W - rect.width) / 2.0).abs() < 0.001);
        assert!((rect.y - (A4_H - rect.height) / 2.0).abs() < 0.001);
    }

    #[test]
    fn test_tall_image_scaled_to_page_height() {
        // 1000x4000 on A4: scaled width would give height 4 * 205.8,
        // so the height branch kicks in
        let rect = fit_to_page(A4_W, A4_H, 1000.0, 4000.0);

        assert!((rect.height - A4_H).abs() < 0.001);
        assert!(rect.width < A4_W);
        assert_eq!(rect.y, 0.0);
        assert!((rect.x - (A4_W - rect.width) / 2.0).abs() < 0.001);
    }

    #[test]
    fn test_exact_height_takes_centered_branch() {
        // Constructed so the scaled height equals the page height exactly
        // in f32: img_w == page_w makes the ratio 1.0, and 2^23 * 0.98 is
        // an exact product. The check is strict `>`, so no further
        // scale-down happens at the boundary.
        let page_w = 1024.0_f32;
        let img_h = 8_388_608.0_f32; // 2^23
        let page_h = img_h * 0.98;

        let rect = fit_to_page(page_w, page_h, page_w, img_h);

        assert_eq!(rect.width, page_w * 0.98);
        assert_eq!(rect.height, page_h);
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.x, (page_w - rect.width) / 2.0);
    }

    #[test]
    fn test_rect_within_page_bounds() {
        let dims = [
            (1.0, 1.0),
            (100.0, 100.0),
            (4000.0, 50.0),
            (50.0, 4000.0),
            (1920.0, 1080.0),
            (1080.0, 1920.0),
        ];
        for (w, h) in dims {
            let rect = fit_to_page(A4_W, A4_H, w, h);
            assert!(rect.width > 0.0 && rect.width <= A4_W, "width for {w}x{h}");
            assert!(
                rect.height > 0.0 && rect.height <= A4_H + 0.001,
                "height for {w}x{h}"
            );
            assert!(
                (rect.x - (A4_W - rect.width) / 2.0).abs() < 0.001,
                "centering for {w}x{h}"
            );
        }
    }
}
