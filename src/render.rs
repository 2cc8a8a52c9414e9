// Block renderer: one filled square per height-field cell.

use crate::draw::Canvas;
use crate::palette::height_color;
use crate::types::{HeightField, Rect};

/// Draw every cell of `field` as a `block_size` square, row-major.
/// The caller clears before and presents after.
pub fn render<C: Canvas + ?Sized>(canvas: &mut C, field: &HeightField, block_size: usize) {
    let side = block_size as u32;
    for row in 0..field.height() {
        for col in 0..field.width() {
            let Some(h) = field.get(row, col) else { continue };
            canvas.set_draw_color(height_color(h));
            canvas.fill_rect(Rect::new(
                (col * block_size) as i32,
                (row * block_size) as i32,
                side,
                side,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::UniformNoise;
    use crate::terrain::generate;
    use crate::types::FrameBuffer;
    use image::Rgb;
    use std::collections::HashSet;

    #[derive(Default)]
    struct Recorder {
        colors: Vec<Rgb<u8>>,
        rects: Vec<Rect>,
    }

    impl Canvas for Recorder {
        fn clear(&mut self, _color: Rgb<u8>) {}
        fn set_draw_color(&mut self, color: Rgb<u8>) {
            self.colors.push(color);
        }
        fn fill_rect(&mut self, rect: Rect) {
            self.rects.push(rect);
        }
    }

    #[test]
    fn test_render_tiles_grid_without_gaps() {
        let field = generate(4, 4, 50.0, &mut UniformNoise::new(42)).unwrap();
        let mut rec = Recorder::default();

        render(&mut rec, &field, 10);

        assert_eq!(rec.rects.len(), 16);
        assert!(rec.rects.iter().all(|r| r.w == 10 && r.h == 10));

        let origins: HashSet<(i32, i32)> = rec.rects.iter().map(|r| (r.x, r.y)).collect();
        let expected: HashSet<(i32, i32)> = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x * 10, y * 10)))
            .collect();
        assert_eq!(origins, expected);
        assert_eq!(rec.rects[0], Rect::new(0, 0, 10, 10));
        assert_eq!(rec.rects[15], Rect::new(30, 30, 10, 10));
    }

    #[test]
    fn test_render_colors_follow_heights() {
        let field = generate(3, 2, 50.0, &mut UniformNoise::new(1)).unwrap();
        let mut rec = Recorder::default();

        render(&mut rec, &field, 5);

        let expected: Vec<Rgb<u8>> = field.iter().map(|(_, _, h)| height_color(h)).collect();
        assert_eq!(rec.colors, expected);
    }

    #[test]
    fn test_render_covers_framebuffer() {
        let field = generate(4, 3, 50.0, &mut UniformNoise::new(8)).unwrap();
        let mut fb = FrameBuffer::new(40, 30);
        fb.clear(Rgb([0, 0, 0]));

        render(&mut fb, &field, 10);

        // No palette colour is black, so every pixel was painted.
        assert!(fb.pixels.iter().all(|&p| p != 0));
        let corner = crate::palette::pack_rgb(height_color(field.get(2, 3).unwrap()));
        assert_eq!(fb.pixels[29 * 40 + 39], corner);
    }
}
