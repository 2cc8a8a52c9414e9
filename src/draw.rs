// Window + software drawing utilities.
// 1) A window that shows the terrain framebuffer.
// 2) A `Canvas` the renderer draws blocks into (the framebuffer is one).

use crate::app::{Frontend, InputEvent};
use crate::error::Error;
use crate::palette::pack_rgb;
use crate::types::{FrameBuffer, Rect};
use image::Rgb;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

/// Render target the block renderer talks to.
pub trait Canvas {
    /// Fill the whole target with one colour.
    fn clear(&mut self, color: Rgb<u8>);
    /// Colour for subsequent `fill_rect` calls.
    fn set_draw_color(&mut self, color: Rgb<u8>);
    fn fill_rect(&mut self, rect: Rect);
}

/* ---------- Software drawing into the framebuffer ---------- */

impl Canvas for FrameBuffer {
    fn clear(&mut self, color: Rgb<u8>) {
        self.pixels.fill(pack_rgb(color));
    }

    fn set_draw_color(&mut self, color: Rgb<u8>) {
        self.draw_color = pack_rgb(color);
    }

    /// Parts of `rect` outside the buffer are skipped.
    fn fill_rect(&mut self, rect: Rect) {
        let x0 = rect.x.max(0) as i64;
        let y0 = rect.y.max(0) as i64;
        let x1 = (rect.x as i64 + rect.w as i64).min(self.width as i64);
        let y1 = (rect.y as i64 + rect.h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let color = self.draw_color;
        for y in y0 as usize..y1 as usize {
            let row = y * self.width;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }
}

/* ---------- Window ---------- */

pub struct Drawer {
    window: Window,      // the on-screen window you see
    screen: FrameBuffer, // what gets pushed on every present
}

impl Drawer {
    /// Create a window and a matching black framebuffer.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window, screen: FrameBuffer::new(width, height) })
    }
}

impl Frontend for Drawer {
    type Target = FrameBuffer;

    /// Key presses since the last present, plus `Quit` once the window is closed.
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if !self.window.is_open() {
            events.push(InputEvent::Quit);
        }
        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            let event = match key {
                Key::Escape => InputEvent::Escape,
                Key::Enter => InputEvent::Start,
                Key::P => InputEvent::TogglePause,
                Key::Space | Key::R => InputEvent::Regenerate,
                _ => continue,
            };
            events.push(event);
        }
        events
    }

    fn target(&mut self) -> &mut FrameBuffer {
        &mut self.screen
    }

    /// Push the framebuffer to the window; this is also when minifb pumps input.
    fn present(&mut self) -> Result<(), Error> {
        self.window
            .update_with_buffer(&self.screen.pixels, self.screen.width, self.screen.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }
}
