// Main loop as a small state machine.
// The window is behind `Frontend`, so the loop runs the same against minifb
// or a scripted stand-in.

use crate::draw::Canvas;
use crate::error::Error;
use crate::noise::NoiseSource;
use crate::render::render;
use crate::terrain::generate;
use crate::types::HeightField;
use image::Rgb;
use std::time::{Duration, Instant};

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    AwaitingStart, // paused; the last frame stays on screen
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,        // window closed
    Escape,
    Start,       // Enter
    TogglePause, // P
    Regenerate,  // Space / R
}

impl LoopState {
    /// Next state after `event`. `Regenerate` never changes the state.
    pub fn on(self, event: InputEvent) -> LoopState {
        use InputEvent::*;
        use LoopState::*;
        match (self, event) {
            (Stopped, _) => Stopped,
            (_, Quit | Escape) => Stopped,
            (AwaitingStart, Start | TogglePause) => Running,
            (Running, TogglePause) => AwaitingStart,
            (state, Start | Regenerate) => state,
        }
    }
}

/// What the loop needs from a window.
pub trait Frontend {
    type Target: Canvas;

    /// Drain pending input without blocking.
    fn poll_events(&mut self) -> Vec<InputEvent>;
    fn target(&mut self) -> &mut Self::Target;
    fn present(&mut self) -> Result<(), Error>;
}

/// The terrain being shown plus what it takes to make a new one.
pub struct Session {
    field: HeightField,
    noise: Box<dyn NoiseSource>,
    scale: f64,
}

impl Session {
    pub fn new(width: usize, height: usize, scale: f64, mut noise: Box<dyn NoiseSource>) -> Result<Self, Error> {
        let field = generate(width, height, scale, noise.as_mut())?;
        Ok(Self { field, noise, scale })
    }

    pub fn field(&self) -> &HeightField {
        &self.field
    }

    /// Replace the field with a fresh one; the noise source keeps advancing,
    /// so uniform noise gives new terrain each time.
    pub fn regenerate(&mut self) -> Result<(), Error> {
        let (width, height) = (self.field.width(), self.field.height());
        self.field = generate(width, height, self.scale, self.noise.as_mut())?;
        Ok(())
    }
}

/// Loop knobs that don't come from the terrain itself.
pub struct LoopOptions {
    pub block_size: usize,
    pub frame_delay: Duration,
    pub start_paused: bool,
    pub report_fps: bool,
}

/// Rendered frames per second, reported once a second.
struct FpsCounter {
    last: Instant,
    frames: u32,
}

impl FpsCounter {
    fn new(now: Instant) -> Self {
        Self { last: now, frames: 0 }
    }

    fn record_frame(&mut self) {
        self.frames += 1;
    }

    /// Rate since the last report, once at least a second has passed.
    fn poll(&mut self, now: Instant) -> Option<f32> {
        let elapsed = now.duration_since(self.last);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.last = now;
        Some(fps)
    }
}

/// Run until a quit/escape event arrives. Returns the number of frames drawn.
pub fn run<F: Frontend>(frontend: &mut F, session: &mut Session, opts: &LoopOptions) -> Result<u64, Error> {
    let mut state = if opts.start_paused { LoopState::AwaitingStart } else { LoopState::Running };
    let mut frames_drawn: u64 = 0;

    let mut fps = FpsCounter::new(Instant::now());

    if state == LoopState::AwaitingStart {
        println!("Paused: press Enter to start");
    }

    while state != LoopState::Stopped {
        /* 1) Inputs: fold every pending event through the state machine. */
        let mut regenerate = false;
        for event in frontend.poll_events() {
            let next = state.on(event);
            if next != state {
                println!("{state:?} -> {next:?} ({event:?})");
            }
            if event == InputEvent::Regenerate && next != LoopState::Stopped {
                regenerate = true;
            }
            state = next;
        }
        if state == LoopState::Stopped {
            break;
        }

        if regenerate {
            session.regenerate()?;
            println!("Terrain regenerated");
        }

        /* 2) Full redraw while running; paused frames keep the old picture. */
        if state == LoopState::Running || regenerate {
            let target = frontend.target();
            target.clear(BACKGROUND);
            render(target, session.field(), opts.block_size);
            frames_drawn += 1;
            fps.record_frame();
        }

        /* 3) Present (also keeps the window pumping input while paused). */
        frontend.present()?;

        /* 4) FPS once per second, like a heartbeat in the terminal. Paused frames don't count. */
        if let Some(rate) = fps.poll(Instant::now()) {
            if opts.report_fps {
                println!("FPS: {rate:.1}");
            }
        }

        if !opts.frame_delay.is_zero() {
            std::thread::sleep(opts.frame_delay);
        }
    }

    Ok(frames_drawn)
}
