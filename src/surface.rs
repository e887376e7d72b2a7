// The window the framebuffer is shown in.
// Visual: a resizable window titled from the config; whatever sits in the
// buffer when `present()` runs is what you see.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Window, WindowOptions};

/// Something that happened to the window since the last poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The backing buffer was reallocated (and cleared) to this size.
    Resized { width: usize, height: usize },
    /// The user closed the window.
    CloseRequested,
}

/// What the frame loop needs from a display: events, a buffer to draw into,
/// and a way to put that buffer on screen.
pub trait Surface {
    /// Non-blocking. May resize the buffer before returning.
    fn poll_events(&mut self) -> Vec<SurfaceEvent>;

    /// Current buffer. Its size can change between polls, so callers re-read
    /// width/height every frame.
    fn buffer_mut(&mut self) -> &mut FrameBuffer;

    /// Show the whole buffer.
    fn present(&mut self) -> Result<(), Error>;
}

/// minifb-backed surface. minifb pumps the OS message queue inside
/// `update`/`update_with_buffer`, so `present` is also where input arrives;
/// `poll_events` only reads what that pump left behind.
pub struct Drawer {
    window: Window,
    frame: FrameBuffer,
}

impl Drawer {
    /// Open the window and allocate a buffer matching its client area.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions {
            resize: true,
            ..WindowOptions::default()
        };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;

        // Draw as fast as the host lets us.
        window.set_target_fps(0);

        let (w, h) = window.get_size();
        log::info!("window open: {w}x{h}");
        Ok(Self {
            window,
            frame: FrameBuffer::new(w, h),
        })
    }
}

impl Surface for Drawer {
    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        let mut events = Vec::new();

        if !self.window.is_open() {
            events.push(SurfaceEvent::CloseRequested);
            return events;
        }

        let (w, h) = self.window.get_size();
        if (w, h) != (self.frame.width(), self.frame.height()) {
            self.frame.resize(w, h);
            events.push(SurfaceEvent::Resized { width: w, height: h });
        }

        events
    }

    fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    fn present(&mut self) -> Result<(), Error> {
        // Closed between poll and present: nothing left to show.
        if !self.window.is_open() {
            return Ok(());
        }

        // Minimized: minifb rejects a 0-sized buffer, but events still need pumping.
        if self.frame.is_empty() {
            self.window.update();
            return Ok(());
        }

        self.window
            .update_with_buffer(self.frame.pixels(), self.frame.width(), self.frame.height())
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }
}
