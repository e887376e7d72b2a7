// The main loop: poll window -> draw shapes -> step animation -> spray noise -> present.
// Visual: shapes pile up on top of each other frame after frame (the buffer is
// never cleared), sprinkled with random-colored dots.

use crate::anim::Animation;
use crate::draw::{draw_circle, draw_triangle};
use crate::error::Error;
use crate::surface::{Surface, SurfaceEvent};
use crate::types::FrameBuffer;
use rand::Rng;
use std::time::{Duration, Instant};

/// Random pixels recolored per frame.
pub const RANDOM_PIXELS_PER_FRAME: usize = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// Set `count` random pixels to random 32-bit colors.
/// Returns how many writes happened: `count`, or 0 for a zero-area buffer.
pub fn scatter_random_pixels<R: Rng>(fb: &mut FrameBuffer, rng: &mut R, count: usize) -> usize {
    let area = fb.area();
    if area == 0 {
        return 0;
    }
    let mut written = 0;
    for _ in 0..count {
        let idx = rng.gen_range(0..area);
        // High byte is noise too; minifb ignores it.
        if fb.set_index(idx, rng.r#gen::<u32>()) {
            written += 1;
        }
    }
    written
}

/// Owns everything that used to be process-wide: run flag, animation, RNG.
pub struct FrameLoop<R: Rng> {
    state: RunState,
    animation: Animation,
    rng: R,
    frames: u64,
}

impl<R: Rng> FrameLoop<R> {
    /// Shapes start centered on `fb` as it is right now.
    pub fn new(fb: &FrameBuffer, rng: R) -> Self {
        let (w, h) = fb.dims_i32();
        Self {
            state: RunState::Running,
            animation: Animation::new(w, h),
            rng,
            frames: 0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[cfg(test)]
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// A close only flips the state; the frame in progress still finishes and
    /// the loop notices at the top of the next iteration.
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::CloseRequested => {
                log::info!("close requested");
                self.state = RunState::Stopped;
            }
            SurfaceEvent::Resized { width, height } => {
                log::debug!("buffer resized to {width}x{height}");
            }
        }
    }

    /// Draw one frame into `fb` and step the animation.
    /// Returns the number of random-fill writes.
    pub fn tick(&mut self, fb: &mut FrameBuffer) -> usize {
        let c = self.animation.circle;
        draw_circle(fb, c.center_x, c.center_y, c.radius);

        let t = self.animation.triangle;
        draw_triangle(fb, t.top_x, t.top_y, t.side_length);

        // Size is re-read every tick: the window may have been resized since last frame.
        let (w, h) = fb.dims_i32();
        self.animation.advance(w, h, &mut self.rng);

        scatter_random_pixels(fb, &mut self.rng, RANDOM_PIXELS_PER_FRAME)
    }

    /// Run until the surface reports a close.
    pub fn run<S: Surface>(&mut self, surface: &mut S) -> Result<(), Error> {
        let mut last_fps_time = Instant::now();
        let mut frames_this_second: u32 = 0;

        while self.state == RunState::Running {
            for event in surface.poll_events() {
                self.handle_event(event);
            }

            self.tick(surface.buffer_mut());

            surface.present().inspect_err(|e| log::error!("{e}"))?;
            self.frames += 1;

            // FPS once per second.
            frames_this_second += 1;
            let now = Instant::now();
            if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
                let secs = now.duration_since(last_fps_time).as_secs_f32();
                log::info!("FPS: {:.1}", frames_this_second as f32 / secs);
                frames_this_second = 0;
                last_fps_time = now;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    /// Scripted stand-in for the window. Each poll pops one batch; once the
    /// script runs dry the fake reports a close.
    struct FakeSurface {
        frame: FrameBuffer,
        script: VecDeque<Vec<SurfaceEvent>>,
        polls: usize,
        presents: usize,
        fail_present: bool,
    }

    impl FakeSurface {
        fn new(width: usize, height: usize, script: Vec<Vec<SurfaceEvent>>) -> Self {
            Self {
                frame: FrameBuffer::new(width, height),
                script: script.into(),
                polls: 0,
                presents: 0,
                fail_present: false,
            }
        }
    }

    impl Surface for FakeSurface {
        fn poll_events(&mut self) -> Vec<SurfaceEvent> {
            self.polls += 1;
            let batch = self
                .script
                .pop_front()
                .unwrap_or_else(|| vec![SurfaceEvent::CloseRequested]);
            for event in &batch {
                if let SurfaceEvent::Resized { width, height } = *event {
                    self.frame.resize(width, height);
                }
            }
            batch
        }

        fn buffer_mut(&mut self) -> &mut FrameBuffer {
            &mut self.frame
        }

        fn present(&mut self) -> Result<(), Error> {
            if self.fail_present {
                return Err(Error::WindowUpdate("fake failure".into()));
            }
            self.presents += 1;
            Ok(())
        }
    }

    #[test]
    fn scatter_writes_exactly_count_inside_buffer() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut fb = FrameBuffer::new(100, 100);
        let written = scatter_random_pixels(&mut fb, &mut rng, RANDOM_PIXELS_PER_FRAME);
        assert_eq!(written, 300);
        assert_eq!(fb.area(), 10_000);
        // Collisions and zero colors are possible, so just bound the changes.
        let changed = fb.pixels().iter().filter(|&&p| p != 0).count();
        assert!(changed > 0 && changed <= 300);
    }

    #[test]
    fn scatter_on_single_pixel_hits_it_every_time() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut fb = FrameBuffer::new(1, 1);
        assert_eq!(scatter_random_pixels(&mut fb, &mut rng, 300), 300);
    }

    #[test]
    fn zero_area_tick_writes_nothing() {
        let mut rng = StdRng::seed_from_u64(9);
        for (w, h) in [(0, 0), (0, 50), (50, 0)] {
            let mut fb = FrameBuffer::new(w, h);
            assert_eq!(scatter_random_pixels(&mut fb, &mut rng, 300), 0);

            let mut frame_loop = FrameLoop::new(&fb, StdRng::seed_from_u64(10));
            assert_eq!(frame_loop.tick(&mut fb), 0);
            let t = frame_loop.animation().triangle;
            assert_eq!((t.top_x, t.top_y), (0, 0));
        }
    }

    #[test]
    fn tick_draws_and_advances() {
        let mut fb = FrameBuffer::new(120, 90);
        let mut frame_loop = FrameLoop::new(&fb, StdRng::seed_from_u64(11));
        assert_eq!(frame_loop.animation().circle.radius, 0);
        assert_eq!(frame_loop.animation().triangle.side_length, 100);

        assert_eq!(frame_loop.tick(&mut fb), RANDOM_PIXELS_PER_FRAME);
        // 101 > 90 wraps the side at once; radius steps to 1.
        assert_eq!(frame_loop.animation().triangle.side_length, 0);
        assert_eq!(frame_loop.animation().circle.radius, 1);
        assert!(fb.pixels().iter().any(|&p| p != 0));
    }

    #[test]
    fn same_seed_same_frames() {
        let mut a = FrameBuffer::new(64, 48);
        let mut b = FrameBuffer::new(64, 48);
        let mut la = FrameLoop::new(&a, StdRng::seed_from_u64(12));
        let mut lb = FrameLoop::new(&b, StdRng::seed_from_u64(12));
        for _ in 0..20 {
            la.tick(&mut a);
            lb.tick(&mut b);
        }
        assert_eq!(a.pixels(), b.pixels());
        assert_eq!(la.animation(), lb.animation());
    }

    #[test]
    fn close_finishes_current_frame_then_stops() {
        let mut surface = FakeSurface::new(40, 30, vec![vec![], vec![]]);
        let mut frame_loop = FrameLoop::new(&surface.frame, StdRng::seed_from_u64(13));

        // Third poll reports the close; that frame is still drawn and presented.
        frame_loop.run(&mut surface).unwrap();
        assert_eq!(frame_loop.frames(), 3);
        assert_eq!(surface.polls, 3);
        assert_eq!(surface.presents, 3);
        assert_eq!(frame_loop.state(), RunState::Stopped);
    }

    #[test]
    fn survives_resize_to_zero_and_back() {
        let script = vec![
            vec![],
            vec![SurfaceEvent::Resized { width: 0, height: 0 }],
            vec![],
            vec![SurfaceEvent::Resized { width: 25, height: 10 }],
            vec![],
        ];
        let mut surface = FakeSurface::new(80, 60, script);
        let mut frame_loop = FrameLoop::new(&surface.frame, StdRng::seed_from_u64(14));

        frame_loop.run(&mut surface).unwrap();
        assert_eq!(frame_loop.frames(), 6);
        assert_eq!(surface.frame.area(), 250);
        let c = frame_loop.animation().circle;
        assert_eq!((c.center_x, c.center_y), (12, 5));
    }

    #[test]
    fn present_failure_ends_run_with_error() {
        let mut surface = FakeSurface::new(10, 10, vec![vec![]; 5]);
        surface.fail_present = true;
        let mut frame_loop = FrameLoop::new(&surface.frame, StdRng::seed_from_u64(15));

        let err = frame_loop.run(&mut surface).unwrap_err();
        assert!(matches!(err, Error::WindowUpdate(_)));
        assert_eq!(surface.polls, 1);
        assert_eq!(frame_loop.frames(), 0);
        assert_eq!(frame_loop.state(), RunState::Running);
    }
}
