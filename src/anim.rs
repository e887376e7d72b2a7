// Per-frame shape parameters.
// Visual: the circle swells from the window center and snaps back to a dot;
// the triangle grows while hopping to a new random spot every frame.

use crate::types::{CircleSpec, TriangleSpec};
use rand::Rng;

pub const INITIAL_CIRCLE_RADIUS: i32 = 0;
pub const INITIAL_TRIANGLE_SIDE_LENGTH: i32 = 100;

/// Both shapes' current parameters. Growth is plain integer stepping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animation {
    pub circle: CircleSpec,
    pub triangle: TriangleSpec,
}

impl Animation {
    /// Starting state for a `width x height` buffer (0x0 before the window is sized).
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            circle: CircleSpec {
                center_x: width / 2,
                center_y: height / 2,
                radius: INITIAL_CIRCLE_RADIUS,
            },
            triangle: TriangleSpec {
                top_x: width / 2,
                top_y: height / 2,
                side_length: INITIAL_TRIANGLE_SIDE_LENGTH,
            },
        }
    }

    /// One tick. `width`/`height` are the buffer's size right now; they may
    /// differ from last tick after a resize.
    pub fn advance<R: Rng>(&mut self, width: i32, height: i32, rng: &mut R) {
        let tri = &mut self.triangle;
        tri.side_length += 1;
        if tri.side_length > width || tri.side_length > height {
            log::debug!("triangle side reset at {}", tri.side_length);
            tri.side_length = 0;
        }

        // gen_range panics on an empty range, so a minimized window pins the apex.
        if width <= 0 || height <= 0 {
            tri.top_x = 0;
            tri.top_y = 0;
        } else {
            tri.top_x = rng.gen_range(0..width);
            tri.top_y = rng.gen_range(0..height);
        }

        let circle = &mut self.circle;
        circle.radius += 1;
        if circle.radius > width / 3 || circle.radius > height / 3 {
            log::debug!("circle radius reset at {}", circle.radius);
            circle.radius = 0;
        }

        // Track the live window size.
        circle.center_x = width / 2;
        circle.center_y = height / 2;
    }
}
