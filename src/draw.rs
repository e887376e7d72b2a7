// Software shape drawing straight into the framebuffer.
// Visual effects provided here:
// 1) A circle outline: white rim, blue halo above/below each rim pixel, green
//    vertical runs plugging the holes between steep neighbouring columns.
// 2) A 45-45-90 triangle outline with a red dot on its apex.
//
// Every write goes through `FrameBuffer::set_pixel`, so shapes hanging off the
// window edge simply lose their off-screen pixels.

use crate::types::{FrameBuffer, BLUE, GREEN, RED, WHITE};

/// Integer square root, truncated toward zero.
/// Must match `(int)sqrt(v)` so the rim lands on exactly the same pixels.
#[inline]
fn isqrt(v: i64) -> i64 {
    if v <= 0 {
        return 0;
    }
    (v as f64).sqrt() as i64
}

/// Rim height (distance from the center row) for column offset `x`.
#[inline]
fn rim(radius: i64, x: i64) -> i64 {
    isqrt(radius * radius - x * x)
}

/// Red dot on the center with a green plus around it.
/// All five share the center's (strict) guard; each write is still bounds-checked.
fn mark_center(fb: &mut FrameBuffer, cx: i64, cy: i64) {
    if !fb.contains_interior(cx, cy) {
        return;
    }
    fb.set_pixel(cx, cy, RED);
    fb.set_pixel(cx - 1, cy, GREEN);
    fb.set_pixel(cx + 1, cy, GREEN);
    fb.set_pixel(cx, cy - 1, GREEN);
    fb.set_pixel(cx, cy + 1, GREEN);
}

/// One half of the circle. `dir` is +1 for the half at `cy + rim`, -1 for `cy - rim`.
fn draw_half_circle(fb: &mut FrameBuffer, cx: i64, cy: i64, radius: i64, dir: i64) {
    for x in -radius..=radius {
        let y = dir * rim(radius, x);
        let px = cx + x;

        // Rim pixel; the blue halo only goes down when the rim itself landed.
        if fb.set_pixel(px, cy + y, WHITE) {
            fb.set_pixel(px, cy + y - 1, BLUE);
            fb.set_pixel(px, cy + y + 1, BLUE);
        }

        // Fill the vertical gap toward the neighbour column nearer the center.
        // Half-open: the neighbour's own rim row is not painted.
        let neighbour = match x {
            0 => continue,
            x if x < 0 => x + 1,
            x => x - 1,
        };
        let next_y = dir * rim(radius, neighbour);
        let mut i = y;
        while (dir > 0 && i < next_y) || (dir < 0 && i > next_y) {
            fb.set_pixel(px, cy + i, GREEN);
            i += dir;
        }
    }
}

/// Draw a circle outline centered at (cx,cy).
/// Radii of 0 or 1 only get the center marker.
pub fn draw_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32) {
    // Shape math runs in i64: a center near i32::MAX plus the radius must not wrap.
    let (cx, cy, radius) = (i64::from(cx), i64::from(cy), i64::from(radius));
    mark_center(fb, cx, cy);

    if radius <= 1 {
        return;
    }

    draw_half_circle(fb, cx, cy, radius, 1);
    draw_half_circle(fb, cx, cy, radius, -1);
}

/// Draw a 45-45-90 triangle with its apex at (top_x, top_y).
///
/// The horizontal edge spans `side_length + 1` pixels starting at
/// `top_x - side_length/2`, on row `top_y - side_length/2`. The two slanted
/// edges run at slope ±1 from one row past that edge's ends toward the apex column.
pub fn draw_triangle(fb: &mut FrameBuffer, top_x: i32, top_y: i32, side_length: i32) {
    let (top_x, top_y, side_length) = (i64::from(top_x), i64::from(top_y), i64::from(side_length));

    if fb.contains_interior(top_x, top_y) {
        fb.set_pixel(top_x, top_y, RED);
    }

    if side_length <= 1 {
        return;
    }

    // `/` truncates toward zero, same as the integer math this pattern came from.
    let left_x = top_x - side_length / 2;
    let right_x = left_x + side_length;
    let edge_y = top_y - side_length / 2;

    for x in left_x..=right_x {
        fb.set_pixel(x, edge_y, WHITE);
    }

    // Left edge, slope +1.
    for x in left_x..=top_x {
        fb.set_pixel(x, edge_y + (x - left_x) + 1, WHITE);
    }

    // Right edge, slope -1.
    for x in (top_x + 1)..=right_x {
        fb.set_pixel(x, edge_y + (right_x - x) + 1, WHITE);
    }
}
