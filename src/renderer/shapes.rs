//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{Rect, Snapshot};

/// Grass strip thickness on top of the ground band
const GRASS_HEIGHT: f32 = 5.0;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t) = (r.left(), r.top());
    let (rt, b) = (r.right(), r.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, b, color),
    ]
}

/// Generate vertices for a filled triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> [Vertex; 3] {
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

fn ground(field: Vec2, ground_y: f32, out: &mut Vec<Vertex>) {
    let band = Rect::new(0.0, ground_y, field.x, field.y - ground_y);
    out.extend(rect(&band, colors::GROUND));
    let grass = Rect::new(0.0, ground_y, field.x, GRASS_HEIGHT);
    out.extend(rect(&grass, colors::GRASS));
}

/// Body, two ears above the head, one eye facing right
fn rabbit(body: &Rect, out: &mut Vec<Vertex>) {
    out.extend(rect(body, colors::RABBIT));

    let ear_w = 8.0;
    let ear_h = 15.0;
    let left_ear = Rect::new(body.left() + 5.0, body.top() - ear_h, ear_w, ear_h);
    let right_ear = Rect::new(body.right() - 13.0, body.top() - ear_h, ear_w, ear_h);
    out.extend(rect(&left_ear, colors::RABBIT_EARS));
    out.extend(rect(&right_ear, colors::RABBIT_EARS));

    let eye = Rect::new(body.right() - 10.0, body.top() + 10.0, 4.0, 4.0);
    out.extend(rect(&eye, colors::RABBIT_EYE));
}

/// Orange point-up triangle filling the carrot's box, with a green tuft
fn carrot(bounds: &Rect, out: &mut Vec<Vertex>) {
    let y = bounds.bottom();
    let apex = Vec2::new(bounds.left() + bounds.size.x / 2.0, bounds.top());
    out.extend(triangle(
        Vec2::new(bounds.left(), y),
        Vec2::new(bounds.right(), y),
        apex,
        colors::CARROT,
    ));
    let greens = Rect::new(apex.x - 5.0, apex.y - 5.0, 10.0, 5.0);
    out.extend(rect(&greens, colors::GRASS));
}

/// Block with two cactus spikes poking out of the top
fn obstacle(r: &Rect, out: &mut Vec<Vertex>) {
    out.extend(rect(r, colors::OBSTACLE));
    let spike_a = Rect::new(r.left() + 5.0, r.top() - 10.0, 3.0, 10.0);
    let spike_b = Rect::new(r.left() + 12.0, r.top() - 15.0, 3.0, 15.0);
    out.extend(rect(&spike_a, colors::CACTUS));
    out.extend(rect(&spike_b, colors::CACTUS));
}

/// All vertices for one frame, back to front: ground, rabbit, carrot, obstacles
pub fn frame_vertices(snapshot: &Snapshot) -> Vec<Vertex> {
    // ground 12, rabbit 24, carrot 9, 18 per obstacle
    let mut out = Vec::with_capacity(45 + snapshot.obstacles.len() * 18);
    ground(snapshot.field, snapshot.ground_y, &mut out);
    rabbit(&snapshot.player, &mut out);
    carrot(&snapshot.carrot, &mut out);
    for r in &snapshot.obstacles {
        obstacle(r, &mut out);
    }
    out
}
