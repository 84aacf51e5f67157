//! Shape generation for 2D primitives
//!
//! Vertices come out in screen pixels (origin top-left, y down) and are
//! converted to clip space with `pixel_to_ndc` before upload.

use super::scene::{FillRect, Scene};
use super::vertex::Vertex;

/// Map a pixel coordinate on a `width`×`height` field to NDC (-1..1, y up)
pub fn pixel_to_ndc(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    (x / width * 2.0 - 1.0, 1.0 - y / height * 2.0)
}

/// Two triangles covering a filled rectangle
pub fn rect(fill: &FillRect) -> [Vertex; 6] {
    let r = fill.rect;
    let color = fill.color.to_f32();
    let (x0, y0) = (r.x as f32, r.y as f32);
    let (x1, y1) = (x0 + r.w as f32, y0 + r.h as f32);

    [
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// All of a scene's rectangles as NDC triangles
pub fn scene_vertices(scene: &Scene, width: f32, height: f32) -> Vec<Vertex> {
    scene
        .rects
        .iter()
        .flat_map(rect)
        .map(|v| {
            let (x, y) = pixel_to_ndc(v.position[0], v.position[1], width, height);
            Vertex::new(x, y, v.color)
        })
        .collect()
}
