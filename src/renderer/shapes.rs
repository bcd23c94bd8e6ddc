//! Triangle lists for the surface primitives, in pixel space

use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Append a filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, x: f32, y: f32, radius: f32, color: [f32; 4], segments: u32) {
    out.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        out.push(Vertex::new(x, y, color));
        out.push(Vertex::new(
            x + radius * theta1.cos(),
            y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            x + radius * theta2.cos(),
            y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Append an axis-aligned filled rectangle (top-left origin)
pub fn rect(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
    let (x2, y2) = (x + w, y + h);

    out.push(Vertex::new(x, y, color));
    out.push(Vertex::new(x2, y, color));
    out.push(Vertex::new(x, y2, color));

    out.push(Vertex::new(x, y2, color));
    out.push(Vertex::new(x2, y, color));
    out.push(Vertex::new(x2, y2, color));
}

/// Map a pixel position (origin top-left, y down) to normalized device coords
pub fn pixel_to_ndc(x: f32, y: f32, width: f32, height: f32) -> [f32; 2] {
    [x / width * 2.0 - 1.0, 1.0 - y / height * 2.0]
}

/// Whether a region covers the whole `width` x `height` surface
pub fn covers_surface(x: f32, y: f32, w: f32, h: f32, width: f32, height: f32) -> bool {
    x <= 0.0 && y <= 0.0 && x + w >= width && y + h >= height
}
