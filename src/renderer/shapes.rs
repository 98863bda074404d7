//! Shape generation for 2D primitives
//!
//! Everything is built from axis-aligned quads in playfield pixels
//! (origin top-left, y down).

use glam::Vec2;

use super::vertex::Vertex;

/// Segment masks for 0-9, bit 0 = top, then clockwise, bit 6 = middle
const DIGIT_SEGMENTS: [u8; 10] = [
    0b0111111, 0b0000110, 0b1011011, 0b1001111, 0b1100110, 0b1101101, 0b1111101, 0b0000111,
    0b1111111, 0b1101111,
];

/// Seven-segment glyph metrics
#[derive(Debug, Clone, Copy)]
pub struct DigitStyle {
    pub width: f32,
    pub height: f32,
    pub stroke: f32,
    /// Gap between adjacent digits
    pub spacing: f32,
}

impl DigitStyle {
    /// Width of `n` digits laid out side by side
    pub fn run_width(&self, n: usize) -> f32 {
        if n == 0 {
            0.0
        } else {
            n as f32 * self.width + (n - 1) as f32 * self.spacing
        }
    }
}

/// Two triangles covering `min..min+size`
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Dashed vertical line centered on `x`
pub fn dashed_vline(
    x: f32,
    height: f32,
    line_width: f32,
    dash: f32,
    gap: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let mut y = 0.0;
    while y < height {
        let len = dash.min(height - y);
        vertices.extend(rect(
            Vec2::new(x - line_width / 2.0, y),
            Vec2::new(line_width, len),
            color,
        ));
        y += dash + gap;
    }
    vertices
}

/// One decimal digit with its top-left corner at `origin`
pub fn digit(value: u8, origin: Vec2, style: &DigitStyle, color: [f32; 4]) -> Vec<Vertex> {
    let (w, h, t) = (style.width, style.height, style.stroke);
    let half = h / 2.0;
    let segments = [
        (Vec2::new(0.0, 0.0), Vec2::new(w, t)),
        (Vec2::new(w - t, 0.0), Vec2::new(t, half)),
        (Vec2::new(w - t, half), Vec2::new(t, half)),
        (Vec2::new(0.0, h - t), Vec2::new(w, t)),
        (Vec2::new(0.0, half), Vec2::new(t, half)),
        (Vec2::new(0.0, 0.0), Vec2::new(t, half)),
        (Vec2::new(0.0, half - t / 2.0), Vec2::new(w, t)),
    ];

    let mask = DIGIT_SEGMENTS[usize::from(value % 10)];
    segments
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .flat_map(|(_, (offset, size))| rect(origin + *offset, *size, color))
        .collect()
}

/// A whole number, left-aligned at `origin`
pub fn number(value: u32, origin: Vec2, style: &DigitStyle, color: [f32; 4]) -> Vec<Vertex> {
    value
        .to_string()
        .bytes()
        .enumerate()
        .flat_map(|(i, b)| {
            let x = origin.x + i as f32 * (style.width + style.spacing);
            digit(b - b'0', Vec2::new(x, origin.y), style, color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];
    const STYLE: DigitStyle = DigitStyle {
        width: 30.0,
        height: 50.0,
        stroke: 6.0,
        spacing: 10.0,
    };

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(5.0, 8.0), WHITE);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 15.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 28.0);
    }

    #[test]
    fn test_digit_segment_counts() {
        let origin = Vec2::ZERO;
        assert_eq!(digit(8, origin, &STYLE, WHITE).len(), 7 * 6);
        assert_eq!(digit(1, origin, &STYLE, WHITE).len(), 2 * 6);
        assert_eq!(digit(0, origin, &STYLE, WHITE).len(), 6 * 6);
        assert_eq!(digit(7, origin, &STYLE, WHITE).len(), 3 * 6);
    }

    #[test]
    fn test_number_lays_digits_left_to_right() {
        let v = number(10, Vec2::new(100.0, 0.0), &STYLE, WHITE);
        assert_eq!(v.len(), (2 + 6) * 6);
        let max_x = v.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert_eq!(max_x, 100.0 + STYLE.run_width(2));
    }

    #[test]
    fn test_dashed_line_covers_height() {
        let v = dashed_vline(400.0, 400.0, 2.0, 10.0, 10.0, WHITE);
        assert_eq!(v.len(), 20 * 6);
        let max_y = v.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(max_y, 390.0);
    }
}
