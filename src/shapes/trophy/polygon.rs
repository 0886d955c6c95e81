use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub a_pos: [f32; 3],
}

const fn v(x: f32, y: f32) -> Vertex {
    Vertex { a_pos: [x, y, 0.0] }
}

// Trophy silhouette in clip space, stored exactly as authored: one vertex
// per triangle corner, 25 triangles, no deduplication.
pub const VERTICES: &[Vertex] = &[
    // left cup wall
    v(-0.2, -0.6),
    v(-0.2, 0.9),
    v(-0.15, 0.85),
    v(-0.2, -0.6),
    v(-0.15, 0.85),
    v(-0.15, -0.6),
    // rim points, left to right
    v(-0.15, 0.85),
    v(-0.2, 0.9),
    v(-0.15, 0.95),
    v(-0.15, 0.85),
    v(-0.15, 0.95),
    v(-0.1, 0.9),
    v(-0.15, 0.95),
    v(-0.1, 0.98),
    v(-0.1, 0.9),
    v(-0.1, 0.9),
    v(-0.1, 0.98),
    v(0.0, 1.0),
    v(-0.1, 0.9),
    v(0.0, 1.0),
    v(0.0, 0.92),
    v(0.0, 0.92),
    v(0.0, 1.0),
    v(0.1, 0.9),
    v(0.0, 1.0),
    v(0.1, 0.98),
    v(0.1, 0.9),
    v(0.1, 0.9),
    v(0.1, 0.98),
    v(0.15, 0.95),
    v(0.1, 0.9),
    v(0.15, 0.95),
    v(0.15, 0.85),
    v(0.15, 0.85),
    v(0.15, 0.95),
    v(0.2, 0.9),
    // right cup wall
    v(0.15, -0.6),
    v(0.15, 0.85),
    v(0.2, 0.9),
    v(0.15, -0.6),
    v(0.2, 0.9),
    v(0.2, -0.6),
    // cup base
    v(-0.12, -0.6),
    v(-0.1, -0.5),
    v(0.0, -0.5),
    v(-0.12, -0.6),
    v(0.0, -0.5),
    v(0.1, -0.5),
    v(-0.12, -0.6),
    v(0.1, -0.5),
    v(0.12, -0.6),
    v(-0.12, -0.6),
    v(0.12, -0.6),
    v(0.12, -0.62),
    v(-0.12, -0.6),
    v(0.12, -0.62),
    v(-0.12, -0.62),
    // stem
    v(-0.03, -0.9),
    v(-0.03, -0.62),
    v(0.03, -0.62),
    v(-0.03, -0.9),
    v(0.03, -0.62),
    v(0.03, -0.9),
    // foot
    v(-0.04, -0.92),
    v(-0.03, -0.9),
    v(0.03, -0.9),
    v(-0.04, -0.92),
    v(0.03, -0.9),
    v(0.04, -0.92),
    v(-0.04, -0.92),
    v(0.04, -0.92),
    v(0.04, -0.94),
    v(-0.04, -0.92),
    v(0.04, -0.94),
    v(-0.04, -0.94),
];

#[rustfmt::skip]
pub const INDICES: &[u16] = &[
    0, 1, 2,
    3, 4, 5,
    6, 7, 8,
    9, 10, 11,
    12, 13, 14,
    15, 16, 17,
    18, 19, 20,
    21, 22, 23,
    24, 25, 26,
    27, 28, 29,
    30, 31, 32,
    33, 34, 35,
    36, 37, 38,
    39, 40, 41,
    42, 43, 44,
    45, 46, 47,
    48, 49, 50,
    51, 52, 53,
    54, 55, 56,
    57, 58, 59,
    60, 61, 62,
    63, 64, 65,
    66, 67, 68,
    69, 70, 71,
    72, 73, 74,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn every_index_is_in_bounds() {
        for &index in INDICES {
            assert!((index as usize) < VERTICES.len());
        }
    }

    #[test]
    fn triangulation_is_complete() {
        assert_eq!(INDICES.len(), 75);
        assert_eq!(INDICES.len() % 3, 0);
        assert_eq!(VERTICES.len(), 75);
    }

    #[test]
    fn vertices_are_tightly_packed_positions() {
        assert_eq!(mem::size_of::<Vertex>(), 3 * mem::size_of::<f32>());
    }

    #[test]
    fn artwork_stays_inside_clip_space() {
        for vertex in VERTICES {
            let [x, y, z] = vertex.a_pos;
            assert!((-1.0..=1.0).contains(&x));
            assert!((-1.0..=1.0).contains(&y));
            assert_eq!(z, 0.0);
        }
    }
}
