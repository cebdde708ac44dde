//! Planar geometry helpers
//!
//! Vector arithmetic (normalize, add, scale) comes straight from `glam::Vec2`;
//! this module adds the polygon predicates the growth algorithm needs.

use glam::Vec2;

/// Unit direction from the local origin towards `v`
///
/// Returns `None` for the zero vector (or anything too small to normalize).
#[inline]
pub fn outward_direction(v: Vec2) -> Option<Vec2> {
    v.try_normalize()
}

/// Even–odd (crossing number) point-in-polygon test
///
/// `ring` is treated as cyclic: the last vertex connects back to the first.
/// For every edge whose y-span contains `point.y` (half-open), the edge's x at
/// that height is compared against `point.x`; each crossing to the right of the
/// point toggles the result.
pub fn point_in_ring(point: Vec2, ring: &[Vec2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = ring[i];
        let pj = ring[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_at_y = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_at_y {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether `point` lies inside triangle `a`-`b`-`c` or on its edges
///
/// Works for either winding.
pub fn point_in_triangle(point: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = (b - a).perp_dot(point - a);
    let d2 = (c - b).perp_dot(point - b);
    let d3 = (a - c).perp_dot(point - c);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Whether `point` lies on segment `a`-`b` within `eps`
pub fn point_on_segment(point: Vec2, a: Vec2, b: Vec2, eps: f32) -> bool {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a) <= eps;
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t) <= eps
}

/// Signed shoelace area (positive for counter-clockwise rings)
pub fn signed_ring_area(ring: &[Vec2]) -> f32 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        twice += a.perp_dot(b);
    }
    twice * 0.5
}

/// Absolute polygon area
#[inline]
pub fn ring_area(ring: &[Vec2]) -> f32 {
    signed_ring_area(ring).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_outward_direction() {
        let dir = outward_direction(Vec2::new(3.0, 4.0)).unwrap();
        assert_relative_eq!(dir.x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(dir.y, 0.8, epsilon = 1e-6);
        assert!(outward_direction(Vec2::ZERO).is_none());
    }

    #[test]
    fn test_point_in_square() {
        let square = unit_square();
        assert!(point_in_ring(Vec2::new(0.5, 0.5), &square));
        assert!(!point_in_ring(Vec2::new(1.5, 0.5), &square));
        assert!(!point_in_ring(Vec2::new(-0.1, 0.5), &square));
        assert!(!point_in_ring(Vec2::new(0.5, 2.0), &square));
    }

    #[test]
    fn test_point_in_concave_ring() {
        // "C" shape opening to the right
        let ring = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(3.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 2.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(0.0, 3.0),
        ];
        assert!(point_in_ring(Vec2::new(0.5, 1.5), &ring));
        assert!(!point_in_ring(Vec2::new(2.0, 1.5), &ring));
        assert!(point_in_ring(Vec2::new(2.0, 0.5), &ring));
    }

    #[test]
    fn test_orientation_does_not_matter() {
        let mut square = unit_square();
        square.reverse();
        assert!(point_in_ring(Vec2::new(0.25, 0.75), &square));
    }

    #[test]
    fn test_degenerate_ring() {
        assert!(!point_in_ring(Vec2::ZERO, &[Vec2::ZERO, Vec2::X]));
    }

    #[test]
    fn test_point_in_triangle() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 0.0);
        let c = Vec2::new(0.0, 2.0);
        assert!(point_in_triangle(Vec2::new(0.5, 0.5), a, b, c));
        assert!(point_in_triangle(Vec2::new(0.5, 0.5), a, c, b));
        // Edges and corners count as inside
        assert!(point_in_triangle(Vec2::new(1.0, 0.0), a, b, c));
        assert!(point_in_triangle(Vec2::new(1.0, 1.0), a, b, c));
        assert!(point_in_triangle(c, a, b, c));
        assert!(!point_in_triangle(Vec2::new(1.5, 1.5), a, b, c));
        assert!(!point_in_triangle(Vec2::new(-0.1, 0.5), a, b, c));
    }

    #[test]
    fn test_point_on_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 0.0);
        assert!(point_on_segment(Vec2::new(1.0, 0.0), a, b, 1e-6));
        assert!(point_on_segment(Vec2::new(2.0, 0.0), a, b, 1e-6));
        assert!(!point_on_segment(Vec2::new(1.0, 0.1), a, b, 1e-6));
        assert!(!point_on_segment(Vec2::new(2.5, 0.0), a, b, 1e-6));
    }

    #[test]
    fn test_ring_area() {
        let square = unit_square();
        assert_relative_eq!(signed_ring_area(&square), 1.0);
        let mut cw = square.clone();
        cw.reverse();
        assert_relative_eq!(signed_ring_area(&cw), -1.0);
        assert_relative_eq!(ring_area(&cw), 1.0);
    }
}
