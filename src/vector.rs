//! Projection helpers used by the ramp test. All of them expect `n` to be a unit vector.

use glam::Vec2;

/// Component of `p` parallel to `n`.
#[inline]
pub fn project_onto_normal(p: Vec2, n: Vec2) -> Vec2 {
    n * p.dot(n)
}

/// Component of `p` orthogonal to `n`.
#[inline]
pub fn project_perpendicular_to_normal(p: Vec2, n: Vec2) -> Vec2 {
    p - project_onto_normal(p, n)
}

/// Mirror `v` about the surface with normal `n`.
#[inline]
pub fn reflect(v: Vec2, n: Vec2) -> Vec2 {
    v - n * (2.0 * v.dot(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_and_perpendicular_sum_to_input() {
        let normals = [
            Vec2::new(0.0, -1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(-1.0, -1.0).normalize(),
            Vec2::new(3.0, 4.0).normalize(),
        ];
        let inputs = [
            Vec2::new(2.5, -1.0),
            Vec2::new(-7.0, 0.25),
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 33.3),
        ];
        for n in normals {
            for p in inputs {
                let sum = project_onto_normal(p, n) + project_perpendicular_to_normal(p, n);
                assert!(sum.abs_diff_eq(p, 1e-3), "p={p:?} n={n:?} sum={sum:?}");
            }
        }
    }

    #[test]
    fn test_perpendicular_is_orthogonal() {
        let n = Vec2::new(-1.0, -1.0).normalize();
        let perp = project_perpendicular_to_normal(Vec2::new(0.3, 2.0), n);
        assert!(perp.dot(n).abs() < 1e-5);
    }

    #[test]
    fn test_reflect_off_floor() {
        let r = reflect(Vec2::new(3.0, 6.0), Vec2::new(0.0, -1.0));
        assert!(r.abs_diff_eq(Vec2::new(3.0, -6.0), 1e-6));
    }

    #[test]
    fn test_reflect_off_diagonal() {
        let n = Vec2::new(-1.0, -1.0).normalize();
        let r = reflect(Vec2::new(0.0, 10.0), n);
        assert!(r.abs_diff_eq(Vec2::new(-10.0, 0.0), 1e-4));
    }
}
