/// RadViz anchor directions evenly spaced on the unit circle
use std::f64::consts::PI;

/// Unit vector for each objective, `axis[i] = (cos θi, sin θi)`
/// with `θi = 2πi/m`.
pub fn axis_directions(dimensions: usize) -> Vec<(f64, f64)> {
    (0..dimensions)
        .map(|i| {
            let theta = 2.0 * PI * (i as f64 / dimensions as f64);
            (theta.cos(), theta.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn first_axis_points_along_u() {
        for m in 2..10 {
            assert_eq!(axis_directions(m)[0], (1.0, 0.0));
        }
    }

    #[test]
    fn axes_are_unit_and_evenly_spaced() {
        for m in 2..=12 {
            let axes = axis_directions(m);
            assert_eq!(axes.len(), m);
            let step = 2.0 * PI / m as f64;
            for (i, &(c, s)) in axes.iter().enumerate() {
                assert_abs_diff_eq!(c.hypot(s), 1.0, epsilon = 1e-12);
                let angle = s.atan2(c).rem_euclid(2.0 * PI);
                assert_abs_diff_eq!(angle, step * i as f64, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn square_axes() {
        let axes = axis_directions(4);
        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        for (axis, want) in axes.iter().zip(expected) {
            assert_abs_diff_eq!(axis.0, want.0, epsilon = 1e-15);
            assert_abs_diff_eq!(axis.1, want.1, epsilon = 1e-15);
        }
    }
}
