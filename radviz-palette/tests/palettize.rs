use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use radviz_palette::axes::axis_directions;
use radviz_palette::loader::lattice_points;
use radviz_palette::{
    PaletteConfig, Projection, palettize, palettize_logistic, palettize_normalized,
    palettize_reverse_polar,
};
use std::collections::BTreeSet;

fn depths(palette: &radviz_palette::PaletteMap) -> Vec<f64> {
    palette.values().map(|c| c.w).collect()
}

#[test]
fn two_layers_step_down_by_z_gap() {
    let points = vec![vec![0.1, 0.9]; 4];
    let layers = vec![vec![0, 1], vec![2, 3]];
    let palette = palettize_normalized(&points, &layers, &PaletteConfig::default()).unwrap();
    assert_eq!(depths(&palette), vec![0.0, 0.0, -1.0, -1.0]);
}

#[test]
fn requesting_more_levels_than_layers_keeps_layer_depth() {
    // One natural layer, two requested: 1 <= 2 keeps the layer track.
    let points = vec![vec![0.2, 0.8]; 4];
    let layers = vec![vec![0, 1, 2, 3]];
    let palette = palettize_normalized(&points, &layers, &PaletteConfig::new(2, 1.0)).unwrap();
    assert_eq!(depths(&palette), vec![0.0; 4]);
}

#[test]
fn surplus_layers_are_bucketed_by_point_count() {
    let points = vec![vec![0.2, 0.8]; 6];
    let layers = vec![vec![0], vec![1, 2], vec![3], vec![4, 5]];
    let palette = palettize_reverse_polar(&points, &layers, &PaletteConfig::new(3, 0.5)).unwrap();
    assert_eq!(depths(&palette), vec![0.0, 0.0, -0.5, -0.5, -1.0, -1.0]);
}

#[test]
fn unit_simplex_corners_match_axes() {
    let points = vec![
        vec![0.0, 0.0, 0.0],
        vec![1.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ];
    let layers = vec![vec![0, 1, 2, 3]];
    let palette = palettize_normalized(&points, &layers, &PaletteConfig::new(0, 0.0)).unwrap();

    let sqrt3_2 = 3f64.sqrt() / 2.0;
    let expected = [(0.0, 0.0), (1.0, 0.0), (-0.5, sqrt3_2), (-0.5, -sqrt3_2)];
    for (i, (u, v)) in expected.into_iter().enumerate() {
        assert_abs_diff_eq!(palette[&i].u, u, epsilon = 1e-12);
        assert_abs_diff_eq!(palette[&i].v, v, epsilon = 1e-12);
        assert_eq!(palette[&i].w, 0.0);
    }
}

#[test]
fn one_entry_per_layered_index() {
    let points = lattice_points(&[0.0, 1.0], 3);
    let layers = vec![vec![7, 2], vec![0, 5, 3]];
    for projection in Projection::ALL {
        let palette = palettize(projection, &points, &layers, &PaletteConfig::default()).unwrap();
        let keys: BTreeSet<usize> = palette.keys().copied().collect();
        assert_eq!(keys, BTreeSet::from([0, 2, 3, 5, 7]));
    }
}

#[test]
fn lattice_stays_inside_unit_disc() {
    let points = lattice_points(&[0.0, 0.5, 1.0], 3);
    let layers = vec![(0..points.len()).collect::<Vec<_>>()];
    for projection in [Projection::Normalized, Projection::Logistic] {
        let palette = palettize(projection, &points, &layers, &PaletteConfig::new(0, 0.0)).unwrap();
        assert_eq!(palette.len(), 27);
        for coord in palette.values() {
            assert!(coord.u.hypot(coord.v) <= 1.0 + 1e-12);
        }
        // Diagonal points balance out at the centre.
        assert_abs_diff_eq!(palette[&13].u, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(palette[&13].v, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn reverse_polar_scaled_points_can_coincide() {
    // For m = 2, u(k) = (1 - k*f0)^2 - (1 - k*f1)^2 returns to u(1) at k = (2 - s) / s
    // with s = f0 + f1, so scaling alone does not guarantee a new position.
    let layers = vec![vec![0]];
    let config = PaletteConfig::default();
    let base = palettize_reverse_polar(&[vec![0.2, 0.3]], &layers, &config).unwrap();
    let tripled = palettize_reverse_polar(&[vec![0.6, 0.9]], &layers, &config).unwrap();
    assert_abs_diff_eq!(base[&0].u, tripled[&0].u, epsilon = 1e-12);
    assert_abs_diff_eq!(base[&0].v, tripled[&0].v, epsilon = 1e-12);
}

#[test]
fn logistic_differs_from_normalized_off_centre() {
    let points = vec![vec![0.9, 0.2, 0.4]];
    let layers = vec![vec![0]];
    let config = PaletteConfig::default();
    let plain = palettize_normalized(&points, &layers, &config).unwrap();
    let stretched = palettize_logistic(&points, &layers, &config).unwrap();
    // Stretching pushes the dominant objective further out.
    assert!(stretched[&0].u.hypot(stretched[&0].v) > plain[&0].u.hypot(plain[&0].v));
}

#[test]
fn axes_start_at_zero_and_step_evenly() {
    let axes = axis_directions(6);
    assert_eq!(axes[0], (1.0, 0.0));
    assert_abs_diff_eq!(axes[3].0, -1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(axes[1].1, 3f64.sqrt() / 2.0, epsilon = 1e-15);
}

proptest! {
    #[test]
    fn normalized_projection_is_scale_invariant(
        point in prop::collection::vec(0.01f64..1.0, 2..8),
        k in 0.1f64..10.0,
    ) {
        let scaled: Vec<f64> = point.iter().map(|f| f * k).collect();
        let layers = vec![vec![0]];
        let config = PaletteConfig::default();

        let a = palettize_normalized(&[point], &layers, &config).unwrap();
        let b = palettize_normalized(&[scaled], &layers, &config).unwrap();

        prop_assert!((a[&0].u - b[&0].u).abs() < 1e-9);
        prop_assert!((a[&0].v - b[&0].v).abs() < 1e-9);
    }

    #[test]
    fn reverse_polar_projection_depends_on_scale(
        dimensions in 2usize..8,
        axis in 0usize..8,
        f in 0.1f64..0.9,
        k in prop_oneof![0.2f64..0.95, 1.05f64..1.1],
    ) {
        // A single non-zero objective lands at ((1 - f)^p - 1) along its own axis,
        // so any k != 1 moves it.
        let mut point = vec![0.0; dimensions];
        point[axis % dimensions] = f;
        let scaled: Vec<f64> = point.iter().map(|x| x * k).collect();
        let layers = vec![vec![0]];
        let config = PaletteConfig::default();

        let a = palettize_reverse_polar(&[point], &layers, &config).unwrap();
        let b = palettize_reverse_polar(&[scaled], &layers, &config).unwrap();

        prop_assert!((a[&0].u - b[&0].u).hypot(a[&0].v - b[&0].v) > 1e-6);
    }

    #[test]
    fn depth_never_increases_along_walk(
        sizes in prop::collection::vec(1usize..5, 1..8),
        n_layers in 0usize..6,
    ) {
        let total: usize = sizes.iter().sum();
        let points = vec![vec![0.3, 0.7, 0.5]; total];
        let mut layers = Vec::new();
        let mut next = 0;
        for size in sizes {
            layers.push((next..next + size).collect::<Vec<_>>());
            next += size;
        }

        let palette =
            palettize_normalized(&points, &layers, &PaletteConfig::new(n_layers, 1.0)).unwrap();
        let walk: Vec<f64> = layers.iter().flatten().map(|i| palette[i].w).collect();
        prop_assert_eq!(walk[0], 0.0);
        prop_assert!(walk.windows(2).all(|w| w[1] <= w[0]));
    }
}
