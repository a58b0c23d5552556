/// Depth (w) bookkeeping across ordered layers
use serde::{Deserialize, Serialize};

/// Which counter supplies the depth coordinate for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthTrack {
    /// One depth level per natural layer.
    Layer,
    /// Natural layers are merged into `n_layers` buckets by point volume.
    Count,
}

impl DepthTrack {
    /// Chosen once per run: requesting at least as many levels as there are
    /// natural layers (or none at all) keeps the layer-indexed depth.
    pub fn select(natural_layers: usize, n_layers: usize) -> Self {
        if n_layers == 0 || natural_layers <= n_layers {
            DepthTrack::Layer
        } else {
            DepthTrack::Count
        }
    }
}

/// Walks layers in order and hands out a depth per point.
///
/// Both tracks start at 0.0 and step down by `z_gap`. The layer track steps
/// after every completed layer; the count track steps whenever the running
/// point counter reaches `points_per_layer`, then resets the counter.
#[derive(Debug, Clone)]
pub struct DepthAssigner {
    track: DepthTrack,
    z_gap: f64,
    points_per_layer: f64,
    layer_depth: f64,
    count_depth: f64,
    count: usize,
}

impl DepthAssigner {
    pub fn new(natural_layers: usize, n_layers: usize, total_points: usize, z_gap: f64) -> Self {
        let points_per_layer = if n_layers > 0 {
            total_points as f64 / n_layers as f64
        } else {
            f64::INFINITY
        };

        Self {
            track: DepthTrack::select(natural_layers, n_layers),
            z_gap,
            points_per_layer,
            layer_depth: 0.0,
            count_depth: 0.0,
            count: 0,
        }
    }

    pub fn track(&self) -> DepthTrack {
        self.track
    }

    pub fn points_per_layer(&self) -> f64 {
        self.points_per_layer
    }

    /// Depth for the next point in walk order.
    pub fn next_point(&mut self) -> f64 {
        let depth = match self.track {
            DepthTrack::Layer => self.layer_depth,
            DepthTrack::Count => self.count_depth,
        };

        // Integer counter against a fractional threshold: buckets can be
        // uneven when the point count does not divide evenly.
        self.count += 1;
        if self.count as f64 >= self.points_per_layer {
            self.count = 0;
            self.count_depth -= self.z_gap;
        }

        depth
    }

    /// Mark the current layer as fully walked.
    pub fn finish_layer(&mut self) {
        self.layer_depth -= self.z_gap;
    }
}
