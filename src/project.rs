use crate::buffer::{ChannelSnapshot, SampleBuffer};

/// Device-space polylines for both channels, ready for a renderer.
///
/// Rebuilt from scratch on every render request; consumers draw it and
/// throw it away.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedFrame {
    pub channel_a: Vec<[f64; 2]>,
    pub channel_b: Vec<[f64; 2]>,
}

/// Snapshots the buffer and projects it onto a `width` x `height` canvas.
pub fn project(buffer: &SampleBuffer, width: f64, height: f64) -> ProjectedFrame {
    project_snapshot(&buffer.snapshot(), width, height)
}

/// Maps a snapshot to canvas coordinates with the zero line at vertical
/// center and positive values above it.
///
/// Sample `i` of `n` lands at `x = width * i / n` and
/// `y = h/2 - (h/2) * value / scale`. Pure function of its inputs; a zero
/// or negative canvas size just yields degenerate coordinates, which a
/// renderer may skip drawing.
pub fn project_snapshot(snapshot: &ChannelSnapshot, width: f64, height: f64) -> ProjectedFrame {
    let scale = snapshot.scale();
    let half_height = height / 2.0;
    let n = snapshot.channel_a.len();
    let place = |channel: &[f64]| -> Vec<[f64; 2]> {
        channel
            .iter()
            .enumerate()
            .map(|(i, value)| {
                [
                    width * i as f64 / n as f64,
                    half_height - half_height * value / scale,
                ]
            })
            .collect()
    };
    ProjectedFrame {
        channel_a: place(&snapshot.channel_a),
        channel_b: place(&snapshot.channel_b),
    }
}
