use std::collections::VecDeque;

use crate::error::ChartError;

/// Floor for the autoscale factor so projection never divides by zero
/// while the whole window is still flat.
pub const SCALE_EPSILON: f64 = 1e-5;

/// Owned copy of both channels, oldest sample first.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelSnapshot {
    pub channel_a: Vec<f64>,
    pub channel_b: Vec<f64>,
}

impl ChannelSnapshot {
    /// Largest magnitude across both channels, floored at [`SCALE_EPSILON`].
    pub fn scale(&self) -> f64 {
        peak(self.channel_a.iter())
            .max(peak(self.channel_b.iter()))
            .max(SCALE_EPSILON)
    }
}

/// Rolling history of the last `capacity` samples per channel.
///
/// Both channels start zero-filled, so a freshly constructed buffer projects
/// to a flat line at the vertical center until real data arrives.
pub struct SampleBuffer {
    channel_a: VecDeque<f64>,
    channel_b: VecDeque<f64>,
    capacity: usize,
}

impl SampleBuffer {
    pub fn new(capacity: usize) -> Result<Self, ChartError> {
        if capacity == 0 {
            return Err(ChartError::InvalidCapacity);
        }
        Ok(Self {
            channel_a: std::iter::repeat(0.0).take(capacity).collect(),
            channel_b: std::iter::repeat(0.0).take(capacity).collect(),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pushes one sample onto each channel, evicting the oldest pair.
    ///
    /// Values are stored as-is, NaN and extremes included; rejecting
    /// malformed frames is the decoder's job upstream.
    pub fn append(&mut self, x: f64, y: f64) {
        push_bounded(&mut self.channel_a, x, self.capacity);
        push_bounded(&mut self.channel_b, y, self.capacity);
    }

    /// Current autoscale factor, recomputed fresh on every call so it
    /// always reflects the latest append.
    pub fn scale(&self) -> f64 {
        peak(self.channel_a.iter())
            .max(peak(self.channel_b.iter()))
            .max(SCALE_EPSILON)
    }

    pub fn snapshot(&self) -> ChannelSnapshot {
        ChannelSnapshot {
            channel_a: self.channel_a.iter().copied().collect(),
            channel_b: self.channel_b.iter().copied().collect(),
        }
    }
}

fn peak<'a>(values: impl Iterator<Item = &'a f64>) -> f64 {
    values.fold(0.0f64, |acc, v| acc.max(v.abs()))
}

fn push_bounded(channel: &mut VecDeque<f64>, value: f64, capacity: usize) {
    while channel.len() >= capacity {
        channel.pop_front();
    }
    channel.push_back(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_channels_keep_exactly_capacity_samples() {
        let mut buffer = SampleBuffer::new(5).unwrap();
        for i in 0..37 {
            let snapshot = buffer.snapshot();
            assert_eq!(snapshot.channel_a.len(), 5);
            assert_eq!(snapshot.channel_b.len(), 5);
            buffer.append(i as f64, -(i as f64));
        }
        assert_eq!(buffer.snapshot().channel_a.len(), 5);
    }

    #[test]
    fn oldest_samples_are_evicted_first() {
        let mut buffer = SampleBuffer::new(3).unwrap();
        buffer.append(1.0, 10.0);
        buffer.append(2.0, 20.0);
        buffer.append(3.0, 30.0);
        buffer.append(4.0, 40.0);
        let snapshot = buffer.snapshot();
        assert_eq!(snapshot.channel_a, vec![2.0, 3.0, 4.0]);
        assert_eq!(snapshot.channel_b, vec![20.0, 30.0, 40.0]);
    }

    #[test]
    fn scale_is_the_largest_magnitude_in_either_channel() {
        let mut buffer = SampleBuffer::new(3).unwrap();
        buffer.append(-5.0, 1.0);
        buffer.append(3.0, -2.0);
        buffer.append(0.0, 4.0);
        assert_eq!(buffer.scale(), 5.0);
    }

    #[test]
    fn all_zero_buffer_scales_to_epsilon() {
        let buffer = SampleBuffer::new(4).unwrap();
        assert_eq!(buffer.scale(), SCALE_EPSILON);
        assert!(buffer.scale().is_finite());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(
            SampleBuffer::new(0),
            Err(ChartError::InvalidCapacity)
        ));
    }
}
