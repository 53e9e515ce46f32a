use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};

use crate::buffer::{ChannelSnapshot, SampleBuffer};
use crate::error::ChartError;
use crate::project::{project_snapshot, ProjectedFrame};
use crate::source::SampleSource;

/// Clonable handle to a buffer shared between the reader thread and the
/// rendering context.
///
/// Every method takes the lock only for the duration of the call and does
/// no I/O while holding it.
#[derive(Clone)]
pub struct SharedSampleBuffer {
    inner: Arc<Mutex<SampleBuffer>>,
}

impl SharedSampleBuffer {
    pub fn new(capacity: usize) -> Result<Self, ChartError> {
        Ok(Self {
            inner: Arc::new(Mutex::new(SampleBuffer::new(capacity)?)),
        })
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn append(&self, x: f64, y: f64) {
        self.lock().append(x, y);
    }

    pub fn scale(&self) -> f64 {
        self.lock().scale()
    }

    pub fn snapshot(&self) -> ChannelSnapshot {
        self.lock().snapshot()
    }

    /// Projects from a private snapshot, so rendering never blocks sample
    /// ingestion for longer than one copy.
    pub fn project(&self, width: f64, height: f64) -> ProjectedFrame {
        let snapshot = self.snapshot();
        project_snapshot(&snapshot, width, height)
    }

    fn lock(&self) -> MutexGuard<'_, SampleBuffer> {
        // The buffer stays structurally valid even if a holder panicked
        // mid-call, so poisoning is ignored.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Spawns the dedicated reader thread: decode one frame, hand it to the
/// buffer, repeat until the source ends. Returns the number of samples
/// ingested.
pub fn spawn_reader<S>(
    mut source: S,
    buffer: SharedSampleBuffer,
) -> JoinHandle<Result<usize, ChartError>>
where
    S: SampleSource + Send + 'static,
{
    thread::spawn(move || {
        let mut ingested = 0usize;
        while let Some(frame) = source.next_sample()? {
            buffer.append(frame.x, frame.y);
            ingested += 1;
        }
        log::debug!("sample stream ended after {ingested} frames");
        Ok(ingested)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;
    use crate::source::ManualSource;

    #[test]
    fn reader_thread_pumps_every_frame_into_the_buffer() {
        let buffer = SharedSampleBuffer::new(3).unwrap();
        let source = ManualSource::new(vec![
            Frame { x: 1.0, y: 10.0 },
            Frame { x: 2.0, y: 20.0 },
            Frame { x: 3.0, y: 30.0 },
            Frame { x: 4.0, y: 40.0 },
        ]);
        let ingested = spawn_reader(source, buffer.clone())
            .join()
            .expect("reader thread panicked")
            .unwrap();
        assert_eq!(ingested, 4);
        let snapshot = buffer.snapshot();
        assert_eq!(snapshot.channel_a, vec![2.0, 3.0, 4.0]);
        assert_eq!(snapshot.channel_b, vec![20.0, 30.0, 40.0]);
    }

    #[test]
    fn snapshots_stay_full_length_while_a_producer_runs() {
        let buffer = SharedSampleBuffer::new(10).unwrap();
        let frames = (0..1000).map(|i| Frame {
            x: i as f64,
            y: -(i as f64),
        });
        let handle = spawn_reader(ManualSource::new(frames), buffer.clone());
        for _ in 0..50 {
            let snapshot = buffer.snapshot();
            assert_eq!(snapshot.channel_a.len(), 10);
            assert_eq!(snapshot.channel_b.len(), 10);
        }
        handle.join().expect("reader thread panicked").unwrap();
        assert_eq!(buffer.snapshot().channel_a.len(), 10);
    }

    #[test]
    fn shared_projection_matches_the_plain_one() {
        let buffer = SharedSampleBuffer::new(4).unwrap();
        buffer.append(1.0, -1.0);
        let via_handle = buffer.project(80.0, 40.0);
        let via_snapshot = crate::project::project_snapshot(&buffer.snapshot(), 80.0, 40.0);
        assert_eq!(via_handle, via_snapshot);
    }
}
