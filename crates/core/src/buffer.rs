//! Sample buffer management for rendered audio

use crate::{CoreError, Result};
use std::ops::Index;

/// Generic sample buffer for audio data
#[derive(Debug, Clone)]
pub struct SampleBuffer<T> {
    data: Vec<T>,
    sample_rate: u32,
}

impl<T> SampleBuffer<T>
where
    T: Clone + Default,
{
    /// Create an empty buffer with room for `capacity` samples
    pub fn with_capacity(capacity: usize, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(CoreError::InvalidSampleRate { rate: sample_rate as f64 });
        }

        Ok(Self {
            data: Vec::with_capacity(capacity),
            sample_rate,
        })
    }

    /// Create a buffer from existing data
    pub fn from_data(data: Vec<T>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(CoreError::InvalidSampleRate { rate: sample_rate as f64 });
        }

        Ok(Self { data, sample_rate })
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the underlying data
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Append a single sample
    pub fn push(&mut self, sample: T) {
        self.data.push(sample);
    }

    /// Append `count` default (silent) samples
    pub fn push_silence(&mut self, count: usize) {
        self.data.resize(self.data.len() + count, T::default());
    }

    /// Playback length in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.data.len() as f64 / self.sample_rate as f64
    }
}

impl<T> Index<usize> for SampleBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

/// Real-valued audio buffer, samples nominally in -1.0..=1.0
pub type AudioBuffer = SampleBuffer<f32>;

impl AudioBuffer {
    /// Largest absolute sample value
    pub fn peak(&self) -> f32 {
        self.data.iter().fold(0.0_f32, |acc, s| acc.max(s.abs()))
    }
}
