//! CW (keyed tone) generation
//!
//! Turns normalized text into a keyed sine tone using standard PARIS timing.

use crate::error::{CodecError, Result};
use crate::table::code_for;
use morsecode_core::buffer::AudioBuffer;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Morse code timing and tone configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CwConfig {
    /// Words per minute (WPM)
    pub wpm: u32,

    /// CW tone frequency in Hz
    pub tone_frequency: f64,

    /// Peak amplitude, 0.0 to 1.0
    pub volume: f64,

    /// Sample rate for audio generation
    pub sample_rate: u32,

    /// Rise/fall time for CW shaping (milliseconds)
    pub rise_fall_time_ms: f64,

    /// Character spacing (units of dot length)
    pub character_spacing: f64,

    /// Word spacing (units of dot length)
    pub word_spacing: f64,
}

impl Default for CwConfig {
    fn default() -> Self {
        Self::new(20, 800.0, 1.0, 44100)
    }
}

impl CwConfig {
    /// Create standard CW configuration
    pub fn new(wpm: u32, tone_frequency: f64, volume: f64, sample_rate: u32) -> Self {
        Self {
            wpm,
            tone_frequency,
            volume,
            sample_rate,
            rise_fall_time_ms: 5.0,
            character_spacing: 3.0,
            word_spacing: 7.0,
        }
    }

    /// Reject settings that cannot produce audio
    pub fn validate(&self) -> Result<()> {
        if self.wpm == 0 {
            return Err(CodecError::InvalidParameters { msg: "wpm must be positive".to_string() });
        }
        if self.sample_rate == 0 {
            return Err(CodecError::InvalidParameters { msg: "sample rate must be positive".to_string() });
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(morsecode_core::CoreError::InvalidVolume { volume: self.volume }.into());
        }
        if self.tone_frequency <= 0.0 || self.tone_frequency >= self.sample_rate as f64 / 2.0 {
            return Err(CodecError::InvalidParameters {
                msg: format!("tone {} Hz is outside (0, Nyquist)", self.tone_frequency),
            });
        }
        Ok(())
    }

    /// Dot length in seconds (1.2 / WPM)
    pub fn dot_length_seconds(&self) -> f64 {
        1.2 / self.wpm as f64
    }

    /// Calculate dash length in seconds
    pub fn dash_length_seconds(&self) -> f64 {
        3.0 * self.dot_length_seconds()
    }

    /// Gap between elements of one character
    pub fn element_spacing_seconds(&self) -> f64 {
        self.dot_length_seconds()
    }

    /// Calculate character spacing in seconds
    pub fn character_spacing_seconds(&self) -> f64 {
        self.character_spacing * self.dot_length_seconds()
    }

    /// Calculate word spacing in seconds
    pub fn word_spacing_seconds(&self) -> f64 {
        self.word_spacing * self.dot_length_seconds()
    }
}

/// Morse code element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MorseElement {
    Dot,
    Dash,
    ElementSpace,
    CharacterSpace,
    WordSpace,
}

/// Keyed-tone generator
pub struct CwGenerator {
    config: CwConfig,
}

impl CwGenerator {
    /// Create a generator, validating `config` first
    pub fn new(config: CwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the active configuration
    pub fn config(&self) -> &CwConfig {
        &self.config
    }

    /// Convert normalized text to morse elements
    ///
    /// Characters without a code are skipped. No spacing is emitted before
    /// the first or after the last character.
    pub fn text_to_morse(&self, text: &str) -> Vec<MorseElement> {
        let mut elements = Vec::new();

        for word in text.split_whitespace() {
            let codes: Vec<&str> = word.chars().filter_map(code_for).collect();
            if codes.is_empty() {
                continue;
            }
            if !elements.is_empty() {
                elements.push(MorseElement::WordSpace);
            }

            for (ci, code) in codes.iter().enumerate() {
                if ci > 0 {
                    elements.push(MorseElement::CharacterSpace);
                }
                for (ei, symbol) in code.chars().enumerate() {
                    if ei > 0 {
                        elements.push(MorseElement::ElementSpace);
                    }
                    elements.push(if symbol == '-' { MorseElement::Dash } else { MorseElement::Dot });
                }
            }
        }

        elements
    }

    /// Generate CW audio samples from morse elements
    pub fn generate_audio(&self, elements: &[MorseElement]) -> Result<AudioBuffer> {
        let sample_rate = self.config.sample_rate as f64;
        let rise_fall_samples = (self.config.rise_fall_time_ms * 0.001 * sample_rate) as usize;
        let mut buffer = AudioBuffer::with_capacity(0, self.config.sample_rate)?;
        let mut phase = 0.0;

        for element in elements {
            let (duration, is_tone) = match element {
                MorseElement::Dot => (self.config.dot_length_seconds(), true),
                MorseElement::Dash => (self.config.dash_length_seconds(), true),
                MorseElement::ElementSpace => (self.config.element_spacing_seconds(), false),
                MorseElement::CharacterSpace => (self.config.character_spacing_seconds(), false),
                MorseElement::WordSpace => (self.config.word_spacing_seconds(), false),
            };

            let num_samples = (duration * sample_rate).round() as usize;
            if !is_tone {
                buffer.push_silence(num_samples);
                continue;
            }

            // Shaping must fit inside the element
            let ramp = rise_fall_samples.min(num_samples / 2);

            for i in 0..num_samples {
                let mut amplitude = self.config.volume;
                if ramp > 0 {
                    if i < ramp {
                        amplitude *= i as f64 / ramp as f64;
                    } else if i >= num_samples - ramp {
                        amplitude *= (num_samples - 1 - i) as f64 / ramp as f64;
                    }
                }

                let sample = amplitude * (2.0 * PI * self.config.tone_frequency * phase / sample_rate).sin();
                buffer.push(sample as f32);

                phase += 1.0;
                if phase >= sample_rate {
                    phase -= sample_rate;
                }
            }
        }

        debug!("Generated {} samples ({:.2}s)", buffer.len(), buffer.duration_seconds());
        Ok(buffer)
    }

    /// Generate CW audio for normalized text
    pub fn generate_cw_audio(&self, text: &str) -> Result<AudioBuffer> {
        let elements = self.text_to_morse(text);
        self.generate_audio(&elements)
    }
}
