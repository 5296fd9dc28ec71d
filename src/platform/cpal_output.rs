use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    Device, FromSample, Sample, SizedSample, Stream, StreamConfig,
};
use super::{lock_voice, AudioOutput, NoiseVoice};
use std::sync::{Arc, Mutex};

pub struct CpalOutput {
    stream: Option<Stream>,
    device: Option<Device>,
    config: Option<StreamConfig>,
    sample_rate: f32,
    is_active: bool,
}

impl CpalOutput {
    pub fn new() -> Self {
        Self {
            stream: None,
            device: None,
            config: None,
            sample_rate: 44100.0,
            is_active: false,
        }
    }

    /// Create a stream that pulls samples from the shared voice
    pub fn create_stream_with_voice(
        &mut self,
        voice: Arc<Mutex<NoiseVoice>>,
    ) -> Result<(), anyhow::Error> {
        let device = self.device.as_ref().ok_or_else(|| anyhow::anyhow!("Device not initialized"))?;
        let config = self.config.as_ref().ok_or_else(|| anyhow::anyhow!("Config not initialized"))?;

        let supported_config = device.default_output_config()?;
        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::I8 => Self::make_stream::<i8>(device, config, voice)?,
            cpal::SampleFormat::I16 => Self::make_stream::<i16>(device, config, voice)?,
            cpal::SampleFormat::I32 => Self::make_stream::<i32>(device, config, voice)?,
            cpal::SampleFormat::I64 => Self::make_stream::<i64>(device, config, voice)?,
            cpal::SampleFormat::U8 => Self::make_stream::<u8>(device, config, voice)?,
            cpal::SampleFormat::U16 => Self::make_stream::<u16>(device, config, voice)?,
            cpal::SampleFormat::U32 => Self::make_stream::<u32>(device, config, voice)?,
            cpal::SampleFormat::U64 => Self::make_stream::<u64>(device, config, voice)?,
            cpal::SampleFormat::F32 => Self::make_stream::<f32>(device, config, voice)?,
            cpal::SampleFormat::F64 => Self::make_stream::<f64>(device, config, voice)?,
            sample_format => return Err(anyhow::anyhow!("Unsupported sample format '{}'", sample_format)),
        };

        self.stream = Some(stream);
        Ok(())
    }

    /// Setup the CPAL host and device
    fn setup_host_device(&mut self) -> Result<(), anyhow::Error> {
        let host = cpal::default_host();

        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow::anyhow!("Default output device is not available"))?;

        log::info!("Output device: {}", device.name()?);

        let config = device.default_output_config()?;
        log::debug!("Default output config: {:?}", config);

        self.sample_rate = config.sample_rate().0 as f32;
        self.device = Some(device);
        self.config = Some(config.into());

        Ok(())
    }

    /// Create a typed stream for the given sample format
    fn make_stream<T>(
        device: &Device,
        config: &StreamConfig,
        voice: Arc<Mutex<NoiseVoice>>,
    ) -> Result<Stream, anyhow::Error>
    where
        T: SizedSample + FromSample<f32>,
    {
        let num_channels = config.channels as usize;
        let err_fn = |err| log::error!("Error building output sound stream: {}", err);

        let stream = device.build_output_stream(
            config,
            move |output: &mut [T], _: &cpal::OutputCallbackInfo| {
                Self::process_frames(output, &voice, num_channels);
            },
            err_fn,
            None,
        )?;

        Ok(stream)
    }

    /// Fill an interleaved buffer, one noise sample per frame
    fn process_frames<SampleType>(
        output: &mut [SampleType],
        voice: &Arc<Mutex<NoiseVoice>>,
        num_channels: usize,
    ) where
        SampleType: Sample + FromSample<f32>,
    {
        // Lock the voice once for the entire buffer
        let mut voice = lock_voice(voice);

        for frame in output.chunks_mut(num_channels) {
            let value: SampleType = SampleType::from_sample(voice.tick());

            // Copy the same value to all channels
            for sample in frame.iter_mut() {
                *sample = value;
            }
        }
    }
}

impl Default for CpalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for CpalOutput {
    fn initialize(&mut self, sample_rate: f32) -> Result<(), anyhow::Error> {
        self.sample_rate = sample_rate;
        self.setup_host_device()?;
        if (self.sample_rate - sample_rate).abs() > f32::EPSILON {
            log::warn!(
                "Requested {} Hz, device runs at {} Hz",
                sample_rate,
                self.sample_rate
            );
        }
        Ok(())
    }

    fn start(&mut self) -> Result<(), anyhow::Error> {
        if let Some(stream) = &self.stream {
            stream.play()?;
            self.is_active = true;
            log::info!("Audio stream started at sample rate: {}", self.sample_rate);
        } else {
            return Err(anyhow::anyhow!("Stream not created. Call create_stream_with_voice first."));
        }

        Ok(())
    }

    fn stop(&mut self) -> Result<(), anyhow::Error> {
        if let Some(stream) = &self.stream {
            stream.pause()?;
            self.is_active = false;
            log::info!("Audio stream stopped");
        }

        Ok(())
    }

    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
