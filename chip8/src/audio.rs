use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

use chip8_core::Buzzer;

const SAMPLE_RATE: i32 = 44_100;
const TONE_HZ: f32 = 440.0;
const VOLUME: f32 = 0.15;

/// A mono square wave at `TONE_HZ`.
pub struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Beeper
/// Plays a square wave for as long as the sound timer is armed.
///
/// The device is opened paused; `start`/`stop` only resume and pause it.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: None,
        };
        let device = audio.open_playback(None, &desired, |spec| SquareWave {
            phase_inc: TONE_HZ / spec.freq as f32,
            phase: 0.0,
            volume: VOLUME,
        })?;
        Ok(Beeper { device })
    }
}

impl Buzzer for Beeper {
    fn start(&mut self) {
        self.device.resume();
    }

    fn stop(&mut self) {
        self.device.pause();
    }
}
