/// Which of the two CHIP-8 timers a `Timer` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Polled by programs through FX07.
    Delay,
    /// Audible for as long as it is armed.
    Sound,
}

/// Edges of the sound timer that an audio consumer has to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioSignal {
    Start,
    Stop,
}

/// # Timer
/// A countdown decremented once per timer tick (60Hz).
///
/// Setting a positive number of ticks arms it; reaching zero disarms it.
/// The timer does not keep time itself, whoever owns it calls `tick` on its own
/// cadence, independent of the CPU clock.
///
/// Only `TimerKind::Sound` produces `AudioSignal`s, one on each armed/disarmed
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    kind: TimerKind,
    ticks: u8,
    armed: bool,
}

impl Timer {
    pub fn new(kind: TimerKind) -> Self {
        Timer {
            kind,
            ticks: 0,
            armed: false,
        }
    }

    pub fn delay() -> Self {
        Timer::new(TimerKind::Delay)
    }

    pub fn sound() -> Self {
        Timer::new(TimerKind::Sound)
    }

    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    pub fn ticks(&self) -> u8 {
        self.ticks
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// (Re)starts the countdown from `ticks`. Zero is ignored.
    pub fn set_ticks(&mut self, ticks: u8) -> Option<AudioSignal> {
        if ticks == 0 {
            return None;
        }
        self.ticks = ticks;
        let was_armed = std::mem::replace(&mut self.armed, true);
        if was_armed {
            None
        } else {
            self.signal(AudioSignal::Start)
        }
    }

    /// Advances the countdown by one period.
    pub fn tick(&mut self) -> Option<AudioSignal> {
        if !self.armed {
            return None;
        }
        self.ticks = self.ticks.saturating_sub(1);
        if self.ticks == 0 {
            self.armed = false;
            self.signal(AudioSignal::Stop)
        } else {
            None
        }
    }

    fn signal(&self, signal: AudioSignal) -> Option<AudioSignal> {
        match self.kind {
            TimerKind::Sound => Some(signal),
            TimerKind::Delay => None,
        }
    }
}

/// The audio consumer driven by the sound timer.
pub trait Buzzer {
    fn start(&mut self);
    fn stop(&mut self);
}

/// A buzzer that makes no sound; useful for tests and headless hosts.
#[derive(Debug, Default)]
pub struct Mute {
    playing: bool,
}

impl Mute {
    pub fn new() -> Self {
        Mute { playing: false }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Buzzer for Mute {
    fn start(&mut self) {
        self.playing = true;
    }

    fn stop(&mut self) {
        self.playing = false;
    }
}
