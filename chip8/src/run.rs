use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::{Buzzer, Cpu, Mute, Program, Scheduler, TIMER_FREQUENCY};
use display::Display;

use crate::audio::Beeper;
use crate::keymap::keymap;

/// Upper bound on how long the loop sleeps between polls.
const MAX_IDLE: Duration = Duration::from_millis(1);

/// Everything the host needs to start a session.
#[derive(Debug, Clone)]
pub struct Settings {
    pub rom: PathBuf,
    pub clock: u32,
    pub scale: u32,
    pub mute: bool,
}

pub fn run(settings: Settings) -> Result<()> {
    let program = Program::from_file(&settings.rom)?;
    let title = format!("Chip-8 - {}", program.name());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display =
        Display::new(&sdl, &title, settings.scale).map_err(|e| anyhow!("display: {}", e))?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    let buzzer: Box<dyn Buzzer> = if settings.mute {
        Box::new(Mute::new())
    } else {
        Box::new(Beeper::new(&sdl).map_err(|e| anyhow!("audio: {}", e))?)
    };

    let mut cpu = Cpu::with_buzzer(program, buzzer)
        .with_context(|| format!("unable to load {:?}", settings.rom))?;
    info!(
        "running {:?} at {}Hz",
        cpu.program().name(),
        settings.clock
    );

    let mut scheduler = Scheduler::new(settings.clock, TIMER_FREQUENCY);
    let mut last_poll = Instant::now();

    // Whether the machine is frozen; Space toggles it
    let mut paused = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    repeat: false,
                    ..
                } => {
                    paused = !paused;
                    info!("{}", if paused { "paused" } else { "resumed" });
                }
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(code) = keymap(key) {
                        cpu.key_press(code);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(code) = keymap(key) {
                        cpu.key_release(code);
                    }
                }
                _ => continue,
            };
        }

        // Update state
        let now = Instant::now();
        let ticks = scheduler.advance(now - last_poll);
        last_poll = now;
        if !paused {
            for _ in 0..ticks.cpu_steps {
                cpu.step();
            }
            for _ in 0..ticks.timer_ticks {
                cpu.tick_timers();
            }
        }

        // Render only what changed
        if let Some(frame) = cpu.take_frame() {
            display
                .render(frame)
                .map_err(|e| anyhow!("render: {}", e))?;
        }

        std::thread::sleep(scheduler.cpu_period().min(MAX_IDLE));
    }

    info!("exiting");
    Ok(())
}
