use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8_core::{Frame, Pixel};

/// Bytes per pixel in an RGB24 texture.
const CHANNELS: usize = 3;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// It only gets a call to `render` when the CPU reports that its Frame changed.
///
/// SDL reports failures as plain strings; they are passed on as such.
pub struct Display {
    canvas: WindowCanvas,
    texture_creator: TextureCreator<WindowContext>,
}

impl Display {
    /// Opens a window bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each Chip-8 pixel
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| e.to_string())?;
        let texture_creator = canvas.texture_creator();

        Ok(Display {
            canvas,
            texture_creator,
        })
    }

    /// Formats a Frame for rendering as an SDL2 texture.
    ///
    /// An SDL2 texture is a 1D array of bytes that represent concatenated rows of RGB pixels.
    /// Rows are concatenated in order and each pixel is written as three equal
    /// channels: 255 when on, 0 when off.
    fn frame_to_sdl_texture(frame: &Frame) -> Vec<u8> {
        frame
            .rows()
            .flat_map(|row| row.iter())
            .map(|pixel| match pixel {
                Pixel::On => 255,
                Pixel::Off => 0,
            })
            .flat_map(|intensity| std::iter::repeat(intensity).take(CHANNELS))
            .collect()
    }

    /// Formats the Frame as an SDL2 RGB24 texture and renders it.
    pub fn render(&mut self, frame: &Frame) -> Result<(), String> {
        let mut texture = self
            .texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                frame.width() as u32,
                frame.height() as u32,
            )
            .map_err(|e| e.to_string())?;

        let pixels = Display::frame_to_sdl_texture(frame);
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            let row_len = frame.width() * CHANNELS;
            for (y, row) in pixels.chunks(row_len).enumerate() {
                buffer[y * pitch..y * pitch + row_len].copy_from_slice(row);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
