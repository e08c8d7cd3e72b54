//! SDL2 window, input polling and frame pacing.
//!
//! The window only presents finished pixel buffers; all drawing happens on
//! the CPU before [`Window::present`] is called.

use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::menu::MenuAction;

pub const FPS: u64 = 60;
pub const FRAME_TARGET: Duration = Duration::from_nanos(1_000_000_000 / FPS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

/// Per-frame input snapshot consumed by the menus, the avatar and the camera rig.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Set for the single frame in which F12 was pressed.
    pub screenshot: bool,
    /// Last menu key pressed this frame, if any.
    pub menu_action: Option<MenuAction>,
    /// Relative mouse motion accumulated since the previous frame.
    pub mouse_delta: (i32, i32),
}

/// Maps a key press to a menu command.
pub fn menu_action_for(keycode: Keycode) -> Option<MenuAction> {
    match keycode {
        Keycode::Space | Keycode::Return | Keycode::KpEnter => Some(MenuAction::Confirm),
        Keycode::Left | Keycode::A => Some(MenuAction::Previous),
        Keycode::Right | Keycode::D => Some(MenuAction::Next),
        _ => None,
    }
}

pub struct FrameLimiter {
    previous_frame: Instant,
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLimiter {
    pub fn new() -> Self {
        Self {
            previous_frame: Instant::now(),
        }
    }

    /// Sleeps until at least [`FRAME_TARGET`] has passed since the previous
    /// call, then returns the time actually elapsed.
    pub fn wait_and_get_delta(&mut self) -> Duration {
        let elapsed = self.previous_frame.elapsed();
        if let Some(remaining) = FRAME_TARGET.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }

        let now = Instant::now();
        let delta = now - self.previous_frame;
        self.previous_frame = now;
        delta
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Field order matters: `texture` must drop before `texture_creator`.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    mouse: sdl2::mouse::MouseUtil,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;
        let mouse = sdl_context.mouse();

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // We ensure texture is dropped before texture_creator by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            mouse,
            width,
            height,
        })
    }

    /// Drains pending events into `input` and samples the held movement keys.
    ///
    /// Returns the most significant window event seen this frame.
    pub fn poll_events(&mut self, input: &mut InputState) -> WindowEvent {
        let mut result = WindowEvent::None;
        input.mouse_delta = (0, 0);
        input.screenshot = false;
        input.menu_action = None;

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::KeyDown {
                    keycode: Some(Keycode::F12),
                    repeat: false,
                    ..
                } => input.screenshot = true,
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) = menu_action_for(keycode) {
                        input.menu_action = Some(action);
                    }
                }
                Event::MouseButtonDown { .. } => input.menu_action = Some(MenuAction::Confirm),
                Event::MouseMotion { xrel, yrel, .. } => {
                    input.mouse_delta.0 += xrel;
                    input.mouse_delta.1 += yrel;
                }
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => result = WindowEvent::Resize(w as u32, h as u32),
                _ => {}
            }
        }

        let keys = self.event_pump.keyboard_state();
        input.forward = keys.is_scancode_pressed(Scancode::W);
        input.back = keys.is_scancode_pressed(Scancode::S);
        input.left = keys.is_scancode_pressed(Scancode::A);
        input.right = keys.is_scancode_pressed(Scancode::D);
        input.jump = keys.is_scancode_pressed(Scancode::Space);

        result
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.width = width;
        self.height = height;
        // SAFETY: Same as in new() - texture_creator outlives texture
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(self.texture_creator.as_ref() as *const _) };
        self.texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Hides the cursor and switches to unbounded relative motion for mouse look.
    pub fn set_mouse_captured(&mut self, captured: bool) {
        self.mouse.set_relative_mouse_mode(captured);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_target_is_a_sixtieth_of_a_second() {
        let expected = 1.0 / FPS as f64;
        assert!((FRAME_TARGET.as_secs_f64() - expected).abs() < 1e-6);
        // Whole milliseconds would round 16.67 down to 16.
        assert!(FRAME_TARGET > Duration::from_millis(16));
    }

    #[test]
    fn limiter_never_returns_a_short_frame() {
        let mut limiter = FrameLimiter::new();
        for _ in 0..3 {
            assert!(limiter.wait_and_get_delta() >= FRAME_TARGET);
        }
    }

    #[test]
    fn menu_keys_map_to_actions() {
        assert_eq!(menu_action_for(Keycode::Return), Some(MenuAction::Confirm));
        assert_eq!(menu_action_for(Keycode::KpEnter), Some(MenuAction::Confirm));
        assert_eq!(menu_action_for(Keycode::Space), Some(MenuAction::Confirm));
        assert_eq!(menu_action_for(Keycode::A), Some(MenuAction::Previous));
        assert_eq!(menu_action_for(Keycode::Left), Some(MenuAction::Previous));
        assert_eq!(menu_action_for(Keycode::D), Some(MenuAction::Next));
        assert_eq!(menu_action_for(Keycode::Right), Some(MenuAction::Next));
        assert_eq!(menu_action_for(Keycode::W), None);
    }
}
