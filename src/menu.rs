//! Title screen, file select and the in-game HUD.
//!
//! The game starts on the title screen. Confirming there opens the file
//! select, where one of [`FILE_SLOTS`] save slots is picked; confirming a
//! slot starts play. Menu screens are drawn directly into the frame buffer
//! over a vertical gradient; the HUD is a single line of text drawn over the
//! rendered scene.

use crate::colors::Color;
use crate::math::vec2::Vec2;
use crate::render::text::{draw_text, draw_text_centered, text_width, GLYPH_SIZE};
use crate::render::{FrameBuffer, Surface};

pub const FILE_SLOTS: usize = 3;
/// Stars available in a full save.
pub const TOTAL_STARS: u32 = 120;

pub const TITLE_TEXT: &str = "LOWPOLY CASTLE";
pub const TITLE_PROMPT: &str = "PRESS SPACE TO START";
pub const FILE_SELECT_HINT: &str = "LEFT/RIGHT or A/D: select file   SPACE or ENTER: start game";
pub const HUD_TEXT: &str = "WASD move | Mouse orbit | SPACE jump | F12 screenshot | ESC quit";

const TITLE_SKY_TOP: Color = Color::new(135, 206, 235);
const TITLE_SKY_BOTTOM: Color = Color::new(40, 100, 180);
const FILE_SKY_TOP: Color = Color::new(60, 100, 180);
const FILE_SKY_BOTTOM: Color = Color::new(30, 60, 120);
const STAR_FILL: Color = Color::new(255, 215, 0);
const STAR_EDGE: Color = Color::new(220, 180, 0);
const TITLE_SHADOW: Color = Color::new(180, 30, 30);
const TITLE_FACE: Color = Color::new(255, 220, 0);
const WHITE: Color = Color::new(255, 255, 255);
const SLOT_FILL: Color = Color::new(40, 50, 90);
const SLOT_BORDER: Color = Color::new(180, 180, 180);
const SLOT_SELECTED: Color = Color::new(255, 220, 100);
const STARS_TEXT: Color = Color::new(255, 220, 0);
const NEW_GAME_TEXT: Color = Color::new(160, 160, 160);
const HINT_TEXT: Color = Color::new(200, 200, 200);
const HUD_COLOR: Color = Color::new(220, 220, 220);

const SLOT_WIDTH: u32 = 200;
const SLOT_HEIGHT: u32 = 140;
const SLOT_GAP: i32 = 40;
const SLOT_BORDER_WIDTH: u32 = 4;

/// A discrete menu command, produced from key presses by the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Confirm,
    Previous,
    Next,
}

/// Which screen the application is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Title,
    FileSelect {
        selected: usize,
    },
    Playing,
}

impl GameState {
    /// Applies one menu action. Play ignores menu actions.
    pub fn advance(self, action: MenuAction) -> Self {
        match (self, action) {
            (GameState::Title, MenuAction::Confirm) => GameState::FileSelect { selected: 0 },
            (GameState::FileSelect { selected }, MenuAction::Previous) => GameState::FileSelect {
                selected: (selected + FILE_SLOTS - 1) % FILE_SLOTS,
            },
            (GameState::FileSelect { selected }, MenuAction::Next) => GameState::FileSelect {
                selected: (selected + 1) % FILE_SLOTS,
            },
            (GameState::FileSelect { .. }, MenuAction::Confirm) => GameState::Playing,
            (state, _) => state,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GameState::Playing)
    }
}

/// Progress stored in one save slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileSlot {
    pub stars: u32,
}

impl FileSlot {
    /// Status line shown under the slot label.
    pub fn status(&self) -> String {
        if self.stars > 0 {
            format!("STARS {} / {}", self.stars, TOTAL_STARS)
        } else {
            "NEW GAME".to_string()
        }
    }
}

/// Largest scale (up to `max_scale`) at which `text` fits in `max_width`.
fn fit_scale(text: &str, max_width: u32, max_scale: u32) -> u32 {
    (1..=max_scale)
        .rev()
        .find(|&s| text_width(text, s) <= max_width)
        .unwrap_or(1)
}

/// Ten alternating outer/inner points of a five-pointed star, top point first.
pub fn star_points(center: Vec2, outer: f32, inner: f32) -> [Vec2; 10] {
    std::array::from_fn(|i| {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
        Vec2::new(
            center.x + radius * angle.cos(),
            center.y - radius * angle.sin(),
        )
    })
}

/// Fills the star as a fan around its center, then traces its edge.
fn draw_star(buffer: &mut FrameBuffer, center: Vec2, outer: f32, inner: f32) {
    let points = star_points(center, outer, inner);
    for i in 0..points.len() {
        let next = points[(i + 1) % points.len()];
        buffer.fill_polygon(&[center, points[i], next], STAR_FILL);
    }
    let edge = STAR_EDGE.to_argb();
    for i in 0..points.len() {
        buffer.draw_line(points[i], points[(i + 1) % points.len()], edge);
    }
}

pub fn draw_title(buffer: &mut FrameBuffer) {
    buffer.fill_vertical_gradient(TITLE_SKY_TOP, TITLE_SKY_BOTTOM);
    let (w, h) = (buffer.width() as i32, buffer.height() as i32);

    draw_star(
        buffer,
        Vec2::new((w / 2) as f32, (h / 2 - 40) as f32),
        48.0,
        22.0,
    );

    let scale = fit_scale(TITLE_TEXT, buffer.width() * 9 / 10, 6);
    let (cx, cy) = (w / 2, h / 2 - 30);
    for (dx, dy) in [(-2, -2), (2, -2), (-2, 2), (2, 2), (-2, 0), (2, 0), (0, -2), (0, 2)] {
        draw_text_centered(buffer, cx + dx, cy + dy, TITLE_TEXT, TITLE_SHADOW, scale);
    }
    draw_text_centered(buffer, cx, cy, TITLE_TEXT, TITLE_FACE, scale);

    let prompt_scale = fit_scale(TITLE_PROMPT, buffer.width() * 9 / 10, 3);
    draw_text_centered(buffer, w / 2, h - 100, TITLE_PROMPT, WHITE, prompt_scale);
}

/// Left edge of slot `index`, with the slots centered as a row.
fn slot_x(width: i32, index: usize) -> i32 {
    let stride = SLOT_WIDTH as i32 + SLOT_GAP;
    width / 2 - SLOT_WIDTH as i32 / 2 + (index as i32 - 1) * stride
}

pub fn draw_file_select(buffer: &mut FrameBuffer, selected: usize, slots: &[FileSlot; FILE_SLOTS]) {
    buffer.fill_vertical_gradient(FILE_SKY_TOP, FILE_SKY_BOTTOM);
    let (w, h) = (buffer.width() as i32, buffer.height() as i32);

    let heading = "FILE SELECT";
    draw_text_centered(buffer, w / 2, 80, heading, WHITE, fit_scale(heading, buffer.width(), 5));

    let slot_y = h / 2 - SLOT_HEIGHT as i32 / 2 - 20;
    for (i, slot) in slots.iter().enumerate() {
        let x = slot_x(w, i);
        let center_x = x + SLOT_WIDTH as i32 / 2;
        let border = if i == selected { SLOT_SELECTED } else { SLOT_BORDER };

        buffer.fill_rect(x, slot_y, SLOT_WIDTH, SLOT_HEIGHT, SLOT_FILL.to_argb());
        buffer.outline_rect(
            x,
            slot_y,
            SLOT_WIDTH,
            SLOT_HEIGHT,
            SLOT_BORDER_WIDTH,
            border.to_argb(),
        );

        let label = format!("FILE {}", i + 1);
        draw_text_centered(buffer, center_x, slot_y + 40, &label, WHITE, 3);

        let status = slot.status();
        let color = if slot.stars > 0 { STARS_TEXT } else { NEW_GAME_TEXT };
        let scale = fit_scale(&status, SLOT_WIDTH - 16, 2);
        draw_text_centered(buffer, center_x, slot_y + 90, &status, color, scale);

        if i == selected {
            draw_star(
                buffer,
                Vec2::new(center_x as f32, (slot_y + 120) as f32),
                14.0,
                6.0,
            );
        }
    }

    let scale = fit_scale(FILE_SELECT_HINT, buffer.width() * 19 / 20, 2);
    draw_text_centered(buffer, w / 2, h - 50, FILE_SELECT_HINT, HINT_TEXT, scale);
}

/// Draws the controls line along the bottom-left of the screen.
pub fn draw_hud(buffer: &mut FrameBuffer) {
    let scale = fit_scale(HUD_TEXT, buffer.width().saturating_sub(20), 2);
    let y = buffer.height() as i32 - 14 - (GLYPH_SIZE * scale) as i32;
    draw_text(buffer, 10, y, HUD_TEXT, HUD_COLOR, scale);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_confirm_opens_file_select() {
        assert_eq!(
            GameState::default().advance(MenuAction::Confirm),
            GameState::FileSelect { selected: 0 }
        );
        assert_eq!(GameState::Title.advance(MenuAction::Next), GameState::Title);
        assert_eq!(GameState::Title.advance(MenuAction::Previous), GameState::Title);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = GameState::FileSelect { selected: 0 };
        state = state.advance(MenuAction::Previous);
        assert_eq!(state, GameState::FileSelect { selected: 2 });
        state = state.advance(MenuAction::Next);
        assert_eq!(state, GameState::FileSelect { selected: 0 });

        for expected in [1, 2, 0, 1] {
            state = state.advance(MenuAction::Next);
            assert_eq!(state, GameState::FileSelect { selected: expected });
        }
    }

    #[test]
    fn confirm_on_file_select_starts_play() {
        let state = GameState::FileSelect { selected: 2 }.advance(MenuAction::Confirm);
        assert_eq!(state, GameState::Playing);
        assert!(state.is_playing());
    }

    #[test]
    fn play_ignores_menu_actions() {
        for action in [MenuAction::Confirm, MenuAction::Previous, MenuAction::Next] {
            assert_eq!(GameState::Playing.advance(action), GameState::Playing);
        }
    }

    #[test]
    fn slot_status_text() {
        assert_eq!(FileSlot::default().status(), "NEW GAME");
        assert_eq!(FileSlot { stars: 7 }.status(), "STARS 7 / 120");
    }

    #[test]
    fn star_starts_at_top_point() {
        let points = star_points(Vec2::new(50.0, 50.0), 10.0, 4.0);
        approx::assert_relative_eq!(points[0].x, 50.0, epsilon = 1e-4);
        approx::assert_relative_eq!(points[0].y, 40.0, epsilon = 1e-4);
    }

    #[test]
    fn title_draws_star_over_gradient() {
        let mut fb = FrameBuffer::new(320, 240);
        draw_title(&mut fb);
        // Inside the top spike, clear of the title text.
        assert_eq!(fb.get_pixel(157, 240 / 2 - 70), Some(STAR_FILL.to_argb()));
        assert_eq!(fb.get_pixel(0, 0), Some(TITLE_SKY_TOP.to_argb()));
    }

    #[test]
    fn file_select_highlights_selected_slot() {
        let mut fb = FrameBuffer::new(960, 720);
        draw_file_select(&mut fb, 1, &[FileSlot::default(); FILE_SLOTS]);

        let slot_y = 720 / 2 - SLOT_HEIGHT as i32 / 2 - 20;
        let border_at = |fb: &FrameBuffer, i| fb.get_pixel(slot_x(960, i) + 1, slot_y + 1);
        assert_eq!(border_at(&fb, 0), Some(SLOT_BORDER.to_argb()));
        assert_eq!(border_at(&fb, 1), Some(SLOT_SELECTED.to_argb()));
        assert_eq!(border_at(&fb, 2), Some(SLOT_BORDER.to_argb()));
    }

    #[test]
    fn hud_writes_only_near_bottom() {
        let mut fb = FrameBuffer::new(960, 720);
        fb.clear(Color::new(0, 0, 0));
        draw_hud(&mut fb);

        let hud = HUD_COLOR.to_argb();
        let rows_with_text: Vec<u32> = (0..720)
            .filter(|&y| (0..960).any(|x| fb.get_pixel(x, y as i32) == Some(hud)))
            .collect();
        assert!(!rows_with_text.is_empty());
        assert!(rows_with_text.iter().all(|&y| y > 680));
    }

    #[test]
    fn screens_survive_tiny_buffers() {
        let mut fb = FrameBuffer::new(1, 1);
        draw_title(&mut fb);
        draw_file_select(&mut fb, 0, &[FileSlot::default(); FILE_SLOTS]);
        draw_hud(&mut fb);
    }
}
