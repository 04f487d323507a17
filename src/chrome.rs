//! Global chrome: Back and Pause buttons plus the pause overlay
//!
//! Chrome gets first crack at each tick's click, ahead of menu and game
//! handlers.

use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, FONT_UI};
use crate::geom::Rect;
use crate::input::InputState;
use crate::render::{Surface, TextAlign, TextBaseline};

/// What the chrome did with this tick's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeAction {
    None,
    /// Back button clicked: return to the menu (and unpause)
    Back,
    /// Pause button clicked
    TogglePause,
}

/// Hover/click state for the always-on-top buttons.
#[derive(Debug, Default)]
pub struct Chrome {
    hover_back: bool,
    hover_pause: bool,
}

impl Chrome {
    pub fn new() -> Self {
        Self::default()
    }

    fn back_rect() -> Rect {
        Rect::new(10.0, 10.0, 80.0, 30.0)
    }

    fn pause_rect() -> Rect {
        Rect::new(CANVAS_WIDTH - 90.0, 10.0, 80.0, 30.0)
    }

    /// Re-evaluate hover and claim the click if a button is hit. Pause is
    /// only tested when Back did not take the click this tick.
    pub fn update(&mut self, input: &mut InputState) -> ChromeAction {
        self.hover_back = false;
        self.hover_pause = false;

        if Self::back_rect().contains(input.pointer()) {
            self.hover_back = true;
            if let Some(click) = input.unclaimed_click() {
                if click.claim() {
                    log::debug!("Back button clicked");
                    return ChromeAction::Back;
                }
            }
        }

        if Self::pause_rect().contains(input.pointer()) {
            self.hover_pause = true;
            if let Some(click) = input.unclaimed_click() {
                if click.claim() {
                    return ChromeAction::TogglePause;
                }
            }
        }

        ChromeAction::None
    }

    pub fn draw(&self, surface: &mut dyn Surface, paused: bool) {
        let back = Self::back_rect();
        let color = if self.hover_back { "#e74c3c" } else { "#c0392b" };
        surface.fill_rect(back.x, back.y, back.w, back.h, color);
        let font = format!("bold 16px {FONT_UI}");
        surface.fill_text(
            "Back",
            back.x + back.w / 2.0,
            back.y + back.h / 2.0,
            &font,
            "#ffffff",
            TextAlign::Center,
            TextBaseline::Middle,
        );

        let pause = Self::pause_rect();
        let color = if self.hover_pause { "#f39c12" } else { "#e67e22" };
        surface.fill_rect(pause.x, pause.y, pause.w, pause.h, color);
        let label = if paused { "Resume" } else { "Pause" };
        surface.fill_text(
            label,
            pause.x + pause.w / 2.0,
            pause.y + pause.h / 2.0,
            &font,
            "#ffffff",
            TextAlign::Center,
            TextBaseline::Middle,
        );
    }

    pub fn draw_pause_overlay(&self, surface: &mut dyn Surface) {
        surface.fill_rect(
            0.0,
            0.0,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            "rgba(0, 0, 0, 0.6)",
        );
        surface.fill_text(
            "PAUSED",
            CANVAS_WIDTH / 2.0,
            CANVAS_HEIGHT / 2.0,
            &format!("bold 48px {FONT_UI}"),
            "#ffffff",
            TextAlign::Center,
            TextBaseline::Middle,
        );
        surface.fill_text(
            "Press P or Click Resume to Continue",
            CANVAS_WIDTH / 2.0,
            CANVAS_HEIGHT / 2.0 + 50.0,
            &format!("20px {FONT_UI}"),
            "#ffffff",
            TextAlign::Center,
            TextBaseline::Middle,
        );
    }
}
