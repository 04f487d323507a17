//! Main menu game selector

use crate::config::{CANVAS_WIDTH, FONT_UI};
use crate::geom::Rect;
use crate::input::InputState;
use crate::render::{Surface, TextAlign, TextBaseline};

/// The two playable games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameId {
    LaneDefense,
    GapRunner,
}

struct MenuItem {
    label: &'static str,
    rect: Rect,
    game: GameId,
}

/// Game selector screen. Items are centered horizontally.
pub struct Menu {
    items: Vec<MenuItem>,
    hovered: Option<usize>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    pub fn new() -> Self {
        let width = 400.0;
        let x = (CANVAS_WIDTH - width) / 2.0;
        Self {
            items: vec![
                MenuItem {
                    label: "Lane Defense",
                    rect: Rect::new(x, 150.0, width, 50.0),
                    game: GameId::LaneDefense,
                },
                MenuItem {
                    label: "Gap Runner",
                    rect: Rect::new(x, 250.0, width, 50.0),
                    game: GameId::GapRunner,
                },
            ],
            hovered: None,
        }
    }

    /// Track hover and claim a click on an item. Returns the selected game,
    /// if any. A click outside every item is left for later handlers.
    pub fn update(&mut self, input: &mut InputState) -> Option<GameId> {
        self.hovered = None;
        let pointer = input.pointer();
        for (i, item) in self.items.iter().enumerate() {
            if item.rect.contains(pointer) {
                self.hovered = Some(i);
                if let Some(click) = input.unclaimed_click() {
                    if click.claim() {
                        log::info!("Selected {:?}", item.game);
                        return Some(item.game);
                    }
                }
                break;
            }
        }
        None
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_text(
            "Mini Game Arcade",
            CANVAS_WIDTH / 2.0,
            80.0,
            &format!("bold 40px {FONT_UI}"),
            "#2c3e50",
            TextAlign::Center,
            TextBaseline::Alphabetic,
        );

        for (i, item) in self.items.iter().enumerate() {
            let color = if self.hovered == Some(i) {
                "#3498db"
            } else {
                "#2980b9"
            };
            surface.fill_rect(item.rect.x, item.rect.y, item.rect.w, item.rect.h, color);
            let center = item.rect.center();
            surface.fill_text(
                item.label,
                center.x,
                center.y,
                &format!("20px {FONT_UI}"),
                "#ffffff",
                TextAlign::Center,
                TextBaseline::Middle,
            );
        }

        surface.fill_text(
            "Click a game to play",
            CANVAS_WIDTH / 2.0,
            380.0,
            &format!("16px {FONT_UI}"),
            "#7f8c8d",
            TextAlign::Center,
            TextBaseline::Middle,
        );
    }

    #[cfg(test)]
    fn item_center(&self, game: GameId) -> glam::Vec2 {
        self.items
            .iter()
            .find(|i| i.game == game)
            .map(|i| i.rect.center())
            .unwrap_or(glam::Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn click_on_item_selects_and_claims() {
        let mut menu = Menu::new();
        let mut input = InputState::new();
        input.pointer_down(menu.item_center(GameId::GapRunner));

        assert_eq!(menu.update(&mut input), Some(GameId::GapRunner));
        assert!(input.unclaimed_click().is_none());
    }

    #[test]
    fn hover_without_click_selects_nothing() {
        let mut menu = Menu::new();
        let mut input = InputState::new();
        input.pointer_moved(menu.item_center(GameId::LaneDefense));

        assert_eq!(menu.update(&mut input), None);
        assert_eq!(menu.hovered, Some(0));
    }

    #[test]
    fn click_off_items_is_not_claimed() {
        let mut menu = Menu::new();
        let mut input = InputState::new();
        input.pointer_down(Vec2::new(5.0, 5.0));

        assert_eq!(menu.update(&mut input), None);
        assert!(input.unclaimed_click().is_some());
    }
}
