//! Side-scroller drawing. Read-only over the state; the `frame` argument
//! drives the idle bob only.

use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, FONT_RETRO, scroller as cfg};
use crate::render::{Surface, TextAlign, TextBaseline};
use crate::scroller::state::{Phase, ScrollerState};

const COLOR_SKY: &str = "#4a90e2";
const COLOR_FLOOR: &str = "#b87333";
const COLOR_AVATAR: &str = "#f5a623";
const COLOR_PIPE: &str = "#7ed321";
const COLOR_PIPE_BORDER: &str = "#5c9f1a";
const COLOR_TEXT: &str = "#ffffff";
const COLOR_TEXT_OUTLINE: &str = "#000000";
const COLOR_GAMEOVER_BG: &str = "rgba(0, 0, 0, 0.75)";
const COLOR_GAMEOVER_TEXT: &str = "#ff4f4f";

pub fn draw(state: &ScrollerState, frame: u64, surface: &mut dyn Surface) {
    surface.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT, COLOR_SKY);

    // Obstacles
    for pipe in &state.obstacles {
        surface.fill_rect(pipe.x, 0.0, cfg::OBSTACLE_WIDTH, pipe.gap_top, COLOR_PIPE);
        surface.stroke_rect(
            pipe.x,
            0.0,
            cfg::OBSTACLE_WIDTH,
            pipe.gap_top,
            COLOR_PIPE_BORDER,
            3.0,
        );
        let bottom_h = CANVAS_HEIGHT - pipe.gap_bottom - cfg::FLOOR_HEIGHT;
        surface.fill_rect(
            pipe.x,
            pipe.gap_bottom,
            cfg::OBSTACLE_WIDTH,
            bottom_h,
            COLOR_PIPE,
        );
        surface.stroke_rect(
            pipe.x,
            pipe.gap_bottom,
            cfg::OBSTACLE_WIDTH,
            bottom_h,
            COLOR_PIPE_BORDER,
            3.0,
        );
    }

    // Floor with a dark lip
    let floor_y = CANVAS_HEIGHT - cfg::FLOOR_HEIGHT;
    surface.fill_rect(0.0, floor_y, CANVAS_WIDTH, cfg::FLOOR_HEIGHT, COLOR_FLOOR);
    surface.fill_rect(0.0, floor_y, CANVAS_WIDTH, 3.0, COLOR_TEXT_OUTLINE);

    for p in &state.particles {
        surface.fill_circle(p.pos.x, p.pos.y, p.size, p.color);
    }

    draw_avatar(state, frame, surface);

    // Score and best
    let score_font = format!("40px {FONT_RETRO}");
    if state.phase != Phase::Start {
        let text = state.score.to_string();
        surface.stroke_text(
            &text,
            CANVAS_WIDTH / 2.0,
            70.0,
            &score_font,
            COLOR_TEXT_OUTLINE,
            4.0,
            TextAlign::Center,
            TextBaseline::Alphabetic,
        );
        surface.fill_text(
            &text,
            CANVAS_WIDTH / 2.0,
            70.0,
            &score_font,
            COLOR_TEXT,
            TextAlign::Center,
            TextBaseline::Alphabetic,
        );
    }
    let hi = format!("HI: {}", state.high_score);
    let hi_font = format!("20px {FONT_RETRO}");
    surface.stroke_text(
        &hi,
        CANVAS_WIDTH - 20.0,
        40.0,
        &hi_font,
        COLOR_TEXT_OUTLINE,
        4.0,
        TextAlign::Right,
        TextBaseline::Alphabetic,
    );
    surface.fill_text(
        &hi,
        CANVAS_WIDTH - 20.0,
        40.0,
        &hi_font,
        COLOR_TEXT,
        TextAlign::Right,
        TextBaseline::Alphabetic,
    );

    match state.phase {
        Phase::Start => draw_start_message(state, surface),
        Phase::GetReady => draw_get_ready_message(surface),
        Phase::GameOver => draw_game_over_message(state, surface),
        Phase::Playing => {}
    }
}

fn draw_avatar(state: &ScrollerState, frame: u64, surface: &mut dyn Surface) {
    let avatar = &state.avatar;
    let half = cfg::AVATAR_SIZE / 2.0;
    let center = avatar.center();

    // Idle bob while waiting for a press
    let bob = match state.phase {
        Phase::Start | Phase::GetReady => (frame as f32 * 0.1).sin() * 5.0,
        _ => 0.0,
    };

    surface.save();
    surface.translate(center.x, center.y + bob);
    surface.rotate(avatar.rotation.to_radians());
    surface.scale(avatar.scale.x, avatar.scale.y);
    surface.fill_rect(-half, -half, cfg::AVATAR_SIZE, cfg::AVATAR_SIZE, COLOR_AVATAR);
    surface.stroke_rect(
        -half,
        -half,
        cfg::AVATAR_SIZE,
        cfg::AVATAR_SIZE,
        COLOR_TEXT_OUTLINE,
        2.0,
    );
    surface.restore();
}

fn outlined_text(surface: &mut dyn Surface, text: &str, x: f32, y: f32, font: &str, color: &str) {
    surface.stroke_text(
        text,
        x,
        y,
        font,
        COLOR_TEXT_OUTLINE,
        3.0,
        TextAlign::Center,
        TextBaseline::Alphabetic,
    );
    surface.fill_text(
        text,
        x,
        y,
        font,
        color,
        TextAlign::Center,
        TextBaseline::Alphabetic,
    );
}

fn draw_start_message(state: &ScrollerState, surface: &mut dyn Surface) {
    let cx = CANVAS_WIDTH / 2.0;
    outlined_text(
        surface,
        "Gap Runner",
        cx,
        CANVAS_HEIGHT / 3.0,
        &format!("50px {FONT_RETRO}"),
        COLOR_TEXT,
    );
    outlined_text(
        surface,
        "Click / Space / ArrowUp",
        cx,
        CANVAS_HEIGHT / 2.0,
        &format!("25px {FONT_RETRO}"),
        COLOR_TEXT,
    );
    outlined_text(
        surface,
        &format!("High Score: {}", state.high_score),
        cx,
        CANVAS_HEIGHT / 2.0 + 60.0,
        &format!("30px {FONT_RETRO}"),
        COLOR_TEXT,
    );
}

fn draw_get_ready_message(surface: &mut dyn Surface) {
    outlined_text(
        surface,
        "Get Ready!",
        CANVAS_WIDTH / 2.0,
        CANVAS_HEIGHT / 3.0,
        &format!("50px {FONT_RETRO}"),
        COLOR_TEXT,
    );
}

fn draw_game_over_message(state: &ScrollerState, surface: &mut dyn Surface) {
    let box_y = CANVAS_HEIGHT * 0.2;
    let box_h = CANVAS_HEIGHT * 0.6;
    surface.fill_rect(
        CANVAS_WIDTH * 0.1,
        box_y,
        CANVAS_WIDTH * 0.8,
        box_h,
        COLOR_GAMEOVER_BG,
    );

    let cx = CANVAS_WIDTH / 2.0;
    let center_text = |surface: &mut dyn Surface, text: &str, y: f32, font: &str, color: &str| {
        surface.fill_text(
            text,
            cx,
            y,
            font,
            color,
            TextAlign::Center,
            TextBaseline::Alphabetic,
        );
    };

    center_text(
        surface,
        "Game Over!",
        box_y + 80.0,
        &format!("45px {FONT_RETRO}"),
        COLOR_GAMEOVER_TEXT,
    );
    center_text(
        surface,
        &format!("Score: {}", state.score),
        box_y + 150.0,
        &format!("35px {FONT_RETRO}"),
        COLOR_TEXT,
    );

    // >= so a first-ever run (best still 0) reads as a new best too
    if state.score >= state.high_score {
        center_text(
            surface,
            "New High Score!",
            box_y + 190.0,
            &format!("25px {FONT_RETRO}"),
            "#ffd700",
        );
    } else {
        center_text(
            surface,
            &format!("High Score: {}", state.high_score),
            box_y + 190.0,
            &format!("25px {FONT_RETRO}"),
            COLOR_TEXT,
        );
    }

    let medal = match state.score {
        s if s >= 30 => Some("Gold"),
        s if s >= 20 => Some("Silver"),
        s if s >= 10 => Some("Bronze"),
        _ => None,
    };
    if let Some(medal) = medal {
        center_text(
            surface,
            &format!("Medal: {medal}"),
            box_y + 240.0,
            &format!("30px {FONT_RETRO}"),
            COLOR_TEXT,
        );
    }

    center_text(
        surface,
        "Click / Space / ArrowUp to Retry",
        box_y + box_h - 50.0,
        &format!("20px {FONT_RETRO}"),
        COLOR_TEXT,
    );
}
