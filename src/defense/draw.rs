//! Lane-defense drawing. Read-only over the state; the `frame` argument
//! drives purely visual oscillation.

use glam::Vec2;

use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, FONT_UI, defense as cfg};
use crate::defense::state::{DefenseState, HostileKind, PLACE_ANIM_TICKS, UnitKind};
use crate::defense::tick::packet_rect;
use crate::render::{Surface, TextAlign, TextBaseline};

const COLOR_SOIL: &str = "#5c3e30";
const COLOR_GRID: &str = "rgba(0, 0, 0, 0.2)";
const COLOR_GUNNER: &str = "#2ecc71";
const COLOR_HARVESTER: &str = "#f1c40f";
const COLOR_BULWARK: &str = "#a0522d";
const COLOR_BULWARK_BORDER: &str = "#694518";
const COLOR_DETONATOR: &str = "#e74c3c";
const COLOR_HOSTILE: &str = "#95a5a6";
const COLOR_HOSTILE_ARM: &str = "#7f8c8d";
const COLOR_CREST: &str = "#e67e22";
const COLOR_PROJECTILE: &str = "#34495e";
const COLOR_PICKUP: &str = "#f39c12";
const COLOR_PICKUP_RAY: &str = "rgba(255, 255, 100, 0.7)";
const COLOR_UI_BG: &str = "#bdc3c7";
const COLOR_PACKET_BG: &str = "#8a6d3b";

fn unit_color(kind: UnitKind) -> &'static str {
    match kind {
        UnitKind::Gunner => COLOR_GUNNER,
        UnitKind::Harvester => COLOR_HARVESTER,
        UnitKind::Bulwark => COLOR_BULWARK,
        UnitKind::Detonator => COLOR_DETONATOR,
    }
}

pub fn draw(state: &DefenseState, frame: u64, surface: &mut dyn Surface) {
    surface.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT, COLOR_SOIL);

    // Grid lines
    for row in 0..cfg::GRID_ROWS {
        for col in 0..cfg::GRID_COLS {
            surface.stroke_rect(
                cfg::GRID_X + col as f32 * cfg::CELL_WIDTH,
                cfg::GRID_Y + row as f32 * cfg::CELL_HEIGHT,
                cfg::CELL_WIDTH,
                cfg::CELL_HEIGHT,
                COLOR_GRID,
                1.0,
            );
        }
    }

    // Particles behind everything else
    for p in &state.particles {
        surface.fill_circle(p.pos.x, p.pos.y, p.size, p.color);
    }

    draw_units(state, frame, surface);
    draw_hostiles(state, surface);

    for p in &state.projectiles {
        surface.fill_circle(p.pos.x, p.pos.y, 5.0, COLOR_PROJECTILE);
    }

    for pickup in &state.pickups {
        draw_pickup(surface, pickup.pos, pickup.angle);
    }

    draw_ui(state, surface);

    if state.waves_done {
        surface.fill_rect(
            0.0,
            CANVAS_HEIGHT / 3.0,
            CANVAS_WIDTH,
            CANVAS_HEIGHT / 3.0,
            "rgba(0, 0, 0, 0.6)",
        );
        surface.fill_text(
            "YOU SURVIVED!",
            CANVAS_WIDTH / 2.0,
            CANVAS_HEIGHT / 2.0,
            &format!("bold 48px {FONT_UI}"),
            "lime",
            TextAlign::Center,
            TextBaseline::Middle,
        );
    }
}

fn draw_units(state: &DefenseState, frame: u64, surface: &mut dyn Surface) {
    for unit in &state.units {
        let center = crate::defense::state::cell_center(unit.row, unit.col);
        let mut radius = cfg::CELL_WIDTH * 0.35;

        // Placement pop
        if unit.place_anim > 0 {
            let t = unit.place_anim as f32 / PLACE_ANIM_TICKS as f32;
            radius *= 1.0 + (t * std::f32::consts::PI).sin() * 0.3;
        }
        // Harvester pulses when an emission is close
        if unit.kind == UnitKind::Harvester && unit.emit_cooldown >= cfg::HARVESTER_INTERVAL - 50 {
            radius *= 1.0 + (frame as f32 * 0.2).sin() * 0.1;
        }
        // Detonator pulses on its whole fuse, with a little fuse sprite
        if unit.kind == UnitKind::Detonator && unit.fuse.is_some() {
            radius *= 1.0 + (frame as f32 * 0.3).sin() * 0.15;
            surface.line(
                Vec2::new(center.x, center.y - radius),
                Vec2::new(center.x + 5.0, center.y - radius - 10.0),
                "black",
                2.0,
            );
            surface.fill_rect(center.x + 3.0, center.y - radius - 12.0, 4.0, 4.0, "yellow");
        }

        surface.fill_circle(center.x, center.y, radius, unit_color(unit.kind));

        if unit.kind == UnitKind::Gunner {
            surface.fill_rect(
                center.x + radius * 0.6,
                center.y - radius * 0.2,
                radius * 0.6,
                radius * 0.4,
                "#1a5d2b",
            );
        }
        if unit.kind == UnitKind::Bulwark {
            surface.stroke_circle(center.x, center.y, radius, COLOR_BULWARK_BORDER, 3.0);
        }

        // Health bar once damaged; detonators never show one
        let max = unit.kind.max_health();
        if unit.health < max && unit.kind != UnitKind::Detonator {
            let ratio = unit.health as f32 / max as f32;
            surface.fill_rect(center.x - radius, center.y - radius - 10.0, radius * 2.0, 6.0, "red");
            surface.fill_rect(
                center.x - radius,
                center.y - radius - 10.0,
                radius * 2.0 * ratio,
                6.0,
                "lime",
            );
        }
    }
}

fn draw_hostiles(state: &DefenseState, surface: &mut dyn Surface) {
    for hostile in &state.hostiles {
        let y = cfg::GRID_Y + hostile.row as f32 * cfg::CELL_HEIGHT + cfg::CELL_HEIGHT * 0.1;
        let w = cfg::CELL_WIDTH * 0.6;
        let h = cfg::CELL_HEIGHT * 0.8;

        surface.fill_rect(hostile.x, y, w, h, COLOR_HOSTILE);

        // Arms swing with position for a cheap walk cycle
        let arm_dy = (hostile.x * 0.1).sin() * 5.0;
        surface.fill_rect(
            hostile.x - w * 0.15,
            y + h * 0.3 + arm_dy,
            w * 0.15,
            h * 0.15,
            COLOR_HOSTILE_ARM,
        );
        surface.fill_rect(
            hostile.x + w,
            y + h * 0.3 - arm_dy,
            w * 0.15,
            h * 0.15,
            COLOR_HOSTILE_ARM,
        );

        if hostile.kind == HostileKind::Brute {
            surface.fill_triangle(
                Vec2::new(hostile.x + w * 0.1, y + h * 0.1),
                Vec2::new(hostile.x + w * 0.9, y + h * 0.1),
                Vec2::new(hostile.x + w * 0.5, y - h * 0.3),
                COLOR_CREST,
            );
        }

        let ratio = hostile.health as f32 / hostile.kind.max_health() as f32;
        if ratio < 1.0 {
            surface.fill_rect(hostile.x, y - 10.0, w, 6.0, "red");
            surface.fill_rect(hostile.x, y - 10.0, w * ratio.max(0.0), 6.0, "lime");
        }
    }
}

fn draw_pickup(surface: &mut dyn Surface, pos: Vec2, angle: f32) {
    let radius = cfg::PICKUP_RADIUS;
    surface.save();
    surface.translate(pos.x, pos.y);
    surface.rotate(angle);
    surface.fill_circle(0.0, 0.0, radius, COLOR_PICKUP);
    for _ in 0..8 {
        surface.rotate(std::f32::consts::FRAC_PI_4);
        surface.fill_rect(radius * 0.6, -radius * 0.1, radius * 0.8, radius * 0.2, COLOR_PICKUP_RAY);
    }
    surface.restore();
}

fn draw_ui(state: &DefenseState, surface: &mut dyn Surface) {
    surface.fill_rect(0.0, 0.0, CANVAS_WIDTH, cfg::GRID_Y * 0.8, COLOR_UI_BG);

    for (index, kind) in UnitKind::ALL.iter().enumerate() {
        let rect = packet_rect(index);
        surface.fill_rect(rect.x, rect.y, rect.w, rect.h, COLOR_PACKET_BG);

        let affordable = state.energy >= kind.cost();
        surface.set_alpha(if affordable { 1.0 } else { 0.5 });

        if state.selected == Some(*kind) {
            surface.stroke_rect(
                rect.x - 1.0,
                rect.y - 1.0,
                rect.w + 2.0,
                rect.h + 2.0,
                "#ffffff",
                3.0,
            );
        }

        let icon_r = rect.w * 0.3;
        let icon = Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h * 0.4);
        surface.fill_circle(icon.x, icon.y, icon_r, unit_color(*kind));
        if *kind == UnitKind::Bulwark {
            surface.stroke_circle(icon.x, icon.y, icon_r, COLOR_BULWARK_BORDER, 2.0);
        }
        if *kind == UnitKind::Detonator {
            surface.line(
                Vec2::new(icon.x, icon.y - icon_r),
                Vec2::new(icon.x + 3.0, icon.y - icon_r - 6.0),
                "black",
                1.0,
            );
        }

        surface.fill_text(
            &kind.cost().to_string(),
            rect.x + rect.w / 2.0,
            rect.y + rect.h - 15.0,
            &format!("bold 14px {FONT_UI}"),
            "#000000",
            TextAlign::Center,
            TextBaseline::Alphabetic,
        );
        surface.set_alpha(1.0);
    }

    let stats_x = cfg::GRID_X + UnitKind::ALL.len() as f32 * (cfg::PACKET_WIDTH + cfg::PACKET_SPACING) + 20.0;
    surface.fill_text(
        &format!("Energy: {}", state.energy),
        stats_x,
        10.0 + cfg::PACKET_HEIGHT / 2.0,
        &format!("bold 24px {FONT_UI}"),
        "#000000",
        TextAlign::Left,
        TextBaseline::Middle,
    );
    surface.fill_text(
        &format!("Score: {}", state.score),
        stats_x,
        10.0 + cfg::PACKET_HEIGHT / 2.0 + 25.0,
        &format!("bold 18px {FONT_UI}"),
        "#000000",
        TextAlign::Left,
        TextBaseline::Middle,
    );

    let wave_text = if state.waves_done {
        "All Waves Cleared!".to_string()
    } else if state.wave_active {
        format!("Wave: {}", state.wave_index)
    } else if state.wave_index > 0 {
        format!("Wave {} Cleared!", state.wave_index)
    } else {
        "Preparing...".to_string()
    };
    // Below the pause button
    surface.fill_text(
        &wave_text,
        CANVAS_WIDTH - 15.0,
        45.0,
        &format!("bold 18px {FONT_UI}"),
        "#000000",
        TextAlign::Right,
        TextBaseline::Top,
    );
}
