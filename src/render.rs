//! Draws a [`GameState`] snapshot in world coordinates.
//!
//! Callers set the viewport transform first; everything here works in the
//! fixed 800×450 world. Canvas calls that return `Result` are discarded with
//! `.ok()`, a failed draw call only affects the current frame.

use std::f64::consts::{PI, TAU};

use web_sys::CanvasRenderingContext2d;

use crate::config::*;
use crate::model::{Boss, Coin, DamageIndicator, Enemy, Facing, GameState, Grave, Particle, Projectile};
use crate::state::Background;
use crate::util::{hsl, rgba};

const PLAYER_COLOR: &str = "#e67e22";
const FACE_COLOR: &str = "#D2B48C";
const HIT_COLOR: &str = "#ff0000";
const BOSS_COLOR: &str = "#4a235a";

/// Full frame: background, world, then overlays. `now_ms` drives pulses.
pub fn draw_frame(ctx: &CanvasRenderingContext2d, gs: &GameState, bg: &Background, now_ms: f64) {
    draw_background(ctx, bg);
    if !gs.started {
        return;
    }
    for g in &gs.graves {
        draw_grave(ctx, g);
    }
    if gs.settings.show_dust {
        for p in &gs.dust {
            draw_dust(ctx, p);
        }
    }
    for c in &gs.coin_drops {
        draw_coin(ctx, c);
    }
    for b in &gs.bursts {
        for p in &b.particles {
            draw_square_particle(ctx, p);
        }
    }
    if gs.player.is_dead {
        draw_player_death(ctx, gs);
    } else {
        draw_player(ctx, gs, now_ms);
    }
    for e in &gs.enemies {
        draw_enemy(ctx, e);
    }
    if let Some(boss) = &gs.boss {
        draw_boss(ctx, boss);
    }
    for p in &gs.projectiles {
        draw_projectile(ctx, p);
    }
    if gs.settings.show_damage_numbers {
        for d in &gs.damage_indicators {
            draw_damage_indicator(ctx, d);
        }
    }
    draw_round_banner(ctx, gs);
}

pub fn draw_background(ctx: &CanvasRenderingContext2d, bg: &Background) {
    let (top, bottom) = bg.sky_hues();
    let sky = ctx.create_linear_gradient(0.0, 0.0, 0.0, GROUND_Y);
    sky.add_color_stop(0.0, &hsl(top, 70, 60)).ok();
    sky.add_color_stop(1.0, &hsl(bottom, 70, 50)).ok();
    ctx.set_fill_style_canvas_gradient(&sky);
    ctx.fill_rect(0.0, 0.0, WORLD_WIDTH, GROUND_Y);

    ctx.set_fill_style_str("#ffffff");
    for cloud in &bg.clouds {
        ctx.save();
        ctx.set_global_alpha(cloud.opacity);
        let puffs = [
            (0.0, 0.0, cloud.width / 2.0, cloud.height / 2.0),
            (cloud.width * 0.3, -cloud.height * 0.2, cloud.width / 3.0, cloud.height / 2.0),
            (-cloud.width * 0.2, -cloud.height * 0.1, cloud.width / 4.0, cloud.height / 3.0),
        ];
        for (dx, dy, rx, ry) in puffs {
            ctx.begin_path();
            ctx.ellipse(cloud.x + dx, cloud.y + dy, rx, ry, 0.0, 0.0, TAU).ok();
            ctx.fill();
        }
        ctx.restore();
    }

    ctx.set_fill_style_str("#2ecc71");
    ctx.fill_rect(0.0, GROUND_Y, WORLD_WIDTH, WORLD_HEIGHT - GROUND_Y);
    ctx.set_fill_style_str("#27ae60");
    for (i, height) in bg.tufts.iter().enumerate() {
        let x = i as f64 * crate::state::background::TUFT_SPACING;
        let sway = bg.tuft_sway(x);
        ctx.begin_path();
        ctx.move_to(x, GROUND_Y);
        ctx.line_to(x + sway + 4.0, GROUND_Y - height);
        ctx.line_to(x + 8.0, GROUND_Y);
        ctx.fill();
    }
}

fn draw_grave(ctx: &CanvasRenderingContext2d, g: &Grave) {
    ctx.save();
    ctx.set_global_alpha(g.alpha);
    let top = g.y + g.y_offset;
    ctx.set_fill_style_str("#7f8c8d");
    ctx.fill_rect(g.x, top, g.width, g.height - 10.0);
    ctx.begin_path();
    ctx.arc(g.x + g.width / 2.0, top, g.width / 2.0, PI, TAU).ok();
    ctx.fill();
    ctx.set_fill_style_str("#34495e");
    ctx.set_font("12px Arial");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text("RIP", g.x + g.width / 2.0, top + 15.0).ok();
    ctx.set_fill_style_str("#795548");
    ctx.begin_path();
    ctx.ellipse(g.x + g.width / 2.0, top + g.height, g.width / 1.5, 10.0, 0.0, 0.0, TAU)
        .ok();
    ctx.fill();
    ctx.restore();
}

fn draw_dust(ctx: &CanvasRenderingContext2d, p: &Particle) {
    ctx.save();
    ctx.set_global_alpha(p.alpha.max(0.0));
    ctx.set_fill_style_str(p.color);
    ctx.begin_path();
    ctx.arc(p.x, p.y, p.size.max(0.0), 0.0, TAU).ok();
    ctx.fill();
    ctx.restore();
}

fn draw_square_particle(ctx: &CanvasRenderingContext2d, p: &Particle) {
    ctx.save();
    ctx.set_global_alpha(p.alpha.max(0.0));
    ctx.translate(p.x, p.y).ok();
    ctx.rotate(p.rotation).ok();
    ctx.set_fill_style_str(p.color);
    ctx.fill_rect(-p.size / 2.0, -p.size / 2.0, p.size, p.size);
    ctx.restore();
}

fn draw_coin(ctx: &CanvasRenderingContext2d, c: &Coin) {
    ctx.save();
    ctx.translate(c.x, c.y).ok();
    ctx.rotate(c.rotation).ok();
    ctx.set_fill_style_str("#f39c12");
    ctx.begin_path();
    ctx.arc(0.0, 0.0, c.radius, 0.0, TAU).ok();
    ctx.fill();
    ctx.set_fill_style_str("#f1c40f");
    ctx.begin_path();
    ctx.arc(0.0, 0.0, c.radius * 0.7, 0.0, TAU).ok();
    ctx.fill();
    ctx.set_fill_style_str("#fff");
    ctx.set_font("15px Arial");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text("$", 0.0, 0.0).ok();
    if c.attracted {
        ctx.set_stroke_style_str("rgba(255, 255, 255, 0.3)");
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.arc(0.0, 0.0, c.radius + 5.0, 0.0, TAU).ok();
        ctx.stroke();
    }
    ctx.restore();
}

fn draw_player(ctx: &CanvasRenderingContext2d, gs: &GameState, now_ms: f64) {
    let p = &gs.player;
    ctx.save();
    if p.blink_dimmed() {
        ctx.set_global_alpha(0.3);
    }

    // tail trails behind the facing direction
    let behind = -p.facing.sign();
    let tail_x = match p.facing {
        Facing::Right => p.x,
        Facing::Left => p.x + p.width,
    };
    let tail_y = p.y + p.height - 10.0;
    ctx.set_stroke_style_str(PLAYER_COLOR);
    ctx.set_line_width(8.0);
    ctx.begin_path();
    ctx.move_to(tail_x, tail_y);
    ctx.quadratic_curve_to(tail_x + behind * 20.0, tail_y + 20.0, tail_x + behind * 30.0, tail_y + 10.0);
    ctx.stroke();

    ctx.set_fill_style_str(PLAYER_COLOR);
    ctx.fill_rect(p.x, p.y, p.width, p.height);
    ctx.set_fill_style_str(FACE_COLOR);
    ctx.begin_path();
    ctx.ellipse(p.x + p.width / 2.0, p.y + p.height / 2.0 - 5.0, 20.0, 25.0, 0.0, 0.0, TAU)
        .ok();
    ctx.fill();

    ctx.set_fill_style_str("#000");
    for ex in [15.0, 35.0] {
        ctx.begin_path();
        ctx.ellipse(p.x + ex, p.y + 15.0, 4.0, 6.0, 0.0, 0.0, TAU).ok();
        ctx.fill();
    }
    ctx.begin_path();
    ctx.ellipse(p.x + p.width / 2.0, p.y + 25.0, 5.0, 3.0, 0.0, 0.0, TAU)
        .ok();
    ctx.fill();
    ctx.set_stroke_style_str("#000");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(p.x + 15.0, p.y + 35.0);
    ctx.quadratic_curve_to(p.x + p.width / 2.0, p.y + 40.0, p.x + 35.0, p.y + 35.0);
    ctx.stroke();

    ctx.set_fill_style_str(PLAYER_COLOR);
    for ex in [5.0, p.width - 5.0] {
        ctx.begin_path();
        ctx.ellipse(p.x + ex, p.y + 5.0, 8.0, 8.0, 0.0, 0.0, TAU).ok();
        ctx.fill();
    }

    if p.is_punching() {
        let arm_x = match p.facing {
            Facing::Right => p.x + p.width,
            Facing::Left => p.x - PUNCH_RANGE,
        };
        ctx.set_fill_style_str(PLAYER_COLOR);
        ctx.fill_rect(arm_x, p.y + 20.0, PUNCH_RANGE, 15.0);
        let fist = match p.element {
            Some(crate::model::Element::Fire) => Some("#ff5722"),
            Some(crate::model::Element::Ice) => Some("#81d4fa"),
            None => None,
        };
        if let Some(color) = fist {
            let fist_x = match p.facing {
                Facing::Right => arm_x + PUNCH_RANGE,
                Facing::Left => arm_x,
            };
            ctx.set_fill_style_str(color);
            ctx.begin_path();
            ctx.arc(fist_x, p.y + 27.5, 10.0, 0.0, TAU).ok();
            ctx.fill();
        }
    }

    let ratio = p.health_ratio();
    let regen = p.is_regenerating();
    if regen {
        let pulse = 0.7 + 0.3 * (now_ms * 0.01).sin();
        ctx.set_fill_style_str(&rgba(46, 204, 113, pulse));
    } else {
        ctx.set_fill_style_str("#2ecc71");
    }
    ctx.fill_rect(p.x, p.y - 15.0, p.width * ratio, 5.0);
    ctx.set_stroke_style_str("#fff");
    ctx.set_line_width(1.0);
    ctx.stroke_rect(p.x, p.y - 15.0, p.width, 5.0);
    if regen {
        ctx.set_fill_style_str("#2ecc71");
        ctx.begin_path();
        ctx.arc(p.x + p.width * ratio + 5.0, p.y - 12.5, 3.0, 0.0, TAU).ok();
        ctx.fill();
    }
    ctx.restore();
}

fn draw_player_death(ctx: &CanvasRenderingContext2d, gs: &GameState) {
    let death = &gs.player.death;
    if death.active {
        for p in &death.particles {
            draw_square_particle(ctx, p);
        }
    }
    let since = death.timer.saturating_sub(GAME_OVER_TEXT_DELAY);
    if death.timer > GAME_OVER_TEXT_DELAY || !death.active {
        let alpha = if death.active {
            (since as f64 / 60.0).min(1.0)
        } else {
            1.0
        };
        ctx.save();
        ctx.set_fill_style_str(&rgba(255, 0, 0, alpha));
        ctx.set_font("48px Arial");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text("GAME OVER", WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0).ok();
        ctx.restore();
    }
}

fn draw_health_bar(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, ratio: f64) {
    ctx.set_fill_style_str("#e74c3c");
    ctx.fill_rect(x, y - 15.0, w * ratio, 5.0);
    ctx.set_stroke_style_str("#fff");
    ctx.set_line_width(1.0);
    ctx.stroke_rect(x, y - 15.0, w, 5.0);
}

fn draw_enemy(ctx: &CanvasRenderingContext2d, e: &Enemy) {
    ctx.save();
    let body = if e.hit_flash > 0 { HIT_COLOR } else { e.color };
    ctx.set_fill_style_str(body);
    ctx.fill_rect(e.x, e.y, e.width, e.height);
    if e.burn.is_some() {
        ctx.set_fill_style_str("rgba(255, 87, 34, 0.35)");
        ctx.fill_rect(e.x, e.y, e.width, e.height);
    }
    if e.chill_frames > 0 {
        ctx.set_fill_style_str("rgba(129, 212, 250, 0.45)");
        ctx.fill_rect(e.x, e.y, e.width, e.height);
    }

    if e.about_to_jump() {
        ctx.set_fill_style_str("yellow");
        ctx.begin_path();
        ctx.arc(e.x + e.width / 2.0, e.y - 10.0, 5.0, 0.0, TAU).ok();
        ctx.fill();
    }

    ctx.set_fill_style_str("#000");
    ctx.fill_rect(e.x + 8.0, e.y + 12.0, 8.0, 8.0);
    ctx.fill_rect(e.x + 24.0, e.y + 12.0, 8.0, 8.0);
    ctx.set_stroke_style_str("#000");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(e.x + 10.0, e.y + 35.0);
    ctx.line_to(e.x + 20.0, e.y + 40.0);
    ctx.line_to(e.x + 30.0, e.y + 35.0);
    ctx.stroke();

    draw_health_bar(ctx, e.x, e.y, e.width, e.health_ratio());
    ctx.restore();
}

fn draw_boss(ctx: &CanvasRenderingContext2d, b: &Boss) {
    ctx.save();
    ctx.set_fill_style_str(if b.hit_flash > 0 { HIT_COLOR } else { BOSS_COLOR });
    ctx.fill_rect(b.x, b.y, b.width, b.height);
    // horns
    ctx.set_fill_style_str("#bdc3c7");
    for (base, tip) in [(b.x + 10.0, b.x + 4.0), (b.x + b.width - 10.0, b.x + b.width - 4.0)] {
        ctx.begin_path();
        ctx.move_to(base - 6.0, b.y);
        ctx.line_to(tip, b.y - 18.0);
        ctx.line_to(base + 6.0, b.y);
        ctx.fill();
    }
    ctx.set_fill_style_str("#f1c40f");
    ctx.fill_rect(b.x + 16.0, b.y + 22.0, 14.0, 10.0);
    ctx.fill_rect(b.x + b.width - 30.0, b.y + 22.0, 14.0, 10.0);
    ctx.set_stroke_style_str("#000");
    ctx.set_line_width(3.0);
    ctx.begin_path();
    ctx.move_to(b.x + 20.0, b.y + 62.0);
    ctx.line_to(b.x + b.width / 2.0, b.y + 70.0);
    ctx.line_to(b.x + b.width - 20.0, b.y + 62.0);
    ctx.stroke();
    draw_health_bar(ctx, b.x, b.y, b.width, b.health_ratio());
    ctx.restore();
}

fn draw_projectile(ctx: &CanvasRenderingContext2d, p: &Projectile) {
    ctx.save();
    let flicker = 1.0 + (p.age as f64 * 0.5).sin() * 0.15;
    ctx.set_fill_style_str("rgba(255, 152, 0, 0.35)");
    ctx.begin_path();
    ctx.arc(p.x, p.y, p.radius * 1.8 * flicker, 0.0, TAU).ok();
    ctx.fill();
    ctx.set_fill_style_str("#ff5722");
    ctx.begin_path();
    ctx.arc(p.x, p.y, p.radius, 0.0, TAU).ok();
    ctx.fill();
    ctx.restore();
}

fn draw_damage_indicator(ctx: &CanvasRenderingContext2d, d: &DamageIndicator) {
    ctx.save();
    ctx.set_global_alpha(d.alpha().max(0.0));
    ctx.set_fill_style_str(d.color);
    ctx.set_font(&format!("bold {}px Arial", d.size));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&d.value.to_string(), d.x, d.y).ok();
    ctx.restore();
}

fn draw_round_banner(ctx: &CanvasRenderingContext2d, gs: &GameState) {
    let (Some(t), Some(alpha)) = (gs.round.transition_timer, gs.round_banner_alpha()) else {
        return;
    };
    ctx.save();
    ctx.set_fill_style_str(&rgba(0, 0, 0, (t as f64 / 30.0).min(0.7)));
    ctx.fill_rect(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT);
    ctx.set_global_alpha(alpha);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("48px Arial");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let label = if gs.round.boss_pending {
        format!("ROUND {} - BOSS", gs.round.current)
    } else {
        format!("ROUND {}", gs.round.current)
    };
    ctx.fill_text(&label, WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0).ok();
    ctx.restore();
}
