//! Canvas 2D renderer (web only)
//!
//! Draws with flat shapes so nothing depends on image assets loading.

use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::hud::{Hud, effect_label};
use super::palette::{self, css};
use super::{Renderer, world_scale};
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Hazard, Obstacle, PowerUp, Projectile};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    /// World-to-canvas scale
    scale: f64,
}

impl CanvasRenderer {
    /// Wrap a canvas, or None if a 2D context isn't available
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            scale: world_scale(canvas.width()),
        })
    }

    /// Call after the canvas backing size changes
    pub fn resize(&mut self, canvas_width: u32) {
        self.scale = world_scale(canvas_width);
    }

    fn fill_circle(&self, x: f64, y: f64, r: f64, color: u32) {
        self.ctx.set_fill_style_str(&css(color));
        self.ctx.begin_path();
        if self.ctx.arc(x, y, r, 0.0, PI * 2.0).is_ok() {
            self.ctx.fill();
        }
    }

    fn draw_background(&self, state: &GameState) {
        let (w, h) = (WORLD_WIDTH as f64, WORLD_HEIGHT as f64);
        self.ctx.set_fill_style_str(&css(palette::SKY));
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.ctx.set_global_alpha(0.8);
        let offset = state.background_x as f64;
        for i in 0..5 {
            let x = (offset + i as f64 * 150.0).rem_euclid(w + 100.0);
            let y = 50.0 + i as f64 * 30.0;
            self.fill_circle(x, y, 30.0, palette::CLOUD);
            self.fill_circle(x + 25.0, y, 35.0, palette::CLOUD);
            self.fill_circle(x + 50.0, y, 30.0, palette::CLOUD);
        }
        self.ctx.set_global_alpha(1.0);
    }

    fn draw_obstacle(&self, ob: &Obstacle) {
        let (x, w) = (ob.x as f64, ob.width as f64);
        let bottom_y = ob.bottom_top() as f64;
        self.ctx.set_fill_style_str(&css(palette::OBSTACLE));
        self.ctx.fill_rect(x, 0.0, w, ob.top_height as f64);
        self.ctx.fill_rect(x, bottom_y, w, ob.bottom_height as f64);

        // Windows
        self.ctx.set_fill_style_str(&css(palette::OBSTACLE_DETAIL));
        let mut y = 0.0;
        while y < ob.top_height as f64 {
            self.ctx.fill_rect(x + 10.0, y + 10.0, w - 20.0, 20.0);
            y += 40.0;
        }
        let mut y = 0.0;
        while y < ob.bottom_height as f64 {
            self.ctx.fill_rect(x + 10.0, bottom_y + y + 10.0, w - 20.0, 20.0);
            y += 40.0;
        }
    }

    fn draw_pig(&self, pig: &Hazard) {
        let (x, y) = (pig.pos.x as f64, pig.pos.y as f64);
        self.fill_circle(x, y, pig.size.x as f64 / 2.0, palette::PIG);
        self.fill_circle(x, y + 5.0, 5.0, palette::PIG_SNOUT);
    }

    fn draw_arrow(&self, arrow: &Projectile) {
        let (w, h) = (arrow.size.x as f64, arrow.size.y as f64);
        let c = arrow.center();
        self.ctx.save();
        let _ = self.ctx.translate(c.x as f64, c.y as f64);
        let _ = self.ctx.rotate(arrow.rotation as f64);
        self.ctx.set_fill_style_str(&css(palette::ARROW_SHAFT));
        self.ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);
        self.ctx.set_fill_style_str(&css(palette::ARROW_TIP));
        self.ctx.begin_path();
        self.ctx.move_to(w / 2.0, 0.0);
        self.ctx.line_to(w / 2.0 - 5.0, -h / 2.0);
        self.ctx.line_to(w / 2.0 - 5.0, h / 2.0);
        self.ctx.close_path();
        self.ctx.fill();
        self.ctx.restore();
    }

    fn draw_power_up(&self, p: &PowerUp, now_ms: f64) {
        let (fill, stroke, glyph) = palette::power_up_style(p.kind);
        let pulse = (now_ms * 0.01).sin() * 0.1 + 1.0;
        let size = p.size.x as f64 * pulse;
        let cx = (p.pos.x + p.size.x / 2.0) as f64;
        let cy = (p.pos.y + p.size.y / 2.0) as f64;

        self.ctx.set_fill_style_str(&css(fill));
        self.ctx.set_stroke_style_str(&css(stroke));
        self.ctx.set_line_width(2.0);
        self.ctx.fill_rect(cx - size / 2.0, cy - size / 2.0, size, size);
        self.ctx.stroke_rect(cx - size / 2.0, cy - size / 2.0, size, size);

        self.ctx.set_fill_style_str("white");
        self.ctx.set_font("16px Arial");
        self.ctx.set_text_align("center");
        let _ = self.ctx.fill_text(glyph, cx, cy + 5.0);
    }

    fn draw_particles(&self, state: &GameState) {
        for p in &state.particles {
            self.ctx.set_global_alpha(p.life.clamp(0.0, 1.0) as f64);
            self.fill_circle(p.pos.x as f64, p.pos.y as f64, p.size as f64, p.color);
        }
        self.ctx.set_global_alpha(1.0);
    }

    fn draw_bird(&self, state: &GameState, now_ms: f64) {
        let bird = &state.bird;
        let c = bird.center();
        let r = bird.size.x as f64 / 2.0;

        self.ctx.save();
        let _ = self.ctx.translate(c.x as f64, c.y as f64);
        let _ = self.ctx.rotate((bird.rotation as f64).to_radians());

        if state.effects.shield.active {
            self.ctx.set_stroke_style_str(&css(palette::SHIELD_RING));
            self.ctx.set_line_width(3.0);
            self.ctx.begin_path();
            if self.ctx.arc(0.0, 0.0, r + 8.0, 0.0, PI * 2.0).is_ok() {
                self.ctx.stroke();
            }
            let pulse = (now_ms * 0.01).sin() * 0.3 + 0.7;
            self.ctx.set_global_alpha(pulse);
            self.ctx.set_line_width(2.0);
            self.ctx.begin_path();
            if self.ctx.arc(0.0, 0.0, r + 12.0, 0.0, PI * 2.0).is_ok() {
                self.ctx.stroke();
            }
            self.ctx.set_global_alpha(1.0);
        }

        self.fill_circle(0.0, 0.0, r, state.character.profile().color);

        self.ctx.set_fill_style_str(&css(palette::BEAK));
        self.ctx.begin_path();
        self.ctx.move_to(r, 0.0);
        self.ctx.line_to(r + 15.0, -5.0);
        self.ctx.line_to(r + 15.0, 5.0);
        self.ctx.close_path();
        self.ctx.fill();

        self.fill_circle(-5.0, -5.0, 8.0, 0xFFFFFF);
        self.fill_circle(-3.0, -5.0, 4.0, 0x000000);

        self.ctx.restore();
    }

    fn draw_hud(&self, state: &GameState) {
        let hud = Hud::from_state(state);
        self.ctx.set_fill_style_str("white");
        self.ctx.set_font("bold 24px Arial");
        self.ctx.set_text_align("left");
        let _ = self.ctx.fill_text(&hud.score, 16.0, 36.0);
        let _ = self.ctx.fill_text(&hud.high_score, 16.0, 66.0);

        self.ctx.set_font("16px Arial");
        for (i, (kind, secs)) in hud.effects.iter().enumerate() {
            let line = format!("{} {}s", effect_label(*kind), secs);
            let _ = self.ctx.fill_text(&line, 16.0, 96.0 + i as f64 * 22.0);
        }

        if let Some(banner) = hud.banner {
            self.ctx.set_text_align("center");
            self.ctx.set_font("bold 20px Arial");
            let _ = self.ctx.fill_text(banner, WORLD_WIDTH as f64 / 2.0, WORLD_HEIGHT as f64 / 3.0);
        }

        if state.phase == GamePhase::CharacterSelect {
            self.ctx.set_font("18px Arial");
            for (i, kind) in crate::sim::CharacterKind::ALL.iter().enumerate() {
                let profile = kind.profile();
                let marker = if *kind == state.character { ">" } else { " " };
                let line = format!("{} {}. {} - {}", marker, i + 1, profile.name, profile.ability);
                let y = WORLD_HEIGHT as f64 / 3.0 + 40.0 + i as f64 * 28.0;
                self.ctx.set_fill_style_str(&css(profile.color));
                let _ = self.ctx.fill_text(&line, WORLD_WIDTH as f64 / 2.0, y);
            }
        }
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, state: &GameState, now_ms: f64) {
        self.ctx.save();
        let _ = self.ctx.set_transform(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0);

        self.draw_background(state);
        for ob in &state.obstacles {
            self.draw_obstacle(ob);
        }
        for pig in &state.hazards {
            self.draw_pig(pig);
        }
        for arrow in &state.projectiles {
            self.draw_arrow(arrow);
        }
        for p in state.power_ups.iter().filter(|p| !p.collected) {
            self.draw_power_up(p, now_ms);
        }
        self.draw_particles(state);
        self.draw_bird(state, now_ms);
        self.draw_hud(state);

        self.ctx.restore();
    }
}
