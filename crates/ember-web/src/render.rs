//! 2D canvas painting of engine snapshots.

use crate::constants::{CURSOR_DOT_RADIUS, SHOCKWAVE_LINE_WIDTH, TRAIL_PARTICLE_SIZE};
use crate::geometry;
use ember_core::{BurstFrame, Realm, TrailFrame, TrailShape};
use std::f64::consts::TAU;
use web_sys as web;

pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Clear and repaint one frame. Coordinates are CSS px; the context is
    /// scaled by `dpr` to the backing store.
    pub fn paint(
        &self,
        canvas: &web::HtmlCanvasElement,
        dpr: f64,
        realm: Realm,
        burst: &BurstFrame<'_>,
        trail: &TrailFrame<'_>,
        draw_cursor: bool,
    ) {
        let ctx = &self.ctx;
        _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

        self.paint_shockwave(realm, burst);
        self.paint_burst(burst);
        self.paint_trail(realm, trail);
        if draw_cursor {
            self.paint_cursor(realm, trail);
        }
        ctx.set_global_alpha(1.0);
    }

    fn paint_shockwave(&self, realm: Realm, burst: &BurstFrame<'_>) {
        let Some(ring) = burst.shockwave() else {
            return;
        };
        if !ring.visible || ring.radius <= 0.0 {
            return;
        }
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_stroke_style_str(&geometry::rgba(realm.shockwave_color(), ring.alpha));
        ctx.set_line_width(SHOCKWAVE_LINE_WIDTH);
        ctx.begin_path();
        _ = ctx.arc(
            ring.center.x as f64,
            ring.center.y as f64,
            ring.radius as f64,
            0.0,
            TAU,
        );
        ctx.stroke();
    }

    fn paint_burst(&self, burst: &BurstFrame<'_>) {
        let ctx = &self.ctx;
        for p in burst.particles() {
            if p.radius <= 0.0 {
                continue;
            }
            ctx.set_global_alpha(p.alpha as f64);
            ctx.set_fill_style_str(p.color);
            ctx.begin_path();
            _ = ctx.arc(
                p.position.x as f64,
                p.position.y as f64,
                p.radius as f64,
                0.0,
                TAU,
            );
            ctx.fill();
        }
    }

    fn paint_trail(&self, realm: Realm, trail: &TrailFrame<'_>) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(realm.trail_color());
        let half = TRAIL_PARTICLE_SIZE / 2.0;
        for p in trail.particles() {
            let alpha = p.alpha_at(trail.now);
            if alpha <= 0.0 {
                continue;
            }
            ctx.set_global_alpha(alpha as f64);
            let (x, y) = (p.position.x as f64, p.position.y as f64);
            match p.shape {
                TrailShape::Square => ctx.fill_rect(x - half, y - half, TRAIL_PARTICLE_SIZE, TRAIL_PARTICLE_SIZE),
                TrailShape::Circle => {
                    ctx.begin_path();
                    _ = ctx.arc(x, y, half, 0.0, TAU);
                    ctx.fill();
                }
            }
        }
    }

    fn paint_cursor(&self, realm: Realm, trail: &TrailFrame<'_>) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(realm.trail_color());
        ctx.begin_path();
        _ = ctx.arc(
            trail.cursor.x as f64,
            trail.cursor.y as f64,
            CURSOR_DOT_RADIUS,
            0.0,
            TAU,
        );
        ctx.fill();
    }
}
