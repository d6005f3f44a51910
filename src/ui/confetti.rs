// src/ui/confetti.rs

use crate::celebration::Celebration;
use egui::{Color32, Context, Id, LayerId, Order, Pos2, Vec2, pos2};
use rand::Rng;

const PARTICLE_COUNT: usize = 100;
const SPREAD_DEGREES: f32 = 70.0;
const ORIGIN_Y: f32 = 0.6; // fracción de la altura de la ventana
const LIFETIME_SECS: f64 = 2.5;
const GRAVITY: f32 = 900.0;
const DRAG: f32 = 0.99;

const PALETTE: [Color32; 6] = [
    Color32::from_rgb(220, 38, 38),
    Color32::from_rgb(250, 204, 21),
    Color32::from_rgb(34, 197, 94),
    Color32::from_rgb(59, 130, 246),
    Color32::from_rgb(236, 72, 153),
    Color32::WHITE,
];

#[derive(Clone, Debug)]
struct Particle {
    pos: Pos2,
    vel: Vec2,
    color: Color32,
    radius: f32,
    born: f64,
}

/// Confeti pintado en una capa por encima de todo.
///
/// `celebrate` sólo encola una ráfaga; las partículas nacen en el siguiente
/// `show`, que es quien conoce el tamaño de la ventana y el reloj.
#[derive(Clone, Debug, Default)]
pub struct Confetti {
    enabled: bool,
    pending_bursts: usize,
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    pub fn pending_bursts(&self) -> usize {
        self.pending_bursts
    }

    pub fn is_active(&self) -> bool {
        self.pending_bursts > 0 || !self.particles.is_empty()
    }

    pub fn show(&mut self, ctx: &Context) {
        if !self.is_active() {
            return;
        }

        let (now, dt) = ctx.input(|i| (i.time, i.stable_dt));
        let screen = ctx.screen_rect();
        let origin = pos2(screen.center().x, screen.top() + screen.height() * ORIGIN_Y);
        for _ in 0..std::mem::take(&mut self.pending_bursts) {
            self.spawn_burst(origin, now);
        }
        self.step(dt.min(0.05), now);

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("confetti")));
        for p in &self.particles {
            let age = ((now - p.born) / LIFETIME_SECS) as f32;
            painter.circle_filled(p.pos, p.radius, p.color.gamma_multiply(1.0 - age));
        }

        ctx.request_repaint();
    }

    fn spawn_burst(&mut self, origin: Pos2, now: f64) {
        let mut rng = rand::thread_rng();
        let half_spread = SPREAD_DEGREES.to_radians() / 2.0;
        for _ in 0..PARTICLE_COUNT {
            // Hacia arriba (y crece hacia abajo en egui), abierto ±35°
            let angle = -std::f32::consts::FRAC_PI_2 + rng.gen_range(-half_spread..half_spread);
            let speed: f32 = rng.gen_range(350.0..750.0);
            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::angled(angle) * speed,
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
                radius: rng.gen_range(3.0..6.0),
                born: now,
            });
        }
    }

    fn step(&mut self, dt: f32, now: f64) {
        self.particles.retain(|p| now - p.born < LIFETIME_SECS);
        for p in &mut self.particles {
            p.vel.y += GRAVITY * dt;
            p.vel *= DRAG;
            p.pos += p.vel * dt;
        }
    }
}

impl Celebration for Confetti {
    fn celebrate(&mut self) {
        if self.enabled {
            self.pending_bursts += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celebrate_queues_a_burst_when_enabled() {
        let mut confetti = Confetti::new(true);
        confetti.celebrate();
        assert_eq!(confetti.pending_bursts(), 1);
        assert!(confetti.is_active());

        let mut off = Confetti::new(false);
        off.celebrate();
        assert!(!off.is_active());
    }

    #[test]
    fn burst_rises_and_then_expires() {
        let mut confetti = Confetti::new(true);
        let origin = pos2(100.0, 300.0);
        confetti.spawn_burst(origin, 0.0);
        assert_eq!(confetti.particles.len(), PARTICLE_COUNT);

        confetti.step(0.016, 0.016);
        assert!(confetti.particles.iter().all(|p| p.pos.y < origin.y));

        confetti.step(0.016, LIFETIME_SECS + 0.1);
        assert!(confetti.particles.is_empty());
        assert!(!confetti.is_active());
    }
}
