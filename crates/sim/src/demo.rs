//! Built-in demo scene: a steerable ship over a static starfield.
//!
//! This is a placeholder for the external engine, kept deliberately small.
//! It exists so the binary runs standalone and so the loop and renderer have
//! something real to exercise.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::types::{Glyph, GlyphGrid, Intents, Rgb};
use crate::Simulation;

const THRUST_ACC: f32 = 18.0;
const BRAKE_DAMP: f32 = 2.4;
const TURN_RATE: f32 = 2.6;
const DRAG: f32 = 0.15;

const STAR_COLOR: Rgb = Rgb::new(110, 110, 130);
const SHIP_COLOR: Rgb = Rgb::new(240, 240, 240);
const FLAME_COLOR: Rgb = Rgb::new(255, 140, 40);

struct Star {
    x: i32,
    y: i32,
    ch: char,
}

/// Minimal flight model: position, velocity, heading. Wraps at grid edges.
pub struct DemoScene {
    width: u16,
    height: u16,
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    // radians; 0 points up, positive leans right
    angle: f32,
    thrusting: bool,
    stars: Vec<Star>,
}

impl DemoScene {
    pub fn new(width: u16, height: u16) -> Self {
        let mut rng = StdRng::seed_from_u64(0x5EED ^ ((width as u64) << 16) ^ height as u64);
        let count = (width as usize * height as usize) / 40;
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0..width.max(1) as i32),
                y: rng.gen_range(0..height.max(1) as i32),
                ch: if rng.gen_bool(0.2) { '+' } else { '*' },
            })
            .collect();

        Self {
            width,
            height,
            x: width as f32 / 2.0,
            y: height as f32 / 2.0,
            vx: 0.0,
            vy: 0.0,
            angle: 0.0,
            thrusting: false,
            stars,
        }
    }

    fn ship_glyph(&self) -> char {
        let deg = self.angle.to_degrees();
        if deg.abs() < 15.0 {
            'A'
        } else if deg > 0.0 {
            '/'
        } else {
            '\\'
        }
    }
}

fn wrap(v: f32, limit: f32) -> f32 {
    let mut v = v;
    while v < 0.0 {
        v += limit;
    }
    while v >= limit {
        v -= limit;
    }
    v
}

impl Simulation for DemoScene {
    fn advance(&mut self, dt: f32, intents: Intents) {
        if intents.turn_left {
            self.angle -= TURN_RATE * dt;
        }
        if intents.turn_right {
            self.angle += TURN_RATE * dt;
        }
        while self.angle > std::f32::consts::PI {
            self.angle -= 2.0 * std::f32::consts::PI;
        }
        while self.angle < -std::f32::consts::PI {
            self.angle += 2.0 * std::f32::consts::PI;
        }

        self.thrusting = intents.thrust;
        if intents.thrust {
            self.vx += self.angle.sin() * THRUST_ACC * dt;
            self.vy -= self.angle.cos() * THRUST_ACC * dt;
        }
        if intents.brake {
            self.vx *= 1.0 - (BRAKE_DAMP * dt).min(1.0);
            self.vy *= 1.0 - (BRAKE_DAMP * dt).min(1.0);
        }

        self.vx *= 1.0 - DRAG * dt;
        self.vy *= 1.0 - DRAG * dt;

        self.x = wrap(self.x + self.vx * dt, self.width.max(1) as f32);
        self.y = wrap(self.y + self.vy * dt, self.height.max(1) as f32);
    }

    fn current_frame(&self) -> GlyphGrid {
        let mut grid = GlyphGrid::new(self.width, self.height);

        for star in &self.stars {
            grid.push(Glyph::new(star.x, star.y, star.ch, STAR_COLOR));
        }

        // floor keeps the wrapped position strictly inside the grid
        let sx = self.x.floor() as i32;
        let sy = self.y.floor() as i32;
        grid.push(Glyph::new(sx, sy, self.ship_glyph(), SHIP_COLOR));
        if self.thrusting {
            grid.push(Glyph::new(sx, sy + 1, 'v', FLAME_COLOR));
        }

        grid
    }
}
