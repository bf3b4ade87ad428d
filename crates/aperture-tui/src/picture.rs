//! Procedural photographs
//!
//! Each scene is a function of normalized coordinates, so the same picture
//! can be drawn at any size, clipped for the comparison overlay or sampled
//! through the zoom transform.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::page::Scene;

/// Half-block glyph: foreground paints the upper half of the cell
const UPPER_HALF: char = '▀';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    /// Flat, desaturated straight-out-of-camera look
    Raw,
    /// Edited final image
    Finished,
}

type Rgb = (f64, f64, f64);

fn mix(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    (
        a.0 + (b.0 - a.0) * t,
        a.1 + (b.1 - a.1) * t,
        a.2 + (b.2 - a.2) * t,
    )
}

fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Cheap deterministic hash in [0, 1)
fn hash(n: i64) -> f64 {
    let mut x = n.wrapping_mul(0x2545_F491_4F6C_DD1D);
    x ^= x >> 29;
    x = x.wrapping_mul(0x9E37_79B9);
    ((x >> 8) & 0xFFFF) as f64 / 65536.0
}

fn coast(u: f64, v: f64) -> Rgb {
    let horizon = 0.58;
    if v < horizon {
        let sky = mix((250.0, 150.0, 90.0), (90.0, 70.0, 120.0), v / horizon);
        let d = ((u - 0.7).powi(2) + ((v - 0.38) * 1.6).powi(2)).sqrt();
        let sun = 1.0 - smoothstep(0.06, 0.09, d);
        mix(sky, (255.0, 230.0, 170.0), sun)
    } else {
        let depth = (v - horizon) / (1.0 - horizon);
        let ripple = ((u * 40.0 + v * 90.0).sin() * 0.5 + 0.5) * 0.25;
        let sea = mix((60.0, 80.0, 120.0), (20.0, 35.0, 60.0), depth);
        let glint = (1.0 - smoothstep(0.0, 0.12, (u - 0.7).abs())) * ripple;
        mix(sea, (250.0, 180.0, 120.0), glint)
    }
}

fn portrait(u: f64, v: f64) -> Rgb {
    let backdrop = mix((70.0, 85.0, 95.0), (30.0, 35.0, 40.0), u);
    let face = ((u - 0.5) / 0.17).powi(2) + ((v - 0.42) / 0.26).powi(2);
    let shoulders = v > 0.74 && (u - 0.5).abs() < 0.42 - (1.0 - v) * 0.6;
    if face < 1.0 {
        let shade = mix((235.0, 190.0, 160.0), (150.0, 105.0, 85.0), u * 1.2 - 0.1);
        let hair = smoothstep(0.18, 0.25, 0.42 - v + (u - 0.5).abs() * 0.3);
        mix(shade, (50.0, 35.0, 30.0), hair)
    } else if shoulders {
        mix((40.0, 40.0, 48.0), (20.0, 20.0, 25.0), u)
    } else {
        backdrop
    }
}

fn skyline(u: f64, v: f64) -> Rgb {
    let sky = mix((40.0, 70.0, 140.0), (150.0, 170.0, 200.0), v);
    let column = (u * 14.0).floor() as i64;
    let height = 0.35 + hash(column) * 0.45;
    if v > 1.0 - height {
        let lit = hash(column * 131 + (v * 40.0).floor() as i64 * 7 + (u * 60.0).floor() as i64);
        let wall = mix((30.0, 35.0, 50.0), (15.0, 18.0, 28.0), hash(column + 99));
        if lit > 0.72 && ((u * 60.0).fract() < 0.5) {
            (240.0, 210.0, 130.0)
        } else {
            wall
        }
    } else {
        sky
    }
}

fn forest(u: f64, v: f64) -> Rgb {
    let light = mix((190.0, 210.0, 150.0), (40.0, 70.0, 40.0), v);
    let trunk = (u * 9.0 + (v * 3.0).sin() * 0.15).fract();
    if trunk < 0.12 + hash((u * 9.0).floor() as i64) * 0.08 {
        mix((80.0, 60.0, 45.0), (35.0, 25.0, 20.0), v)
    } else if v > 0.82 {
        mix((60.0, 90.0, 40.0), (30.0, 45.0, 20.0), (u * 30.0).sin().abs())
    } else {
        light
    }
}

fn studio(u: f64, v: f64) -> Rgb {
    let sweep = mix((225.0, 222.0, 215.0), (150.0, 145.0, 140.0), v * 0.6 + (u - 0.5).abs());
    let d = ((u - 0.5).powi(2) + ((v - 0.55) * 1.4).powi(2)).sqrt();
    if d < 0.2 {
        let rim = smoothstep(0.12, 0.2, d);
        mix((200.0, 60.0, 50.0), (120.0, 30.0, 25.0), rim + (u - 0.4) * 0.5)
    } else {
        let shadow = 1.0 - smoothstep(0.0, 0.2, (v - 0.82).abs() + (u - 0.55).abs() * 0.5);
        mix(sweep, (90.0, 85.0, 80.0), shadow * 0.6)
    }
}

fn grade(rgb: Rgb, grade: Grade) -> Rgb {
    match grade {
        Grade::Finished => {
            // Gentle S-curve
            let curve = |c: f64| {
                let x = c / 255.0;
                (x * x * (3.0 - 2.0 * x) * 0.35 + x * 0.65) * 255.0
            };
            (curve(rgb.0), curve(rgb.1), curve(rgb.2))
        }
        Grade::Raw => {
            let luma = 0.299 * rgb.0 + 0.587 * rgb.1 + 0.114 * rgb.2;
            let flat = mix((luma, luma, luma), rgb, 0.3);
            mix(flat, (128.0, 128.0, 128.0), 0.25)
        }
    }
}

/// Color of `scene` at normalized `(u, v)`
pub fn sample(scene: Scene, tone: Grade, u: f64, v: f64) -> Color {
    let rgb = match scene {
        Scene::Coast => coast(u, v),
        Scene::Portrait => portrait(u, v),
        Scene::Skyline => skyline(u, v),
        Scene::Forest => forest(u, v),
        Scene::Studio => studio(u, v),
    };
    let (r, g, b) = grade(rgb, tone);
    Color::Rgb(
        r.round().clamp(0.0, 255.0) as u8,
        g.round().clamp(0.0, 255.0) as u8,
        b.round().clamp(0.0, 255.0) as u8,
    )
}

/// Fill `area` with half-block pixels from `color_at(u, v)`
pub fn paint<F>(buf: &mut Buffer, area: Rect, color_at: F)
where
    F: Fn(f64, f64) -> Color,
{
    if area.width == 0 || area.height == 0 {
        return;
    }
    let width = area.width as f64;
    let pixel_rows = area.height as f64 * 2.0;

    for row in 0..area.height {
        for col in 0..area.width {
            let u = (col as f64 + 0.5) / width;
            let top = color_at(u, (row as f64 * 2.0 + 0.5) / pixel_rows);
            let bottom = color_at(u, (row as f64 * 2.0 + 1.5) / pixel_rows);
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_char(UPPER_HALF).set_fg(top).set_bg(bottom);
            }
        }
    }
}
