use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Semantic colors
    pub accent: Color,
    pub progress: Color,
    pub handle: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        darkroom()
    }
}

/// Near-black safelight palette
pub fn darkroom() -> Theme {
    Theme {
        bg0: Color::Rgb(0x14, 0x12, 0x12),
        bg1: Color::Rgb(0x1f, 0x1b, 0x1b),
        bg2: Color::Rgb(0x2e, 0x27, 0x26),
        fg0: Color::Rgb(0xe8, 0xe0, 0xd8),
        fg1: Color::Rgb(0xc9, 0xbf, 0xb5),
        grey0: Color::Rgb(0x5c, 0x53, 0x4f),
        grey1: Color::Rgb(0x8a, 0x7f, 0x78),
        accent: Color::Rgb(0xd9, 0x4f, 0x3d),
        progress: Color::Rgb(0xe0, 0x8a, 0x4a),
        handle: Color::Rgb(0xe8, 0xe0, 0xd8),
        border: Color::Rgb(0x5c, 0x53, 0x4f),
    }
}

/// Light gallery-wall palette
pub fn gallery() -> Theme {
    Theme {
        bg0: Color::Rgb(0xf4, 0xf1, 0xea),
        bg1: Color::Rgb(0xe9, 0xe4, 0xda),
        bg2: Color::Rgb(0xd9, 0xd2, 0xc5),
        fg0: Color::Rgb(0x2b, 0x27, 0x24),
        fg1: Color::Rgb(0x45, 0x3f, 0x3a),
        grey0: Color::Rgb(0xb0, 0xa8, 0x9c),
        grey1: Color::Rgb(0x7d, 0x75, 0x6b),
        accent: Color::Rgb(0x3f, 0x66, 0x85),
        progress: Color::Rgb(0xb5, 0x3b, 0x2c),
        handle: Color::Rgb(0x2b, 0x27, 0x24),
        border: Color::Rgb(0xb0, 0xa8, 0x9c),
    }
}

/// Load a theme by name, falling back to darkroom
pub fn load_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "gallery" | "light" => gallery(),
        "darkroom" | "dark" => darkroom(),
        other => {
            tracing::warn!("Unknown theme '{}', using darkroom", other);
            darkroom()
        }
    }
}

/// Mix two colors; `t = 0` gives `from`, `t = 1` gives `to`
///
/// Terminals have no alpha channel, so reveal opacity is drawn by blending
/// the foreground towards the background. Non-RGB colors switch halfway.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
