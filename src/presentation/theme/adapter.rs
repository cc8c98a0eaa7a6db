use coolor::{Hsl, Rgb};
use ratatui::style::Color;

pub struct ColorConverter;

impl ColorConverter {
    /// Resolves any ratatui color to RGB, using the xterm defaults for named colors.
    #[must_use]
    pub fn to_rgb(color: Color) -> (u8, u8, u8) {
        match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Black => ansi_to_rgb(0),
            Color::Red => ansi_to_rgb(1),
            Color::Green => ansi_to_rgb(2),
            Color::Yellow => ansi_to_rgb(3),
            Color::Blue => ansi_to_rgb(4),
            Color::Magenta => ansi_to_rgb(5),
            Color::Cyan => ansi_to_rgb(6),
            Color::Gray => ansi_to_rgb(7),
            Color::DarkGray => ansi_to_rgb(8),
            Color::LightRed => ansi_to_rgb(9),
            Color::LightGreen => ansi_to_rgb(10),
            Color::LightYellow => ansi_to_rgb(11),
            Color::LightBlue => ansi_to_rgb(12),
            Color::LightMagenta => ansi_to_rgb(13),
            Color::LightCyan => ansi_to_rgb(14),
            Color::Indexed(i) => ansi_to_rgb(i),
            _ => (255, 255, 255),
        }
    }

    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = Self::to_rgb(color);
        Rgb::new(r, g, b).to_hsl()
    }

    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Same hue, new saturation and lightness.
    #[must_use]
    pub fn tone(color: Color, saturation: f32, lightness: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.s = saturation.clamp(0.0, 1.0);
        hsl.l = lightness.clamp(0.0, 1.0);
        Self::to_ratatui(hsl)
    }

    /// Linear RGB mix. `t = 0` is `from`, `t = 1` is `to`.
    #[must_use]
    pub fn blend(from: Color, to: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (r1, g1, b1) = Self::to_rgb(from);
        let (r2, g2, b2) = Self::to_rgb(to);
        Color::Rgb(mix(r1, r2, t), mix(g1, g2, t), mix(b1, b2, t))
    }
}

/// Samples a multi-stop gradient at `t` in `0..=1`.
#[must_use]
pub fn gradient_at(stops: &[Color], t: f32) -> Color {
    match stops {
        [] => Color::Reset,
        [only] => *only,
        _ => {
            let t = t.clamp(0.0, 1.0);
            #[allow(clippy::cast_precision_loss)]
            let segments = (stops.len() - 1) as f32;
            let scaled = t * segments;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let index = (scaled.floor() as usize).min(stops.len() - 2);
            #[allow(clippy::cast_precision_loss)]
            let local = scaled - index as f32;
            ColorConverter::blend(stops[index], stops[index + 1], local)
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix(a: u8, b: u8, t: f32) -> u8 {
    let a = f32::from(a);
    let b = f32::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

fn ansi_to_rgb(i: u8) -> (u8, u8, u8) {
    const BASE: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (170, 0, 0),
        (0, 170, 0),
        (170, 85, 0),
        (0, 0, 170),
        (170, 0, 170),
        (0, 170, 170),
        (170, 170, 170),
        (85, 85, 85),
        (255, 85, 85),
        (85, 255, 85),
        (255, 255, 85),
        (85, 85, 255),
        (255, 85, 255),
        (85, 255, 255),
        (255, 255, 255),
    ];

    match i {
        0..=15 => BASE[usize::from(i)],
        16..=231 => {
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            let i = i - 16;
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}
