use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::{ColorConverter, Theme, gradient_at};

pub const FADE_IN: Duration = Duration::from_millis(600);
pub const SPIN: Duration = Duration::from_millis(1200);
pub const HOLD: Duration = Duration::from_millis(400);
pub const FADE_OUT: Duration = Duration::from_millis(400);

const LOGO_TEXT: &str = "
┌─┐┌┐┌┌┐ ┌─┐┌─┐┬─┐┌┬┐
│ ││││├┴┐│ │├─┤├┬┘ ││
└─┘┘└┘└─┘└─┘┴ ┴┴└──┴┘";

const BRAND_ICON: &str = "◍";
const SPINNER_GLYPHS: [&str; 4] = ["│", "╱", "─", "╲"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    FadeIn,
    Spin,
    Hold,
    FadeOut,
    Finished,
}

/// Timeline of the splash animation. Pure time arithmetic, no rendering.
#[derive(Debug, Clone, Default)]
pub struct SplashSequence {
    elapsed: Duration,
    finish_reported: bool,
}

impl SplashSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn total() -> Duration {
        FADE_IN + SPIN + HOLD + FADE_OUT
    }

    #[must_use]
    pub fn phase(&self) -> SplashPhase {
        let t = self.elapsed;
        if t < FADE_IN {
            SplashPhase::FadeIn
        } else if t < FADE_IN + SPIN {
            SplashPhase::Spin
        } else if t < FADE_IN + SPIN + HOLD {
            SplashPhase::Hold
        } else if t < Self::total() {
            SplashPhase::FadeOut
        } else {
            SplashPhase::Finished
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        match self.phase() {
            SplashPhase::FadeIn => progress(self.elapsed, FADE_IN),
            SplashPhase::Spin | SplashPhase::Hold => 1.0,
            SplashPhase::FadeOut => {
                1.0 - progress(self.elapsed - (FADE_IN + SPIN + HOLD), FADE_OUT)
            }
            SplashPhase::Finished => 0.0,
        }
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> f32 {
        match self.phase() {
            SplashPhase::FadeIn => 0.0,
            SplashPhase::Spin => 360.0 * ease_in_out(progress(self.elapsed - FADE_IN, SPIN)),
            SplashPhase::Hold | SplashPhase::FadeOut | SplashPhase::Finished => 360.0,
        }
    }

    /// Returns `true` exactly once: on the call that reaches the end.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(elapsed);
        if self.phase() == SplashPhase::Finished && !self.finish_reported {
            self.finish_reported = true;
            return true;
        }
        false
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finish_reported
    }
}

#[allow(clippy::cast_possible_truncation)]
fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0) as f32
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[must_use]
pub fn spinner_glyph(degrees: f32) -> &'static str {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let step = (degrees.rem_euclid(360.0) / 45.0).round() as usize;
    SPINNER_GLYPHS[step % SPINNER_GLYPHS.len()]
}

pub struct SplashScreen {
    sequence: SplashSequence,
    theme: Theme,
}

impl SplashScreen {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            sequence: SplashSequence::new(),
            theme,
        }
    }

    /// Returns `true` on the tick the sequence ends.
    pub fn tick(&mut self, duration: Duration) -> bool {
        let finished = self.sequence.advance(duration);
        if finished {
            tracing::debug!("Splash sequence complete");
        }
        finished
    }

    fn background(&self, area: Rect, x: u16, y: u16) -> Color {
        let fx = f32::from(x.saturating_sub(area.x)) / f32::from(area.width.max(1));
        let fy = f32::from(y.saturating_sub(area.y)) / f32::from(area.height.max(1));
        gradient_at(&self.theme.splash_gradient, (fx + fy) / 2.0)
    }

    fn draw_faded(&self, buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str) {
        let opacity = self.sequence.opacity();
        let mut col = x;
        for ch in text.chars() {
            if col >= area.right() {
                break;
            }
            if ch != ' ' {
                let bg = self.background(area, col, y);
                let fg = ColorConverter::blend(bg, Color::White, opacity);
                buf[(col, y)]
                    .set_char(ch)
                    .set_style(Style::default().fg(fg).add_modifier(Modifier::BOLD));
            }
            col += 1;
        }
    }
}

impl Widget for &SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let bg = self.background(area, x, y);
                buf[(x, y)].set_symbol(" ").set_bg(bg);
            }
        }

        let logo: Vec<&str> = LOGO_TEXT.trim_matches('\n').lines().collect();
        let logo_width = u16::try_from(logo.iter().map(|l| l.width()).max().unwrap_or(0))
            .unwrap_or(u16::MAX);
        // spinner, gap, logo, gap, icon
        let block_height = u16::try_from(logo.len()).unwrap_or(0) + 4;
        if area.height < block_height || area.width < logo_width {
            return;
        }

        let top = area.y + (area.height - block_height) / 2;
        let center_x = area.x + area.width / 2;

        let glyph = spinner_glyph(self.sequence.rotation_degrees());
        self.draw_faded(buf, area, center_x, top, glyph);

        let left = area.x + (area.width - logo_width) / 2;
        for (i, line) in logo.iter().enumerate() {
            let y = top + 2 + u16::try_from(i).unwrap_or(0);
            self.draw_faded(buf, area, left, y, line);
        }

        self.draw_faded(buf, area, center_x, top + block_height - 1, BRAND_ICON);
    }
}
