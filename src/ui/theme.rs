use ratatui::style::Color;

use crate::{
    app::state::AppState,
    domain::weather::{DEFAULT_CATEGORY, PresentationCategory, category_for_code},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub border: Color,
    pub highlight: Color,
    pub sun: Color,
    pub info: Color,
    pub warning: Color,
    pub danger: Color,
    pub temp_freezing: Color,
    pub temp_cold: Color,
    pub temp_mild: Color,
    pub temp_warm: Color,
    pub temp_hot: Color,
}

pub fn detect_color_capability() -> ColorCapability {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Basic16;
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

/// Palette keyed by the current conditions; only the accent and border shift
/// with the weather.
#[must_use]
pub fn theme_for(category: PresentationCategory, capability: ColorCapability) -> Theme {
    let (accent, border) = match category {
        PresentationCategory::Clear => ((255, 215, 117), (92, 140, 196)),
        PresentationCategory::PartlyCloudy => ((236, 214, 150), (98, 124, 156)),
        PresentationCategory::Overcast => ((210, 223, 235), (96, 108, 124)),
        PresentationCategory::Fog => ((216, 220, 224), (110, 114, 120)),
        PresentationCategory::Rain => ((153, 214, 255), (60, 104, 160)),
        PresentationCategory::Snow => ((237, 247, 255), (120, 150, 180)),
        PresentationCategory::Storm => ((255, 208, 95), (104, 92, 170)),
    };
    let rgb = |(r, g, b): (u8, u8, u8)| quantize(Color::Rgb(r, g, b), capability);

    Theme {
        accent: rgb(accent),
        text: rgb((236, 240, 245)),
        muted_text: rgb((150, 160, 175)),
        border: rgb(border),
        highlight: rgb((255, 196, 64)),
        sun: rgb((255, 200, 60)),
        info: rgb((120, 200, 255)),
        warning: rgb((250, 210, 90)),
        danger: rgb((255, 110, 110)),
        temp_freezing: rgb((150, 190, 255)),
        temp_cold: rgb((110, 210, 230)),
        temp_mild: rgb((130, 220, 140)),
        temp_warm: rgb((250, 210, 90)),
        temp_hot: rgb((255, 120, 90)),
    }
}

/// Theme for the conditions currently on screen.
pub fn resolved_theme(state: &AppState) -> Theme {
    let category = state.weather.as_ref().map_or(DEFAULT_CATEGORY, |snapshot| {
        category_for_code(snapshot.current.weather_code)
    });
    theme_for(category, detect_color_capability())
}

pub fn icon_color(theme: &Theme, category: PresentationCategory) -> Color {
    match category {
        PresentationCategory::Clear | PresentationCategory::PartlyCloudy => theme.warning,
        PresentationCategory::Overcast | PresentationCategory::Fog => theme.muted_text,
        PresentationCategory::Rain => theme.info,
        PresentationCategory::Snow => theme.text,
        PresentationCategory::Storm => theme.danger,
    }
}

pub fn temp_color(theme: &Theme, temp: f32) -> Color {
    if temp <= -8.0 {
        theme.temp_freezing
    } else if temp <= 2.0 {
        theme.temp_cold
    } else if temp <= 16.0 {
        theme.temp_mild
    } else if temp <= 28.0 {
        theme.temp_warm
    } else {
        theme.temp_hot
    }
}

pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::TrueColor, c) => c,
        (ColorCapability::Xterm256, Color::Rgb(r, g, b)) => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            Color::Indexed(16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b))
        }
        (ColorCapability::Basic16, Color::Rgb(r, g, b)) => basic16_from_rgb(r, g, b),
        (_, c) => c,
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let rf = f32::from(r) / 255.0;
    let gf = f32::from(g) / 255.0;
    let bf = f32::from(b) / 255.0;

    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let delta = max - min;
    let light = (max + min) / 2.0;

    if delta < 0.08 {
        return match light {
            l if l < 0.20 => Color::Black,
            l if l < 0.40 => Color::DarkGray,
            l if l < 0.72 => Color::Gray,
            _ => Color::White,
        };
    }

    let hue = if (max - rf).abs() < f32::EPSILON {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };

    let (dark, bright) = match hue {
        h if !(30.0..330.0).contains(&h) => (Color::Red, Color::LightRed),
        h if h < 90.0 => (Color::Yellow, Color::LightYellow),
        h if h < 150.0 => (Color::Green, Color::LightGreen),
        h if h < 210.0 => (Color::Cyan, Color::LightCyan),
        h if h < 270.0 => (Color::Blue, Color::LightBlue),
        _ => (Color::Magenta, Color::LightMagenta),
    };
    if light >= 0.55 { bright } else { dark }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truecolor_keeps_rgb_values() {
        let theme = theme_for(PresentationCategory::Clear, ColorCapability::TrueColor);
        assert_eq!(theme.accent, Color::Rgb(255, 215, 117));
    }

    #[test]
    fn basic16_maps_every_color_to_a_named_one() {
        let theme = theme_for(PresentationCategory::Storm, ColorCapability::Basic16);
        for color in [theme.accent, theme.text, theme.border, theme.danger] {
            assert!(!matches!(color, Color::Rgb(..) | Color::Indexed(_)), "{color:?}");
        }
    }

    #[test]
    fn xterm256_uses_the_color_cube() {
        assert_eq!(
            quantize(Color::Rgb(255, 0, 0), ColorCapability::Xterm256),
            Color::Indexed(196)
        );
    }

    #[test]
    fn temperature_bands_are_ordered() {
        let theme = theme_for(PresentationCategory::Overcast, ColorCapability::TrueColor);
        assert_eq!(temp_color(&theme, -12.0), theme.temp_freezing);
        assert_eq!(temp_color(&theme, 0.0), theme.temp_cold);
        assert_eq!(temp_color(&theme, 10.0), theme.temp_mild);
        assert_eq!(temp_color(&theme, 22.0), theme.temp_warm);
        assert_eq!(temp_color(&theme, 35.0), theme.temp_hot);
    }
}
