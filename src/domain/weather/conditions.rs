use crate::cli::IconMode;

/// Coarse bucket used to pick an icon for a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresentationCategory {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Rain,
    Snow,
    Storm,
}

/// Category for any code outside [`WEATHER_CODES`].
pub const DEFAULT_CATEGORY: PresentationCategory = PresentationCategory::Overcast;

/// Every code Open-Meteo documents, with its category and label.
pub(crate) const WEATHER_CODES: &[(i32, PresentationCategory, &str)] = &[
    (0, PresentationCategory::Clear, "Clear sky"),
    (1, PresentationCategory::Clear, "Mainly clear"),
    (2, PresentationCategory::PartlyCloudy, "Partly cloudy"),
    (3, PresentationCategory::Overcast, "Overcast"),
    (45, PresentationCategory::Fog, "Fog"),
    (48, PresentationCategory::Fog, "Depositing rime fog"),
    (51, PresentationCategory::Rain, "Light drizzle"),
    (53, PresentationCategory::Rain, "Moderate drizzle"),
    (55, PresentationCategory::Rain, "Dense drizzle"),
    (56, PresentationCategory::Snow, "Light freezing drizzle"),
    (57, PresentationCategory::Snow, "Dense freezing drizzle"),
    (61, PresentationCategory::Rain, "Slight rain"),
    (63, PresentationCategory::Rain, "Moderate rain"),
    (65, PresentationCategory::Rain, "Heavy rain"),
    (66, PresentationCategory::Snow, "Light freezing rain"),
    (67, PresentationCategory::Snow, "Heavy freezing rain"),
    (71, PresentationCategory::Snow, "Slight snowfall"),
    (73, PresentationCategory::Snow, "Moderate snowfall"),
    (75, PresentationCategory::Snow, "Heavy snowfall"),
    (77, PresentationCategory::Snow, "Snow grains"),
    (80, PresentationCategory::Rain, "Slight rain showers"),
    (81, PresentationCategory::Rain, "Moderate rain showers"),
    (82, PresentationCategory::Rain, "Violent rain showers"),
    (85, PresentationCategory::Snow, "Slight snow showers"),
    (86, PresentationCategory::Snow, "Heavy snow showers"),
    (95, PresentationCategory::Storm, "Thunderstorm"),
    (96, PresentationCategory::Storm, "Thunderstorm + light hail"),
    (99, PresentationCategory::Storm, "Thunderstorm + heavy hail"),
];

#[must_use]
pub fn lookup_category(code: i32) -> Option<PresentationCategory> {
    WEATHER_CODES
        .iter()
        .find_map(|(candidate, category, _)| (*candidate == code).then_some(*category))
}

#[must_use]
pub fn category_for_code(code: i32) -> PresentationCategory {
    lookup_category(code).unwrap_or(DEFAULT_CATEGORY)
}

#[must_use]
pub fn weather_label(code: i32) -> &'static str {
    WEATHER_CODES
        .iter()
        .find_map(|(candidate, _, label)| (*candidate == code).then_some(*label))
        .unwrap_or("Unknown")
}

#[must_use]
pub fn weather_icon(code: i32, mode: IconMode) -> &'static str {
    let (ascii, emoji, unicode) = icon_tokens(category_for_code(code));
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
        IconMode::Unicode => unicode,
    }
}

fn icon_tokens(category: PresentationCategory) -> (&'static str, &'static str, &'static str) {
    match category {
        PresentationCategory::Clear => ("SUN", "☀️", "☀"),
        PresentationCategory::PartlyCloudy => ("PCL", "⛅", "⛅"),
        PresentationCategory::Overcast => ("CLD", "☁️", "☁"),
        PresentationCategory::Fog => ("FOG", "🌫️", "░"),
        PresentationCategory::Rain => ("RAN", "🌧️", "☂"),
        PresentationCategory::Snow => ("SNW", "🌨️", "❄"),
        PresentationCategory::Storm => ("THN", "⛈️", "⚡"),
    }
}
