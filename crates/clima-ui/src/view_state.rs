//! Explicit display state and the single function that renders it.
//!
//! The controller never writes to a [`Page`] directly; it updates a
//! [`ViewState`] and calls [`render`], which writes every field the state
//! knows about.

use clima_weather::{TipKind, WeatherResult};

use crate::page::{ElementId, Page};

/// Colour of the status text once weather is displayed.
pub const ONLINE_COLOR: &str = "#fff";
/// Pollen colour when the backend has no pollen data.
pub const POLLEN_MUTED_COLOR: &str = "#9ca3af";
/// Pollen colour for any real reading.
pub const POLLEN_ACCENT_COLOR: &str = "#5a67d8";
/// Marker the backend puts in the pollen text when data is missing.
pub const POLLEN_UNAVAILABLE_MARKER: &str = "Indisponível";
/// Base class of the tip box; exactly one category class is appended.
pub const TIP_BASE_CLASS: &str = "tip-box";
/// Shown in the UV field when the index is absent or zero.
pub const UV_PLACEHOLDER: &str = "--";

/// The single status indicator. Overwritten, never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    AcquiringLocation,
    Searching,
    Loading,
    Online,
    Error,
    /// Device location unavailable; the fallback city is used.
    Unsupported,
}

impl ConnectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::AcquiringLocation => "📍 GPS...",
            Self::Searching => "🔎 Buscando...",
            Self::Loading => "☁️ Carregando...",
            Self::Online => "🟢 Online",
            Self::Error => "❌ Erro",
            Self::Unsupported => "⚠️ GPS Off",
        }
    }

    /// Inline colour for this status. `None` leaves the current colour alone.
    pub fn color(self) -> Option<&'static str> {
        match self {
            Self::Online => Some(ONLINE_COLOR),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollenTone {
    Muted,
    Accent,
}

impl PollenTone {
    pub fn for_text(text: &str) -> Self {
        if text.contains(POLLEN_UNAVAILABLE_MARKER) {
            Self::Muted
        } else {
            Self::Accent
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Muted => POLLEN_MUTED_COLOR,
            Self::Accent => POLLEN_ACCENT_COLOR,
        }
    }
}

/// Styling category of the tip box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipCategory {
    Danger,
    Caution,
    Good,
}

impl TipCategory {
    pub fn from_kind(kind: Option<TipKind>) -> Self {
        match kind {
            Some(TipKind::Perigo) => Self::Danger,
            Some(TipKind::Atencao) => Self::Caution,
            Some(TipKind::Other) | None => Self::Good,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Danger => "dica-perigo",
            Self::Caution => "dica-atencao",
            Self::Good => "dica-bom",
        }
    }

    /// Full class list for the tip box: the base class plus this category.
    pub fn class_name(self) -> String {
        format!("{} {}", TIP_BASE_CLASS, self.css_class())
    }
}

/// Display strings derived from one weather payload.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub temperature: String,
    pub description: String,
    pub icon: String,
    pub feels_like: String,
    pub humidity: String,
    pub uv: String,
    pub pollen: String,
    pub pollen_tone: PollenTone,
    pub tip: String,
    pub tip_category: TipCategory,
}

impl From<&WeatherResult> for WeatherView {
    fn from(weather: &WeatherResult) -> Self {
        Self {
            temperature: format_degrees(weather.temp),
            description: weather.descricao.clone(),
            icon: weather.icone.clone(),
            feels_like: format_degrees(weather.sensacao),
            humidity: format!("{}%", weather.umidade),
            uv: format_uv(weather.uv),
            pollen: weather.polen.clone(),
            pollen_tone: PollenTone::for_text(&weather.polen),
            tip: weather.dica.clone(),
            tip_category: TipCategory::from_kind(weather.tipo_dica),
        }
    }
}

/// Everything the widget currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub status: ConnectionStatus,
    /// `None` until a location or city has been resolved.
    pub title: Option<String>,
    /// `None` until the first successful weather fetch.
    pub weather: Option<WeatherView>,
}

/// Write `state` to `page`.
pub fn render<P: Page + ?Sized>(state: &ViewState, page: &mut P) {
    page.set_text(ElementId::Status, state.status.label());
    if let Some(color) = state.status.color() {
        page.set_color(ElementId::Status, color);
    }

    if let Some(title) = &state.title {
        page.set_text(ElementId::Title, title);
    }

    if let Some(weather) = &state.weather {
        page.set_text(ElementId::Temperature, &weather.temperature);
        page.set_text(ElementId::Description, &weather.description);
        page.set_text(ElementId::Icon, &weather.icon);
        page.set_text(ElementId::FeelsLike, &weather.feels_like);
        page.set_text(ElementId::Humidity, &weather.humidity);
        page.set_text(ElementId::Uv, &weather.uv);

        page.set_text(ElementId::Pollen, &weather.pollen);
        page.set_color(ElementId::Pollen, weather.pollen_tone.color());

        page.set_text(ElementId::Tip, &weather.tip);
        page.set_class_name(ElementId::Tip, &weather.tip_category.class_name());
    }
}

/// Round half toward positive infinity, as browsers do, and append `°`.
pub fn format_degrees(value: f64) -> String {
    format!("{}°", round_half_up(value))
}

/// One decimal place with ties rounded away from zero, or the placeholder
/// when absent or zero.
pub fn format_uv(uv: Option<f64>) -> String {
    match uv {
        Some(v) if v != 0.0 && !v.is_nan() => format!("{:.1}", (v * 10.0).round() / 10.0),
        _ => UV_PLACEHOLDER.to_string(),
    }
}

fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    // `as` saturates; `-0.0` becomes `0`
    if value - floor >= 0.5 {
        (floor + 1.0) as i64
    } else {
        floor as i64
    }
}
