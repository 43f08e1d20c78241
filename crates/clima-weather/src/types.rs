use serde::{Deserialize, Serialize};

/// Geographic coordinate pair.
///
/// No range validation happens here; the backend decides what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Geocoding result returned by `/api/cidade`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityResult {
    pub name: String,
    #[serde(default)]
    pub admin1: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityResult {
    /// Title shown above the forecast: `name[ - admin1][ (country)]`.
    ///
    /// Empty `admin1`/`country` strings count as absent.
    pub fn display_title(&self) -> String {
        let mut title = self.name.clone();
        if let Some(admin1) = non_empty(&self.admin1) {
            title.push_str(" - ");
            title.push_str(admin1);
        }
        if let Some(country) = non_empty(&self.country) {
            title.push_str(" (");
            title.push_str(country);
            title.push(')');
        }
        title
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Advice category attached to the sports tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    Perigo,
    Atencao,
    #[serde(other)]
    Other,
}

/// Weather payload returned by `/api/clima`.
///
/// Field names follow the backend's JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub temp: f64,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub icone: String,
    pub sensacao: f64,
    pub umidade: f64,
    #[serde(default)]
    pub uv: Option<f64>,
    pub polen: String,
    #[serde(default)]
    pub dica: String,
    #[serde(default)]
    pub tipo_dica: Option<TipKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(admin1: Option<&str>, country: Option<&str>) -> CityResult {
        CityResult {
            name: "São Paulo".to_string(),
            admin1: admin1.map(str::to_string),
            country: country.map(str::to_string),
            latitude: -23.55,
            longitude: -46.63,
        }
    }

    #[test]
    fn test_title_with_admin1_and_country() {
        assert_eq!(
            city(Some("SP"), Some("Brazil")).display_title(),
            "São Paulo - SP (Brazil)"
        );
    }

    #[test]
    fn test_title_name_only() {
        assert_eq!(city(None, None).display_title(), "São Paulo");
    }

    #[test]
    fn test_title_country_only() {
        assert_eq!(city(None, Some("Brasil")).display_title(), "São Paulo (Brasil)");
    }

    #[test]
    fn test_title_skips_empty_strings() {
        assert_eq!(city(Some(""), Some("")).display_title(), "São Paulo");
    }

    #[test]
    fn test_city_deserialize_without_optionals() {
        let parsed: CityResult =
            serde_json::from_str(r#"{"name":"Recife","latitude":-8.05,"longitude":-34.9}"#)
                .unwrap();
        assert_eq!(parsed.admin1, None);
        assert_eq!(parsed.coordinate(), Coordinate::new(-8.05, -34.9));
    }

    #[test]
    fn test_weather_deserialize_full() {
        let parsed: WeatherResult = serde_json::from_str(
            r#"{"temp":21.6,"descricao":"Céu limpo","icone":"☀️","sensacao":19.4,
                "umidade":55,"uv":3.27,"polen":"Baixo","dica":"Bom para correr",
                "tipo_dica":"bom"}"#,
        )
        .unwrap();
        assert_eq!(parsed.umidade, 55.0);
        assert_eq!(parsed.uv, Some(3.27));
        assert_eq!(parsed.tipo_dica, Some(TipKind::Other));
    }

    #[test]
    fn test_weather_deserialize_sparse() {
        let parsed: WeatherResult = serde_json::from_str(
            r#"{"temp":10,"sensacao":8,"umidade":90,"polen":"Indisponível","uv":null}"#,
        )
        .unwrap();
        assert_eq!(parsed.uv, None);
        assert_eq!(parsed.tipo_dica, None);
        assert!(parsed.dica.is_empty());
    }

    #[test]
    fn test_tip_kind_known_values() {
        let perigo: TipKind = serde_json::from_str(r#""perigo""#).unwrap();
        let atencao: TipKind = serde_json::from_str(r#""atencao""#).unwrap();
        assert_eq!(perigo, TipKind::Perigo);
        assert_eq!(atencao, TipKind::Atencao);
    }
}
