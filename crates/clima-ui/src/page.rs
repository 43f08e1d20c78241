//! The display surface the renderer writes to.
//!
//! In the browser this is the DOM (see `dom::DomPage`); natively and in tests
//! it is [`MemoryPage`]. Every write targets an [`ElementId`], and a page that
//! lacks the element ignores the write.

use std::collections::{BTreeMap, BTreeSet};

/// Elements of the widget, keyed by their DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    Status,
    CityInput,
    Title,
    Temperature,
    Description,
    Icon,
    FeelsLike,
    Humidity,
    Uv,
    Pollen,
    Tip,
}

impl ElementId {
    pub const ALL: [ElementId; 11] = [
        ElementId::Status,
        ElementId::CityInput,
        ElementId::Title,
        ElementId::Temperature,
        ElementId::Description,
        ElementId::Icon,
        ElementId::FeelsLike,
        ElementId::Humidity,
        ElementId::Uv,
        ElementId::Pollen,
        ElementId::Tip,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            ElementId::Status => "status-conexao",
            ElementId::CityInput => "input-cidade",
            ElementId::Title => "nome-cidade-titulo",
            ElementId::Temperature => "temperatura",
            ElementId::Description => "descricao",
            ElementId::Icon => "icone-clima",
            ElementId::FeelsLike => "sensacao",
            ElementId::Humidity => "umidade",
            ElementId::Uv => "uv",
            ElementId::Pollen => "polen",
            ElementId::Tip => "box-dica",
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// Write access to the widget's elements plus the two user-facing side
/// channels (the city input and blocking alerts).
pub trait Page {
    fn set_text(&mut self, id: ElementId, text: &str);

    /// Set the inline text colour.
    fn set_color(&mut self, id: ElementId, color: &str);

    /// Replace the whole class list.
    fn set_class_name(&mut self, id: ElementId, class_name: &str);

    /// Current text of the city input (empty when the input is missing).
    fn city_query(&self) -> String;

    fn clear_city_query(&mut self);

    fn alert(&mut self, message: &str);
}

/// In-memory page used by the native runner and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryPage {
    text: BTreeMap<ElementId, String>,
    color: BTreeMap<ElementId, String>,
    class_name: BTreeMap<ElementId, String>,
    city_query: String,
    alerts: Vec<String>,
    missing: BTreeSet<ElementId>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page where the given elements do not exist.
    pub fn without(missing: impl IntoIterator<Item = ElementId>) -> Self {
        Self {
            missing: missing.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Simulate the user typing into the city input.
    pub fn type_city_query(&mut self, query: &str) {
        if !self.missing.contains(&ElementId::CityInput) {
            self.city_query = query.to_string();
        }
    }

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.text.get(&id).map(String::as_str)
    }

    pub fn color(&self, id: ElementId) -> Option<&str> {
        self.color.get(&id).map(String::as_str)
    }

    pub fn class_name(&self, id: ElementId) -> Option<&str> {
        self.class_name.get(&id).map(String::as_str)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    fn exists(&self, id: ElementId) -> bool {
        !self.missing.contains(&id)
    }
}

impl Page for MemoryPage {
    fn set_text(&mut self, id: ElementId, text: &str) {
        if self.exists(id) {
            self.text.insert(id, text.to_string());
        }
    }

    fn set_color(&mut self, id: ElementId, color: &str) {
        if self.exists(id) {
            self.color.insert(id, color.to_string());
        }
    }

    fn set_class_name(&mut self, id: ElementId, class_name: &str) {
        if self.exists(id) {
            self.class_name.insert(id, class_name.to_string());
        }
    }

    fn city_query(&self) -> String {
        self.city_query.clone()
    }

    fn clear_city_query(&mut self) {
        self.city_query.clear();
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
