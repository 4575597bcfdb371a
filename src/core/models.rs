use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

/// The nine categorical attributes of a catalog entry. The backend exposes
/// one query-parameter key and one filter-options key per attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterAttribute {
    PlantFamily,
    Strata,
    Lifecycle,
    TimeToMaturity,
    Lifespan,
    Zone,
    Origin,
    Function,
    Spacing,
}

impl FilterAttribute {
    pub const ALL: [FilterAttribute; 9] = [
        FilterAttribute::PlantFamily,
        FilterAttribute::Strata,
        FilterAttribute::Lifecycle,
        FilterAttribute::TimeToMaturity,
        FilterAttribute::Lifespan,
        FilterAttribute::Zone,
        FilterAttribute::Origin,
        FilterAttribute::Function,
        FilterAttribute::Spacing,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FilterAttribute::PlantFamily => "plant_family",
            FilterAttribute::Strata => "strata",
            FilterAttribute::Lifecycle => "lifecycle",
            FilterAttribute::TimeToMaturity => "time_to_maturity",
            FilterAttribute::Lifespan => "lifespan",
            FilterAttribute::Zone => "zone",
            FilterAttribute::Origin => "origin",
            FilterAttribute::Function => "function",
            FilterAttribute::Spacing => "spacing",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterAttribute::PlantFamily => "Plant Family",
            FilterAttribute::Strata => "Strata",
            FilterAttribute::Lifecycle => "Lifecycle",
            FilterAttribute::TimeToMaturity => "Time to Maturity",
            FilterAttribute::Lifespan => "Lifespan",
            FilterAttribute::Zone => "Zone",
            FilterAttribute::Origin => "Origin",
            FilterAttribute::Function => "Function",
            FilterAttribute::Spacing => "Spacing",
        }
    }
}

/// One catalog entry, deserialized with the backend's raw CSV headers.
/// The botanical name is the natural key; it is the only identity used for
/// favoriting and deduplication.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlantRecord {
    #[serde(rename = "English Name")]
    pub english_name: String,
    #[serde(rename = "Botanical Name")]
    pub botanical_name: String,
    #[serde(rename = "Plant Family")]
    pub plant_family: String,
    #[serde(rename = "Strata")]
    pub strata: String,
    #[serde(rename = "Lifecycle")]
    pub lifecycle: String,
    #[serde(rename = "Time-to-Maturity")]
    pub time_to_maturity: String,
    #[serde(rename = "Lifespan")]
    pub lifespan: String,
    #[serde(rename = "Zone")]
    pub zone: String,
    #[serde(rename = "Origin")]
    pub origin: String,
    #[serde(rename = "Function")]
    pub function: String,
    #[serde(rename = "Spacing")]
    pub spacing: String,
    #[serde(rename = "Image Name", default)]
    pub image_name: String,
    #[serde(rename = "Image Prompt", default)]
    pub image_prompt: String,
}

impl PlantRecord {
    pub fn attribute(&self, attr: FilterAttribute) -> &str {
        match attr {
            FilterAttribute::PlantFamily => &self.plant_family,
            FilterAttribute::Strata => &self.strata,
            FilterAttribute::Lifecycle => &self.lifecycle,
            FilterAttribute::TimeToMaturity => &self.time_to_maturity,
            FilterAttribute::Lifespan => &self.lifespan,
            FilterAttribute::Zone => &self.zone,
            FilterAttribute::Origin => &self.origin,
            FilterAttribute::Function => &self.function,
            FilterAttribute::Spacing => &self.spacing,
        }
    }
}

/// Catalog-wide universe of selectable values per attribute. Fetched once at
/// startup and treated as static for the session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterOptions {
    pub plant_family: Vec<String>,
    pub strata: Vec<String>,
    pub lifecycle: Vec<String>,
    pub time_to_maturity: Vec<String>,
    pub lifespan: Vec<String>,
    pub zone: Vec<String>,
    pub origin: Vec<String>,
    pub function: Vec<String>,
    pub spacing: Vec<String>,
}

impl FilterOptions {
    pub fn values(&self, attr: FilterAttribute) -> &[String] {
        match attr {
            FilterAttribute::PlantFamily => &self.plant_family,
            FilterAttribute::Strata => &self.strata,
            FilterAttribute::Lifecycle => &self.lifecycle,
            FilterAttribute::TimeToMaturity => &self.time_to_maturity,
            FilterAttribute::Lifespan => &self.lifespan,
            FilterAttribute::Zone => &self.zone,
            FilterAttribute::Origin => &self.origin,
            FilterAttribute::Function => &self.function,
            FilterAttribute::Spacing => &self.spacing,
        }
    }

    /// The backend sorts every option list lexically, which scrambles
    /// lifespans ("10-20 years" before "2-3 years"). Reorder them by
    /// semantic duration for display.
    pub fn sort_for_display(&mut self) {
        self.lifespan.sort_by(|a, b| {
            lifespan_rank(a).partial_cmp(&lifespan_rank(b)).unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}

/// Maps a lifespan string to an approximate duration in years:
/// annuals and biennials sort first, then "N months", then "N years".
/// Unparseable values sort last.
pub fn lifespan_rank(value: &str) -> f64 {
    let s = value.to_lowercase();
    if s.is_empty() {
        return f64::INFINITY;
    }
    if s.contains("annual") {
        return 0.1;
    }
    if s.contains("biennial") {
        return 0.2;
    }

    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let re = NUMBER.get_or_init(|| Regex::new(r"\d+").unwrap());

    let first = match re.find(&s) {
        Some(m) => m.as_str().parse::<f64>().unwrap_or(9999.0),
        None => return 9999.0,
    };

    if s.contains("month") && !s.contains("year") {
        first / 12.0
    } else {
        first
    }
}

/// Per-attribute selected values. An empty selection means no constraint on
/// that attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    plant_family: Vec<String>,
    strata: Vec<String>,
    lifecycle: Vec<String>,
    time_to_maturity: Vec<String>,
    lifespan: Vec<String>,
    zone: Vec<String>,
    origin: Vec<String>,
    function: Vec<String>,
    spacing: Vec<String>,
}

impl FilterState {
    pub fn selected(&self, attr: FilterAttribute) -> &[String] {
        match attr {
            FilterAttribute::PlantFamily => &self.plant_family,
            FilterAttribute::Strata => &self.strata,
            FilterAttribute::Lifecycle => &self.lifecycle,
            FilterAttribute::TimeToMaturity => &self.time_to_maturity,
            FilterAttribute::Lifespan => &self.lifespan,
            FilterAttribute::Zone => &self.zone,
            FilterAttribute::Origin => &self.origin,
            FilterAttribute::Function => &self.function,
            FilterAttribute::Spacing => &self.spacing,
        }
    }

    /// Replaces the selection for exactly one attribute; the caller supplies
    /// the full new set.
    pub fn set_selected(&mut self, attr: FilterAttribute, values: Vec<String>) {
        *self.field_mut(attr) = values;
    }

    pub fn clear(&mut self) {
        for attr in FilterAttribute::ALL {
            self.field_mut(attr).clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        FilterAttribute::ALL.iter().all(|attr| self.selected(*attr).is_empty())
    }

    fn field_mut(&mut self, attr: FilterAttribute) -> &mut Vec<String> {
        match attr {
            FilterAttribute::PlantFamily => &mut self.plant_family,
            FilterAttribute::Strata => &mut self.strata,
            FilterAttribute::Lifecycle => &mut self.lifecycle,
            FilterAttribute::TimeToMaturity => &mut self.time_to_maturity,
            FilterAttribute::Lifespan => &mut self.lifespan,
            FilterAttribute::Zone => &mut self.zone,
            FilterAttribute::Origin => &mut self.origin,
            FilterAttribute::Function => &mut self.function,
            FilterAttribute::Spacing => &mut self.spacing,
        }
    }
}

/// Exact request sent to the catalog for one fetch cycle. Constructed fresh
/// per cycle, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantQuery {
    pub search: String,
    pub filters: FilterState,
    pub ids: Option<Vec<String>>,
}

impl PlantQuery {
    /// Flattens into repeated query parameters: `q`, `ids`, then one entry
    /// per selected value under its attribute key.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        let q = self.search.trim();
        if !q.is_empty() {
            params.push(("q", q.to_string()));
        }

        if let Some(ids) = &self.ids {
            for id in ids {
                params.push(("ids", id.clone()));
            }
        }

        for attr in FilterAttribute::ALL {
            for value in self.filters.selected(attr) {
                params.push((attr.key(), value.clone()));
            }
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plant_record_deserializes_backend_row() {
        let json = serde_json::json!({
            "English Name": "Rubber Tree",
            "Botanical Name": "Ficus elastica",
            "Plant Family": "Moraceae",
            "Strata": "Emergent",
            "Lifecycle": "Perennial",
            "Time-to-Maturity": "5-10 years",
            "Lifespan": "50+ years",
            "Zone": "Tropical",
            "Origin": "Southeast Asia",
            "Function": "Shade",
            "Spacing": "10 m",
            "Image Name": "ficus_elastica.png",
            "Image Prompt": "Botanical illustration of a rubber tree"
        });

        let record: PlantRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.botanical_name, "Ficus elastica");
        assert_eq!(record.attribute(FilterAttribute::Zone), "Tropical");
        assert_eq!(record.image_name, "ficus_elastica.png");
    }

    #[test]
    fn plant_record_tolerates_missing_image_columns() {
        let json = serde_json::json!({
            "English Name": "Taro",
            "Botanical Name": "Colocasia esculenta",
            "Plant Family": "Araceae",
            "Strata": "Herbaceous",
            "Lifecycle": "Perennial",
            "Time-to-Maturity": "6-12 months",
            "Lifespan": "Perennial",
            "Zone": "Tropical",
            "Origin": "Asia",
            "Function": "Food",
            "Spacing": "1 m"
        });

        let record: PlantRecord = serde_json::from_value(json).unwrap();
        assert!(record.image_name.is_empty());
        assert!(record.image_prompt.is_empty());
    }

    #[test]
    fn single_zone_selection_produces_only_zone_param() {
        let mut query = PlantQuery::default();
        query.filters.set_selected(FilterAttribute::Zone, vec!["Tropical".to_string()]);

        let params = query.params();
        assert_eq!(params, vec![("zone", "Tropical".to_string())]);
    }

    #[test]
    fn favorites_ids_precede_attribute_params() {
        let mut query = PlantQuery {
            search: "fig".to_string(),
            ids: Some(vec!["Ficus elastica".to_string()]),
            ..Default::default()
        };
        query.filters.set_selected(FilterAttribute::Strata, vec!["Emergent".to_string()]);

        let params = query.params();
        assert_eq!(
            params,
            vec![
                ("q", "fig".to_string()),
                ("ids", "Ficus elastica".to_string()),
                ("strata", "Emergent".to_string()),
            ]
        );
    }

    #[test]
    fn blank_search_is_omitted_from_params() {
        let query = PlantQuery { search: "   ".to_string(), ..Default::default() };
        assert!(query.params().is_empty());
    }

    #[test]
    fn set_selected_replaces_the_whole_set() {
        let mut filters = FilterState::default();
        filters.set_selected(FilterAttribute::Origin, vec!["Asia".to_string(), "Africa".to_string()]);
        filters.set_selected(FilterAttribute::Origin, vec!["Oceania".to_string()]);

        assert_eq!(filters.selected(FilterAttribute::Origin), ["Oceania".to_string()]);
    }

    #[test]
    fn lifespan_options_sort_by_duration() {
        let mut options = FilterOptions {
            lifespan: vec![
                "10-20 years".to_string(),
                "Annual".to_string(),
                "6 months".to_string(),
                "2-3 years".to_string(),
                "Biennial".to_string(),
            ],
            ..Default::default()
        };

        options.sort_for_display();
        assert_eq!(
            options.lifespan,
            vec!["Annual", "Biennial", "6 months", "2-3 years", "10-20 years"]
        );
    }
}
