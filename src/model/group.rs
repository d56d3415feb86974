use std::collections::BTreeMap;

/// A single named source of uncertainty, with its absolute variation
/// (events) keyed by sub-region id.
#[derive(Debug, Clone, PartialEq)]
pub struct Systematic {
    pub name: String,
    pub variation: BTreeMap<String, f64>,
}

impl Systematic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variation: BTreeMap::new(),
        }
    }
}

/// A bucket of related systematic sources. `combined` holds the quadrature
/// sum of the member variations per sub-region once aggregated.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub systematics: Vec<Systematic>,
    pub combined: BTreeMap<String, f64>,
}

impl Group {
    pub fn new<S: AsRef<str>>(name: impl Into<String>, systematics: &[S]) -> Self {
        Self {
            name: name.into(),
            systematics: systematics
                .iter()
                .map(|s| Systematic::new(s.as_ref()))
                .collect(),
            combined: BTreeMap::new(),
        }
    }
}
