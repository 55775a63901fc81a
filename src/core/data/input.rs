//! Pipeline inputs produced by the external merge and scan stages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resolved translations of a single language.
///
/// ```json
/// {
///   "DEFAULTS": { "hello": "Bonjour" },
///   "SUBTYPES": { "menu": { "open": "Ouvrir" } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTranslations {
    /// Words of the default bucket (`*`).
    #[serde(rename = "DEFAULTS", alias = "defaults", default)]
    pub defaults: BTreeMap<String, String>,
    /// Category name -> (source word -> translated word).
    #[serde(rename = "SUBTYPES", alias = "subtypes", default)]
    pub subtypes: BTreeMap<String, BTreeMap<String, String>>,
}

impl LanguageTranslations {
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty() && self.subtypes.values().all(BTreeMap::is_empty)
    }
}

/// Language identifier -> translations. Key order is the language index order.
pub type TranslateData = BTreeMap<String, LanguageTranslations>;

/// Words referenced by source code, grouped by bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTranslateWords {
    #[serde(rename = "DEFAULTS", alias = "defaults", default)]
    pub defaults: Vec<String>,
    #[serde(rename = "SUBTYPES", alias = "subtypes", default)]
    pub subtypes: BTreeMap<String, Vec<String>>,
}

impl CodeTranslateWords {
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty() && self.subtypes.values().all(Vec::is_empty)
    }
}
