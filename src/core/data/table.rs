//! The compacted translation table shared by every pipeline stage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};

use super::input::{CodeTranslateWords, LanguageTranslations, TranslateData};
use crate::core::error::{CompactError, CompactResult};

/// Category that holds the default (uncategorized) bucket.
pub const DEFAULT_CATEGORY: &str = "*";

/// Top-level key that holds the language list.
pub const LANGUAGES_KEY: &str = "$";

/// Rejects category names that collide with the table's own keys.
pub fn check_category_name(name: &str) -> CompactResult<()> {
    if name == DEFAULT_CATEGORY || name.starts_with(LANGUAGES_KEY) {
        return Err(CompactError::ReservedCategory {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// One language position of a word entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Slot {
    /// Index of an earlier slot holding the same translation.
    Ref(usize),
    /// Literal translation. An empty string marks an explicit empty translation.
    Text(String),
}

/// Per-language translations of one word, one slot per language index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordEntry {
    slots: Vec<Option<Slot>>,
}

impl WordEntry {
    /// An entry with `languages` absent slots.
    pub fn new(languages: usize) -> Self {
        Self {
            slots: vec![None; languages],
        }
    }

    pub fn from_slots(slots: Vec<Option<Slot>>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Option<Slot>] {
        &self.slots
    }

    /// Stores `translation` at `index`, replacing it with a back-reference
    /// when an earlier slot already holds the same literal.
    ///
    /// The first (smallest) matching index wins.
    pub fn record(&mut self, index: usize, translation: &str) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        let earlier = self.slots[..index]
            .iter()
            .position(|slot| matches!(slot, Some(Slot::Text(text)) if text == translation));

        self.slots[index] = Some(match earlier {
            Some(position) => Slot::Ref(position),
            None => Slot::Text(translation.to_string()),
        });
    }

    /// The translation a slot stands for, following back-references one hop.
    pub fn resolve(&self, index: usize) -> Option<&str> {
        match self.slots.get(index)?.as_ref()? {
            Slot::Text(text) => Some(text),
            Slot::Ref(target) if *target < index => match self.slots.get(*target)? {
                Some(Slot::Text(text)) => Some(text),
                _ => None,
            },
            Slot::Ref(_) => None,
        }
    }

    /// Returns `true` when no language has a translation.
    pub fn is_vacant(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Checks slot count against the language set, pads missing trailing
    /// slots, and verifies every back-reference.
    fn normalize(&mut self, category: &str, word: &str, languages: usize) -> CompactResult<()> {
        if self.slots.len() > languages {
            return Err(CompactError::SlotCount {
                category: category.to_string(),
                word: word.to_string(),
                expected: languages,
                found: self.slots.len(),
            });
        }
        self.slots.resize(languages, None);

        for (slot, value) in self.slots.iter().enumerate() {
            if let Some(Slot::Ref(index)) = value
                && !(*index < slot && matches!(self.slots[*index], Some(Slot::Text(_))))
            {
                return Err(CompactError::InvalidReference {
                    category: category.to_string(),
                    word: word.to_string(),
                    slot,
                    index: *index,
                });
            }
        }
        Ok(())
    }
}

/// Source word -> translations, or `None` for a word referenced by code
/// but translated nowhere.
pub type WordMap = BTreeMap<String, Option<WordEntry>>;

/// Counts reported after a pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    pub languages: usize,
    pub categories: usize,
    pub translated: usize,
    pub untranslated: usize,
}

/// Deduplicated translation table.
///
/// JSON form: `{"$": ["en", "fr"], "*": {"hello": ["Hello", "Bonjour"]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct CompactTable {
    /// Sorted language identifiers; position is the language index.
    pub languages: Vec<String>,
    /// Category name (`*` for the default bucket) -> words.
    pub categories: BTreeMap<String, WordMap>,
}

impl CompactTable {
    /// Builds a table from decoded or cached parts, validating category
    /// names, slot counts and back-references.
    pub fn from_parts(
        languages: Vec<String>,
        categories: BTreeMap<String, WordMap>,
    ) -> CompactResult<Self> {
        let mut categories = categories;
        for (category, words) in categories.iter_mut() {
            if category != DEFAULT_CATEGORY {
                check_category_name(category)?;
            }
            for (word, entry) in words.iter_mut() {
                if let Some(entry) = entry {
                    entry.normalize(category, word, languages.len())?;
                }
            }
        }
        Ok(Self {
            languages,
            categories,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.categories.is_empty()
    }

    /// Categories in emission order: the default bucket first, then the
    /// remaining names sorted lexicographically.
    pub fn ordered_categories(&self) -> impl Iterator<Item = (&str, &WordMap)> {
        let default = self
            .categories
            .get_key_value(DEFAULT_CATEGORY)
            .map(|(name, words)| (name.as_str(), words));
        let rest = self
            .categories
            .iter()
            .filter(|(name, _)| name.as_str() != DEFAULT_CATEGORY)
            .map(|(name, words)| (name.as_str(), words));
        default.into_iter().chain(rest)
    }

    pub fn stats(&self) -> TableStats {
        let mut stats = TableStats {
            languages: self.languages.len(),
            categories: self.categories.len(),
            ..Default::default()
        };
        for entry in self.categories.values().flat_map(BTreeMap::values) {
            match entry {
                Some(_) => stats.translated += 1,
                None => stats.untranslated += 1,
            }
        }
        stats
    }

    /// Resolves every back-reference and splits the table back into the
    /// per-language translations and the untranslated code words.
    pub fn expand(&self) -> (TranslateData, CodeTranslateWords) {
        let mut data: TranslateData = self
            .languages
            .iter()
            .map(|lang| (lang.clone(), LanguageTranslations::default()))
            .collect();
        let mut words = CodeTranslateWords::default();

        for (category, entries) in &self.categories {
            for (word, entry) in entries {
                let Some(entry) = entry else {
                    if category == DEFAULT_CATEGORY {
                        words.defaults.push(word.clone());
                    } else {
                        words
                            .subtypes
                            .entry(category.clone())
                            .or_default()
                            .push(word.clone());
                    }
                    continue;
                };

                for (index, lang) in self.languages.iter().enumerate() {
                    let (Some(translation), Some(target)) =
                        (entry.resolve(index), data.get_mut(lang))
                    else {
                        continue;
                    };
                    let bucket = if category == DEFAULT_CATEGORY {
                        &mut target.defaults
                    } else {
                        target.subtypes.entry(category.clone()).or_default()
                    };
                    bucket.insert(word.clone(), translation.to_string());
                }
            }
        }

        (data, words)
    }
}

impl Serialize for CompactTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_languages = !self.languages.is_empty();
        let mut map =
            serializer.serialize_map(Some(self.categories.len() + usize::from(has_languages)))?;
        if has_languages {
            map.serialize_entry(LANGUAGES_KEY, &self.languages)?;
        }
        for (category, words) in self.ordered_categories() {
            map.serialize_entry(category, words)?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
struct RawTable {
    #[serde(rename = "$", default)]
    languages: Vec<String>,
    #[serde(flatten)]
    categories: BTreeMap<String, WordMap>,
}

impl TryFrom<RawTable> for CompactTable {
    type Error = CompactError;

    fn try_from(raw: RawTable) -> CompactResult<Self> {
        Self::from_parts(raw.languages, raw.categories)
    }
}
