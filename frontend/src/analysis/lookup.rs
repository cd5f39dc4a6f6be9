use std::collections::HashMap;

use log::warn;

use crate::models::city::{CALCULATOR_CITIES, DASHBOARD_CITIES};
use crate::models::statement::{sample_statements, ImpactStatement, STATEMENT_CITY_IDS};
use crate::workflow::{Outcome, ResultProvider};

/// Lowercases and collapses every run of non-letters into a single `-`,
/// trimming separators at both ends. `"Buffalo, NY"` becomes `buffalo-ny`.
pub fn normalize_key(query: &str) -> String {
    let mut key = String::with_capacity(query.len());
    let mut pending_separator = false;
    for ch in query.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() {
            if pending_separator && !key.is_empty() {
                key.push('-');
            }
            pending_separator = false;
            key.push(ch);
        } else {
            pending_separator = true;
        }
    }
    key
}

/// Maps free-text city names onto canonical ids.
///
/// Every canonical id is its own alias. When two names normalize to the same
/// key for different ids, the first registration wins and the clash is logged.
pub struct CityIndex {
    aliases: HashMap<String, &'static str>,
}

impl CityIndex {
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    pub fn with_known_cities() -> Self {
        let mut index = Self::new();
        for id in STATEMENT_CITY_IDS {
            index.register(id, id);
        }
        for city in DASHBOARD_CITIES.iter() {
            index.register(city.id, city.id);
            index.register(city.id, city.name);
        }
        for (id, name) in CALCULATOR_CITIES {
            index.register(id, id);
            index.register(id, name);
        }
        index
    }

    /// Returns `false` when the alias was already claimed by another id.
    pub fn register(&mut self, id: &'static str, alias: &str) -> bool {
        let key = normalize_key(alias);
        if key.is_empty() {
            return false;
        }
        match self.aliases.get(&key) {
            Some(existing) if *existing != id => {
                warn!("city alias '{}' already maps to {}, ignoring {}", key, existing, id);
                false
            }
            Some(_) => true,
            None => {
                self.aliases.insert(key, id);
                true
            }
        }
    }

    pub fn resolve(&self, query: &str) -> Option<&'static str> {
        self.aliases.get(&normalize_key(query)).copied()
    }
}

impl Default for CityIndex {
    fn default() -> Self {
        Self::with_known_cities()
    }
}

/// Statements for a free-text city name. A miss is an empty set, never an error.
pub fn lookup_statements(index: &CityIndex, query: &str) -> Vec<ImpactStatement> {
    index
        .resolve(query)
        .and_then(sample_statements)
        .unwrap_or_default()
}

pub struct StatementLookup {
    index: CityIndex,
}

impl StatementLookup {
    pub fn new(index: CityIndex) -> Self {
        Self { index }
    }
}

impl Default for StatementLookup {
    fn default() -> Self {
        Self::new(CityIndex::with_known_cities())
    }
}

impl ResultProvider for StatementLookup {
    type Input = String;
    type Output = Vec<ImpactStatement>;

    fn resolve(&mut self, query: &String) -> Outcome<Vec<ImpactStatement>> {
        let statements = lookup_statements(&self.index, query);
        if statements.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Found(statements)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_punctuation_runs_to_one_separator() {
        assert_eq!(normalize_key("Buffalo, NY"), "buffalo-ny");
        assert_eq!(normalize_key("  Chico,   CA!! "), "chico-ca");
        assert_eq!(normalize_key("St. Louis 2"), "st-louis");
        assert_eq!(normalize_key("!!!"), "");
    }

    #[test]
    fn buffalo_returns_the_four_fixed_statements() {
        let index = CityIndex::with_known_cities();
        let statements = lookup_statements(&index, "Buffalo, NY");
        assert_eq!(statements.len(), 4);
        let impacts: Vec<u32> = statements.iter().map(|s| s.score_impact).collect();
        assert_eq!(impacts, vec![3, 6, 4, 5]);
    }

    #[test]
    fn unknown_city_is_an_empty_set() {
        let index = CityIndex::with_known_cities();
        assert!(lookup_statements(&index, "Nonexistent City").is_empty());
    }

    #[test]
    fn known_city_without_statements_is_empty() {
        let index = CityIndex::with_known_cities();
        assert_eq!(index.resolve("Austin, Texas"), Some("austin-tx"));
        assert!(lookup_statements(&index, "Austin, Texas").is_empty());
    }

    #[test]
    fn long_state_names_resolve_to_canonical_id() {
        let index = CityIndex::with_known_cities();
        assert_eq!(index.resolve("Buffalo, New York"), Some("buffalo-ny"));
        assert_eq!(index.resolve("chico-ca"), Some("chico-ca"));
    }

    #[test]
    fn colliding_alias_keeps_first_registration() {
        let mut index = CityIndex::new();
        assert!(index.register("portland-or", "Portland"));
        assert!(!index.register("portland-me", "PORTLAND"));
        assert_eq!(index.resolve("portland"), Some("portland-or"));
    }

    #[test]
    fn provider_settles_empty_on_miss() {
        let mut lookup = StatementLookup::default();
        assert_eq!(lookup.resolve(&"Nowhere".to_string()), Outcome::Empty);
        match lookup.resolve(&"Chico, CA".to_string()) {
            Outcome::Found(statements) => assert_eq!(statements.len(), 3),
            Outcome::Empty => panic!("expected chico statements"),
        }
    }
}
