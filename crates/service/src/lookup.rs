//! Lookup-term resolution.
//!
//! A caller-supplied term may be a sequence number, a record id, or a name.
//! Resolution applies an ordered list of strategies, each a pure function
//! from term to an optional typed filter; the service queries with each
//! produced filter in turn and stops at the first one that matches a record.

use pokedex_core::normalize_name;
use uuid::Uuid;

/// A typed filter produced by one resolver strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    ByNo(i32),
    ById(Uuid),
    ByName(String),
}

/// Strategies in priority order: number, then id, then name. The name
/// strategy always produces a filter, so it terminates the chain.
pub(crate) const RESOLVERS: &[fn(&str) -> Option<Lookup>] = &[by_no, by_id, by_name];

fn by_no(term: &str) -> Option<Lookup> {
    term.trim().parse().ok().map(Lookup::ByNo)
}

fn by_id(term: &str) -> Option<Lookup> {
    Uuid::try_parse(term.trim()).ok().map(Lookup::ById)
}

fn by_name(term: &str) -> Option<Lookup> {
    Some(Lookup::ByName(normalize_name(term)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_term_resolves_by_no_first() {
        assert_eq!(RESOLVERS[0]("25"), Some(Lookup::ByNo(25)));
        assert_eq!(RESOLVERS[0](" 7 "), Some(Lookup::ByNo(7)));
    }

    #[test]
    fn test_non_numeric_term_skips_no_strategy() {
        assert_eq!(by_no("pikachu"), None);
        assert_eq!(by_no("25a"), None);
    }

    #[test]
    fn test_uuid_term_resolves_by_id() {
        let id = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
        assert_eq!(by_id(id), Some(Lookup::ById(Uuid::try_parse(id).unwrap())));
        assert_eq!(by_id("not-a-uuid"), None);
    }

    #[test]
    fn test_name_strategy_normalizes_and_always_applies() {
        assert_eq!(by_name("  PIKACHU "), Some(Lookup::ByName("pikachu".to_owned())));
        assert_eq!(by_name("mew"), Some(Lookup::ByName("mew".to_owned())));
    }
}
