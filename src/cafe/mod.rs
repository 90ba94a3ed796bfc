// Café lookup: validates a request against the catalog, then filters and
// truncates the city's list. Everything here is pure; the HTTP layer only
// extracts parameters and writes the result.

pub mod error;
pub mod query;

pub use error::CafeError;
pub use query::{CafeParams, CafeQuery};

use axum::http::StatusCode;

use crate::catalog::CityCatalog;

/// Separator used when rendering a result list.
pub const SEPARATOR: &str = ",";

/// Returns the cafés of `query.city` that match the search term, in catalog
/// order, truncated to `query.count` entries when a count is given.
pub fn find_cafes<'a>(catalog: &'a CityCatalog, query: &CafeQuery) -> Vec<&'a str> {
    let Some(cafes) = catalog.get(&query.city) else {
        return Vec::new();
    };

    let needle = query.search.as_deref().map(fold_case);
    let limit = query.count.unwrap_or(usize::MAX);

    cafes
        .iter()
        .filter(|cafe| match needle.as_deref() {
            Some(needle) => fold_case(cafe).contains(needle),
            None => true,
        })
        .take(limit)
        .map(String::as_str)
        .collect()
}

// Per-character lowercase. `str::to_lowercase` maps a word-final Σ to ς, which
// would stop a lone "Σ" from matching inside "ΟΔΟΣ".
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

pub fn render(cafes: &[&str]) -> String {
    cafes.join(SEPARATOR)
}

/// Validates `params` and runs the lookup.
pub fn lookup(catalog: &CityCatalog, params: CafeParams) -> Result<String, CafeError> {
    let query = CafeQuery::parse(params, catalog)?;
    let cafes = find_cafes(catalog, &query);

    tracing::debug!(
        "Found {} cafés for city '{}' (count: {:?}, search: {:?})",
        cafes.len(),
        query.city,
        query.count,
        query.search
    );

    Ok(render(&cafes))
}

/// Full request contract: status code and plain-text body.
pub fn handle(catalog: &CityCatalog, params: CafeParams) -> (StatusCode, String) {
    match lookup(catalog, params) {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => {
            tracing::warn!("Rejected café request: {}", e);
            (e.status_code(), e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CityCatalog {
        CityCatalog::builtin().unwrap()
    }

    fn query(city: &str, count: Option<usize>, search: Option<&str>) -> CafeQuery {
        CafeQuery {
            city: city.to_string(),
            count,
            search: search.map(String::from),
        }
    }

    #[test]
    fn no_count_returns_every_match() {
        let catalog = catalog();
        let cafes = find_cafes(&catalog, &query("moscow", None, None));

        assert_eq!(cafes.len(), catalog.get("moscow").unwrap().len());
    }

    #[test]
    fn count_truncates_in_catalog_order() {
        let catalog = catalog();
        let cafes = find_cafes(&catalog, &query("tula", Some(2), None));

        assert_eq!(cafes, vec!["Пряник", "Самовар"]);
    }

    #[test]
    fn zero_count_is_empty_not_unlimited() {
        assert!(find_cafes(&catalog(), &query("moscow", Some(0), None)).is_empty());
    }

    #[test]
    fn search_ignores_case() {
        let catalog = catalog();

        assert_eq!(
            find_cafes(&catalog, &query("moscow", None, Some("кофе"))),
            vec!["Мир кофе", "Кофе и завтраки"]
        );
        assert_eq!(
            find_cafes(&catalog, &query("moscow", None, Some("КОФЕ"))),
            vec!["Мир кофе", "Кофе и завтраки"]
        );
    }

    #[test]
    fn search_then_count() {
        let catalog = catalog();
        let cafes = find_cafes(&catalog, &query("moscow", Some(1), Some("кофе")));
        assert_eq!(cafes, vec!["Мир кофе"]);
    }

    #[test]
    fn search_matches_word_final_sigma() {
        let catalog =
            CityCatalog::from_toml_str("[cities]\nathens = [\"ΟΔΟΣ\", \"Kaffee\"]\n").unwrap();

        for search in ["Σ", "σ", "ΟΣ", "οσ", "ΟΔΟΣ"] {
            assert_eq!(
                find_cafes(&catalog, &query("athens", None, Some(search))),
                vec!["ΟΔΟΣ"],
                "search {search:?}"
            );
        }
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(find_cafes(&catalog(), &query("moscow", None, Some("фасоль"))).is_empty());
    }

    #[test]
    fn render_joins_without_spaces() {
        assert_eq!(render(&["a", "b c", "d"]), "a,b c,d");
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn handle_maps_errors_to_bad_request() {
        let catalog = catalog();

        let (status, body) = handle(&catalog, CafeParams::default());
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "unknown city");

        let params = CafeParams {
            city: Some("tula".to_string()),
            count: Some("na".to_string()),
            search: None,
        };
        let (status, body) = handle(&catalog, params);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "incorrect count");
    }

    #[test]
    fn handle_is_idempotent() {
        let catalog = catalog();
        let params = CafeParams {
            city: Some("moscow".to_string()),
            count: Some("3".to_string()),
            search: Some("о".to_string()),
        };

        let first = handle(&catalog, params.clone());
        let second = handle(&catalog, params);

        assert_eq!(first.0, StatusCode::OK);
        assert_eq!(first, second);
    }
}
