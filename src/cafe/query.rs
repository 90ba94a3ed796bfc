use crate::catalog::CityCatalog;

use super::CafeError;

/// Raw query-string parameters, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeParams {
    pub city: Option<String>,
    pub count: Option<String>,
    pub search: Option<String>,
}

impl CafeParams {
    /// Builds the parameters from decoded key/value pairs.
    /// When a key is repeated, its first value is kept; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "city" => &mut params.city,
                "count" => &mut params.count,
                "search" => &mut params.search,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value);
            }
        }

        params
    }
}

/// A validated request: the city is known to the catalog and the count is a
/// non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeQuery {
    pub city: String,
    pub count: Option<usize>,
    pub search: Option<String>,
}

impl CafeQuery {
    /// Validates city first, then count. Empty values count as absent.
    pub fn parse(params: CafeParams, catalog: &CityCatalog) -> Result<Self, CafeError> {
        let city = params
            .city
            .filter(|city| catalog.contains(city))
            .ok_or(CafeError::InvalidCity)?;

        let count = match params.count.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<usize>().map_err(|_| CafeError::InvalidCount)?),
        };

        let search = params.search.filter(|search| !search.is_empty());

        Ok(Self {
            city,
            count,
            search,
        })
    }
}
