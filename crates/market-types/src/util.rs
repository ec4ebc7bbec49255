use serde::{Deserialize, Deserializer};

/// Normalize a user supplied search query.
///
/// Surrounding whitespace is stripped and a blank query collapses to `None`,
/// which the search endpoint treats as "list everything".
pub fn normalize_query(query: Option<&str>) -> Option<String> {
    query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
}

/// Deserialize a field that the service may send as `null`, falling back to
/// the type's default.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
