use std::str::FromStr;

/// Values that explicitly ask for "no filter" on an enum-valued field.
const SENTINELS: [&str; 2] = ["null", "unknown"];

/// Resolves a raw enum filter. Blank input, sentinels and values that name
/// no member all resolve to `None`; this never fails.
pub fn resolve_enum<T: FromStr>(raw: Option<&str>) -> Option<T> {
    let value = raw?.trim();

    if value.is_empty()
        || SENTINELS
            .iter()
            .any(|sentinel| value.eq_ignore_ascii_case(sentinel))
    {
        return None;
    }

    value.parse().ok()
}

/// Free-text filters are dropped when blank and otherwise kept verbatim.
pub fn resolve_text(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}
