use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::Id,
};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Raw paging parameters. Kept as strings so that `page=abc` falls back to
/// the default instead of rejecting the request.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct Pagination {
    /// Page number, default 1
    pub page: Option<String>,
    /// Items per page, default 10
    pub limit: Option<String>,
}

impl Pagination {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: Some(page.to_string()),
            limit: Some(limit.to_string()),
        }
    }

    /// Returns `(page, limit, offset)`. Missing, non-numeric and zero values
    /// use the default; negative values clamp to 1.
    pub fn normalize(&self) -> (usize, usize, usize) {
        let page = lenient_count(self.page.as_deref(), DEFAULT_PAGE);
        let limit = lenient_count(self.limit.as_deref(), DEFAULT_LIMIT);
        let offset = (page - 1).saturating_mul(limit);
        (page, limit, offset)
    }
}

fn lenient_count(raw: Option<&str>, default: usize) -> usize {
    match raw.and_then(parse_leading_int) {
        None | Some(0) => default,
        Some(n) if n < 0 => 1,
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
    }
}

/// Parses the integer prefix of `raw`: `" 12"`, `"+3"`, `"2abc"` all parse,
/// `"abc"` does not. Values beyond `i64` saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Resolves an identifier from a path segment, query value or legacy code.
/// Accepts `"7"` and prefixed codes such as `"PAT007"`; anything else,
/// including zero, is not an id.
pub fn parse_id(raw: &str) -> Option<Id> {
    let trimmed = raw.trim();
    let digits = trimmed.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<Id>().ok().filter(|id| *id > 0)
}

/// Path-segment id; an unparseable segment is reported as a missing `entity`.
pub fn path_id(raw: &str, entity: &str) -> AppResult<Id> {
    parse_id(raw).ok_or_else(|| AppError::not_found(entity))
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SearchQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    /// Case-insensitive substring of the name
    pub search: Option<String>,
}

impl SearchQuery {
    /// Lowercased search term, `None` when absent or blank.
    pub fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    /// Only prescriptions of this patient (numeric id or patient code)
    pub patient_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paging(page: &str, limit: &str) -> Pagination {
        Pagination {
            page: Some(page.into()),
            limit: Some(limit.into()),
        }
    }

    #[test]
    fn defaults_apply_to_missing_zero_and_garbage() {
        assert_eq!(Pagination::default().normalize(), (1, 10, 0));
        assert_eq!(paging("0", "0").normalize(), (1, 10, 0));
        assert_eq!(paging("abc", "").normalize(), (1, 10, 0));
    }

    #[test]
    fn negative_values_clamp_to_one() {
        assert_eq!(paging("-4", "-2").normalize(), (1, 1, 0));
    }

    #[test]
    fn leading_digits_are_used() {
        assert_eq!(paging("3abc", " 5").normalize(), (3, 5, 10));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("1.9"), Some(1));
        assert_eq!(parse_leading_int("x1"), None);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let (page, limit, offset) = paging("99999999999999999999999", "10").normalize();
        assert_eq!(limit, 10);
        assert!(page > 1);
        assert_eq!(offset, usize::MAX);
    }

    #[test]
    fn ids_accept_numbers_and_patient_codes() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id("PAT001"), Some(1));
        assert_eq!(parse_id(" 4 "), Some(4));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("PAT"), None);
        assert_eq!(parse_id("hotspots"), None);
        assert_eq!(parse_id("12abc"), None);
    }
}
