//! Paging parameters for list queries.

use super::ValidationError;

/// Largest page any list query may request. Larger limits are clamped.
pub const MAX_PAGE_LIMIT: usize = 50;

/// A validated `limit`/`offset` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: usize,
    offset: usize,
}

impl PageRequest {
    /// Builds a page from caller-supplied values.
    ///
    /// `limit` falls back to `default_limit` when absent, must be positive,
    /// and is clamped to [`MAX_PAGE_LIMIT`]. `offset` defaults to zero and
    /// must not be negative.
    pub fn new(
        limit: Option<i64>,
        offset: Option<i64>,
        default_limit: usize,
    ) -> Result<Self, ValidationError> {
        let limit = match limit {
            None => default_limit,
            Some(l) if l <= 0 => {
                return Err(ValidationError::invalid_format(
                    "limit",
                    "must be a positive integer",
                ))
            }
            Some(l) => usize::try_from(l).unwrap_or(MAX_PAGE_LIMIT),
        };

        let offset = match offset {
            None => 0,
            Some(o) => usize::try_from(o).map_err(|_| {
                ValidationError::invalid_format("offset", "must be a non-negative integer")
            })?,
        };

        Ok(Self {
            limit: limit.min(MAX_PAGE_LIMIT),
            offset,
        })
    }

    /// Parses raw query-string values, then validates as [`PageRequest::new`].
    pub fn parse(
        limit: Option<&str>,
        offset: Option<&str>,
        default_limit: usize,
    ) -> Result<Self, ValidationError> {
        Self::new(
            parse_int("limit", limit)?,
            parse_int("offset", offset)?,
            default_limit,
        )
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

fn parse_int(field: &str, raw: Option<&str>) -> Result<Option<i64>, ValidationError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ValidationError::invalid_format(field, "must be an integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let page = PageRequest::new(None, None, 10).unwrap();
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn limit_above_max_is_clamped() {
        let page = PageRequest::new(Some(500), Some(3), 10).unwrap();
        assert_eq!(page.limit(), MAX_PAGE_LIMIT);
        assert_eq!(page.offset(), 3);
    }

    #[test]
    fn non_positive_limit_is_rejected() {
        assert!(PageRequest::new(Some(0), None, 10).is_err());
        assert!(PageRequest::new(Some(-4), None, 10).is_err());
    }

    #[test]
    fn negative_offset_is_rejected() {
        let err = PageRequest::new(None, Some(-1), 10).unwrap_err();
        assert!(err.to_string().contains("offset"));
    }

    #[test]
    fn parse_rejects_non_integers() {
        let err = PageRequest::parse(Some("ten"), None, 10).unwrap_err();
        assert_eq!(
            err,
            ValidationError::invalid_format("limit", "must be an integer")
        );
    }

    #[test]
    fn parse_treats_blank_as_absent() {
        let page = PageRequest::parse(Some(" "), Some(""), 5).unwrap();
        assert_eq!(page, PageRequest::new(None, None, 5).unwrap());
    }
}
