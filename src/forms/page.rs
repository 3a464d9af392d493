use crate::helpers::ApiError;
use serde::Deserialize;
use serde_valid::Validate;

pub const DEFAULT_LIMIT: i64 = 15;
pub const DEFAULT_OFFSET: i64 = 0;

/// Raw `limit`/`offset` query values, kept as text so a non-numeric value can
/// be told apart from a missing one.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Query of `GET /product/filter`. Empty filter values are treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct Page {
    #[validate(minimum = 0)]
    pub limit: i64,
    #[validate(minimum = 0)]
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl Page {
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Result<Self, ApiError> {
        let page = Page {
            limit: parse_or(limit, DEFAULT_LIMIT, "Invalid Limit")?,
            offset: parse_or(offset, DEFAULT_OFFSET, "Invalid Offset")?,
        };

        page.validate()
            .map_err(|errors| ApiError::Validation(errors.to_string()))?;

        Ok(page)
    }
}

fn parse_or(raw: Option<&str>, default: i64, message: &str) -> Result<i64, ApiError> {
    match raw {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<i64>()
            .map_err(|_| ApiError::Validation(message.to_string())),
    }
}

impl PageQuery {
    pub fn page(&self) -> Result<Page, ApiError> {
        Page::parse(self.limit.as_deref(), self.offset.as_deref())
    }
}

impl ProductQuery {
    pub fn page(&self) -> Result<Page, ApiError> {
        Page::parse(self.limit.as_deref(), self.offset.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_use_defaults() {
        assert_eq!(Page::parse(None, None).unwrap(), Page { limit: 15, offset: 0 });
        assert_eq!(Page::parse(Some(""), Some("")).unwrap(), Page::default());
    }

    #[test]
    fn numeric_values_are_used() {
        assert_eq!(
            Page::parse(Some("10"), Some("30")).unwrap(),
            Page { limit: 10, offset: 30 }
        );
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let err = Page::parse(Some("ten"), None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Limit");

        let err = Page::parse(None, Some("1.5")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Offset");
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(matches!(
            Page::parse(Some("-1"), None),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            Page::parse(None, Some("-5")),
            Err(ApiError::Validation(_))
        ));
    }
}
