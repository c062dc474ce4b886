use chrono::NaiveDate;
use uuid::Uuid;

use super::errors::PaginationConfigError;
use super::table_config::check_identifier;
use super::value_objects::{FilterOperator, FilterScalar};

/// How a raw query-string value is read before it is bound to SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Text,
    Integer,
    /// `YYYY-MM-DD`
    Date,
    Uuid,
}

impl FilterKind {
    pub fn parse(&self, raw: &str) -> Option<FilterScalar> {
        match self {
            FilterKind::Text => Some(FilterScalar::Text(raw.to_string())),
            FilterKind::Integer => raw.parse::<i64>().ok().map(FilterScalar::Integer),
            FilterKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(FilterScalar::Date),
            FilterKind::Uuid => Uuid::parse_str(raw).ok().map(FilterScalar::Uuid),
        }
    }
}

/// Maps an external query key to a column and operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRule {
    pub key: String,
    pub column: String,
    pub operator: FilterOperator,
    pub kind: FilterKind,
}

impl FilterRule {
    /// Fails when `column` is not a plain identifier.
    pub fn new(
        key: &str,
        column: &str,
        operator: FilterOperator,
        kind: FilterKind,
    ) -> Result<Self, PaginationConfigError> {
        Ok(Self {
            key: key.to_string(),
            column: check_identifier(column)?,
            operator,
            kind,
        })
    }
}

/// Ordered set of filter rules recognised by one listing.
///
/// Keys not present here are ignored when a query string is parsed, so a
/// client can never name a column directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRegistry {
    rules: Vec<FilterRule>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule. A later rule with the same key replaces the earlier one.
    pub fn with_rule(mut self, rule: FilterRule) -> Self {
        match self.rules.iter_mut().find(|r| r.key == rule.key) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        self
    }

    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            FilterKind::Integer.parse("12"),
            Some(FilterScalar::Integer(12))
        );
        assert_eq!(FilterKind::Integer.parse("twelve"), None);
        assert_eq!(
            FilterKind::Date.parse("2024-01-31"),
            NaiveDate::from_ymd_opt(2024, 1, 31).map(FilterScalar::Date)
        );
        assert_eq!(FilterKind::Date.parse("31/01/2024"), None);
        assert_eq!(FilterKind::Uuid.parse("not-a-uuid"), None);
        assert_eq!(
            FilterKind::Text.parse("open"),
            Some(FilterScalar::Text("open".to_string()))
        );
    }

    #[test]
    fn test_registry_keeps_insertion_order_and_replaces_duplicates() {
        let registry = FilterRegistry::new()
            .with_rule(
                FilterRule::new("dmin", "tgl_dibuat", FilterOperator::Gte, FilterKind::Date)
                    .unwrap(),
            )
            .with_rule(
                FilterRule::new("jr", "jumlah_ruangan", FilterOperator::Eq, FilterKind::Integer)
                    .unwrap(),
            )
            .with_rule(
                FilterRule::new("dmin", "tgl_update", FilterOperator::Gte, FilterKind::Date)
                    .unwrap(),
            );

        let columns: Vec<(&str, &str)> = registry
            .rules()
            .iter()
            .map(|r| (r.key.as_str(), r.column.as_str()))
            .collect();
        assert_eq!(columns, vec![("dmin", "tgl_update"), ("jr", "jumlah_ruangan")]);
    }

    #[test]
    fn test_rule_rejects_non_identifier_column() {
        assert_eq!(
            FilterRule::new("status", "status; drop", FilterOperator::In, FilterKind::Text),
            Err(PaginationConfigError::InvalidIdentifier(
                "status; drop".to_string()
            ))
        );
        assert_eq!(
            FilterRule::new("dmin", "Tgl Dibuat", FilterOperator::Gte, FilterKind::Date),
            Err(PaginationConfigError::InvalidIdentifier(
                "Tgl Dibuat".to_string()
            ))
        );
    }
}
