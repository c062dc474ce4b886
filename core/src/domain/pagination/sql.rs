use tracing::debug;

use super::table_config::TableConfig;
use super::value_objects::{FilterScalar, FilterValue, PaginationParams};

/// A `WHERE` fragment and the values bound to its `$N` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    /// Either empty or starts with `" WHERE "`.
    pub sql: String,
    pub values: Vec<FilterScalar>,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    fn bind(&mut self, value: FilterScalar) -> String {
        self.values.push(value);
        format!("${}", self.values.len())
    }
}

/// Builds the filter and search conditions for a listing.
///
/// Filters come first, in order, joined by `AND`. The free-text search is
/// one parenthesised `OR` group across `query_cols`. Column names come from
/// registries only; every user-supplied value is a placeholder.
pub fn build_where_clause(params: &PaginationParams) -> WhereClause {
    let mut clause = WhereClause::default();
    let mut conditions = Vec::new();

    for filter in &params.filters {
        let op = filter.operator.sql_operator();

        match (&filter.value, filter.operator.is_list()) {
            (FilterValue::List(values), true) if !values.is_empty() => {
                let placeholders: Vec<String> =
                    values.iter().cloned().map(|v| clause.bind(v)).collect();
                conditions.push(format!(
                    "{} {} ({})",
                    filter.column,
                    op,
                    placeholders.join(", ")
                ));
            }
            (FilterValue::Scalar(value), false) => {
                let placeholder = clause.bind(value.clone());
                conditions.push(format!("{} {} {}", filter.column, op, placeholder));
            }
            _ => continue,
        }
    }

    if !params.query.is_empty() && !params.query_cols.is_empty() {
        let pattern = format!("%{}%", params.query);
        let search: Vec<String> = params
            .query_cols
            .iter()
            .map(|col| {
                let placeholder = clause.bind(FilterScalar::Text(pattern.clone()));
                format!("{col} ILIKE {placeholder}")
            })
            .collect();
        conditions.push(format!("({})", search.join(" OR ")));
    }

    if !conditions.is_empty() {
        clause.sql = format!(" WHERE {}", conditions.join(" AND "));
    }

    debug!(sql = %clause.sql, args = clause.values.len(), "built where clause");
    clause
}

/// ` ORDER BY <column> <ASC|DESC>`, falling back to the default sort when
/// `sort_by` is not registered.
pub fn build_sort_clause(params: &PaginationParams, table: &TableConfig) -> String {
    format!(
        " ORDER BY {} {}",
        table.sort_column(&params.sort_by),
        params.sort_dir.as_sql()
    )
}

/// ` LIMIT <per_page> OFFSET <(page - 1) * per_page>`
pub fn build_limit_clause(params: &PaginationParams) -> String {
    format!(" LIMIT {} OFFSET {}", params.limit(), params.offset())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::pagination::value_objects::{Filter, FilterOperator, SortDirection};

    fn filter(key: &str, column: &str, operator: FilterOperator, value: FilterValue) -> Filter {
        Filter {
            key: key.to_string(),
            column: column.to_string(),
            operator,
            value,
        }
    }

    fn text(value: &str) -> FilterScalar {
        FilterScalar::Text(value.to_string())
    }

    fn table() -> TableConfig {
        TableConfig::new(
            &["nama", "kode"],
            &[("nama", "nama"), ("kode", "kode"), ("tgl_dibuat", "tgl_dibuat")],
            "tgl_dibuat",
        )
        .unwrap()
    }

    #[test]
    fn test_no_conditions_yields_empty_clause() {
        let clause = build_where_clause(&PaginationParams::default());
        assert_eq!(clause.sql, "");
        assert!(clause.values.is_empty());
    }

    #[test]
    fn test_query_without_search_columns_is_ignored() {
        let params = PaginationParams {
            query: "foo".to_string(),
            ..Default::default()
        };
        assert!(build_where_clause(&params).is_empty());
    }

    #[test]
    fn test_in_filter() {
        let params = PaginationParams {
            filters: vec![filter(
                "status",
                "status",
                FilterOperator::In,
                FilterValue::List(vec![text("a"), text("b")]),
            )],
            ..Default::default()
        };

        let clause = build_where_clause(&params);
        assert_eq!(clause.sql, " WHERE status IN ($1, $2)");
        assert_eq!(clause.values, vec![text("a"), text("b")]);
    }

    #[test]
    fn test_nin_filter_renders_not_in() {
        let params = PaginationParams {
            filters: vec![filter(
                "status",
                "status",
                FilterOperator::Nin,
                FilterValue::List(vec![text("rusak")]),
            )],
            ..Default::default()
        };

        assert_eq!(build_where_clause(&params).sql, " WHERE status NOT IN ($1)");
    }

    #[test]
    fn test_empty_list_is_skipped() {
        let params = PaginationParams {
            filters: vec![
                filter("status", "status", FilterOperator::In, FilterValue::List(vec![])),
                filter(
                    "jr",
                    "jumlah_ruangan",
                    FilterOperator::Eq,
                    FilterValue::Scalar(FilterScalar::Integer(2)),
                ),
            ],
            ..Default::default()
        };

        let clause = build_where_clause(&params);
        assert_eq!(clause.sql, " WHERE jumlah_ruangan = $1");
        assert_eq!(clause.values, vec![FilterScalar::Integer(2)]);
    }

    #[test]
    fn test_search_group_is_ored() {
        let params = PaginationParams {
            query: "foo".to_string(),
            query_cols: vec!["nama".to_string(), "kode".to_string()],
            ..Default::default()
        };

        let clause = build_where_clause(&params);
        assert_eq!(clause.sql, " WHERE (nama ILIKE $1 OR kode ILIKE $2)");
        assert_eq!(clause.values, vec![text("%foo%"), text("%foo%")]);
    }

    #[test]
    fn test_placeholders_are_sequential_across_filters_and_search() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let params = PaginationParams {
            query: "lab".to_string(),
            query_cols: vec!["nama".to_string(), "kode".to_string()],
            filters: vec![
                filter(
                    "dmin",
                    "tgl_dibuat",
                    FilterOperator::Gte,
                    FilterValue::Scalar(FilterScalar::Date(date)),
                ),
                filter(
                    "status",
                    "status",
                    FilterOperator::In,
                    FilterValue::List(vec![text("a"), text("b")]),
                ),
            ],
            ..Default::default()
        };

        let clause = build_where_clause(&params);
        assert_eq!(
            clause.sql,
            " WHERE tgl_dibuat >= $1 AND status IN ($2, $3) AND (nama ILIKE $4 OR kode ILIKE $5)"
        );
        assert_eq!(clause.values.len(), 5);
        assert_eq!(clause.values[0], FilterScalar::Date(date));
    }

    #[test]
    fn test_shape_mismatch_is_skipped() {
        let params = PaginationParams {
            filters: vec![filter(
                "jr",
                "jumlah_ruangan",
                FilterOperator::Eq,
                FilterValue::List(vec![FilterScalar::Integer(1)]),
            )],
            ..Default::default()
        };
        assert!(build_where_clause(&params).is_empty());
    }

    #[test]
    fn test_sort_clause_uses_registered_column() {
        let params = PaginationParams {
            sort_by: "kode".to_string(),
            sort_dir: SortDirection::Asc,
            ..Default::default()
        };
        assert_eq!(build_sort_clause(&params, &table()), " ORDER BY kode ASC");
    }

    #[test]
    fn test_unknown_sort_falls_back_to_default() {
        let params = PaginationParams {
            sort_by: "password; --".to_string(),
            ..Default::default()
        };
        assert_eq!(
            build_sort_clause(&params, &table()),
            " ORDER BY tgl_dibuat DESC"
        );
    }

    #[test]
    fn test_limit_clause() {
        let params = PaginationParams {
            page: 3,
            per_page: 10,
            ..Default::default()
        };
        assert_eq!(build_limit_clause(&params), " LIMIT 10 OFFSET 20");
    }
}
