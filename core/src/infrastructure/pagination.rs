use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr, Statement, Value};
use tracing::debug;

use crate::domain::pagination::{
    FilterScalar, PaginationParams, TableConfig, build_limit_clause, build_sort_clause,
    build_where_clause,
};

impl From<FilterScalar> for Value {
    fn from(value: FilterScalar) -> Self {
        match value {
            FilterScalar::Text(value) => value.into(),
            FilterScalar::Integer(value) => value.into(),
            FilterScalar::Date(value) => value.into(),
            FilterScalar::Uuid(value) => value.into(),
        }
    }
}

/// `SELECT COUNT(*) AS total FROM <table>` narrowed by the filters and search
/// of `params`.
pub fn count_statement(table_name: &str, params: &PaginationParams) -> Statement {
    let clause = build_where_clause(params);
    let sql = format!("SELECT COUNT(*) AS total FROM {table_name}{}", clause.sql);

    debug!(%sql, "count statement");
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        sql,
        clause.values.into_iter().map(Value::from),
    )
}

/// `base` followed by the WHERE, ORDER BY and LIMIT/OFFSET fragments.
pub fn select_statement(base: &str, params: &PaginationParams, table: &TableConfig) -> Statement {
    let clause = build_where_clause(params);
    let sql = format!(
        "{base}{}{}{}",
        clause.sql,
        build_sort_clause(params, table),
        build_limit_clause(params)
    );

    debug!(%sql, "select statement");
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        sql,
        clause.values.into_iter().map(Value::from),
    )
}

pub async fn count_rows<C: ConnectionTrait>(db: &C, statement: Statement) -> Result<u64, DbErr> {
    let total = match db.query_one(statement).await? {
        Some(row) => row.try_get::<i64>("", "total")?,
        None => 0,
    };

    Ok(u64::try_from(total).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::{Filter, FilterOperator, FilterValue, SortDirection};

    fn table() -> TableConfig {
        TableConfig::new(
            &["nama", "kode"],
            &[("nama", "nama"), ("tgl_dibuat", "tgl_dibuat")],
            "tgl_dibuat",
        )
        .unwrap()
    }

    #[test]
    fn test_select_statement_appends_fragments_in_order() {
        let params = PaginationParams {
            page: 2,
            per_page: 10,
            query: "meja".to_string(),
            query_cols: vec!["nama".to_string(), "kode".to_string()],
            sort_by: "nama".to_string(),
            sort_dir: SortDirection::Asc,
            filters: vec![Filter {
                key: "jr".to_string(),
                column: "jumlah_ruangan".to_string(),
                operator: FilterOperator::Eq,
                value: FilterValue::Scalar(FilterScalar::Integer(3)),
            }],
        };

        let statement = select_statement("SELECT id, nama FROM lokasi", &params, &table());

        assert_eq!(
            statement.sql,
            "SELECT id, nama FROM lokasi WHERE jumlah_ruangan = $1 AND (nama ILIKE $2 OR kode ILIKE $3) ORDER BY nama ASC LIMIT 10 OFFSET 10"
        );
        let values = statement.values.unwrap().0;
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], Value::from(3i64));
        assert_eq!(values[1], Value::from("%meja%".to_string()));
    }

    #[test]
    fn test_count_statement_without_conditions() {
        let statement = count_statement("kategori", &PaginationParams::default());
        assert_eq!(statement.sql, "SELECT COUNT(*) AS total FROM kategori");
        assert!(statement.values.map(|v| v.0.is_empty()).unwrap_or(true));
    }
}
