use crate::domain::pagination::{
    FilterKind, FilterOperator, FilterRegistry, FilterRule, PaginationConfigError, TableConfig,
};

/// `dmin`/`dmax` bound the creation date, `jr` matches an exact room count.
pub fn filter_registry() -> Result<FilterRegistry, PaginationConfigError> {
    let registry = FilterRegistry::new()
        .with_rule(FilterRule::new(
            "dmin",
            "tgl_dibuat",
            FilterOperator::Gte,
            FilterKind::Date,
        )?)
        .with_rule(FilterRule::new(
            "dmax",
            "tgl_dibuat",
            FilterOperator::Lte,
            FilterKind::Date,
        )?)
        .with_rule(FilterRule::new(
            "jr",
            "jumlah_ruangan",
            FilterOperator::Eq,
            FilterKind::Integer,
        )?);

    Ok(registry)
}

pub fn table_config() -> Result<TableConfig, PaginationConfigError> {
    TableConfig::new(
        &["nama", "kode"],
        &[
            ("nama", "nama"),
            ("kode", "kode"),
            ("tgl_dibuat", "tgl_dibuat"),
            ("jumlah_ruangan", "jumlah_ruangan"),
        ],
        "tgl_dibuat",
    )
}
