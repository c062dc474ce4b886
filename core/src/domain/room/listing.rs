use crate::domain::pagination::{
    FilterKind, FilterOperator, FilterRegistry, FilterRule, PaginationConfigError, TableConfig,
};

/// `loc` narrows the listing to one location.
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
            "loc",
            "id_lokasi",
            FilterOperator::Eq,
            FilterKind::Uuid,
        )?);

    Ok(registry)
}

pub fn table_config() -> Result<TableConfig, PaginationConfigError> {
    TableConfig::new(
        &["nama", "penanggung_jawab"],
        &[
            ("nama", "nama"),
            ("tgl_dibuat", "tgl_dibuat"),
            ("jumlah_barang", "jumlah_barang"),
        ],
        "tgl_dibuat",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::{
        FilterScalar, FilterValue, PaginationLimits, PaginationParams, QueryValues,
        build_where_clause,
    };

    #[test]
    fn test_location_filter_binds_uuid() {
        let id = "0191e2a4-6a0e-7c3b-8d2f-5b1a9c3e4f50";
        let values: QueryValues = [("loc", id), ("q", "lab")].into_iter().collect();

        let registry = filter_registry().unwrap();
        let mut params =
            PaginationParams::from_query(&values, &registry, &PaginationLimits::default())
                .unwrap();
        table_config().unwrap().apply(&mut params);

        let clause = build_where_clause(&params);
        assert_eq!(
            clause.sql,
            " WHERE id_lokasi = $1 AND (nama ILIKE $2 OR penanggung_jawab ILIKE $3)"
        );
        assert!(matches!(clause.values[0], FilterScalar::Uuid(_)));
        assert!(matches!(
            params.filters[0].value,
            FilterValue::Scalar(FilterScalar::Uuid(_))
        ));
    }
}
