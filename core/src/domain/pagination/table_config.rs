use std::sync::LazyLock;

use regex::Regex;

use super::errors::PaginationConfigError;
use super::value_objects::PaginationParams;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z_][a-z0-9_]*$").expect("valid identifier pattern")
});

pub(crate) fn check_identifier(column: &str) -> Result<String, PaginationConfigError> {
    if IDENTIFIER.is_match(column) {
        Ok(column.to_string())
    } else {
        Err(PaginationConfigError::InvalidIdentifier(column.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedSort {
    pub name: String,
    pub column: String,
}

/// Per-resource search columns and sort registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    query_cols: Vec<String>,
    sort_cols: Vec<AllowedSort>,
    default_sort: String,
    default_column: String,
}

impl TableConfig {
    /// Fails when a column is not a plain identifier or when
    /// `default_sort` is not one of the registered sort names.
    pub fn new(
        query_cols: &[&str],
        sort_cols: &[(&str, &str)],
        default_sort: &str,
    ) -> Result<Self, PaginationConfigError> {
        let query_cols = query_cols
            .iter()
            .map(|c| check_identifier(c))
            .collect::<Result<Vec<_>, _>>()?;

        let sort_cols = sort_cols
            .iter()
            .map(|(name, column)| {
                Ok(AllowedSort {
                    name: name.to_string(),
                    column: check_identifier(column)?,
                })
            })
            .collect::<Result<Vec<_>, PaginationConfigError>>()?;

        let default_column = sort_cols
            .iter()
            .find(|s| s.name == default_sort)
            .map(|s| s.column.clone())
            .ok_or_else(|| PaginationConfigError::UnmappedDefaultSort(default_sort.to_string()))?;

        Ok(Self {
            query_cols,
            sort_cols,
            default_sort: default_sort.to_string(),
            default_column,
        })
    }

    pub fn lookup_sort(&self, name: &str) -> Option<&str> {
        self.sort_cols
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.column.as_str())
    }

    /// Column for `name`, or the default sort column when unregistered.
    pub fn sort_column(&self, name: &str) -> &str {
        self.lookup_sort(name).unwrap_or(&self.default_column)
    }

    pub fn effective_sort_name<'a>(&'a self, name: &'a str) -> &'a str {
        if self.lookup_sort(name).is_some() {
            name
        } else {
            &self.default_sort
        }
    }

    /// Sets the search columns and replaces an unregistered sort name with
    /// the default one.
    pub fn apply(&self, params: &mut PaginationParams) {
        params.set_column_search(self.query_cols.iter().cloned());
        if self.lookup_sort(&params.sort_by).is_none() {
            params.sort_by = self.default_sort.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location_table() -> TableConfig {
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
        .unwrap()
    }

    #[test]
    fn test_sort_column_resolution() {
        let table = location_table();
        assert_eq!(table.sort_column("jumlah_ruangan"), "jumlah_ruangan");
        assert_eq!(table.sort_column(""), "tgl_dibuat");
        assert_eq!(table.sort_column("slug"), "tgl_dibuat");
        assert_eq!(table.effective_sort_name("slug"), "tgl_dibuat");
        assert_eq!(table.effective_sort_name("nama"), "nama");
    }

    #[test]
    fn test_unmapped_default_is_rejected() {
        let err = TableConfig::new(&["nama"], &[("nama", "nama")], "tgl_dibuat").unwrap_err();
        assert_eq!(
            err,
            PaginationConfigError::UnmappedDefaultSort("tgl_dibuat".to_string())
        );
    }

    #[test]
    fn test_non_identifier_column_is_rejected() {
        let err = TableConfig::new(&["nama; drop"], &[("nama", "nama")], "nama").unwrap_err();
        assert_eq!(
            err,
            PaginationConfigError::InvalidIdentifier("nama; drop".to_string())
        );
    }

    #[test]
    fn test_apply_sets_search_columns_and_default_sort() {
        let mut params = PaginationParams {
            sort_by: "unknown".to_string(),
            ..Default::default()
        };
        location_table().apply(&mut params);

        assert_eq!(params.query_cols, vec!["nama", "kode"]);
        assert_eq!(params.sort_by, "tgl_dibuat");
    }
}
