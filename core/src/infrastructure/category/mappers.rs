use chrono::{TimeZone, Utc};

use crate::domain::category::entities::Category;
use crate::entity::kategori::Model as KategoriModel;

impl From<KategoriModel> for Category {
    fn from(model: KategoriModel) -> Self {
        Category {
            id: model.id,
            code: model.kode,
            name: model.nama,
            created_at: Utc.from_utc_datetime(&model.tgl_dibuat),
            updated_at: Utc.from_utc_datetime(&model.tgl_update),
        }
    }
}
