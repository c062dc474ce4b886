use chrono::{TimeZone, Utc};

use crate::domain::room::entities::Room;
use crate::entity::ruangan::Model as RuanganModel;

impl From<RuanganModel> for Room {
    fn from(model: RuanganModel) -> Self {
        Room {
            id: model.id,
            location_id: model.id_lokasi,
            name: model.nama,
            manager: model.penanggung_jawab,
            item_count: model.jumlah_barang,
            slug: model.slug,
            created_at: Utc.from_utc_datetime(&model.tgl_dibuat),
            updated_at: Utc.from_utc_datetime(&model.tgl_update),
        }
    }
}
