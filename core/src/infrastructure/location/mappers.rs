use chrono::{TimeZone, Utc};

use crate::domain::location::entities::Location;
use crate::entity::lokasi::Model as LokasiModel;

impl From<LokasiModel> for Location {
    fn from(model: LokasiModel) -> Self {
        Location {
            id: model.id,
            code: model.kode,
            name: model.nama,
            room_count: model.jumlah_ruangan,
            slug: model.slug,
            created_at: Utc.from_utc_datetime(&model.tgl_dibuat),
            updated_at: Utc.from_utc_datetime(&model.tgl_update),
        }
    }
}
