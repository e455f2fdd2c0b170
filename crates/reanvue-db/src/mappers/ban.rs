//! Ban entity <-> model mapper

use reanvue_core::entities::UserBan;

use crate::models::BanModel;

impl From<BanModel> for UserBan {
    fn from(model: BanModel) -> Self {
        UserBan {
            user_id: model.user_id,
            banned_by: model.banned_by,
            reason: model.reason,
            created_at: model.created_at,
        }
    }
}
