//! Direct message entity <-> model mapper

use reanvue_core::entities::DirectMessage;

use crate::models::DirectMessageModel;

impl From<DirectMessageModel> for DirectMessage {
    fn from(model: DirectMessageModel) -> Self {
        DirectMessage {
            id: model.id,
            sender_id: model.sender_id,
            recipient_id: model.recipient_id,
            content: model.content,
            created_at: model.created_at,
        }
    }
}
