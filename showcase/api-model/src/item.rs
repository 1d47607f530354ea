use serde::{Deserialize, Serialize};
use showcase_common_model::item::ItemInfo;

use crate::ReplyStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDeletedReply {
	pub status: ReplyStatus,
	pub message: String,
	pub item: ItemInfo,
}
