use showcase_common_model::item::{ItemInfo, NewItem};
use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tokio::sync::RwLock;
use tracing::info;

use crate::Result;

/// Process-lifetime ordered list of items.
///
/// The ID of an item is always its 1-based position in the list.
#[derive(Debug, Default)]
pub struct ItemStore {
	items: RwLock<Vec<ItemInfo>>,
}

impl ItemStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn list(&self) -> Vec<ItemInfo> {
		self.items.read().await.clone()
	}

	/// Appends a new item, stamping it with the current time.
	pub async fn create(&self, item: NewItem) -> Result<ItemInfo> {
		let created_at = OffsetDateTime::now_utc()
			.format(&Rfc3339)
			.map_err(ItemError::from)?;
		let mut items = self.items.write().await;
		let item = ItemInfo {
			id: items.len() as u32 + 1,
			name: item.name,
			description: item.description,
			created_at,
		};
		items.push(item.clone());
		info!(id = item.id, name = item.name.as_str(), "created item");
		Ok(item)
	}

	pub async fn get(&self, id: i64) -> Option<ItemInfo> {
		let items = self.items.read().await;
		position(id, items.len()).map(|index| items[index].clone())
	}

	/// Removes an item, shifting the IDs of all following items down by one.
	pub async fn delete(&self, id: i64) -> Option<ItemInfo> {
		let mut items = self.items.write().await;
		let index = position(id, items.len())?;
		let deleted = items.remove(index);
		for (index, item) in items.iter_mut().enumerate().skip(index) {
			item.id = index as u32 + 1;
		}
		info!(id, name = deleted.name.as_str(), "deleted item");
		Some(deleted)
	}
}

/// Index of the item with the given ID. Any ID outside `1..=len` has none.
fn position(id: i64, len: usize) -> Option<usize> {
	usize::try_from(id)
		.ok()?
		.checked_sub(1)
		.filter(|index| *index < len)
}

#[derive(Debug, Error)]
pub enum ItemError {
	#[error("failed to format creation time: {0}")]
	TimeFormat(#[from] time::error::Format),
}
