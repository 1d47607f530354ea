use serde::{Deserialize, Serialize};

/// An entry of the in-memory item list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemInfo {
	/// 1-based position of the item in the list.
	///
	/// IDs are re-assigned when an earlier item is deleted.
	pub id: u32,
	pub name: String,
	pub description: Option<String>,
	/// Creation time, RFC 3339.
	pub created_at: String,
}

/// Request body for creating an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewItem {
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_missing_description() {
		let item: NewItem = serde_json::from_str(r#"{"name":"a"}"#).unwrap();
		assert_eq!(
			item,
			NewItem {
				name: "a".to_string(),
				description: None,
			}
		);
	}

	#[test]
	fn test_serialize_null_description() {
		let item = ItemInfo {
			id: 1,
			name: "a".to_string(),
			description: None,
			created_at: "2025-01-01T00:00:00Z".to_string(),
		};
		assert_eq!(
			serde_json::to_value(&item).unwrap()["description"],
			serde_json::Value::Null
		);
	}
}
