//! Store asset messages.

use serde::{Deserialize, Serialize};

/// A kind of asset at a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreAssetType {
    /// A service bay.
    ServiceBay,
}

/// What happened to a store asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreAssetEventAction {
    /// The asset was created.
    Added,
    /// The asset was removed.
    Deleted,
    /// The asset's opening hours changed.
    HoursUpdated,
}

/// A change to one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetEvent {
    /// The asset identifier.
    pub id: String,
    /// The asset kind.
    #[serde(rename = "type")]
    pub asset_type: StoreAssetType,
    /// The change applied.
    pub action: StoreAssetEventAction,
}

/// Emitted when one or more assets at a store have been updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetUpdatedMessage {
    /// Correlation id of the originating change.
    pub andgo_correlation_id: String,
    /// The store owning the assets.
    pub store_id: String,
    /// The user who made the change.
    pub user_id: String,
    /// The fleet context of the change.
    pub fleet_id: String,
    /// Changed assets, in order.
    pub assets: Vec<AssetEvent>,
}
