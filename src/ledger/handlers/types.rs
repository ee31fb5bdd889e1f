/**
 * Ledger Handler Types
 *
 * Request and response payloads for the list and item endpoints. Response
 * shapes mirror what clients of the original service expect: lists travel
 * inside a `list` envelope with their items nested, and the persisted
 * `src` column never leaves the server.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::items::Item;
use crate::ledger::lists::List;

/// Create/update list request body
///
/// The name is optional at the type level so that a missing key and a
/// blank value can be rejected with different messages.
#[derive(Deserialize, Debug)]
pub struct ListParams {
    pub name: Option<String>,
}

/// Create item request body
#[derive(Deserialize, Debug)]
pub struct ItemParams {
    pub name: Option<String>,
}

/// Item as it appears nested in list responses
#[derive(Serialize, Debug)]
pub struct ItemDetail {
    pub id: Uuid,
    pub name: String,
    pub finished_at: Option<DateTime<Utc>>,
}

impl From<Item> for ItemDetail {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            finished_at: item.finished_at,
        }
    }
}

/// A list with its items
#[derive(Serialize, Debug)]
pub struct ListDetail {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<ItemDetail>,
}

impl ListDetail {
    pub fn new(list: List, items: Vec<Item>) -> Self {
        Self {
            id: list.id,
            name: list.name,
            items: items.into_iter().map(ItemDetail::from).collect(),
        }
    }
}

/// `{"list": {...}}` envelope around a single list
#[derive(Serialize, Debug)]
pub struct ListEnvelope {
    pub list: ListDetail,
}

/// `{"lists": [...]}` response for the index endpoint
#[derive(Serialize, Debug)]
pub struct ListsResponse {
    pub lists: Vec<ListEnvelope>,
}

/// `{"id": ...}` response for creates
#[derive(Serialize, Debug)]
pub struct CreatedResponse {
    pub id: Uuid,
}

/// `{"list": {"id", "name"}}` response for renames
#[derive(Serialize, Debug)]
pub struct ListRenamedResponse {
    pub list: ListSummary,
}

/// List without its items
#[derive(Serialize, Debug)]
pub struct ListSummary {
    pub id: Uuid,
    pub name: String,
}

/// `{"finished_at": ...}` response for the finish toggle
#[derive(Serialize, Debug)]
pub struct FinishedResponse {
    pub finished_at: Option<DateTime<Utc>>,
}
