//! User records and creation payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use userdir_core::{Entity, UserId};

/// Caller-defined fields of a user. Opaque to the directory.
pub type Attributes = Map<String, Value>;

/// A stored user: directory-assigned `id` plus passthrough attributes.
///
/// On the wire the attributes sit next to `id`:
/// `{"id": 1, "name": "Alice", "email": "alice@example.com"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

/// Candidate payload for `UserDirectory::create`.
///
/// Must be a JSON object. Any `id` the caller sends is dropped; ids are
/// only ever minted by the directory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct NewUser {
    attributes: Attributes,
}

impl NewUser {
    pub(crate) fn into_user(mut self, id: UserId) -> User {
        self.attributes.remove("id");
        User {
            id,
            attributes: self.attributes,
        }
    }
}
