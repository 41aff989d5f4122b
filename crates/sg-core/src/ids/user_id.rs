use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Backend-assigned identifier of the signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl_id!(UserId);
