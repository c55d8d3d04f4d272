use serde::{Deserialize, Serialize};

use super::Entity;
use crate::types::ToppingId;

/// A topping that can be put on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topping {
    pub id: ToppingId,
    pub name: String,
}

impl Entity for Topping {
    type Id = ToppingId;

    fn id(&self) -> ToppingId {
        self.id
    }
}
