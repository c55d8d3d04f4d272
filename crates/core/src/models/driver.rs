use serde::{Deserialize, Serialize};

use super::Entity;
use crate::types::DriverId;

/// A delivery driver. Orders reference drivers through `Order::driver_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
}

impl Entity for Driver {
    type Id = DriverId;

    fn id(&self) -> DriverId {
        self.id
    }
}
