use serde::{Deserialize, Serialize};

/// Optional flat-priced extras that can be added to any stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum AddOnKey {
    #[serde(rename = "sunsetCruise")]
    SunsetCruise,
    #[serde(rename = "spaCredit")]
    SpaCredit,
    #[serde(rename = "waterSports")]
    WaterSports,
}

impl AddOnKey {
    pub const ALL: [AddOnKey; 3] = [
        AddOnKey::SunsetCruise,
        AddOnKey::SpaCredit,
        AddOnKey::WaterSports,
    ];

    /// Returns `None` for anything outside the closed key set.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "sunsetCruise" => Some(AddOnKey::SunsetCruise),
            "spaCredit" => Some(AddOnKey::SpaCredit),
            "waterSports" => Some(AddOnKey::WaterSports),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddOnKey::SunsetCruise => "sunsetCruise",
            AddOnKey::SpaCredit => "spaCredit",
            AddOnKey::WaterSports => "waterSports",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddOnKey::SunsetCruise => "Sunset Cruise",
            AddOnKey::SpaCredit => "Spa Credit",
            AddOnKey::WaterSports => "Water Sports",
        }
    }

    /// Flat price in whole USD.
    pub fn flat_price(&self) -> u64 {
        match self {
            AddOnKey::SunsetCruise => 60,
            AddOnKey::SpaCredit => 80,
            AddOnKey::WaterSports => 50,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub key: AddOnKey,
    pub label: &'static str,
    pub flat_price: u64,
}

impl From<AddOnKey> for AddOn {
    fn from(key: AddOnKey) -> Self {
        Self {
            key,
            label: key.label(),
            flat_price: key.flat_price(),
        }
    }
}
