use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub venue_name: String,
    #[serde(default)]
    pub capacity: i64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub manager: String,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewVenue {
    pub venue_name: String,
    pub capacity: i64,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub manager: String,
}
