use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the `GET users` listing.
///
/// Field names follow the wire format except `catch_phrase`, which is
/// `catchPhrase` on the wire. Text fields that are missing or `null` decode
/// as empty strings, so one incomplete entry does not reject the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar: String,
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "catchPhrase")]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub geo: Geo,
}

/// Coordinates arrive as strings (`"-37.3159"`), so they stay strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
}

impl Post {
    /// Handle shown next to the display name, e.g. `@Bret`.
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
