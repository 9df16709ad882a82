use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Values that do not fit an `Int` decode as absent instead of failing the record
    #[serde(
        default,
        deserialize_with = "deserialize_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<i32>,

    #[serde(
        default,
        deserialize_with = "super::id::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub company_id: Option<String>,
}

fn deserialize_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_int))
}

fn coerce_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Body of `POST /users`: only the name and age are sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub age: i32,
}

impl NewUser {
    pub fn new(first_name: String, age: i32) -> Self {
        Self { first_name, age }
    }
}

/// A field of a partial update.
///
/// `Unset` fields are left out of the request body, `Null` is sent as JSON `null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Patch<T> {
    #[default]
    Unset,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Value(v) => v.serialize(serializer),
            Patch::Unset | Patch::Null => serializer.serialize_none(),
        }
    }
}

/// Body of `PATCH /users/{id}`: the id plus every argument the caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub id: String,

    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub first_name: Patch<String>,

    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub age: Patch<i32>,

    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub company_id: Patch<String>,
}

impl UserPatch {
    pub fn new(id: String) -> Self {
        Self {
            id,
            first_name: Patch::Unset,
            age: Patch::Unset,
            company_id: Patch::Unset,
        }
    }
}
