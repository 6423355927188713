use serde::{Deserialize, Deserializer, Serialize};

/// A persisted student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Create payload. Any client-supplied `id` is ignored; missing or `null`
/// fields fall back to zero values so validation can report them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewStudent {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub age: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize)]
pub struct CreatedStudent {
    pub id: i64,
}
