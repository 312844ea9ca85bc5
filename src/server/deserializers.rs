use serde::{Deserialize, Deserializer};

// the quiz client sends `null` instead of leaving a field out, e.g. an empty
// `previous_questions` at the start of a round
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
