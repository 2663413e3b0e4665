use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One upgrade entry as persisted. Only `id` and `purchased` drive restoration;
/// the rest is written for readability and for older readers. Like [`SaveData`],
/// a bad value in one field never discards the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveUpgrade {
    #[serde(deserialize_with = "lenient_u32")]
    pub id: u32,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub cost: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub base_cost: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub multiplier: f64,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub purchased: u32,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
}

/// The persisted blob. Every field defaults on its own when absent or mistyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveData {
    #[serde(deserialize_with = "lenient_f64")]
    pub points: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub click_multiplier: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub auto_points_per_second: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub prestige_points: u64,
    #[serde(deserialize_with = "lenient_upgrades")]
    pub upgrades: Vec<SaveUpgrade>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub last_active_time: Option<i64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_points_accumulated: f64,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .filter(|number| number.is_finite() && *number >= 0.0)
        .unwrap_or_default())
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if let Some(number) = value.as_u64() {
        return Ok(number);
    }
    Ok(value
        .as_f64()
        .filter(|number| number.is_finite() && *number >= 0.0)
        .map(|number| number.floor() as u64)
        .unwrap_or_default())
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let wide = lenient_u64(deserializer)?;
    Ok(u32::try_from(wide).unwrap_or(u32::MAX))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        _ => Ok(String::new()),
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if let Some(millis) = value.as_i64() {
        return Ok(Some(millis));
    }
    Ok(value
        .as_f64()
        .filter(|millis| millis.is_finite())
        .map(|millis| millis as i64))
}

fn lenient_upgrades<'de, D>(deserializer: D) -> Result<Vec<SaveUpgrade>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter(|entry| {
            entry
                .get("id")
                .and_then(Value::as_u64)
                .is_some_and(|id| u32::try_from(id).is_ok())
        })
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}
