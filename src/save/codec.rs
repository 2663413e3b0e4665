use anyhow::{Context, Result, ensure};
use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::SaveData;

pub fn save_to_json_string(save_data: &SaveData) -> Result<String> {
    serde_json::to_string(save_data).context("failed to serialize idle clicker save")
}

/// Parses a stored blob. Fields are tolerant on their own (see [`SaveData`]),
/// so only a blank or unparseable blob is an error.
pub fn load_from_json_string(json: &str) -> Result<SaveData> {
    ensure!(!json.trim().is_empty(), "save blob is empty");
    serde_json::from_str(json).context("save blob is not valid save JSON")
}

/// Portable form of a save, for moving a game between machines.
pub fn export_to_base64(save_data: &SaveData) -> Result<String> {
    save_to_json_string(save_data).map(|json| STANDARD.encode(json))
}

/// Accepts exported text as pasted, including line breaks and indentation
/// picked up along the way.
pub fn import_from_base64(encoded: &str) -> Result<SaveData> {
    let compact: String = encoded.split_whitespace().collect();
    ensure!(!compact.is_empty(), "exported save is empty");
    let raw = STANDARD
        .decode(compact)
        .context("exported save is not valid base64")?;
    let json = std::str::from_utf8(&raw).context("exported save does not decode to text")?;
    load_from_json_string(json)
}
