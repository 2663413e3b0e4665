mod bridge;
mod codec;
mod model;
mod store;

pub use bridge::{RestoreSummary, apply_save_data, save_data_from_engine};
pub use codec::{export_to_base64, import_from_base64, load_from_json_string, save_to_json_string};
pub use model::{SaveData, SaveUpgrade};
pub use store::{BlobStore, FileStore, MemoryStore};
