pub mod parsed_path;
pub mod validated_json;

pub use parsed_path::ParsedPath;
pub use validated_json::{JsonBody, ValidatedJson};
