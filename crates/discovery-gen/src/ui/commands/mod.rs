pub mod fields;
pub mod list;

pub use fields::{FieldsConfig, list_fields};
pub use list::list_schemas;
