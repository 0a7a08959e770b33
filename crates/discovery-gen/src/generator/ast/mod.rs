pub mod types;


pub use types::{CHRONO_PATH, RustPrimitive, RustType, TypeShape};
