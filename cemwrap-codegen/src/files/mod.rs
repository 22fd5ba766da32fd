//! Generators for the non-component files of the wrapper package.

mod package_json;
mod public_api;
mod register;
mod tsconfig;

pub use package_json::PackageJson;
pub use public_api::PublicApiTs;
pub use register::{REGISTER_FILE_NAME, RegisterTs};
pub use tsconfig::TsConfig;
