mod bundler_env;
pub mod consts_table;
pub mod error;

#[cfg(any(target_family = "windows", target_family = "unix"))]
pub use bundler_env::OsSystemApi;
pub use bundler_env::{BundlerEnv, SystemApi};
pub use consts_table::ConstTable;
pub use error::BundleError;
