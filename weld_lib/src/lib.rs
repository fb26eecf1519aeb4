pub mod bundler;
pub mod parser;

#[cfg(any(target_family = "windows", target_family = "unix"))]
pub use bundler::OsSystemApi;
pub use bundler::{BundleError, BundlerEnv, ConstTable, SystemApi};
