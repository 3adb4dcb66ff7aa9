//! Configuration loading and resolution.
//!
//! `load` layers the default config files, `--config` files, `ISEARCHR__*`
//! environment variables, and CLI overrides, then validates the result into a
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
pub(crate) use sources::default_config_files;
