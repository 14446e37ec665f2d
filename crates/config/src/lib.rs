//! Settings schema, values and file layer for `siteconf`.
//!
//! [`RawSettings`] is what a settings file says; [`ConfigurationSet`] is what the external
//! generator receives once every name is recognized and every value checked.

mod check;
mod error;
mod file;
mod key;
mod pattern;
mod settings;
mod value;

pub mod path;

pub use self::check::*;
pub use self::error::*;
pub use self::file::*;
pub use self::key::*;
pub use self::pattern::*;
pub use self::settings::*;
pub use self::value::*;

pub type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
