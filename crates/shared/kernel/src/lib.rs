//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it holds the collaborator ports the slices consume,
//! the layered config loader and the portal-style helpers for request parameters
//! and HTML output.
//!
//! ## Request parameters
//! ```rust
//! use wadm_kernel::params::RequestParams;
//!
//! let params = RequestParams::from_query("orderByCol=workflow&saveOrderBy=yes&delta=%2050");
//! assert_eq!(params.get_string("orderByCol"), "workflow");
//! assert!(params.get_bool("saveOrderBy", false));
//! assert_eq!(params.get_int("delta", 20), 50);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use wadm_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config(Some("settings.toml")).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod html;
pub mod params;
pub mod ports;

pub use error::{PortError, PortErrorExt, format_context};
pub use wadm_domain as domain;
