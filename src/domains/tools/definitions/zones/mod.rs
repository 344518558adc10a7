//! Zone tools.
//!
//! - `list`: List all zones visible to the API token
//! - `get`: Show the details of one zone

pub mod get;
pub mod list;

pub use get::{GetZoneParams, GetZoneTool};
pub use list::{ListZonesParams, ListZonesTool};
