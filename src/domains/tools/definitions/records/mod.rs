//! DNS record tools.
//!
//! - `list`: List records of a zone with optional type/name filters
//! - `get`: Show a single record
//! - `create`: Create a record
//! - `update`: Patch selected fields of a record
//! - `delete`: Delete a record
//!
//! All record tools accept an optional `zoneId` and fall back to the
//! configured default zone.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::{CreateDnsRecordParams, CreateDnsRecordTool};
pub use delete::{DeleteDnsRecordParams, DeleteDnsRecordTool};
pub use get::{GetDnsRecordParams, GetDnsRecordTool};
pub use list::{ListDnsRecordsParams, ListDnsRecordsTool};
pub use update::{UpdateDnsRecordParams, UpdateDnsRecordTool};
