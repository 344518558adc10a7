//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Zone tools live in `zones/`, record tools in `records/`, one file per tool.

pub mod common;
pub mod records;
pub mod zones;

pub use records::{
    CreateDnsRecordParams, CreateDnsRecordTool, DeleteDnsRecordParams, DeleteDnsRecordTool,
    GetDnsRecordParams, GetDnsRecordTool, ListDnsRecordsParams, ListDnsRecordsTool,
    UpdateDnsRecordParams, UpdateDnsRecordTool,
};
pub use zones::{GetZoneParams, GetZoneTool, ListZonesParams, ListZonesTool};
