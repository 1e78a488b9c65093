//! Esptag MCP tool surface.
//!
//! Schemas, dispatch, and report rendering live in separate submodules; each tool has one
//! dispatch function under `dispatch::router`.

pub(crate) mod catalog;
mod dispatch;
mod render;
mod report;
mod schemas;

pub use dispatch::EsptagService;
