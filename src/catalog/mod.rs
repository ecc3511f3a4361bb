//! Catalog access layer: thin stateless wrappers over the external media-catalog REST API.
//! JSON documents are passed through verbatim; failures become [`CatalogResponse::Absent`].

mod client;
mod kind;
mod response;

pub use client::{CatalogClient, CatalogConfig};
pub use kind::{MediaKind, TimeWindow};
pub use response::CatalogResponse;
