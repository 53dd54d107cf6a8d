#![deny(missing_docs)]
//! Translation of legacy tabular-client row operations into backend request
//! messages.
//!
//! A caller builds a [`RowMutation`] (or one of the other logical request
//! shapes), and a [`RequestBuilder`] bound to a [`TableAddress`] turns it into
//! a fully stamped protobuf message. Nothing here performs I/O; the produced
//! [`Envelope`] is handed to whatever transport the application uses.
//!
//! ```
//! use std::sync::Arc;
//!
//! use bigtable_adapter::{RequestBuilder, RowMutation, TableAddress};
//!
//! let address = Arc::new(TableAddress::new("events", "acme", "us-east1-b", "main"));
//! let builder = RequestBuilder::new(address);
//!
//! let request = builder
//!     .mutate(&RowMutation::new("rk-1").set_at("f", "q", 2, "v1"))
//!     .unwrap();
//! assert_eq!(request.mutations.len(), 1);
//! assert_eq!(
//!     request.table_name,
//!     "projects/acme/zones/us-east1-b/clusters/main/tables/events"
//! );
//! ```

mod observability;

/// Table coordinates and their textual renderings.
pub mod address;

/// Cell operations and timestamp normalization.
pub mod cell;

mod error;

/// RE2 row filters used by checked mutations.
pub mod filter;

/// Table and project stamping.
pub mod metadata;

/// Row mutation adapter.
pub mod mutation;

mod option;

/// Backend wire messages.
pub mod proto;

/// Request envelope builders.
pub mod request;

/// Timestamp units.
pub mod timestamp;

pub use crate::{
    address::TableAddress,
    cell::{normalize, CanonicalCell, CellKind, CellOp, DeleteScope},
    error::{AdapterError, Result},
    metadata::{stamp, ApiGeneration, StampTarget},
    mutation::{adapt, RowMutation},
    option::ClusterOptions,
    request::{CheckAndMutate, Envelope, RequestBuilder, RowAppend, RowGet, RowIncrement},
    timestamp::TimestampMicros,
};
