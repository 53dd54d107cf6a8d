//! Backend wire messages.
//!
//! The backend grew two request-addressing conventions: [`legacy`] shapes carry
//! a bare table qualifier plus a project id, [`v1`] shapes carry one fully
//! qualified table path.

pub mod legacy;
pub mod v1;
