//! Generation-1 request shapes: get, append and increment.
//!
//! These messages address a table by its bare qualifier plus a separate
//! `project_id` field.

/// Request message for GetRow.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRowRequest {
    /// Project that owns the table.
    #[prost(string, tag = "1")]
    pub project_id: ::prost::alloc::string::String,
    /// Bare table qualifier.
    #[prost(string, tag = "2")]
    pub table_name: ::prost::alloc::string::String,
    /// The key of the row to read.
    #[prost(bytes = "bytes", tag = "3")]
    pub row_key: ::prost::bytes::Bytes,
    /// Families to return. Empty means every family.
    #[prost(bytes = "bytes", repeated, tag = "4")]
    pub families: ::prost::alloc::vec::Vec<::prost::bytes::Bytes>,
    /// Maximum number of versions per column. Zero means the latest only.
    #[prost(int32, tag = "5")]
    pub max_versions: i32,
}

/// A single value to append to the end of an existing cell.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AppendCell {
    /// Family holding the cell.
    #[prost(bytes = "bytes", tag = "1")]
    pub family_name: ::prost::bytes::Bytes,
    /// Qualifier of the cell.
    #[prost(bytes = "bytes", tag = "2")]
    pub column_qualifier: ::prost::bytes::Bytes,
    /// Bytes appended to the latest value. A missing cell is treated as empty.
    #[prost(bytes = "bytes", tag = "3")]
    pub value: ::prost::bytes::Bytes,
}

/// Request message for AppendRow.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AppendRowRequest {
    /// Project that owns the table.
    #[prost(string, tag = "1")]
    pub project_id: ::prost::alloc::string::String,
    /// Bare table qualifier.
    #[prost(string, tag = "2")]
    pub table_name: ::prost::alloc::string::String,
    /// The key of the row to modify.
    #[prost(bytes = "bytes", tag = "3")]
    pub row_key: ::prost::bytes::Bytes,
    /// Appends applied in order.
    #[prost(message, repeated, tag = "4")]
    pub appends: ::prost::alloc::vec::Vec<AppendCell>,
}

/// A single counter increment.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IncrementCell {
    /// Family holding the counter.
    #[prost(bytes = "bytes", tag = "1")]
    pub family_name: ::prost::bytes::Bytes,
    /// Qualifier of the counter.
    #[prost(bytes = "bytes", tag = "2")]
    pub column_qualifier: ::prost::bytes::Bytes,
    /// Amount added to the big-endian 64-bit value. A missing cell counts as zero.
    #[prost(int64, tag = "3")]
    pub amount: i64,
}

/// Request message for IncrementRow.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IncrementRowRequest {
    /// Project that owns the table.
    #[prost(string, tag = "1")]
    pub project_id: ::prost::alloc::string::String,
    /// Bare table qualifier.
    #[prost(string, tag = "2")]
    pub table_name: ::prost::alloc::string::String,
    /// The key of the row to modify.
    #[prost(bytes = "bytes", tag = "3")]
    pub row_key: ::prost::bytes::Bytes,
    /// Increments applied in order.
    #[prost(message, repeated, tag = "4")]
    pub increments: ::prost::alloc::vec::Vec<IncrementCell>,
}
