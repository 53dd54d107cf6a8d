//! Generation-2 ("v1") request shapes: mutate and check-and-mutate.
//!
//! These messages address a table through a single fully qualified
//! `table_name` of the form `projects/<p>/zones/<z>/clusters/<c>/tables/<t>`.
//! Family names are carried as raw bytes; on the wire they are
//! indistinguishable from the protocol's `string` fields.

/// Specifies a contiguous range of microsecond timestamps.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimestampRange {
    /// Inclusive lower bound. If left empty, interpreted as 0.
    #[prost(int64, tag = "1")]
    pub start_timestamp_micros: i64,
    /// Exclusive upper bound. If left empty, interpreted as infinity.
    #[prost(int64, tag = "2")]
    pub end_timestamp_micros: i64,
}

/// Specifies a particular change to be made to the contents of a row.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Mutation {
    /// Which of the possible Mutation types to apply.
    #[prost(oneof = "mutation::Mutation", tags = "1, 2, 3, 4")]
    pub mutation: ::core::option::Option<mutation::Mutation>,
}

/// Nested message and enum types in `Mutation`.
pub mod mutation {
    /// A Mutation which sets the value of the specified cell.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SetCell {
        /// The name of the family into which new data should be written.
        #[prost(bytes = "bytes", tag = "1")]
        pub family_name: ::prost::bytes::Bytes,
        /// The qualifier of the column into which new data should be written.
        /// Can be any byte string, including the empty string.
        #[prost(bytes = "bytes", tag = "2")]
        pub column_qualifier: ::prost::bytes::Bytes,
        /// The timestamp of the cell into which new data should be written.
        /// Zero asks the server to assign the timestamp when the mutation is
        /// applied.
        #[prost(int64, tag = "3")]
        pub timestamp_micros: i64,
        /// The value to be written into the specified cell.
        #[prost(bytes = "bytes", tag = "4")]
        pub value: ::prost::bytes::Bytes,
    }

    /// A Mutation which deletes cells from the specified column, optionally
    /// restricting the deletions to a given timestamp range.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DeleteFromColumn {
        /// The name of the family from which cells should be deleted.
        #[prost(bytes = "bytes", tag = "1")]
        pub family_name: ::prost::bytes::Bytes,
        /// The qualifier of the column from which cells should be deleted.
        /// Can be any byte string, including the empty string.
        #[prost(bytes = "bytes", tag = "2")]
        pub column_qualifier: ::prost::bytes::Bytes,
        /// The range of timestamps within which cells should be deleted.
        #[prost(message, optional, tag = "3")]
        pub time_range: ::core::option::Option<super::TimestampRange>,
    }

    /// A Mutation which deletes all cells from the specified column family.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DeleteFromFamily {
        /// The name of the family from which cells should be deleted.
        #[prost(bytes = "bytes", tag = "1")]
        pub family_name: ::prost::bytes::Bytes,
    }

    /// A Mutation which deletes all cells from the containing row.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DeleteFromRow {}

    /// Which of the possible Mutation types to apply.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Mutation {
        /// Set a cell's value.
        #[prost(message, tag = "1")]
        SetCell(SetCell),
        /// Deletes cells from a column.
        #[prost(message, tag = "2")]
        DeleteFromColumn(DeleteFromColumn),
        /// Deletes cells from a column family.
        #[prost(message, tag = "3")]
        DeleteFromFamily(DeleteFromFamily),
        /// Deletes cells from the entire row.
        #[prost(message, tag = "4")]
        DeleteFromRow(DeleteFromRow),
    }
}

/// Takes a row as input and produces an alternate view of the row based on
/// specified rules.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RowFilter {
    /// Which of the possible RowFilter types to apply.
    #[prost(oneof = "row_filter::Filter", tags = "1, 5, 6, 9, 12")]
    pub filter: ::core::option::Option<row_filter::Filter>,
}

/// Nested message and enum types in `RowFilter`.
pub mod row_filter {
    /// A RowFilter which sends rows through several RowFilters in sequence.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Chain {
        /// The elements of "filters" are chained together to process the input
        /// row, each filter seeing the output of the one before it.
        #[prost(message, repeated, tag = "1")]
        pub filters: ::prost::alloc::vec::Vec<super::RowFilter>,
    }

    /// Which of the possible RowFilter types to apply.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Filter {
        /// Applies several RowFilters to the data in sequence.
        #[prost(message, tag = "1")]
        Chain(Chain),
        /// Matches only cells from columns whose families satisfy the given
        /// RE2 regex.
        #[prost(bytes, tag = "5")]
        FamilyNameRegexFilter(::prost::alloc::vec::Vec<u8>),
        /// Matches only cells from columns whose qualifiers satisfy the given
        /// RE2 regex.
        #[prost(bytes, tag = "6")]
        ColumnQualifierRegexFilter(::prost::alloc::vec::Vec<u8>),
        /// Matches only cells with values that satisfy the given RE2 regex.
        #[prost(bytes, tag = "9")]
        ValueRegexFilter(::prost::alloc::vec::Vec<u8>),
        /// Matches only the most recent `N` cells within each column.
        #[prost(int32, tag = "12")]
        CellsPerColumnLimitFilter(i32),
    }
}

/// Request message for MutateRow.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MutateRowRequest {
    /// The unique name of the table to which the mutation should be applied.
    #[prost(string, tag = "1")]
    pub table_name: ::prost::alloc::string::String,
    /// The key of the row to which the mutation should be applied.
    #[prost(bytes = "bytes", tag = "2")]
    pub row_key: ::prost::bytes::Bytes,
    /// Changes to be atomically applied to the specified row. Entries are
    /// applied in order, meaning that earlier mutations can be masked by later
    /// ones. Must contain at least one entry.
    #[prost(message, repeated, tag = "3")]
    pub mutations: ::prost::alloc::vec::Vec<Mutation>,
}

/// Request message for CheckAndMutateRow.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckAndMutateRowRequest {
    /// The unique name of the table to which the conditional mutation should be
    /// applied.
    #[prost(string, tag = "1")]
    pub table_name: ::prost::alloc::string::String,
    /// The key of the row to which the conditional mutation should be applied.
    #[prost(bytes = "bytes", tag = "2")]
    pub row_key: ::prost::bytes::Bytes,
    /// The filter to be applied to the contents of the specified row. Depending
    /// on whether or not any results are yielded, either `true_mutations` or
    /// `false_mutations` will be executed.
    #[prost(message, optional, tag = "6")]
    pub predicate_filter: ::core::option::Option<RowFilter>,
    /// Changes applied when `predicate_filter` yields at least one cell.
    #[prost(message, repeated, tag = "4")]
    pub true_mutations: ::prost::alloc::vec::Vec<Mutation>,
    /// Changes applied when `predicate_filter` yields no cells.
    #[prost(message, repeated, tag = "5")]
    pub false_mutations: ::prost::alloc::vec::Vec<Mutation>,
}
