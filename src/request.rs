//! Request envelope construction, one entry point per backend request shape.
//!
//! Every builder method returns a new, fully stamped message; nothing is
//! shared between calls apart from the read-only [`TableAddress`].

use std::{num::NonZeroU16, sync::Arc};

use bytes::Bytes;
use prost::Message;

use crate::{
    address::TableAddress,
    error::{AdapterError, Result},
    filter::latest_cell_predicate,
    metadata::{stamp, ApiGeneration},
    mutation::{adapt, adapt_entries, RowMutation},
    observability::log_warn,
    proto::{
        legacy::{AppendCell, AppendRowRequest, GetRowRequest, IncrementCell, IncrementRowRequest},
        v1::{CheckAndMutateRowRequest, MutateRowRequest},
    },
};

/// Read of a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGet {
    row_key: Bytes,
    families: Vec<Bytes>,
    max_versions: Option<NonZeroU16>,
}

impl RowGet {
    /// Read the latest version of every family of `row_key`.
    pub fn new(row_key: impl Into<Bytes>) -> Self {
        Self {
            row_key: row_key.into(),
            families: Vec::new(),
            max_versions: None,
        }
    }

    /// Restrict the read to `family`. May be called repeatedly.
    pub fn family(mut self, family: impl Into<Bytes>) -> Self {
        self.families.push(family.into());
        self
    }

    /// Return up to `max_versions` versions per column.
    ///
    /// Without a limit the backend returns the latest version only.
    pub fn max_versions(self, max_versions: NonZeroU16) -> Self {
        RowGet {
            max_versions: Some(max_versions),
            ..self
        }
    }

    /// Row key.
    pub fn row_key(&self) -> &Bytes {
        &self.row_key
    }
}

/// Appends to one or more cells of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowAppend {
    row_key: Bytes,
    cells: Vec<AppendCell>,
}

impl RowAppend {
    /// Start an empty append for `row_key`.
    pub fn new(row_key: impl Into<Bytes>) -> Self {
        Self {
            row_key: row_key.into(),
            cells: Vec::new(),
        }
    }

    /// Append `value` to `family:qualifier`.
    pub fn add(
        mut self,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Self {
        self.cells.push(AppendCell {
            family_name: family.into(),
            column_qualifier: qualifier.into(),
            value: value.into(),
        });
        self
    }
}

/// Counter increments on one or more cells of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowIncrement {
    row_key: Bytes,
    cells: Vec<IncrementCell>,
}

impl RowIncrement {
    /// Start an empty increment for `row_key`.
    pub fn new(row_key: impl Into<Bytes>) -> Self {
        Self {
            row_key: row_key.into(),
            cells: Vec::new(),
        }
    }

    /// Add `amount` to the counter at `family:qualifier`.
    pub fn add(
        mut self,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        amount: i64,
    ) -> Self {
        self.cells.push(IncrementCell {
            family_name: family.into(),
            column_qualifier: qualifier.into(),
            amount,
        });
        self
    }
}

/// Mutation applied only when the latest value of one cell matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckAndMutate {
    row_key: Bytes,
    family: Bytes,
    qualifier: Bytes,
    expected: Option<Bytes>,
    mutation: RowMutation,
}

impl CheckAndMutate {
    /// Apply `mutation` if the latest value of `family:qualifier` equals
    /// `expected`, or, when `expected` is `None`, if the cell does not exist.
    pub fn new(
        row_key: impl Into<Bytes>,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        expected: Option<Bytes>,
        mutation: RowMutation,
    ) -> Self {
        Self {
            row_key: row_key.into(),
            family: family.into(),
            qualifier: qualifier.into(),
            expected,
            mutation,
        }
    }
}

/// Stamped request ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// Row read.
    Get(GetRowRequest),
    /// Append to existing cells.
    Append(AppendRowRequest),
    /// Counter increment.
    Increment(IncrementRowRequest),
    /// Unconditional row mutation.
    Mutate(MutateRowRequest),
    /// Conditional row mutation.
    CheckAndMutate(CheckAndMutateRowRequest),
}

impl Envelope {
    /// Addressing convention of the wrapped message.
    pub fn generation(&self) -> ApiGeneration {
        match self {
            Envelope::Get(_) | Envelope::Append(_) | Envelope::Increment(_) => {
                ApiGeneration::Legacy
            }
            Envelope::Mutate(_) | Envelope::CheckAndMutate(_) => ApiGeneration::V1,
        }
    }

    /// Stamped table name.
    pub fn table_name(&self) -> &str {
        match self {
            Envelope::Get(request) => request.table_name.as_str(),
            Envelope::Append(request) => request.table_name.as_str(),
            Envelope::Increment(request) => request.table_name.as_str(),
            Envelope::Mutate(request) => request.table_name.as_str(),
            Envelope::CheckAndMutate(request) => request.table_name.as_str(),
        }
    }

    /// Stamped project id, present on generation-1 shapes only.
    pub fn project_id(&self) -> Option<&str> {
        match self {
            Envelope::Get(request) => Some(request.project_id.as_str()),
            Envelope::Append(request) => Some(request.project_id.as_str()),
            Envelope::Increment(request) => Some(request.project_id.as_str()),
            Envelope::Mutate(_) | Envelope::CheckAndMutate(_) => None,
        }
    }

    /// Target row key.
    pub fn row_key(&self) -> &Bytes {
        match self {
            Envelope::Get(request) => &request.row_key,
            Envelope::Append(request) => &request.row_key,
            Envelope::Increment(request) => &request.row_key,
            Envelope::Mutate(request) => &request.row_key,
            Envelope::CheckAndMutate(request) => &request.row_key,
        }
    }

    /// Protobuf encoding of the wrapped message.
    pub fn encode_to_vec(&self) -> Vec<u8> {
        match self {
            Envelope::Get(request) => request.encode_to_vec(),
            Envelope::Append(request) => request.encode_to_vec(),
            Envelope::Increment(request) => request.encode_to_vec(),
            Envelope::Mutate(request) => request.encode_to_vec(),
            Envelope::CheckAndMutate(request) => request.encode_to_vec(),
        }
    }
}

macro_rules! impl_envelope_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Envelope {
                fn from(request: $ty) -> Self {
                    Envelope::$variant(request)
                }
            }
        )*
    };
}

impl_envelope_from!(
    Get => GetRowRequest,
    Append => AppendRowRequest,
    Increment => IncrementRowRequest,
    Mutate => MutateRowRequest,
    CheckAndMutate => CheckAndMutateRowRequest,
);

/// Builds stamped requests for one table.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    address: Arc<TableAddress>,
}

impl RequestBuilder {
    /// Builder for the table at `address`.
    pub fn new(address: Arc<TableAddress>) -> Self {
        Self { address }
    }

    /// Table every request is addressed to.
    pub fn address(&self) -> &Arc<TableAddress> {
        &self.address
    }

    /// Build a row read.
    pub fn get(&self, get: &RowGet) -> GetRowRequest {
        let mut request = GetRowRequest {
            row_key: get.row_key.clone(),
            families: get.families.clone(),
            max_versions: get
                .max_versions
                .map_or(0, |versions| i32::from(versions.get())),
            ..Default::default()
        };
        stamp(&self.address, &mut request);
        request
    }

    /// Build an append. Fails when no cell is appended to.
    pub fn append(&self, append: &RowAppend) -> Result<AppendRowRequest> {
        if append.cells.is_empty() {
            return Err(rejected("append", "no cells in row append"));
        }
        let mut request = AppendRowRequest {
            row_key: append.row_key.clone(),
            appends: append.cells.clone(),
            ..Default::default()
        };
        stamp(&self.address, &mut request);
        Ok(request)
    }

    /// Build an increment. Fails when no counter is incremented.
    pub fn increment(&self, increment: &RowIncrement) -> Result<IncrementRowRequest> {
        if increment.cells.is_empty() {
            return Err(rejected("increment", "no cells in row increment"));
        }
        let mut request = IncrementRowRequest {
            row_key: increment.row_key.clone(),
            increments: increment.cells.clone(),
            ..Default::default()
        };
        stamp(&self.address, &mut request);
        Ok(request)
    }

    /// Build an unconditional mutation. Fails when `row` is empty.
    pub fn mutate(&self, row: &RowMutation) -> Result<MutateRowRequest> {
        let mut request = adapt(row)?;
        stamp(&self.address, &mut request);
        Ok(request)
    }

    /// Build a conditional mutation.
    ///
    /// Fails when the mutation is empty or targets another row than the check.
    pub fn check_and_mutate(&self, check: &CheckAndMutate) -> Result<CheckAndMutateRowRequest> {
        if check.mutation.row_key() != &check.row_key {
            return Err(rejected(
                "check_and_mutate",
                "mutation row must match the checked row",
            ));
        }
        let mutations = adapt_entries(&check.mutation)?;
        let predicate = latest_cell_predicate(
            &check.family,
            &check.qualifier,
            check.expected.as_deref(),
        );

        let (true_mutations, false_mutations) = match check.expected {
            Some(_) => (mutations, Vec::new()),
            None => (Vec::new(), mutations),
        };
        let mut request = CheckAndMutateRowRequest {
            row_key: check.row_key.clone(),
            predicate_filter: Some(predicate),
            true_mutations,
            false_mutations,
            ..Default::default()
        };
        stamp(&self.address, &mut request);
        Ok(request)
    }
}

fn rejected(operation: &'static str, reason: &'static str) -> AdapterError {
    log_warn!(
        component = "request",
        event = "request_rejected",
        operation,
        reason,
    );
    AdapterError::invalid_argument(reason)
}
