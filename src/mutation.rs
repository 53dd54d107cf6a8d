//! Row mutations and their translation into backend mutation entries.

use std::fmt;

use bytes::Bytes;

use crate::{
    cell::{normalize, CanonicalCell, CellKind, CellOp, DeleteScope},
    error::{AdapterError, Result},
    observability::{log_debug, log_warn},
    proto::v1::{
        mutation::{self, DeleteFromColumn, DeleteFromFamily, DeleteFromRow, SetCell},
        MutateRowRequest, Mutation, TimestampRange,
    },
    timestamp::MICROS_PER_MILLI,
};

/// Ordered batch of cell operations against a single row, applied atomically.
#[derive(Clone, PartialEq, Eq)]
pub struct RowMutation {
    row_key: Bytes,
    cells: Vec<CellOp>,
}

impl RowMutation {
    /// Start an empty mutation for `row_key`.
    pub fn new(row_key: impl Into<Bytes>) -> Self {
        Self {
            row_key: row_key.into(),
            cells: Vec::new(),
        }
    }

    /// Append a cell operation. Operations keep their insertion order.
    pub fn push(&mut self, op: CellOp) -> &mut Self {
        self.cells.push(op);
        self
    }

    /// Builder-style [`RowMutation::push`].
    pub fn with(mut self, op: CellOp) -> Self {
        self.cells.push(op);
        self
    }

    /// Write `value` with a server-assigned timestamp.
    pub fn set(
        self,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Self {
        self.with(CellOp::set(family, qualifier, value))
    }

    /// Write `value` at an explicit millisecond timestamp.
    pub fn set_at(
        self,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        timestamp_millis: i64,
        value: impl Into<Bytes>,
    ) -> Self {
        self.with(CellOp::set_at(family, qualifier, timestamp_millis, value))
    }

    /// Row key.
    pub fn row_key(&self) -> &Bytes {
        &self.row_key
    }

    /// Cell operations in insertion order.
    pub fn cells(&self) -> &[CellOp] {
        &self.cells
    }

    /// Whether no cell operation has been added.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cell operations.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

impl fmt::Debug for RowMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowMutation")
            .field("row_key_len", &self.row_key.len())
            .field("cells", &self.cells.len())
            .finish()
    }
}

/// Translate a row mutation into an unstamped [`MutateRowRequest`].
///
/// The row key is copied verbatim and every cell operation yields exactly one
/// entry, in input order. Fails with [`AdapterError::InvalidArgument`] when the
/// mutation carries no cell operations.
pub fn adapt(row: &RowMutation) -> Result<MutateRowRequest> {
    let mutations = adapt_entries(row)?;
    log_debug!(
        component = "mutation",
        event = "mutation_adapted",
        row_key_len = row.row_key.len(),
        entries = mutations.len(),
    );

    Ok(MutateRowRequest {
        table_name: String::new(),
        row_key: row.row_key.clone(),
        mutations,
    })
}

/// Translate the cell operations of `row` into backend mutation entries.
pub fn adapt_entries(row: &RowMutation) -> Result<Vec<Mutation>> {
    if row.cells.is_empty() {
        log_warn!(
            component = "mutation",
            event = "mutation_rejected",
            row_key_len = row.row_key.len(),
            reason = "empty",
        );
        return Err(AdapterError::invalid_argument(
            "no cell operations in row mutation",
        ));
    }

    row.cells
        .iter()
        .enumerate()
        .map(|(index, op)| to_entry(normalize(op)).map_err(|err| at_index(err, index)))
        .collect()
}

fn to_entry(cell: CanonicalCell) -> Result<Mutation> {
    let entry = match cell.kind {
        CellKind::Set => mutation::Mutation::SetCell(SetCell {
            family_name: cell.family,
            column_qualifier: cell.qualifier,
            timestamp_micros: cell.timestamp.get(),
            value: cell.value,
        }),
        CellKind::Delete(DeleteScope::Column) => {
            let time_range = if cell.explicit_timestamp {
                // A pinned delete covers every microsecond of the legacy millisecond.
                let end = cell
                    .timestamp
                    .checked_add(MICROS_PER_MILLI)
                    .filter(|_| !cell.timestamp_saturated)
                    .ok_or_else(|| {
                        AdapterError::invalid_argument(
                            "column delete timestamp does not fit in microseconds",
                        )
                    })?;
                Some(TimestampRange {
                    start_timestamp_micros: cell.timestamp.get(),
                    end_timestamp_micros: end.get(),
                })
            } else {
                None
            };
            mutation::Mutation::DeleteFromColumn(DeleteFromColumn {
                family_name: cell.family,
                column_qualifier: cell.qualifier,
                time_range,
            })
        }
        CellKind::Delete(DeleteScope::Family) => {
            if cell.explicit_timestamp {
                return Err(AdapterError::invalid_argument(
                    "family deletes cannot be restricted to a timestamp",
                ));
            }
            mutation::Mutation::DeleteFromFamily(DeleteFromFamily {
                family_name: cell.family,
            })
        }
        CellKind::Delete(DeleteScope::Row) => {
            if cell.explicit_timestamp {
                return Err(AdapterError::invalid_argument(
                    "row deletes cannot be restricted to a timestamp",
                ));
            }
            mutation::Mutation::DeleteFromRow(DeleteFromRow {})
        }
    };

    Ok(Mutation {
        mutation: Some(entry),
    })
}

fn at_index(err: AdapterError, index: usize) -> AdapterError {
    match err {
        AdapterError::InvalidArgument(reason) => {
            AdapterError::InvalidArgument(format!("cell {index}: {reason}"))
        }
    }
}
