//! Per-cell operations as the legacy client expresses them, and their
//! canonical backend form.

use bytes::Bytes;

use crate::{observability::log_warn, timestamp::TimestampMicros};

/// How much a delete removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteScope {
    /// Versions of a single column; all of them unless a timestamp pins one.
    Column,
    /// Every column of a family.
    Family,
    /// Every cell of the row.
    Row,
}

/// Whether a cell operation writes or removes data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Write `value` into the cell.
    Set,
    /// Remove cells within the given scope.
    Delete(DeleteScope),
}

/// One cell-level operation of a row mutation, timestamped in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOp {
    family: Bytes,
    qualifier: Bytes,
    timestamp_millis: Option<i64>,
    value: Bytes,
    kind: CellKind,
}

impl CellOp {
    /// Write `value` with a server-assigned timestamp.
    pub fn set(
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Self {
        Self {
            family: family.into(),
            qualifier: qualifier.into(),
            timestamp_millis: None,
            value: value.into(),
            kind: CellKind::Set,
        }
    }

    /// Write `value` at an explicit millisecond timestamp.
    pub fn set_at(
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        timestamp_millis: i64,
        value: impl Into<Bytes>,
    ) -> Self {
        Self {
            timestamp_millis: Some(timestamp_millis),
            ..Self::set(family, qualifier, value)
        }
    }

    /// Delete every version of a column.
    pub fn delete_column(family: impl Into<Bytes>, qualifier: impl Into<Bytes>) -> Self {
        Self {
            family: family.into(),
            qualifier: qualifier.into(),
            timestamp_millis: None,
            value: Bytes::new(),
            kind: CellKind::Delete(DeleteScope::Column),
        }
    }

    /// Delete the version of a column written at `timestamp_millis`.
    pub fn delete_column_at(
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        timestamp_millis: i64,
    ) -> Self {
        Self {
            timestamp_millis: Some(timestamp_millis),
            ..Self::delete_column(family, qualifier)
        }
    }

    /// Delete every column of a family.
    pub fn delete_family(family: impl Into<Bytes>) -> Self {
        Self {
            family: family.into(),
            qualifier: Bytes::new(),
            timestamp_millis: None,
            value: Bytes::new(),
            kind: CellKind::Delete(DeleteScope::Family),
        }
    }

    /// Delete the whole row.
    pub fn delete_row() -> Self {
        Self {
            family: Bytes::new(),
            qualifier: Bytes::new(),
            timestamp_millis: None,
            value: Bytes::new(),
            kind: CellKind::Delete(DeleteScope::Row),
        }
    }

    /// Replace the timestamp, keeping everything else.
    pub fn with_timestamp(self, timestamp_millis: Option<i64>) -> Self {
        Self {
            timestamp_millis,
            ..self
        }
    }

    /// Column family.
    pub fn family(&self) -> &Bytes {
        &self.family
    }

    /// Column qualifier.
    pub fn qualifier(&self) -> &Bytes {
        &self.qualifier
    }

    /// Millisecond timestamp; `None` lets the backend assign one.
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.timestamp_millis
    }

    /// Value written by a set. Empty for deletes.
    pub fn value(&self) -> &Bytes {
        &self.value
    }

    /// Operation kind.
    pub fn kind(&self) -> CellKind {
        self.kind
    }
}

/// A cell operation with its timestamp resolved to backend units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCell {
    /// Column family, byte-for-byte from the input.
    pub family: Bytes,
    /// Column qualifier, byte-for-byte from the input.
    pub qualifier: Bytes,
    /// Microsecond timestamp; [`TimestampMicros::UNSET`] when the input had none.
    pub timestamp: TimestampMicros,
    /// Value, byte-for-byte from the input.
    pub value: Bytes,
    /// Operation kind.
    pub kind: CellKind,
    /// Whether the input carried an explicit timestamp.
    pub explicit_timestamp: bool,
    /// Whether the millisecond timestamp did not fit in microseconds and was
    /// clamped to the `i64` bounds.
    pub timestamp_saturated: bool,
}

/// Resolve a [`CellOp`] into its canonical form.
pub fn normalize(op: &CellOp) -> CanonicalCell {
    let (timestamp, saturated) = TimestampMicros::resolve(op.timestamp_millis);
    if saturated {
        log_warn!(
            component = "cell",
            event = "timestamp_saturated",
            millis = ?op.timestamp_millis,
            micros = timestamp.get(),
        );
    }

    CanonicalCell {
        family: op.family.clone(),
        qualifier: op.qualifier.clone(),
        timestamp,
        value: op.value.clone(),
        kind: op.kind,
        explicit_timestamp: op.timestamp_millis.is_some(),
        timestamp_saturated: saturated,
    }
}
