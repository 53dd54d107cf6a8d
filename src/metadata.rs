//! Stamping table and project identifiers onto request messages.
//!
//! Generation-1 shapes address a table by bare qualifier plus a separate
//! project id; v1 shapes carry a single fully qualified path. [`stamp`] is the
//! only place that maps a [`TableAddress`] onto either convention.

use crate::{
    address::TableAddress,
    observability::log_debug,
    proto::{
        legacy::{AppendRowRequest, GetRowRequest, IncrementRowRequest},
        v1::{CheckAndMutateRowRequest, MutateRowRequest},
    },
};

/// Addressing convention of a request shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiGeneration {
    /// Bare `table_name` plus `project_id`.
    Legacy,
    /// Fully qualified `table_name`, no project field.
    V1,
}

/// Mutable borrow of a request message whose table name can be stamped.
#[derive(Debug)]
pub enum StampTarget<'a> {
    /// Row read.
    Get(&'a mut GetRowRequest),
    /// Append to existing cells.
    Append(&'a mut AppendRowRequest),
    /// Counter increment.
    Increment(&'a mut IncrementRowRequest),
    /// Unconditional row mutation.
    Mutate(&'a mut MutateRowRequest),
    /// Conditional row mutation.
    CheckAndMutate(&'a mut CheckAndMutateRowRequest),
}

impl<'a> StampTarget<'a> {
    /// Addressing convention the borrowed message follows.
    pub fn generation(&self) -> ApiGeneration {
        match self {
            StampTarget::Get(_) | StampTarget::Append(_) | StampTarget::Increment(_) => {
                ApiGeneration::Legacy
            }
            StampTarget::Mutate(_) | StampTarget::CheckAndMutate(_) => ApiGeneration::V1,
        }
    }

    fn into_fields(self) -> StampFields<'a> {
        match self {
            StampTarget::Get(request) => StampFields::Legacy {
                table_name: &mut request.table_name,
                project_id: &mut request.project_id,
            },
            StampTarget::Append(request) => StampFields::Legacy {
                table_name: &mut request.table_name,
                project_id: &mut request.project_id,
            },
            StampTarget::Increment(request) => StampFields::Legacy {
                table_name: &mut request.table_name,
                project_id: &mut request.project_id,
            },
            StampTarget::Mutate(request) => StampFields::V1 {
                table_name: &mut request.table_name,
            },
            StampTarget::CheckAndMutate(request) => StampFields::V1 {
                table_name: &mut request.table_name,
            },
        }
    }
}

/// Addressing fields of one message, split by convention.
enum StampFields<'a> {
    Legacy {
        table_name: &'a mut String,
        project_id: &'a mut String,
    },
    V1 {
        table_name: &'a mut String,
    },
}

macro_rules! impl_stamp_target {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for StampTarget<'a> {
                fn from(request: &'a mut $ty) -> Self {
                    StampTarget::$variant(request)
                }
            }
        )*
    };
}

impl_stamp_target!(
    Get => GetRowRequest,
    Append => AppendRowRequest,
    Increment => IncrementRowRequest,
    Mutate => MutateRowRequest,
    CheckAndMutate => CheckAndMutateRowRequest,
);

/// Write the identifiers of `address` into the borrowed request, in place.
pub fn stamp<'a>(address: &TableAddress, target: impl Into<StampTarget<'a>>) {
    let generation = match target.into().into_fields() {
        StampFields::Legacy {
            table_name,
            project_id,
        } => {
            overwrite(table_name, address.short_form());
            overwrite(project_id, address.project_id());
            ApiGeneration::Legacy
        }
        StampFields::V1 { table_name } => {
            overwrite(table_name, address.full_path());
            ApiGeneration::V1
        }
    };

    log_debug!(
        component = "metadata",
        event = "request_stamped",
        generation = ?generation,
        table = %address,
    );
}

fn overwrite(field: &mut String, value: &str) {
    field.clear();
    field.push_str(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> TableAddress {
        TableAddress::new("T", "P", "Z", "C")
    }

    #[test]
    fn legacy_shapes_get_bare_name_and_project() {
        let address = address();

        let mut get = GetRowRequest::default();
        stamp(&address, &mut get);
        assert_eq!(get.table_name, "T");
        assert_eq!(get.project_id, "P");

        let mut append = AppendRowRequest::default();
        stamp(&address, &mut append);
        assert_eq!(append.table_name, "T");
        assert_eq!(append.project_id, "P");

        let mut increment = IncrementRowRequest::default();
        stamp(&address, &mut increment);
        assert_eq!(increment.table_name, "T");
        assert_eq!(increment.project_id, "P");
    }

    #[test]
    fn v1_shapes_get_full_path() {
        let address = address();

        let mut mutate = MutateRowRequest::default();
        stamp(&address, &mut mutate);
        assert_eq!(mutate.table_name, "projects/P/zones/Z/clusters/C/tables/T");

        let mut check = CheckAndMutateRowRequest::default();
        stamp(&address, &mut check);
        assert_eq!(check.table_name, "projects/P/zones/Z/clusters/C/tables/T");
    }

    #[test]
    fn stamping_overwrites_previous_values() {
        let mut get = GetRowRequest {
            table_name: "stale-table".to_string(),
            project_id: "stale-project".to_string(),
            ..Default::default()
        };
        stamp(&address(), &mut get);
        assert_eq!(get.table_name, "T");
        assert_eq!(get.project_id, "P");
    }

    #[test]
    fn stamping_leaves_payload_untouched() {
        let mut mutate = MutateRowRequest {
            row_key: "rk".into(),
            ..Default::default()
        };
        let before = mutate.clone();
        stamp(&address(), &mut mutate);

        assert_eq!(mutate.row_key, before.row_key);
        assert_eq!(mutate.mutations, before.mutations);
    }

    #[test]
    fn targets_report_generation() {
        let mut get = GetRowRequest::default();
        let mut check = CheckAndMutateRowRequest::default();
        assert_eq!(
            StampTarget::from(&mut get).generation(),
            ApiGeneration::Legacy
        );
        assert_eq!(StampTarget::from(&mut check).generation(), ApiGeneration::V1);
    }

    #[test]
    fn field_set_matches_reported_generation() {
        let mut get = GetRowRequest::default();
        let mut append = AppendRowRequest::default();
        let mut increment = IncrementRowRequest::default();
        let mut mutate = MutateRowRequest::default();
        let mut check = CheckAndMutateRowRequest::default();
        let targets = [
            StampTarget::from(&mut get),
            StampTarget::from(&mut append),
            StampTarget::from(&mut increment),
            StampTarget::from(&mut mutate),
            StampTarget::from(&mut check),
        ];

        for target in targets {
            let generation = target.generation();
            match target.into_fields() {
                StampFields::Legacy { .. } => assert_eq!(generation, ApiGeneration::Legacy),
                StampFields::V1 { .. } => assert_eq!(generation, ApiGeneration::V1),
            }
        }
    }
}
