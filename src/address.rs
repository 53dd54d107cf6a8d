//! Table coordinates and their two textual renderings.

use std::fmt;

/// Identifying coordinates of one backend table.
///
/// Both renderings are computed once at construction; the value is never
/// mutated afterwards and is shared read-only by every request of a table
/// handle.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TableAddress {
    project_id: String,
    zone: String,
    cluster_name: String,
    table_qualifier: String,
    full_path: String,
}

impl TableAddress {
    /// Build the address of `table_qualifier` in the given project, zone and
    /// cluster.
    pub fn new(
        table_qualifier: impl Into<String>,
        project_id: impl Into<String>,
        zone: impl Into<String>,
        cluster_name: impl Into<String>,
    ) -> Self {
        let table_qualifier = table_qualifier.into();
        let project_id = project_id.into();
        let zone = zone.into();
        let cluster_name = cluster_name.into();
        let full_path = format!(
            "projects/{project_id}/zones/{zone}/clusters/{cluster_name}/tables/{table_qualifier}"
        );

        Self {
            project_id,
            zone,
            cluster_name,
            table_qualifier,
            full_path,
        }
    }

    /// Bare table qualifier, as generation-1 shapes expect it.
    pub fn short_form(&self) -> &str {
        &self.table_qualifier
    }

    /// `projects/<p>/zones/<z>/clusters/<c>/tables/<t>`, as v1 shapes expect it.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Project identifier.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Zone hosting the cluster.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Cluster name.
    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }
}

impl fmt::Debug for TableAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TableAddress").field(&self.full_path).finish()
    }
}

impl fmt::Display for TableAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_forms() {
        let address = TableAddress::new("events", "acme", "us-east1-b", "main");

        assert_eq!(address.short_form(), "events");
        assert_eq!(
            address.full_path(),
            "projects/acme/zones/us-east1-b/clusters/main/tables/events"
        );
        assert_eq!(address.project_id(), "acme");
        assert_eq!(address.zone(), "us-east1-b");
        assert_eq!(address.cluster_name(), "main");
    }

    #[test]
    fn display_renders_full_path() {
        let address = TableAddress::new("T", "P", "Z", "C");

        assert_eq!(address.to_string(), "projects/P/zones/Z/clusters/C/tables/T");
        assert_eq!(
            format!("{address:?}"),
            "TableAddress(\"projects/P/zones/Z/clusters/C/tables/T\")"
        );
    }
}
