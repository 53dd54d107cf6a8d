//! Cluster-level options that resolve table addresses and request builders.

use std::sync::Arc;

use crate::{address::TableAddress, request::RequestBuilder};

/// Cluster coordinates shared by every table opened through one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterOptions {
    pub(crate) project_id: String,
    pub(crate) zone: String,
    pub(crate) cluster_name: String,
}

impl ClusterOptions {
    /// Options for `cluster_name` in `zone`, billed to `project_id`.
    pub fn new(
        project_id: impl Into<String>,
        zone: impl Into<String>,
        cluster_name: impl Into<String>,
    ) -> Self {
        ClusterOptions {
            project_id: project_id.into(),
            zone: zone.into(),
            cluster_name: cluster_name.into(),
        }
    }

    /// Replace the project id.
    pub fn project_id(self, project_id: impl Into<String>) -> Self {
        ClusterOptions {
            project_id: project_id.into(),
            ..self
        }
    }

    /// Replace the zone.
    pub fn zone(self, zone: impl Into<String>) -> Self {
        ClusterOptions {
            zone: zone.into(),
            ..self
        }
    }

    /// Replace the cluster name.
    pub fn cluster_name(self, cluster_name: impl Into<String>) -> Self {
        ClusterOptions {
            cluster_name: cluster_name.into(),
            ..self
        }
    }
}

impl ClusterOptions {
    /// Resolve the address of `table_qualifier` in this cluster.
    pub fn table(&self, table_qualifier: impl Into<String>) -> Arc<TableAddress> {
        Arc::new(TableAddress::new(
            table_qualifier,
            self.project_id.as_str(),
            self.zone.as_str(),
            self.cluster_name.as_str(),
        ))
    }

    /// Request builder for `table_qualifier` in this cluster.
    pub fn request_builder(&self, table_qualifier: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(self.table(table_qualifier))
    }
}
