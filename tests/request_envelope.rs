mod common;

use std::{sync::Arc, thread};

use bigtable_adapter::{
    proto::{
        legacy::GetRowRequest,
        v1::{CheckAndMutateRowRequest, MutateRowRequest},
    },
    stamp, ApiGeneration, CheckAndMutate, ClusterOptions, Envelope, RowGet, RowMutation,
    TableAddress,
};
use bytes::Bytes;
use common::{random_data, random_ident};
use prost::Message;

#[test]
fn stamping_holds_for_random_addresses() {
    for _ in 0..16 {
        let (project, zone, cluster, table) = (
            random_ident("p"),
            random_ident("z"),
            random_ident("c"),
            random_ident("t"),
        );
        let address =
            TableAddress::new(table.clone(), project.clone(), zone.clone(), cluster.clone());

        let mut get = GetRowRequest::default();
        stamp(&address, &mut get);
        assert_eq!(get.table_name, table);
        assert_eq!(get.project_id, project);

        let mut mutate = MutateRowRequest::default();
        stamp(&address, &mut mutate);
        assert_eq!(
            mutate.table_name,
            format!("projects/{project}/zones/{zone}/clusters/{cluster}/tables/{table}")
        );
    }
}

#[test]
fn mutate_envelope_survives_wire_encoding() {
    let builder = ClusterOptions::new("acme", "us-east1-b", "main").request_builder("events");
    let row = random_data("rk-");
    let request = builder
        .mutate(
            &RowMutation::new(row.clone())
                .set_at(random_data("f"), random_data("q"), 42, random_data("v"))
                .set(random_data("f"), random_data("q"), Bytes::new()),
        )
        .expect("mutate");

    let envelope = Envelope::from(request.clone());
    assert_eq!(envelope.generation(), ApiGeneration::V1);

    let decoded = MutateRowRequest::decode(envelope.encode_to_vec().as_slice()).expect("decode");
    assert_eq!(decoded, request);
    assert_eq!(decoded.row_key, row);
    assert_eq!(
        decoded.table_name,
        "projects/acme/zones/us-east1-b/clusters/main/tables/events"
    );
}

#[test]
fn check_and_mutate_envelope_survives_wire_encoding() {
    let builder = ClusterOptions::new("acme", "us-east1-b", "main").request_builder("events");
    let row = random_data("rk-");
    let check = CheckAndMutate::new(
        row.clone(),
        "f",
        random_data("q"),
        Some(random_data("expected")),
        RowMutation::new(row.clone()).set(random_data("f"), random_data("q"), random_data("v")),
    );

    let request = builder.check_and_mutate(&check).expect("check");
    let bytes = Envelope::from(request.clone()).encode_to_vec();
    let decoded = CheckAndMutateRowRequest::decode(bytes.as_slice()).expect("decode");

    assert_eq!(decoded, request);
    assert_eq!(decoded.true_mutations.len(), 1);
}

#[test]
fn one_address_serves_concurrent_builders() {
    let options = ClusterOptions::new("acme", "us-east1-b", "main");
    let builder = options.request_builder("events");
    let address = Arc::clone(builder.address());

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let builder = builder.clone();
            thread::spawn(move || {
                (0..64)
                    .map(|i| {
                        let key = format!("rk-{worker}-{i}");
                        let get = builder.get(&RowGet::new(key.clone()));
                        let mutate = builder
                            .mutate(&RowMutation::new(key.clone()).set("f", "q", "v"))
                            .expect("mutate");
                        assert_eq!(get.row_key, key.as_bytes());
                        assert_eq!(mutate.row_key, key.as_bytes());
                        (get.table_name, mutate.table_name)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (short, full) in handle.join().expect("worker") {
            assert_eq!(short, address.short_form());
            assert_eq!(full, address.full_path());
        }
    }
}
