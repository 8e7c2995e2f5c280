//! PLMN resource integration tests
//!
//! Tests decoding, validation and round-tripping of PLMN documents.

use integration_tests::{
    assert_rejected_at, init_test_logging, testdata_path, TestPlmnConfig, TestResult,
    TestSliceConfig,
};
use radiocfg_common::{Document, Error, PlmnId, SessionType, Validate, Violation};
use radiocfg_plmn::{Plmn, PlmnInfo, PlmnList, PlmnSpec};

/// Test loading the sample PLMN document from disk
#[test]
fn test_plmn_from_yaml_file() -> TestResult {
    init_test_logging();

    let plmn = Plmn::from_yaml_file(testdata_path("plmn.yaml"))?;
    assert_eq!(plmn.metadata.qualified_name(), "ran/plmn-edge-01");
    assert_eq!(plmn.spec.plmn_info.len(), 2);

    let first = &plmn.spec.plmn_info[0];
    assert_eq!(first.plmn_id, PlmnId::new("001", "01")?);
    assert_eq!(first.nssai[0].dnn_info.dns.as_deref(), Some("8.8.8.8"));
    assert_eq!(first.nssai[1].dnn_info.session_type()?, SessionType::Ipv4v6);
    assert!(first.nssai[1].dnn_info.dns.is_none());
    assert!(first.nssai[1].sd.is_none());

    let second = &plmn.spec.plmn_info[1];
    assert_eq!(second.tac, 16_777_215);
    assert!(second.nssai.is_empty());
    Ok(())
}

/// PLMNID 310/410 is accepted, 810/41 is rejected on the MCC
#[test]
fn test_plmn_id_scenarios() {
    init_test_logging();

    let accepted = TestPlmnConfig::default().with_plmn("310", "410").build();
    assert!(accepted.is_valid());

    let rejected = TestPlmnConfig::default().with_plmn("810", "41").build();
    let err = rejected.validate().unwrap_err();
    assert_eq!(err.field, "spec.PLMNInfo[0].plmnID.mcc");
}

/// An empty PLMN list is the valid "nothing configured yet" state
#[test]
fn test_empty_plmn_spec_accepted() -> TestResult {
    init_test_logging();

    let plmn = Plmn::from_yaml("metadata:\n  name: empty\nspec:\n  PLMNInfo: []\n")?;
    assert!(plmn.spec.is_empty());
    assert!(PlmnSpec::new(vec![])?.is_valid());
    Ok(())
}

/// Serialize/deserialize keeps every entry, in order, with every field equal
#[test]
fn test_plmn_spec_roundtrip() -> TestResult {
    init_test_logging();

    let infos: Vec<PlmnInfo> = (0..5u32)
        .map(|i| {
            TestPlmnConfig::default()
                .with_plmn(&format!("{}0{}", 2 + i, i), &format!("{i}{i}"))
                .with_tac(1000 - i)
                .with_slice(
                    TestSliceConfig::default()
                        .with_sst(i64::from(i))
                        .with_sd(Some("aBcDeF"))
                        .with_dnn("ims", SessionType::Ipv6),
                )
                .build_info()
        })
        .collect();
    let spec = PlmnSpec::new(infos)?;
    let plmn = Plmn::new("roundtrip", spec);

    let from_json = Plmn::from_json(&plmn.to_json()?)?;
    assert_eq!(from_json, plmn);

    let from_yaml = Plmn::from_yaml(&plmn.to_yaml()?)?;
    assert_eq!(from_yaml, plmn);

    let tacs: Vec<u32> = from_yaml.spec.plmn_info.iter().map(|i| i.tac).collect();
    assert_eq!(tacs, vec![1000, 999, 998, 997, 996]);
    Ok(())
}

/// Leading zeros and 2-digit MNCs survive YAML round-trips as strings
#[test]
fn test_plmn_leading_zero_roundtrip() -> TestResult {
    let plmn = TestPlmnConfig::default().with_plmn("001", "001").build();
    let parsed = Plmn::from_yaml(&plmn.to_yaml()?)?;
    assert_eq!(parsed.spec.plmn_info[0].plmn_id.mcc, "001");
    assert_eq!(parsed.spec.plmn_info[0].plmn_id.mnc, "001");
    Ok(())
}

/// A bad slice anywhere rejects the whole resource
#[test]
fn test_invalid_slice_rejects_resource() {
    init_test_logging();

    let plmn = TestPlmnConfig::default()
        .with_slice(TestSliceConfig::default().with_sd(Some("1a2B3g")))
        .build();
    let result = Plmn::from_json(&serde_json::to_string(&plmn).unwrap());
    assert_rejected_at(result, "spec.PLMNInfo[0].nssai[1].sd");
}

/// A TAC beyond 24 bits rejects the resource
#[test]
fn test_tac_out_of_range_rejects_resource() {
    let plmn = TestPlmnConfig::default().with_tac(16_777_216).build();
    let result = Plmn::from_yaml(&serde_yaml::to_string(&plmn).unwrap());
    assert_rejected_at(result, "spec.PLMNInfo[0].tac");
}

/// An unknown session type is rejected with its full field path
#[test]
fn test_unknown_session_type_rejected() {
    init_test_logging();

    let json = r#"{
        "spec": {"PLMNInfo": [{
            "plmnID": {"mcc": "310", "mnc": "410"},
            "tac": 1,
            "nssai": [{"sst": 1, "dnnInfo": {"name": "internet", "sessionType": "ipv5"}}]
        }]}
    }"#;
    let err = assert_rejected_at(
        Plmn::from_json(json),
        "spec.PLMNInfo[0].nssai[0].dnnInfo.sessionType",
    );
    assert!(matches!(err.violation, Violation::NotInEnum { .. }));

    let plmn = TestPlmnConfig::default()
        .with_slice(TestSliceConfig::default().with_session_type("IPv4"))
        .build();
    let result = Plmn::from_yaml(&serde_yaml::to_string(&plmn).unwrap());
    assert_rejected_at(result, "spec.PLMNInfo[0].nssai[1].dnnInfo.sessionType");
}

/// The slice list must be present on the wire, even when empty
#[test]
fn test_missing_nssai_rejected() {
    let json = r#"{"spec": {"PLMNInfo": [{"plmnID": {"mcc": "310", "mnc": "410"}, "tac": 1}]}}"#;
    assert!(matches!(Plmn::from_json(json), Err(Error::JsonParse(_))));
}

/// List validity is the conjunction of item validity
#[test]
fn test_plmn_list_validation() -> TestResult {
    init_test_logging();

    let valid = PlmnList::new(vec![
        TestPlmnConfig::default().build(),
        TestPlmnConfig::default().with_plmn("234", "15").build(),
    ]);
    let parsed = PlmnList::from_yaml(&valid.to_yaml()?)?;
    assert_eq!(parsed, valid);

    let invalid = PlmnList::new(vec![
        TestPlmnConfig::default().build(),
        TestPlmnConfig::default()
            .with_slice(TestSliceConfig::default().with_sst(256))
            .build(),
    ]);
    let result = PlmnList::from_json(&serde_json::to_string(&invalid)?);
    assert_rejected_at(result, "items[1].spec.PLMNInfo[0].nssai[1].sst");
    Ok(())
}
