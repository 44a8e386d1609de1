#![cfg(feature = "serde")]

use company_core::{
    BaseBitSet, COMPANY_SPECTATOR, CompanyConfig, CompanyCtrlAction, CompanyId, CompanyMask,
    CompanyName, OWNER_TOWN, Owner,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn owner_encodes_as_single_byte() {
    let bytes = bincode::serialize(&OWNER_TOWN).unwrap();
    assert_eq!(hex::encode(&bytes), "32");
    let bytes = bincode::serialize(&COMPANY_SPECTATOR).unwrap();
    assert_eq!(hex::encode(&bytes), "ff");
}

#[test]
fn mask_encodes_as_raw_u64() {
    let mask: CompanyMask = [0, 2].into_iter().map(CompanyId::new).collect();
    let bytes = bincode::serialize(&mask).unwrap();
    assert_eq!(hex::encode(&bytes), "0500000000000000");
    assert_eq!(bincode::deserialize::<CompanyMask>(&bytes).unwrap(), mask);
}

#[test]
fn decoding_rejects_untrusted_values() {
    init_tracing();
    assert!(bincode::deserialize::<Owner>(&[0x80]).is_err());
    assert_eq!(bincode::deserialize::<Owner>(&[0x35]).unwrap().base(), 53);

    let stray = (1u64 << 63).to_le_bytes();
    assert!(bincode::deserialize::<CompanyMask>(&stray).is_err());
}

#[test]
fn json_uses_readable_forms() {
    init_tracing();
    assert_eq!(
        serde_json::to_string(&CompanyCtrlAction::NewAi).unwrap(),
        "\"new_ai\""
    );
    let mask = CompanyMask::of(CompanyId::new(1));
    assert_eq!(serde_json::to_string(&mask).unwrap(), "2");
    assert!(mask.test(CompanyId::new(1)));

    let name: CompanyName = serde_json::from_str("\"Transport Co\"").unwrap();
    assert_eq!(name.as_str(), "Transport Co");
    let too_long = format!("\"{}\"", "x".repeat(40));
    assert!(serde_json::from_str::<CompanyName>(&too_long).is_err());
}

#[test]
fn config_decoding_enforces_interval_bounds() {
    init_tracing();
    let config: CompanyConfig = serde_json::from_str(r#"{"competitors_interval":30}"#).unwrap();
    assert_eq!(config.competitors_interval(), 30);
    assert_eq!(
        serde_json::to_string(&config).unwrap(),
        r#"{"competitors_interval":30}"#
    );

    let err = serde_json::from_str::<CompanyConfig>(r#"{"competitors_interval":501}"#)
        .unwrap_err()
        .to_string();
    assert!(err.contains("501"), "{err}");
}
