use company_core::{
    COMPANY_INACTIVE_CLIENT, COMPANY_NEW_COMPANY, COMPANY_POOL_SIZE, COMPANY_SPECTATOR,
    ClientCompany, CompanyError, CompanyId, CoreError, ErrorSeverity, INVALID_OWNER,
    MAX_COMPANIES, NetworkSlot, OWNER_BEGIN, OWNER_END, OWNER_TOWN, Owner, OwnerKind,
};

#[test]
fn documented_raw_values() {
    assert_eq!(OWNER_BEGIN.base(), 0);
    assert_eq!(OWNER_END.base(), 54);
    assert_eq!(COMPANY_INACTIVE_CLIENT.base(), 253);
    assert_eq!(COMPANY_NEW_COMPANY.base(), 254);
    assert_eq!(COMPANY_SPECTATOR.base(), 255);
    assert!(OWNER_END < COMPANY_INACTIVE_CLIENT);
    assert_eq!(MAX_COMPANIES, COMPANY_POOL_SIZE);
}

#[test]
fn raw_round_trip_over_the_whole_domain() {
    for raw in 0..=u8::MAX {
        assert_eq!(CompanyId::new(raw).base(), raw);
    }
}

#[test]
fn invalid_is_outside_the_slot_range() {
    let invalid = CompanyId::invalid();
    for company in CompanyId::slots() {
        assert_ne!(invalid, company);
    }
    assert_ne!(invalid, CompanyId::end());
    assert_eq!(invalid, INVALID_OWNER);
}

#[test]
fn every_defined_value_has_exactly_one_view() {
    for raw in 0..=u8::MAX {
        let owner = Owner::new(raw);
        let as_owner = owner.kind().is_ok();
        let as_network = owner.network_slot().is_some();
        let defined = Owner::try_new(raw).is_ok();
        assert_eq!(defined, as_owner || as_network, "raw {raw}");
        assert!(!(as_owner && as_network), "raw {raw}");
    }
}

#[test]
fn ownership_checks_match_exhaustively() {
    let describe = |owner: Owner| match owner.kind() {
        Ok(OwnerKind::Company(company)) => format!("company {company}"),
        Ok(OwnerKind::Town) => "town".to_owned(),
        Ok(OwnerKind::None) => "none".to_owned(),
        Ok(OwnerKind::Water) => "water".to_owned(),
        Ok(OwnerKind::Deity) => "deity".to_owned(),
        Err(error) => error.error_code().to_owned(),
    };
    assert_eq!(describe(Owner::new(4)), "company #4");
    assert_eq!(describe(OWNER_TOWN), "town");
    assert_eq!(describe(Owner::new(200)), "COMPANY_UNASSIGNED_OWNER");
    assert_eq!(describe(COMPANY_SPECTATOR), "COMPANY_NETWORK_PSEUDO_OWNER");
}

#[test]
fn leaking_network_values_is_an_internal_error() {
    let error = COMPANY_INACTIVE_CLIENT.kind().unwrap_err();
    assert_eq!(
        error,
        CompanyError::NetworkPseudoOwner {
            slot: NetworkSlot::InactiveClient
        }
    );
    assert_eq!(error.severity(), ErrorSeverity::Internal);
    assert!(error.severity().is_internal());

    let error = Owner::try_owner(120).unwrap_err();
    assert_eq!(error.severity(), ErrorSeverity::Validation);
    assert_eq!(error.error_code(), "ID_UNDEFINED");
}

#[test]
fn client_company_keeps_session_values_apart() {
    assert_eq!(
        ClientCompany::try_from(COMPANY_NEW_COMPANY),
        Ok(ClientCompany::Network(NetworkSlot::NewCompany))
    );
    assert!(ClientCompany::try_from(OWNER_TOWN).is_err());
    for company in CompanyId::slots() {
        assert_eq!(
            ClientCompany::decode(company).map(ClientCompany::encode),
            Ok(company)
        );
    }
}
