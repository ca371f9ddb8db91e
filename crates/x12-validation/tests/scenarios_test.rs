//! End-to-end parse-then-validate scenarios (spec.md §8).

use x12_schema::registry;
use x12_validation::{validate, ValidationErrorKind};

fn isa_header(term: u8) -> String {
    let mut isa = vec![b' '; x12_types::ISA_LENGTH];
    isa[0..3].copy_from_slice(b"ISA");
    isa[3] = b'*';
    isa[82] = b'^';
    isa[104] = b':';
    isa[105] = term;
    String::from_utf8(isa).unwrap()
}

fn parse_one(input: &str) -> x12_assembly::model::TransactionModel {
    let results = x12_assembly::engine::parse(input.as_bytes()).unwrap();
    assert_eq!(results.len(), 1);
    results.into_iter().next().unwrap().unwrap()
}

#[test]
fn test_minimal_270_validates_clean() {
    let input = format!(
        "{}GS*HS*SENDER*RECEIVER*20060501*1319*1*X*005010~\
ST*270*0001*005010X279A1~\
HL*1**20*1~NM1*PR*2*PAYER*****PI*12345~\
HL*2*1*22*0~NM1*IL*1*DOE*JOHN~\
SE*6*0001~GE*1*1~IEA*1*1~",
        isa_header(b'~')
    );
    let model = parse_one(&input);
    let schema = registry::lookup(&model.transaction_code, &model.implementation_version).unwrap();
    assert!(validate(&model, schema.validators).is_ok());
}

#[test]
fn test_envelope_count_mismatch_fails() {
    let input = format!(
        "{}GS*HS~ST*270*0001*005010X279A1~\
HL*1**20*1~NM1*PR*2*PAYER*****PI*12345~\
HL*2*1*22*0~NM1*IL*1*DOE*JOHN~\
SE*27*0001~GE*1*1~IEA*1*1~",
        isa_header(b'~')
    );
    let model = parse_one(&input);
    let schema = registry::lookup(&model.transaction_code, &model.implementation_version).unwrap();
    let failure = validate(&model, schema.validators).unwrap_err();
    assert!(failure.errors().iter().any(|e| e.kind == ValidationErrorKind::SegmentCountMismatch));
}

#[test]
fn test_hl_parent_mismatch_fails() {
    let input = format!(
        "{}GS*HS~ST*270*0001*005010X279A1~\
HL*1**20*1~NM1*PR*2*PAYER*****PI*12345~\
HL*2*9*22*0~NM1*IL*1*DOE*JOHN~\
SE*6*0001~GE*1*1~IEA*1*1~",
        isa_header(b'~')
    );
    let model = parse_one(&input);
    let schema = registry::lookup(&model.transaction_code, &model.implementation_version).unwrap();
    let failure = validate(&model, schema.validators).unwrap_err();
    assert!(failure.errors().iter().any(|e| e.kind == ValidationErrorKind::HlParentUnresolved));
}

#[test]
fn test_subscriber_as_patient_missing_first_name_fails() {
    let input = format!(
        "{}GS*HS~ST*270*0001*005010X279A1~\
HL*1**20*1~NM1*PR*2*PAYER*****PI*12345~\
HL*2*1*22*0~NM1*IL*1*DOE~\
SE*6*0001~GE*1*1~IEA*1*1~",
        isa_header(b'~')
    );
    let model = parse_one(&input);
    let schema = registry::lookup(&model.transaction_code, &model.implementation_version).unwrap();
    let failure = validate(&model, schema.validators).unwrap_err();
    assert!(failure.errors().iter().any(|e| e.kind == ValidationErrorKind::SubscriberMissingFirstName));
}

#[test]
fn test_835_balance_violation_fails() {
    let input = format!(
        "{}GS*HP~ST*835*0001*005010X221A1~\
NM1*PR*2*PAYER*****PI*12345~REF*TJ*987~NM1*PE*2*CLINIC*****XX*111~REF*TJ*222~\
LX*1~CLP*CLAIM1*1*100.00*80.00~CAS*CO*45*15.00~\
SE*9*0001~GE*1*1~IEA*1*1~",
        isa_header(b'~')
    );
    let model = parse_one(&input);
    let schema = registry::lookup(&model.transaction_code, &model.implementation_version).unwrap();
    let failure = validate(&model, schema.validators).unwrap_err();
    assert!(failure.errors().iter().any(|e| e.kind == ValidationErrorKind::ClaimBalanceMismatch));
}
