//! Process-wide immutable schema registry (spec.md §4.3).
//!
//! Adding a new transaction means registering a new [`TransactionSchema`]
//! entry here, not changing the engine.

use crate::element::ElementSchema;
use crate::loop_schema::{Cardinality, LoopSchema};
use crate::segment_schema::SegmentSchema;
use crate::transaction_schema::{TransactionSchema, ValidatorId};

const HL_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::an("hierarchical_id_number", true, 1, 12),
    ElementSchema::an("hierarchical_parent_id_number", false, 1, 12),
    ElementSchema::id(
        "hierarchical_level_code",
        true,
        &["19", "20", "21", "22", "23"],
    ),
    ElementSchema::id("hierarchical_child_code", true, &["0", "1"]),
];
const HL_SEGMENT: SegmentSchema = SegmentSchema::new("HL", HL_ELEMENTS, true, false);

const NM1_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::id(
        "entity_identifier_code",
        true,
        &["1P", "2B", "36", "71", "72", "73", "74", "77", "82", "85", "87", "DN", "FA", "IL", "P5", "PE", "PR", "QC", "TT"],
    ),
    ElementSchema::id("entity_type_qualifier", true, &["1", "2"]),
    ElementSchema::an("name_last_or_organization_name", false, 1, 60),
    ElementSchema::an("name_first", false, 1, 35),
    ElementSchema::an("name_middle", false, 1, 25),
    ElementSchema::an("name_suffix", false, 1, 10),
    ElementSchema::an("name_prefix", false, 1, 10),
    ElementSchema::id("identification_code_qualifier", false, &["24", "34", "46", "MI", "PI", "XV", "XX"]),
    ElementSchema::an("identification_code", false, 2, 80),
];
const NM1_SEGMENT: SegmentSchema = SegmentSchema::new("NM1", NM1_ELEMENTS, true, false);

const TRN_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::id("trace_type_code", true, &["1", "2"]),
    ElementSchema::an("reference_identification", true, 1, 50),
    ElementSchema::an("originating_company_identifier", false, 10, 10),
];
const TRN_SEGMENT: SegmentSchema = SegmentSchema::new("TRN", TRN_ELEMENTS, false, false);

const DTP_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::an("date_time_qualifier", true, 3, 3),
    ElementSchema::id("date_time_period_format_qualifier", true, &["D8", "RD8"]),
    ElementSchema::an("date_time_period", true, 1, 35),
];
const DTP_SEGMENT: SegmentSchema = SegmentSchema::new("DTP", DTP_ELEMENTS, false, true);

const REF_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::an("reference_identification_qualifier", true, 2, 3),
    ElementSchema::an("reference_identification", true, 1, 50),
];
const REF_SEGMENT: SegmentSchema = SegmentSchema::new("REF", REF_ELEMENTS, false, true);

const LX_ELEMENTS: &[ElementSchema] = &[ElementSchema::numeric("assigned_number", true, 0)];
const LX_SEGMENT: SegmentSchema = SegmentSchema::new("LX", LX_ELEMENTS, true, false);

// ---- 270 eligibility inquiry (005010X279A1) ----

const EQ_ELEMENTS: &[ElementSchema] = &[ElementSchema::an("service_type_code", false, 1, 2)];
const EQ_SEGMENT: SegmentSchema = SegmentSchema::new("EQ", EQ_ELEMENTS, false, false);

const LOOP_2100_SEGMENTS_270: &[SegmentSchema] = &[NM1_SEGMENT, REF_SEGMENT];
const LOOP_2000D_270: LoopSchema = LoopSchema::new(
    "loop_2000d",
    Cardinality::Repeating,
    &[HL_SEGMENT],
    &[LoopSchema::new("loop_2100d", Cardinality::One, &[NM1_SEGMENT, EQ_SEGMENT, DTP_SEGMENT], &[])],
);
const LOOP_2000C_270: LoopSchema = LoopSchema::new(
    "loop_2000c",
    Cardinality::Repeating,
    &[HL_SEGMENT],
    &[
        LoopSchema::new("loop_2100c", Cardinality::One, &[NM1_SEGMENT, EQ_SEGMENT, DTP_SEGMENT], &[]),
        LOOP_2000D_270,
    ],
);
const LOOP_2000B_270: LoopSchema = LoopSchema::new(
    "loop_2000b",
    Cardinality::One,
    &[HL_SEGMENT],
    &[
        LoopSchema::new("loop_2100b", Cardinality::One, &[NM1_SEGMENT], &[]),
        LOOP_2000C_270,
    ],
);
const LOOP_2100A_270: LoopSchema = LoopSchema::new("loop_2100a", Cardinality::One, LOOP_2100_SEGMENTS_270, &[]);
const LOOP_2000A_270_CHILDREN: &[LoopSchema] = &[LOOP_2100A_270, LOOP_2000B_270];
const LOOP_2000A_270: LoopSchema = LoopSchema::new("loop_2000a", Cardinality::One, &[HL_SEGMENT], LOOP_2000A_270_CHILDREN);

const TRANSACTION_270: TransactionSchema = TransactionSchema {
    transaction_code: "270",
    implementation_version: "005010X279A1",
    root_loops: &[LOOP_2000A_270],
    validators: &[
        ValidatorId::EnvelopeCount,
        ValidatorId::HlParentage,
        ValidatorId::HlChildCode,
        ValidatorId::SubscriberAsPatient,
        ValidatorId::DuplicateQualifier,
    ],
};

// ---- 271 eligibility response (005010X279A1) ----

const EB_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::id("eligibility_or_benefit_information_code", true, &["1", "6", "A", "B", "C"]),
    ElementSchema::id("coverage_level_code", false, &["CHD", "DEP", "ECH", "EMP", "FAM", "IND", "SPC", "SPO"]),
    ElementSchema::an("service_type_code", false, 1, 2),
];
const EB_SEGMENT: SegmentSchema = SegmentSchema::new("EB", EB_ELEMENTS, false, true);

const LOOP_2000D_271: LoopSchema = LoopSchema::new(
    "loop_2000d",
    Cardinality::Repeating,
    &[HL_SEGMENT],
    &[LoopSchema::new("loop_2100d", Cardinality::One, &[NM1_SEGMENT, EB_SEGMENT, DTP_SEGMENT], &[])],
);
const LOOP_2000C_271: LoopSchema = LoopSchema::new(
    "loop_2000c",
    Cardinality::Repeating,
    &[HL_SEGMENT],
    &[
        LoopSchema::new("loop_2100c", Cardinality::One, &[NM1_SEGMENT, EB_SEGMENT, DTP_SEGMENT], &[]),
        LOOP_2000D_271,
    ],
);
const LOOP_2000B_271: LoopSchema = LoopSchema::new(
    "loop_2000b",
    Cardinality::One,
    &[HL_SEGMENT],
    &[
        LoopSchema::new("loop_2100b", Cardinality::One, &[NM1_SEGMENT], &[]),
        LOOP_2000C_271,
    ],
);
const LOOP_2000A_271: LoopSchema = LoopSchema::new(
    "loop_2000a",
    Cardinality::One,
    &[HL_SEGMENT],
    &[
        LoopSchema::new("loop_2100a", Cardinality::One, &[NM1_SEGMENT], &[]),
        LOOP_2000B_271,
    ],
);

const TRANSACTION_271: TransactionSchema = TransactionSchema {
    transaction_code: "271",
    implementation_version: "005010X279A1",
    root_loops: &[LOOP_2000A_271],
    validators: &[
        ValidatorId::EnvelopeCount,
        ValidatorId::HlParentage,
        ValidatorId::HlChildCode,
        ValidatorId::SubscriberAsPatient,
        ValidatorId::DuplicateQualifier,
    ],
};

// ---- 276 claim status request (005010X212) ----
// level_code chain 20->21->19->22->23: source, receiver, provider, subscriber, dependent

const STC_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::an("health_care_claim_status_1", true, 1, 30),
    ElementSchema::date("status_information_effective_date", true),
];
const STC_SEGMENT: SegmentSchema = SegmentSchema::new("STC", STC_ELEMENTS, false, true);

const LOOP_2210E: LoopSchema = LoopSchema::new("loop_2210e", Cardinality::Repeating, &[TRN_SEGMENT, REF_SEGMENT], &[]);
const LOOP_2200E: LoopSchema = LoopSchema::new(
    "loop_2200e",
    Cardinality::Repeating,
    &[TRN_SEGMENT, STC_SEGMENT, REF_SEGMENT, DTP_SEGMENT],
    &[LOOP_2210E],
);
const LOOP_2100E: LoopSchema = LoopSchema::new("loop_2100e", Cardinality::One, &[NM1_SEGMENT], &[LOOP_2200E]);
const LOOP_2000E: LoopSchema = LoopSchema::new("loop_2000e", Cardinality::Repeating, &[HL_SEGMENT], &[LOOP_2100E]);

const LOOP_2210D: LoopSchema = LoopSchema::new("loop_2210d", Cardinality::Repeating, &[TRN_SEGMENT, REF_SEGMENT], &[]);
const LOOP_2200D: LoopSchema = LoopSchema::new(
    "loop_2200d",
    Cardinality::Repeating,
    &[TRN_SEGMENT, STC_SEGMENT, REF_SEGMENT, DTP_SEGMENT],
    &[LOOP_2210D],
);
const LOOP_2100D_276: LoopSchema = LoopSchema::new(
    "loop_2100d",
    Cardinality::One,
    &[NM1_SEGMENT],
    &[LOOP_2200D],
);
const LOOP_2000D_276: LoopSchema = LoopSchema::new(
    "loop_2000d",
    Cardinality::Repeating,
    &[HL_SEGMENT],
    &[LOOP_2100D_276, LOOP_2000E],
);
const LOOP_2000C_276: LoopSchema = LoopSchema::new(
    "loop_2000c",
    Cardinality::One,
    &[HL_SEGMENT],
    &[
        LoopSchema::new("loop_2100c", Cardinality::One, &[NM1_SEGMENT], &[]),
        LOOP_2000D_276,
    ],
);
const LOOP_2000B_276: LoopSchema = LoopSchema::new(
    "loop_2000b",
    Cardinality::One,
    &[HL_SEGMENT],
    &[
        LoopSchema::new("loop_2100b", Cardinality::One, &[NM1_SEGMENT], &[]),
        LOOP_2000C_276,
    ],
);
const LOOP_2000A_276: LoopSchema = LoopSchema::new(
    "loop_2000a",
    Cardinality::One,
    &[HL_SEGMENT],
    &[
        LoopSchema::new("loop_2100a", Cardinality::One, &[NM1_SEGMENT], &[]),
        LOOP_2000B_276,
    ],
);

const TRANSACTION_276: TransactionSchema = TransactionSchema {
    transaction_code: "276",
    implementation_version: "005010X212",
    root_loops: &[LOOP_2000A_276],
    validators: &[
        ValidatorId::EnvelopeCount,
        ValidatorId::HlParentage,
        ValidatorId::HlChildCode,
        ValidatorId::DuplicateQualifier,
    ],
};

// 277 reuses 276's loop topology (same HL hierarchy; STC rides in the
// 2200d/2200e tracking loops already defined above), mirroring
// x12_276_005010X212/parsing.py sharing one module for both directions.
const TRANSACTION_277: TransactionSchema = TransactionSchema {
    transaction_code: "277",
    implementation_version: "005010X212",
    root_loops: &[LOOP_2000A_276],
    validators: &[
        ValidatorId::EnvelopeCount,
        ValidatorId::HlParentage,
        ValidatorId::HlChildCode,
        ValidatorId::DuplicateQualifier,
    ],
};

// ---- 834 benefit enrollment ----

const INS_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::id("member_indicator", true, &["Y", "N"]),
    ElementSchema::id("individual_relationship_code", true, &["01", "18", "19", "20", "53"]),
];
const INS_SEGMENT: SegmentSchema = SegmentSchema::new("INS", INS_ELEMENTS, true, false);

const HD_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::id("maintenance_type_code", true, &["001", "021", "024", "025", "030"]),
    ElementSchema::an("insurance_line_code", false, 1, 3),
];
const HD_SEGMENT: SegmentSchema = SegmentSchema::new("HD", HD_ELEMENTS, false, true);

const LOOP_2100A_834: LoopSchema = LoopSchema::new("loop_2100a", Cardinality::One, &[NM1_SEGMENT], &[]);
const LOOP_2000_834: LoopSchema = LoopSchema::new(
    "loop_2000",
    Cardinality::Repeating,
    &[HL_SEGMENT, INS_SEGMENT, REF_SEGMENT, DTP_SEGMENT],
    &[LOOP_2100A_834, LoopSchema::new("loop_2300", Cardinality::Repeating, &[HD_SEGMENT], &[])],
);
const LOOP_1000B_834: LoopSchema = LoopSchema::new("loop_1000b", Cardinality::One, &[NM1_SEGMENT], &[]);
const LOOP_1000A_834: LoopSchema = LoopSchema::new("loop_1000a", Cardinality::One, &[NM1_SEGMENT], &[LOOP_1000B_834, LOOP_2000_834]);

const TRANSACTION_834: TransactionSchema = TransactionSchema {
    transaction_code: "834",
    implementation_version: "005010X220A1",
    root_loops: &[LOOP_1000A_834],
    validators: &[ValidatorId::EnvelopeCount, ValidatorId::HlParentage, ValidatorId::DuplicateQualifier],
};

// ---- 835 claim payment (005010X221A1) ----
// PLB is fixed as a footer-loop optional slot (§S.1 Open Question resolution).

const CLP_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::an("patient_control_number", true, 1, 38),
    ElementSchema::id("claim_status_code", true, &["1", "2", "3", "4", "19", "20", "22", "23"]),
    ElementSchema::decimal("total_claim_charge_amount", true),
    ElementSchema::decimal("claim_payment_amount", true),
    ElementSchema::decimal("patient_responsibility_amount", false),
];
const CLP_SEGMENT: SegmentSchema = SegmentSchema::new("CLP", CLP_ELEMENTS, true, false);

const SVC_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::an("composite_medical_procedure_identifier", true, 1, 48),
    ElementSchema::decimal("line_item_charge_amount", true),
    ElementSchema::decimal("line_item_provider_payment_amount", true),
];
const SVC_SEGMENT: SegmentSchema = SegmentSchema::new("SVC", SVC_ELEMENTS, false, true);

const CAS_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::id("claim_adjustment_group_code", true, &["CO", "CR", "OA", "PI", "PR"]),
    ElementSchema::an("adjustment_reason_code", true, 1, 5),
    ElementSchema::decimal("adjustment_amount", true),
];
const CAS_SEGMENT: SegmentSchema = SegmentSchema::new("CAS", CAS_ELEMENTS, false, true);

const PLB_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::an("provider_identifier", true, 1, 80),
    ElementSchema::date("fiscal_period_date", true),
    ElementSchema::decimal("provider_adjustment_amount", true),
];
const PLB_SEGMENT: SegmentSchema = SegmentSchema::new("PLB", PLB_ELEMENTS, false, true);

const LOOP_2110_835: LoopSchema = LoopSchema::new("loop_2110", Cardinality::Repeating, &[SVC_SEGMENT, CAS_SEGMENT, DTP_SEGMENT], &[]);
const LOOP_2100_835: LoopSchema = LoopSchema::new(
    "loop_2100",
    Cardinality::Repeating,
    &[CLP_SEGMENT, CAS_SEGMENT, NM1_SEGMENT, REF_SEGMENT, DTP_SEGMENT],
    &[LOOP_2110_835],
);
const LOOP_2000_835: LoopSchema =
    LoopSchema::new("loop_2000", Cardinality::Repeating, &[LX_SEGMENT], &[LOOP_2100_835]);
const LOOP_1000B_835: LoopSchema = LoopSchema::new("loop_1000b", Cardinality::One, &[NM1_SEGMENT, REF_SEGMENT], &[]);
const LOOP_1000A_835: LoopSchema =
    LoopSchema::new("loop_1000a", Cardinality::One, &[NM1_SEGMENT, REF_SEGMENT], &[LOOP_1000B_835, LOOP_2000_835]);
const FOOTER_835: LoopSchema = LoopSchema::new("footer", Cardinality::Optional, &[PLB_SEGMENT], &[]);

const TRANSACTION_835: TransactionSchema = TransactionSchema {
    transaction_code: "835",
    implementation_version: "005010X221A1",
    root_loops: &[LOOP_1000A_835, FOOTER_835],
    validators: &[
        ValidatorId::EnvelopeCount,
        ValidatorId::LxUniqueness835,
        ValidatorId::ClaimBalance835,
    ],
};

// ---- 837 professional claims (005010X222A1) ----

const CLM_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::an("patient_control_number", true, 1, 38),
    ElementSchema::decimal("total_claim_charge_amount", true),
    ElementSchema::an("health_care_service_location_information", true, 1, 30),
];
const CLM_SEGMENT: SegmentSchema = SegmentSchema::new("CLM", CLM_ELEMENTS, true, false);

// SV1, not SVC: 837 professional service lines carry the claim's own
// SV101/SV102 procedure/charge pair (SV1Segment in x12_837_005010X222A2);
// SVC belongs to 835's claim payment loop, a different transaction.
const SV1_ELEMENTS: &[ElementSchema] = &[
    ElementSchema::an("composite_medical_procedure_identifier", true, 1, 48),
    ElementSchema::decimal("line_item_charge_amount", true),
];
const SV1_SEGMENT: SegmentSchema = SegmentSchema::new("SV1", SV1_ELEMENTS, true, false);

const LOOP_2400_837: LoopSchema = LoopSchema::new("loop_2400", Cardinality::Repeating, &[LX_SEGMENT, SV1_SEGMENT, DTP_SEGMENT], &[]);
const LOOP_2300_837: LoopSchema =
    LoopSchema::new("loop_2300", Cardinality::Repeating, &[CLM_SEGMENT, REF_SEGMENT, DTP_SEGMENT], &[LOOP_2400_837]);
const LOOP_2010BA_837: LoopSchema = LoopSchema::new("loop_2010ba", Cardinality::One, &[NM1_SEGMENT], &[]);
const LOOP_2000B_837: LoopSchema =
    LoopSchema::new("loop_2000b", Cardinality::Repeating, &[HL_SEGMENT], &[LOOP_2010BA_837, LOOP_2300_837]);
const LOOP_2010AA_837: LoopSchema = LoopSchema::new("loop_2010aa", Cardinality::One, &[NM1_SEGMENT, REF_SEGMENT], &[]);
const LOOP_2000A_837: LoopSchema =
    LoopSchema::new("loop_2000a", Cardinality::One, &[HL_SEGMENT], &[LOOP_2010AA_837, LOOP_2000B_837]);

const TRANSACTION_837P: TransactionSchema = TransactionSchema {
    transaction_code: "837P",
    implementation_version: "005010X222A1",
    root_loops: &[LOOP_2000A_837],
    validators: &[
        ValidatorId::EnvelopeCount,
        ValidatorId::HlParentage,
        ValidatorId::ClaimTotals837,
    ],
};

const TRANSACTION_837I: TransactionSchema = TransactionSchema {
    transaction_code: "837I",
    implementation_version: "005010X223A2",
    root_loops: &[LOOP_2000A_837],
    validators: &[
        ValidatorId::EnvelopeCount,
        ValidatorId::HlParentage,
        ValidatorId::ClaimTotals837,
    ],
};

const REGISTRY: &[TransactionSchema] = &[
    TRANSACTION_270,
    TRANSACTION_271,
    TRANSACTION_276,
    TRANSACTION_277,
    TRANSACTION_834,
    TRANSACTION_835,
    TRANSACTION_837P,
    TRANSACTION_837I,
];

/// Looks up the schema registered for `(transaction_code, implementation_version)`.
pub fn lookup(transaction_code: &str, implementation_version: &str) -> Option<&'static TransactionSchema> {
    REGISTRY.iter().find(|t| {
        t.transaction_code.eq_ignore_ascii_case(transaction_code)
            && t.implementation_version.eq_ignore_ascii_case(implementation_version)
    })
}

/// Looks up the schema registered for `transaction_code`, regardless of
/// implementation version. Returns the first match; use [`lookup`] when the
/// caller has a specific version from GS08/ST03.
pub fn lookup_any_version(transaction_code: &str) -> Option<&'static TransactionSchema> {
    REGISTRY.iter().find(|t| t.transaction_code.eq_ignore_ascii_case(transaction_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_270() {
        let schema = lookup("270", "005010X279A1").unwrap();
        assert_eq!(schema.transaction_code, "270");
        assert_eq!(schema.root_loops.len(), 1);
        assert_eq!(schema.root_loops[0].name, "loop_2000a");
    }

    #[test]
    fn test_lookup_unknown_transaction() {
        assert!(lookup("999", "005010X000A1").is_none());
    }

    #[test]
    fn test_lookup_wrong_version() {
        assert!(lookup("270", "004010X000").is_none());
    }

    #[test]
    fn test_lookup_any_version() {
        assert!(lookup_any_version("835").is_some());
    }

    #[test]
    fn test_835_footer_holds_plb() {
        let schema = lookup("835", "005010X221A1").unwrap();
        let footer = schema.root_loops.iter().find(|l| l.name == "footer").unwrap();
        assert!(footer.segment_schema("PLB").is_some());
    }

    #[test]
    fn test_276_hl_chain_reaches_dependent_loop() {
        let schema = lookup("276", "005010X212").unwrap();
        let source = &schema.root_loops[0];
        assert_eq!(source.name, "loop_2000a");
        let receiver = &source.child_loops[1];
        assert_eq!(receiver.name, "loop_2000b");
        let provider = &receiver.child_loops[1];
        assert_eq!(provider.name, "loop_2000c");
        let subscriber = &provider.child_loops[1];
        assert_eq!(subscriber.name, "loop_2000d");
        let dependent = &subscriber.child_loops[1];
        assert_eq!(dependent.name, "loop_2000e");
    }

    #[test]
    fn test_all_registered_transactions_have_envelope_count_validator() {
        for schema in REGISTRY {
            assert!(schema.validators.contains(&ValidatorId::EnvelopeCount));
        }
    }
}
