//! Claim totals validator (spec.md §4.7, 837 professional): the CLM
//! charge amount must equal the sum of its line items' charge amounts.

use x12_assembly::model::TransactionModel;

use crate::decimal;
use crate::error::{ValidationError, ValidationErrorKind};
use crate::walk;

pub fn check(model: &TransactionModel) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    walk::for_each_instance(&model.loops, &mut |path, instance| {
        let Some(clm) = instance.segments.iter().find(|seg| seg.is("CLM")) else {
            return;
        };
        let claim_total = decimal::parse_amount(clm.get_element(1));

        let mut line_total = (0i64, 0u8);
        for lines in instance.child_loops.iter().filter(|l| l.loop_name == "loop_2400") {
            for line in &lines.instances {
                if let Some(sv1) = line.segments.iter().find(|seg| seg.is("SV1")) {
                    line_total = decimal::add(line_total, decimal::parse_amount(sv1.get_element(1)));
                }
            }
        }

        if !decimal::eq(claim_total, line_total) {
            errors.push(ValidationError::new(
                format!("{path}/CLM"),
                ValidationErrorKind::ClaimTotalMismatch,
                format!(
                    "CLM charge amount {} does not equal sum of line charges {}",
                    decimal::format(claim_total),
                    decimal::format(line_total),
                ),
            ));
        }
    });

    errors
}
