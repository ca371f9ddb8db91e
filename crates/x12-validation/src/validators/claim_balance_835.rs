//! Claim balance validator (spec.md §4.7, 835): for each claim payment
//! record, `charge_amount - payment_amount` must equal the sum of every
//! CAS adjustment amount at both the claim level and its service lines.
//! Comparison is exact fixed-point decimal, never floating point.

use x12_assembly::model::TransactionModel;

use crate::decimal;
use crate::error::{ValidationError, ValidationErrorKind};
use crate::walk;

pub fn check(model: &TransactionModel) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    walk::for_each_instance(&model.loops, &mut |path, instance| {
        let Some(clp) = instance.segments.iter().find(|seg| seg.is("CLP")) else {
            return;
        };
        let charge = decimal::parse_amount(clp.get_element(2));
        let payment = decimal::parse_amount(clp.get_element(3));

        let mut adjustments: Vec<decimal::Amount> = instance
            .segments
            .iter()
            .filter(|seg| seg.is("CAS"))
            .map(|seg| decimal::parse_amount(seg.get_element(2)))
            .collect();

        for service_lines in instance.child_loops.iter().filter(|l| l.loop_name == "loop_2110") {
            for line in &service_lines.instances {
                adjustments.extend(
                    line.segments
                        .iter()
                        .filter(|seg| seg.is("CAS"))
                        .map(|seg| decimal::parse_amount(seg.get_element(2))),
                );
            }
        }

        let balance = decimal::sub(charge, payment);
        let total_adjustments = decimal::sum(adjustments);
        if !decimal::eq(balance, total_adjustments) {
            errors.push(ValidationError::new(
                format!("{path}/CLP"),
                ValidationErrorKind::ClaimBalanceMismatch,
                format!(
                    "charge {} minus payment {} is {} but adjustments sum to {}",
                    decimal::format(charge),
                    decimal::format(payment),
                    decimal::format(balance),
                    decimal::format(total_adjustments),
                ),
            ));
        }
    });

    errors
}
