//! Loop Dispatcher (spec.md §4.5): schema-tree-guided recursive descent
//! that consumes a flat segment stream into the nested `TransactionModel`.
//!
//! The teacher's MIG-guided assembler matches a flat list of MIG segments
//! and segment groups against the input in declaration order; this keeps
//! that shape but walks `x12_schema::loop_schema::LoopSchema` trees
//! instead of `mig_types`' segment-group trees. Recursion threads parent
//! context implicitly through the call stack, which plays the role
//! spec.md's `ParserContext` breadcrumb slots play in a flat
//! state-machine formulation: each recursive call is already scoped to
//! exactly the loop instance it is filling in, so there is nothing to
//! rebind explicitly.

use x12_schema::element;
use x12_schema::loop_schema::{Cardinality, LoopSchema};
use x12_schema::segment::OwnedSegment;
use x12_schema::segment_schema::SegmentSchema;
use x12_schema::transaction_schema::TransactionSchema;

use crate::error::{AssemblyError, ElementTypingIssue};
use crate::matcher::matches_segment_tag;
use crate::model::{AssembledLoop, LoopInstance};

/// Consumes `segments` (ST/SE excluded) according to `schema`'s root
/// loops, producing the `TransactionModel` body.
///
/// Element typing failures (spec.md §7 item 3) don't stop the walk: the
/// full tree is still built so structural errors aren't masked by a
/// typing error buried deep in it, but if any typing issue was recorded
/// the transaction as a whole is reported invalid at the end.
pub fn dispatch(
    segments: &[OwnedSegment],
    schema: &TransactionSchema,
) -> Result<Vec<AssembledLoop>, AssemblyError> {
    let mut position = 0usize;
    let mut loops = Vec::new();
    let mut typing_issues = Vec::new();
    for loop_schema in schema.root_loops {
        match try_consume_loop(segments, &mut position, loop_schema, &mut typing_issues)? {
            Some(assembled) => loops.push(assembled),
            None if loop_schema.cardinality == Cardinality::One => {
                return Err(AssemblyError::MissingMandatory {
                    segment_id: entry_segment_id(loop_schema).to_string(),
                    loop_name: loop_schema.name.to_string(),
                })
            }
            None => {}
        }
    }
    if !typing_issues.is_empty() {
        return Err(AssemblyError::ElementTyping { issues: typing_issues });
    }
    Ok(loops)
}

fn entry_segment_id(loop_schema: &LoopSchema) -> &'static str {
    loop_schema.segments.first().map(|s| s.segment_id).unwrap_or("")
}

fn entry_matches(segments: &[OwnedSegment], position: usize, loop_schema: &LoopSchema) -> bool {
    let entry = entry_segment_id(loop_schema);
    if entry.is_empty() {
        return false;
    }
    segments
        .get(position)
        .is_some_and(|s| matches_segment_tag(&s.id, entry))
}

/// Consumes zero or more repetitions of `loop_schema`. Returns `None`
/// (leaving `position` untouched) if the loop's entry segment never
/// matches at the current position.
fn try_consume_loop(
    segments: &[OwnedSegment],
    position: &mut usize,
    loop_schema: &LoopSchema,
    typing_issues: &mut Vec<ElementTypingIssue>,
) -> Result<Option<AssembledLoop>, AssemblyError> {
    let mut instances = Vec::new();
    while entry_matches(segments, *position, loop_schema) {
        instances.push(consume_loop_instance(segments, position, loop_schema, typing_issues)?);
        if loop_schema.cardinality != Cardinality::Repeating {
            break;
        }
    }
    if instances.is_empty() {
        return Ok(None);
    }
    Ok(Some(AssembledLoop {
        loop_name: loop_schema.name.to_string(),
        instances,
    }))
}

/// Consumes exactly one repetition of `loop_schema`: its own segment
/// slots in schema order, then its child loops.
fn consume_loop_instance(
    segments: &[OwnedSegment],
    position: &mut usize,
    loop_schema: &LoopSchema,
    typing_issues: &mut Vec<ElementTypingIssue>,
) -> Result<LoopInstance, AssemblyError> {
    let mut instance = LoopInstance::default();

    for segment_schema in loop_schema.segments {
        while let Some(seg) = segments.get(*position) {
            if !matches_segment_tag(&seg.id, segment_schema.segment_id) {
                break;
            }
            type_segment(seg, segment_schema, typing_issues);
            instance.segments.push(seg.clone());
            *position += 1;
            if !segment_schema.repeatable {
                break;
            }
        }
    }

    for child_schema in loop_schema.child_loops {
        match try_consume_loop(segments, position, child_schema, typing_issues)? {
            Some(child) => instance.child_loops.push(child),
            None if child_schema.cardinality == Cardinality::One => {
                return Err(AssemblyError::MissingMandatory {
                    segment_id: entry_segment_id(child_schema).to_string(),
                    loop_name: child_schema.name.to_string(),
                })
            }
            None => {}
        }
    }

    Ok(instance)
}

/// Types `seg`'s elements against `segment_schema` (spec.md §4.4),
/// recording any format, length, required-ness, or enum domain failure
/// rather than stopping the walk.
fn type_segment(seg: &OwnedSegment, segment_schema: &SegmentSchema, typing_issues: &mut Vec<ElementTypingIssue>) {
    for (index, element_schema) in segment_schema.elements.iter().enumerate() {
        let raw = seg.get_element(index);
        match element::type_element(raw, element_schema, &seg.id, index) {
            Ok(_) => {
                if let Err(err) = element::check_enum_domain(raw, element_schema, &seg.id, index) {
                    typing_issues.push(err.into());
                }
            }
            Err(err) => typing_issues.push(err.into()),
        }
    }
}
