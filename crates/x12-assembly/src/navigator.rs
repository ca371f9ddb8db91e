//! `LoopNavigator` implementation backed by `TransactionModel`.

use x12_schema::navigator::LoopNavigator;
use x12_schema::segment::OwnedSegment;

use crate::model::{AssembledLoop, LoopInstance, TransactionModel};

/// Wraps a `TransactionModel` reference to provide loop-scoped segment
/// queries by path, rather than by carrying aliasing references into the
/// tree while it is still being assembled.
pub struct TransactionModelNavigator<'a> {
    model: &'a TransactionModel,
}

impl<'a> TransactionModelNavigator<'a> {
    pub fn new(model: &'a TransactionModel) -> Self {
        Self { model }
    }
}

impl LoopNavigator for TransactionModelNavigator<'_> {
    fn find_segments_in_loop(
        &self,
        segment_id: &str,
        loop_path: &[&str],
        instance_index: usize,
    ) -> Vec<OwnedSegment> {
        let Some(instance) = resolve_instance(&self.model.loops, loop_path, instance_index) else {
            return Vec::new();
        };
        instance
            .segments
            .iter()
            .filter(|s| s.is(segment_id))
            .cloned()
            .collect()
    }

    fn find_segments_with_qualifier_in_loop(
        &self,
        segment_id: &str,
        element_index: usize,
        qualifier: &str,
        loop_path: &[&str],
        instance_index: usize,
    ) -> Vec<OwnedSegment> {
        self.find_segments_in_loop(segment_id, loop_path, instance_index)
            .into_iter()
            .filter(|s| s.get_element(element_index) == qualifier)
            .collect()
    }

    fn loop_instance_count(&self, loop_path: &[&str]) -> usize {
        resolve_loop(&self.model.loops, loop_path)
            .map(|l| l.instances.len())
            .unwrap_or(0)
    }
}

/// Navigates the loop hierarchy to find an `AssembledLoop` at the given
/// path. Intermediate path segments use the first repetition of the
/// named loop — callers asking for a nested path implicitly scope to
/// loop instance 0 at every level but the last.
fn resolve_loop<'a>(loops: &'a [AssembledLoop], path: &[&str]) -> Option<&'a AssembledLoop> {
    if path.is_empty() {
        return None;
    }
    let assembled = loops.iter().find(|l| l.loop_name == path[0])?;
    if path.len() == 1 {
        return Some(assembled);
    }
    let instance = assembled.instances.first()?;
    resolve_loop(&instance.child_loops, &path[1..])
}

fn resolve_instance<'a>(
    loops: &'a [AssembledLoop],
    path: &[&str],
    instance_index: usize,
) -> Option<&'a LoopInstance> {
    let assembled = resolve_loop(loops, path)?;
    assembled.instances.get(instance_index)
}
