//! Depth-first traversal of a [`TransactionModel`]'s loop tree, in document
//! order, with a slash-joined path for error reporting.

use x12_assembly::model::{AssembledLoop, LoopInstance};

/// Visits every loop instance in `loops`, depth-first, passing each
/// instance's path (e.g. `loop_2000[1]/loop_2100[0]`) and the instance
/// itself. Traversal order matches the document order the dispatcher
/// assembled the tree in, since the dispatcher consumes segments in
/// stream order.
pub fn for_each_instance<'a>(loops: &'a [AssembledLoop], visit: &mut dyn FnMut(&str, &'a LoopInstance)) {
    walk(loops, "", visit);
}

fn walk<'a>(loops: &'a [AssembledLoop], prefix: &str, visit: &mut dyn FnMut(&str, &'a LoopInstance)) {
    for loop_ in loops {
        for (index, instance) in loop_.instances.iter().enumerate() {
            let path = if prefix.is_empty() {
                format!("{}[{index}]", loop_.loop_name)
            } else {
                format!("{prefix}/{}[{index}]", loop_.loop_name)
            };
            visit(&path, instance);
            walk(&instance.child_loops, &path, visit);
        }
    }
}
