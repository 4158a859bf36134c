use crate::context::ScanContext;
use crate::traits::{ContentType, Construct, Trigger};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Registered constructs, bucketed by content type and trigger.
///
/// Buckets are computed once at registration so dispatch is a single map
/// lookup per position.
pub struct ConstructTable<Ctx>
where
    Ctx: ScanContext,
{
    constructs: Vec<Box<dyn Construct<Ctx>>>,
    buckets: HashMap<(ContentType, Trigger), Vec<usize>>,
}

impl<Ctx> ConstructTable<Ctx>
where
    Ctx: ScanContext,
{
    pub fn new() -> Self {
        Self {
            constructs: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    /// Adds a construct under each of its triggers.
    pub fn register(&mut self, construct: Box<dyn Construct<Ctx>>) {
        let index = self.constructs.len();
        let content = construct.content();
        for &trigger in construct.triggers() {
            self.buckets
                .entry((content, trigger))
                .or_default()
                .push(index);
        }
        self.constructs.push(construct);

        let constructs = &self.constructs;
        for bucket in self.buckets.values_mut() {
            // Stable: equal priorities keep registration order.
            bucket.sort_by_key(|&i| Reverse(constructs[i].priority()));
        }
    }

    /// Returns the constructs that can start on `trigger`, highest priority first.
    pub fn candidates(
        &self,
        content: ContentType,
        trigger: Trigger,
    ) -> impl Iterator<Item = &dyn Construct<Ctx>> + '_ {
        self.buckets
            .get(&(content, trigger))
            .into_iter()
            .flatten()
            .map(|&index| -> &dyn Construct<Ctx> { self.constructs[index].as_ref() })
    }

    pub fn len(&self) -> usize {
        self.constructs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructs.is_empty()
    }
}

impl<Ctx> Default for ConstructTable<Ctx>
where
    Ctx: ScanContext,
{
    fn default() -> Self {
        Self::new()
    }
}
