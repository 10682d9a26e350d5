/// External popularity (view-count) lookup.
///
/// Implementations own their timeouts, quotas and fallbacks: `lookup` always
/// yields a usable non-negative reading and never reports an error. A reading
/// of 0 means "no data"; callers decide how to degrade it.
#[allow(async_fn_in_trait)]
pub trait IPopularityLookup: Send + Sync {
    async fn lookup(&self, item_id: &str) -> u64;
}
