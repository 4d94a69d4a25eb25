use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// First id a fresh process hands out.
const FIRST_ID: u64 = 0x0907;

static NEXT_ID: AtomicU64 = AtomicU64::new(FIRST_ID);

/// Hands out ids for rendered chart elements. The counter behind it is
/// process-wide and never reset, so ids stay unique across pipeline runs
/// and allocator instances; a new process starts over from the same offset.
#[derive(Default)]
pub struct ElementIdAllocator;

impl ElementIdAllocator {
    /// `prefix` followed by the next counter value; an empty prefix falls
    /// back to `"_"`.
    pub fn allocate(&self, prefix: &str) -> String {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let prefix = if prefix.is_empty() { "_" } else { prefix };
        format!("{prefix}{id}")
    }
}
