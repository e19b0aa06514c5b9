//! Heap placement that survives allocation exhaustion.
//!
//! [`Box::new`] aborts the process when the allocator fails. The error
//! context constructor has to report that situation to its caller instead,
//! so it places the value with [`try_box`].

use alloc::{alloc::Layout, boxed::Box};

/// Moves `value` to the heap, handing it back in `Err` if the global
/// allocator cannot provide the memory.
///
/// # Examples
///
/// ```
/// use errslot_internals::try_box;
///
/// let boxed = try_box([7u64; 4]).unwrap();
/// assert_eq!(*boxed, [7u64; 4]);
/// ```
pub fn try_box<T>(value: T) -> Result<Box<T>, T> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        // Zero-sized values never touch the allocator.
        return Ok(Box::new(value));
    }

    // SAFETY: `layout` has a non-zero size, which was checked above.
    let ptr = unsafe { alloc::alloc::alloc(layout) }.cast::<T>();
    if ptr.is_null() {
        return Err(value);
    }

    // SAFETY: `ptr` is non-null and was just allocated with the layout of `T`,
    // so it is valid for writes and properly aligned. Nothing has been written
    // to it yet, so no previous value is overwritten without being dropped.
    unsafe { ptr.write(value) };

    // SAFETY: `ptr` points to an initialized `T` that was allocated by the
    // global allocator with `Layout::new::<T>()`, which is exactly the memory
    // layout `Box<T>` uses. Ownership is transferred to the box, and `ptr` is
    // not used afterwards.
    Ok(unsafe { Box::from_raw(ptr) })
}
