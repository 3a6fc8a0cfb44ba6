//! Low-level block primitives over the global allocator.
//!
//! Every `unsafe` function here carries a `// SAFETY:` comment. Callers in
//! `provisioner.rs` guarantee that `align` has passed
//! [`ProvisionerConfig::validate`](crate::ProvisionerConfig::validate).

#![allow(unsafe_code)]

use std::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;

/// Layout of a block holding an `align`-byte header followed by
/// `num_bytes` caller bytes. `None` if it cannot be described.
pub(crate) fn block_layout(num_bytes: usize, align: usize) -> Option<Layout> {
    let total = align.checked_add(num_bytes)?;
    Layout::from_size_align(total, align).ok()
}

/// Allocate a block and record `num_bytes` in its header.
///
/// Returns the caller pointer (`align` bytes past the block start), or
/// `None` if the allocator returned null.
///
/// # Safety
///
/// `layout` must come from `block_layout(num_bytes, align)`.
pub(crate) unsafe fn alloc_block(
    layout: Layout,
    num_bytes: usize,
    align: usize,
) -> Option<NonNull<u8>> {
    // SAFETY: layout size is at least `align` >= size_of::<usize>() > 0.
    let base = NonNull::new(unsafe { alloc(layout) })?;
    // SAFETY: base is aligned to `align` >= align_of::<usize>() and the
    // header spans at least size_of::<usize>() bytes.
    unsafe { base.as_ptr().cast::<usize>().write(num_bytes) };
    // SAFETY: `align` < layout.size(), so the offset stays in the block.
    Some(unsafe { base.add(align) })
}

/// Read the size recorded in the header in front of `ptr`.
///
/// # Safety
///
/// `ptr` must have been returned by [`alloc_block`] with the same `align`
/// and not yet passed to [`free_block`].
pub(crate) unsafe fn recorded_size(ptr: NonNull<u8>, align: usize) -> usize {
    // SAFETY: per the contract, the block start lies `align` bytes before
    // `ptr` and holds an initialized, aligned usize.
    unsafe { ptr.sub(align).as_ptr().cast::<usize>().read() }
}

/// Return a block to the global allocator.
///
/// # Safety
///
/// Same contract as [`recorded_size`]. After the call `ptr` dangles.
pub(crate) unsafe fn free_block(ptr: NonNull<u8>, align: usize) {
    // SAFETY: forwarded caller contract.
    let num_bytes = unsafe { recorded_size(ptr, align) };
    // SAFETY: the block was allocated with exactly this layout, which
    // block_layout accepted at allocation time.
    unsafe {
        let layout = Layout::from_size_align_unchecked(align + num_bytes, align);
        dealloc(ptr.sub(align).as_ptr(), layout);
    }
}
