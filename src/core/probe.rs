//! core/probe.rs
//!
//! Tag presence probing and read precedence.
//!
//! `select_preferred_impl` is the only precedence rule in the crate:
//! walk the read order, first block that is present wins.

use super::filetype::FileType;
use super::policy::{self, TagFormatPolicy, TagImpl};

/// Anything that can answer "is this tag block in the file?".
///
/// Must never fail: unsupported impls simply report `false`.
pub trait TagPresence {
    fn has_impl(&self, tag_impl: TagImpl) -> bool;
}

/// First impl in `policy`'s read order that the handle carries,
/// or `TagImpl::None` if nothing is present.
pub fn select_preferred_impl<P>(handle: &P, file_type: FileType, policy: &TagFormatPolicy) -> TagImpl
where
    P: TagPresence + ?Sized,
{
    policy
        .read_order(file_type)
        .iter()
        .copied()
        .find(|tag_impl| handle.has_impl(*tag_impl))
        .unwrap_or(TagImpl::None)
}

/// Every present impl, in declared order.
pub fn enumerate_present_impls<P>(handle: &P, file_type: FileType) -> Vec<TagImpl>
where
    P: TagPresence + ?Sized,
{
    policy::supported_impls(file_type)
        .iter()
        .copied()
        .filter(|tag_impl| handle.has_impl(*tag_impl))
        .collect()
}
