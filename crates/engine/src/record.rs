//! The shape shared by every record kept in a [`Board`](crate::Board).

use core::fmt::{Debug, Display};

/// A record the admin screens can filter, search and edit.
pub trait Record: Clone {
    /// Stable identity used to match a draft against the collection.
    type Id: Copy + Eq + Debug + Display;
    /// Closed enumeration the selector filters on.
    type Kind: Copy + Eq + Debug;

    /// Whether committing a draft whose id is unknown inserts it at the
    /// front of the collection. When `false` such a commit is an error.
    const INSERTS_NEW: bool;

    fn id(&self) -> Self::Id;

    fn kind(&self) -> Self::Kind;

    /// Fields matched by the free-text query.
    fn search_fields(&self) -> Vec<&str>;

    /// Validation and normalization applied at commit time.
    ///
    /// Returning `None` rejects the draft: nothing is written and the edit
    /// session stays open.
    fn prepare_commit(self) -> Option<Self>;
}
