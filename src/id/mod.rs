//! Interned ids for names, prefixes and namespaces.
//!
//! Ids are small and `Copy`, and only mean something for the [`Dom`] that
//! handed them out.
//!
//! [`Dom`]: crate::Dom

mod interner;

use interner::{Interned, Interner};

macro_rules! interned_id {
    ($(#[$meta:meta])* $id:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Ord, PartialOrd)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $id(pub(crate) u32);

        impl Interned for $id {
            fn from_index(index: usize) -> Self {
                $id(index as u32)
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

interned_id!(
    /// An expanded name: a local name in a namespace.
    ///
    /// Two names with the same local name and namespace have the same id, no
    /// matter which prefix was used to write them.
    NameId
);

interned_id!(
    /// A namespace URI. The empty URI stands for "no namespace".
    NamespaceId
);

interned_id!(
    /// A prefix. The empty prefix is used for the default namespace.
    PrefixId
);

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub(crate) struct ExpandedName {
    pub(crate) local: String,
    pub(crate) namespace: NamespaceId,
}

pub(crate) type NameTable = Interner<NameId, ExpandedName>;
pub(crate) type NamespaceTable = Interner<NamespaceId, String>;
pub(crate) type PrefixTable = Interner<PrefixId, String>;
