/*!
Provides the "blank" predicate used by the parsers.

A value is blank when it is empty. Absent values are modelled by the
`Blank` variants of the parser inputs. Blank inputs are not errors in
and of themselves: parsing a blank time or time range yields `None`. But a
time range requires both of its endpoints to be non-blank.
*/

use alloc::{collections::BTreeMap, string::String};

/// A value that can be absent or empty.
pub(crate) trait Blank {
    /// Returns true when this value is absent or empty.
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<K, V> Blank for BTreeMap<K, V> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Returns true when the given value is absent or empty.
pub(crate) fn is_blank<T: Blank + ?Sized>(value: &T) -> bool {
    value.is_blank()
}
