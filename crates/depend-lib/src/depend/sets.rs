//! Order-preserving set algebra over resolved name lists
//!
//! Output order is defined by a linear scan of the left operand; hashing is
//! only used for membership tests.

use std::collections::HashSet;
use std::hash::Hash;

/// Elements of `a` that are also in `b`, in `a`'s order
pub fn intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let members: HashSet<&T> = b.iter().collect();
    a.iter().filter(|x| members.contains(x)).cloned().collect()
}

/// Elements of `a` that are not in `b`, in `a`'s order
pub fn exclusion<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let members: HashSet<&T> = b.iter().collect();
    a.iter().filter(|x| !members.contains(x)).cloned().collect()
}

/// `a` followed by the elements of `b` not already in `a`
pub fn union<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut result = a.to_vec();
    result.extend(exclusion(b, a));
    result
}

#[cfg(test)]
mod tests {
    include!("sets.test.rs");
}
