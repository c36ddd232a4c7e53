//! Ordered list of strings with small functional helpers.
//!
//! Every transform returns a new `List`; the receiver is never mutated.

use std::ops::Deref;

use serde::Serialize;

/// An ordered sequence of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct List(Vec<String>);

impl List {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Index of the first element equal to `target`, if any.
    #[must_use]
    pub fn index(&self, target: &str) -> Option<usize> {
        self.0.iter().position(|v| v == target)
    }

    /// Returns `true` if `target` is in the list.
    #[must_use]
    pub fn has(&self, target: &str) -> bool {
        self.index(target).is_some()
    }

    /// First element satisfying `f`.
    pub fn first_match<F>(&self, mut f: F) -> Option<&str>
    where
        F: FnMut(&str) -> bool,
    {
        self.0.iter().map(String::as_str).find(|&v| f(v))
    }

    /// Returns `true` if at least one element satisfies `f`.
    pub fn any<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        self.0.iter().any(|v| f(v.as_str()))
    }

    /// Returns `true` if every element satisfies `f` (vacuously true when empty).
    pub fn all<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        self.0.iter().all(|v| f(v.as_str()))
    }

    /// Elements satisfying `f`, in order.
    #[must_use]
    pub fn filter<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        self.0.iter().filter(|v| f(v.as_str())).cloned().collect()
    }

    /// Applies `f` to every element. The result has the same length.
    #[must_use]
    pub fn map<F, S>(&self, mut f: F) -> Self
    where
        F: FnMut(&str) -> S,
        S: Into<String>,
    {
        self.0.iter().map(|v| f(v.as_str()).into()).collect()
    }

    /// Expands every element with `f` and concatenates the results in order.
    #[must_use]
    pub fn explode<F, I>(&self, mut f: F) -> Self
    where
        F: FnMut(&str) -> I,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.0
            .iter()
            .flat_map(|v| f(v.as_str()).into_iter().map(Into::into))
            .collect()
    }
}

impl Deref for List {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for List {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for List {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<Vec<&str>> for List {
    fn eq(&self, other: &Vec<&str>) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for List {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.0.len() == N && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}
