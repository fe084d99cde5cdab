//! Order-independent identity for facets
//!
//! Two facets are the same when they are built over the same multiset of
//! vertex (or edge) indices, regardless of winding or starting point. The
//! key sorts the indices and then offsets every element after the first by
//! one, so a leading zero cannot be confused with an absent element and
//! lists of different lengths never collide.

/// Canonical key for a list of indices
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FacetKey(Box<[usize]>);

impl FacetKey {
    pub fn new(indices: &[usize]) -> Self {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        for index in sorted.iter_mut().skip(1) {
            *index += 1;
        }
        Self(sorted.into_boxed_slice())
    }

    /// Key over any sequence of arena ids
    pub fn from_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<usize>,
    {
        let indices: Vec<usize> = ids.into_iter().map(Into::into).collect();
        Self::new(&indices)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
