use std::collections::HashSet;

/// Recipe ids already served on earlier days of one week run.
///
/// Created empty per week request, grown once per generated day and dropped
/// when the request finishes. Tests may seed it with arbitrary ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedIdSet {
    ids: HashSet<u32>,
}

impl UsedIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn insert(&mut self, id: u32) -> bool {
        self.ids.insert(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<u32> for UsedIdSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<u32> for UsedIdSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}
