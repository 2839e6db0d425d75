use std::fmt;

use crate::bitmap::Bitmap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(u32);

impl PageId {
    pub const FIRST: PageId = PageId(1);

    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug)]
pub struct Page {
    id: PageId,
    name: String,
    snapshot: Option<Bitmap>,
}

impl Page {
    pub fn snapshot(&self) -> Option<&Bitmap> {
        self.snapshot.as_ref()
    }
}

/// What the page list shows for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageEntry {
    pub id: PageId,
    pub name: String,
    pub active: bool,
}

/// Ordered pages plus the active-page pointer. Once a page exists the pointer
/// always names one of them.
#[derive(Debug, Default)]
pub struct PageStore {
    pages: Vec<Page>,
    active: Option<PageId>,
}

impl PageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn next_id(&self) -> PageId {
        self.pages
            .iter()
            .map(|page| page.id)
            .max()
            .map_or(PageId::FIRST, PageId::next)
    }

    /// Appends an empty page named from its freshly allocated id. The caller
    /// decides when it becomes active.
    pub fn push(&mut self, name: impl FnOnce(PageId) -> String) -> PageId {
        let id = self.next_id();
        self.pages.push(Page {
            id,
            name: name(id),
            snapshot: None,
        });
        id
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    pub fn contains(&self, id: PageId) -> bool {
        self.get(id).is_some()
    }

    pub fn active_id(&self) -> Option<PageId> {
        self.active
    }

    pub fn active(&self) -> Option<&Page> {
        self.active.and_then(|id| self.get(id))
    }

    /// Returns false, leaving the pointer alone, when `id` is unknown.
    pub fn set_active(&mut self, id: PageId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.active = Some(id);
        true
    }

    pub fn store_active(&mut self, snapshot: Bitmap) {
        let Some(id) = self.active else {
            return;
        };
        if let Some(page) = self.pages.iter_mut().find(|page| page.id == id) {
            page.snapshot = Some(snapshot);
        }
    }

    pub fn entries(&self) -> Vec<PageEntry> {
        self.pages
            .iter()
            .map(|page| PageEntry {
                id: page.id,
                name: page.name.clone(),
                active: Some(page.id) == self.active,
            })
            .collect()
    }
}
