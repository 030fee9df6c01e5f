use crate::domain::model::NavItem;
use crate::utils::error::{FolioError, Result};

/// Height of the sticky header, in pixels. A section counts as reached once
/// its top scrolls under the header.
pub const DEFAULT_HEADER_OFFSET: f64 = 70.0;

pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("about", "About Me"),
        NavItem::new("experience", "My Journey"),
        NavItem::new("skills", "My Toolkit"),
        NavItem::new("interests", "My Passions"),
        NavItem::new("education", "Learning Path"),
        NavItem::new("contact", "Let's Connect"),
    ]
}

/// Tracks where each section sits on the page and answers which navigation
/// item should be highlighted for a scroll position.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    items: Vec<NavItem>,
    tops: Vec<Option<f64>>,
    header_offset: f64,
}

impl ScrollSpy {
    pub fn new(items: Vec<NavItem>, header_offset: f64) -> Self {
        let tops = vec![None; items.len()];
        Self {
            items,
            tops,
            header_offset,
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Records the top offset of the section with `id`.
    pub fn place(&mut self, id: &str, top: f64) -> Result<()> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| FolioError::UnknownSection { id: id.to_string() })?;
        self.tops[index] = Some(top);
        Ok(())
    }

    /// The section whose top has most recently passed under the header. Above
    /// every placed section, the first item is active.
    pub fn active(&self, scroll_y: f64) -> Option<&NavItem> {
        let reached = self
            .items
            .iter()
            .zip(&self.tops)
            .filter_map(|(item, top)| top.map(|top| (item, top)))
            .filter(|(_, top)| top - self.header_offset <= scroll_y)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(item, _)| item);

        reached.or_else(|| self.items.first())
    }
}
