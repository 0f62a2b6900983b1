//! In-process page host.

use std::collections::HashMap;

use super::{AddControl, Anchor, CardKey, Display, Page, ProductCard};

/// One identified region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Region {
    display: Option<Display>,
    inner_html: String,
    scrolled: bool,
}

/// One badge element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub data_count: Option<String>,
    pub display: Option<Display>,
}

#[derive(Debug, Clone)]
struct CardNode {
    card: ProductCard,
    control: Option<AddControl>,
}

/// A page held entirely in memory.
///
/// Builders add the anchors, badges and cards a scenario needs; accessors
/// expose what the quotation logic wrote so hosts can paint it and tests can
/// assert on it. Removed cards keep their key slot so stale handles resolve to
/// `None` rather than to a different card.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    regions: HashMap<Anchor, Region>,
    badges: Vec<Badge>,
    cards: Vec<Option<CardNode>>,
    alerts: Vec<String>,
    opened: Vec<String>,
}

impl MemoryPage {
    /// A page with no anchors, badges or cards.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The quotation page: every anchor plus one header badge.
    #[must_use]
    pub fn quotation_page() -> Self {
        Self::new()
            .with_anchor(Anchor::QuoteTable)
            .with_anchor(Anchor::QuoteTableBody)
            .with_anchor(Anchor::EmptyState)
            .with_anchor(Anchor::Checkout)
            .with_anchor(Anchor::CheckoutFormSection)
            .with_badges(1)
    }

    /// Add an anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.regions.entry(anchor).or_default();
        self
    }

    /// Add `count` badge elements.
    #[must_use]
    pub fn with_badges(mut self, count: usize) -> Self {
        self.badges
            .extend(std::iter::repeat_with(Badge::default).take(count));
        self
    }

    /// Add a product card.
    #[must_use]
    pub fn with_card(mut self, card: ProductCard) -> Self {
        self.insert_card(card);
        self
    }

    /// Insert a product card, returning its handle.
    pub fn insert_card(&mut self, card: ProductCard) -> CardKey {
        self.cards.push(Some(CardNode {
            card,
            control: None,
        }));
        CardKey::new(self.cards.len() - 1)
    }

    /// Remove a product card from the page.
    pub fn remove_card(&mut self, card: CardKey) {
        if let Some(slot) = self.cards.get_mut(card.index()) {
            *slot = None;
        }
    }

    /// Current display mode of an anchor, if it exists and has been set.
    #[must_use]
    pub fn display(&self, anchor: Anchor) -> Option<Display> {
        self.regions.get(&anchor).and_then(|r| r.display)
    }

    /// Current markup of an anchor.
    #[must_use]
    pub fn inner_html(&self, anchor: Anchor) -> Option<&str> {
        self.regions.get(&anchor).map(|r| r.inner_html.as_str())
    }

    /// Whether an anchor has been scrolled into view.
    #[must_use]
    pub fn was_scrolled(&self, anchor: Anchor) -> bool {
        self.regions.get(&anchor).is_some_and(|r| r.scrolled)
    }

    /// Badge elements.
    #[must_use]
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// Current add control of a card, if the card was wired.
    #[must_use]
    pub fn add_control(&self, card: CardKey) -> Option<AddControl> {
        self.node(card).and_then(|node| node.control)
    }

    /// Notices shown so far.
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// URLs opened so far.
    #[must_use]
    pub fn opened_urls(&self) -> &[String] {
        &self.opened
    }

    fn update_region(&mut self, anchor: Anchor, update: impl FnOnce(&mut Region)) -> bool {
        let Some(region) = self.regions.get_mut(&anchor) else {
            return false;
        };
        update(region);
        true
    }

    fn node(&self, card: CardKey) -> Option<&CardNode> {
        self.cards.get(card.index()).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, card: CardKey) -> Option<&mut CardNode> {
        self.cards.get_mut(card.index()).and_then(Option::as_mut)
    }
}

impl Page for MemoryPage {
    fn has_anchor(&self, anchor: Anchor) -> bool {
        self.regions.contains_key(&anchor)
    }

    fn set_display(&mut self, anchor: Anchor, display: Display) -> bool {
        self.update_region(anchor, |r| r.display = Some(display))
    }

    fn set_inner_html(&mut self, anchor: Anchor, html: &str) -> bool {
        self.update_region(anchor, |r| html.clone_into(&mut r.inner_html))
    }

    fn scroll_into_view(&mut self, anchor: Anchor) -> bool {
        self.update_region(anchor, |r| r.scrolled = true)
    }

    fn set_badges(&mut self, count: u64, display: Display) -> usize {
        let text = count.to_string();
        for badge in &mut self.badges {
            badge.text.clone_from(&text);
            badge.data_count = Some(text.clone());
            badge.display = Some(display);
        }
        self.badges.len()
    }

    fn product_cards(&self) -> Vec<CardKey> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_some())
            .map(|(index, _)| CardKey::new(index))
            .collect()
    }

    fn product_card(&self, card: CardKey) -> Option<ProductCard> {
        self.node(card).map(|node| node.card.clone())
    }

    fn replace_quote_link(&mut self, card: CardKey, control: AddControl) -> bool {
        match self.node_mut(card) {
            Some(node) if node.card.has_quote_link => {
                node.card.has_quote_link = false;
                node.control = Some(control);
                true
            }
            _ => false,
        }
    }

    fn mark_bound(&mut self, card: CardKey) -> bool {
        let Some(node) = self.node_mut(card) else {
            return false;
        };
        node.card.bound = true;
        true
    }

    fn set_add_control(&mut self, card: CardKey, control: AddControl) -> bool {
        match self.node_mut(card).and_then(|node| node.control.as_mut()) {
            Some(current) => {
                *current = control;
                true
            }
            None => false,
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }

    fn open_in_new_context(&mut self, url: &str) {
        self.opened.push(url.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_anchor_reports_false() {
        let mut page = MemoryPage::new().with_anchor(Anchor::QuoteTableBody);
        assert!(page.set_display(Anchor::QuoteTableBody, Display::Table));
        assert!(!page.set_display(Anchor::EmptyState, Display::Block));
        assert_eq!(page.display(Anchor::EmptyState), None);
    }

    #[test]
    fn test_removed_card_resolves_to_none() {
        let mut page = MemoryPage::new();
        let first = page.insert_card(ProductCard::new("Snack A"));
        let second = page.insert_card(ProductCard::new("Drink B"));
        page.remove_card(first);

        assert!(page.product_card(first).is_none());
        assert_eq!(page.product_cards(), vec![second]);
    }

    #[test]
    fn test_replace_requires_quote_link() {
        let mut page = MemoryPage::new();
        let card = page.insert_card(ProductCard::new("Snack A").without_quote_link());
        assert!(!page.replace_quote_link(card, AddControl::Idle));
        assert!(!page.set_add_control(card, AddControl::Added));
    }
}
