//! Cart badge synchronization.

use crate::page::{Display, Page};

/// Mirror the cart's unit count onto every badge on the page.
///
/// Badges show the count and are hidden when it is zero. Returns how many
/// badges were updated; a page without badges is left alone.
pub fn sync_badges(page: &mut impl Page, count: u64) -> usize {
    let display = if count > 0 { Display::Flex } else { Display::None };
    let updated = page.set_badges(count, display);
    if updated == 0 {
        tracing::debug!("No cart badges on page");
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    #[test]
    fn test_badges_show_count() {
        let mut page = MemoryPage::new().with_badges(2);
        assert_eq!(sync_badges(&mut page, 5), 2);

        for badge in page.badges() {
            assert_eq!(badge.text, "5");
            assert_eq!(badge.data_count.as_deref(), Some("5"));
            assert_eq!(badge.display, Some(Display::Flex));
        }
    }

    #[test]
    fn test_badges_hidden_at_zero() {
        let mut page = MemoryPage::new().with_badges(1);
        sync_badges(&mut page, 0);
        let badge = page.badges().first().expect("one badge");
        assert_eq!(badge.text, "0");
        assert_eq!(badge.display, Some(Display::None));
    }

    #[test]
    fn test_no_badges_is_noop() {
        let mut page = MemoryPage::new();
        assert_eq!(sync_badges(&mut page, 3), 0);
    }
}
