//! Collapsible cards.
//!
//! A card's collapsed state lives on the card itself (a class flag in the
//! DOM); there is no separate model to keep in sync.

/// Toggle glyph for an expanded card (U+2212 MINUS SIGN).
pub const EXPANDED_GLYPH: &str = "\u{2212}";
/// Toggle glyph for a collapsed card.
pub const COLLAPSED_GLYPH: &str = "+";

/// CSS class carried by collapsed cards.
pub const COLLAPSED_CLASS: &str = "collapsed";
/// Selector for card containers.
pub const CARD_SELECTOR: &str = ".task-card1";
/// Selector for the toggle button inside a card.
pub const TOGGLE_SELECTOR: &str = ".collapse-btn";

pub trait CollapsibleCard {
    fn is_collapsed(&self) -> bool;
    fn set_collapsed(&mut self, collapsed: bool);
    /// Cards without a toggle button ignore this.
    fn set_glyph(&mut self, glyph: &str);
}

fn glyph_for(collapsed: bool) -> &'static str {
    if collapsed {
        COLLAPSED_GLYPH
    } else {
        EXPANDED_GLYPH
    }
}

/// Flip the card. Returns the new collapsed state.
pub fn toggle<C: CollapsibleCard + ?Sized>(card: &mut C) -> bool {
    let collapsed = !card.is_collapsed();
    card.set_collapsed(collapsed);
    card.set_glyph(glyph_for(collapsed));
    collapsed
}

/// Open the card if it is collapsed. Returns whether anything changed.
pub fn expand<C: CollapsibleCard + ?Sized>(card: &mut C) -> bool {
    if !card.is_collapsed() {
        return false;
    }
    card.set_collapsed(false);
    card.set_glyph(EXPANDED_GLYPH);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Card {
        collapsed: bool,
        glyph: Option<String>,
    }

    impl CollapsibleCard for Card {
        fn is_collapsed(&self) -> bool {
            self.collapsed
        }
        fn set_collapsed(&mut self, collapsed: bool) {
            self.collapsed = collapsed;
        }
        fn set_glyph(&mut self, glyph: &str) {
            self.glyph = Some(glyph.to_string());
        }
    }

    #[test]
    fn test_toggle_flips_state_and_glyph() {
        let mut card = Card::default();

        assert!(toggle(&mut card));
        assert_eq!(card.glyph.as_deref(), Some("+"));

        assert!(!toggle(&mut card));
        assert_eq!(card.glyph.as_deref(), Some(EXPANDED_GLYPH));
    }

    #[test]
    fn test_expand_only_touches_collapsed_cards() {
        let mut open = Card::default();
        assert!(!expand(&mut open));
        assert_eq!(open.glyph, None);

        let mut closed = Card {
            collapsed: true,
            glyph: Some("+".to_string()),
        };
        assert!(expand(&mut closed));
        assert!(!closed.collapsed);
        assert_eq!(closed.glyph.as_deref(), Some(EXPANDED_GLYPH));
    }
}
