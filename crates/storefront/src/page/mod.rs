//! The view port.
//!
//! The quotation logic never owns markup. It reads and writes the page only
//! through [`Page`], addressing regions by the identifier/class contract below.
//! A browser host maps these onto DOM lookups; [`MemoryPage`] is the in-process
//! host used by tests and embedding hosts.
//!
//! Every write returns whether the target existed. Missing anchors are not
//! errors: the caller logs and skips its work.

mod memory;

pub use memory::{Badge, MemoryPage};

/// Class carried by every cart badge element.
pub const BADGE_CLASS: &str = "cart-badge";
/// Attribute mirroring the badge count.
pub const BADGE_COUNT_ATTR: &str = "data-count";
/// Class of a product listing card.
pub const PRODUCT_CARD_CLASS: &str = "product-detail-card";
/// Class of the action area inside a product card.
pub const PRODUCT_ACTIONS_CLASS: &str = "product-actions";
/// Target of the default "Get Quote" link the scanner replaces.
pub const QUOTE_LINK_HREF: &str = "contact.html";
/// Attribute holding a product card's explicit id.
pub const PRODUCT_ID_ATTR: &str = "data-product-id";
/// Marker attribute set on cards the scanner has wired.
pub const BOUND_MARKER_ATTR: &str = "data-quote-bound";
/// Attribute carrying the product id on table row controls.
pub const ROW_ID_ATTR: &str = "data-id";
/// Class of the quantity input in a table row.
pub const QTY_INPUT_CLASS: &str = "quote-qty-input";
/// Class of the delete button in a table row.
pub const DELETE_BUTTON_CLASS: &str = "quote-delete-btn";

/// Identified regions of the quotation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The quotation table as a whole.
    QuoteTable,
    /// The table body that receives rendered rows.
    QuoteTableBody,
    /// Panel shown when the cart is empty.
    EmptyState,
    /// Panel holding the checkout buttons.
    Checkout,
    /// Section holding the contact form for form checkout.
    CheckoutFormSection,
}

impl Anchor {
    /// Element id of the anchor in page markup.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::QuoteTable => "quoteTable",
            Self::QuoteTableBody => "quoteTableBody",
            Self::EmptyState => "quoteEmpty",
            Self::Checkout => "quoteCheckout",
            Self::CheckoutFormSection => "checkoutFormSection",
        }
    }
}

/// Display mode applied to a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Flex,
    Table,
}

impl Display {
    /// CSS `display` value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::Flex => "flex",
            Self::Table => "table",
        }
    }

    /// Whether the region is shown.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Handle to a product card on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardKey(usize);

impl CardKey {
    /// Create a handle from a host-specific index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The host-specific index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What a product card exposes, read at the moment of the call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCard {
    /// Explicit product id attribute.
    pub product_id: Option<String>,
    /// Heading text.
    pub heading: Option<String>,
    /// Source of the first product image.
    pub image_src: Option<String>,
    /// Category label text.
    pub category: Option<String>,
    /// Whether the action area still holds the default quote-request link.
    pub has_quote_link: bool,
    /// Whether the processed marker is present.
    pub bound: bool,
}

impl ProductCard {
    /// A card with a heading and its default quote-request link.
    #[must_use]
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            has_quote_link: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_product_id(mut self, id: impl Into<String>) -> Self {
        self.product_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image_src = Some(src.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Drop the default quote-request link.
    #[must_use]
    pub const fn without_quote_link(mut self) -> Self {
        self.has_quote_link = false;
        self
    }

    /// Drop the heading.
    #[must_use]
    pub fn without_heading(mut self) -> Self {
        self.heading = None;
        self
    }
}

/// Visual state of an "Add to Quote" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddControl {
    #[default]
    Idle,
    /// Transient confirmation after a successful add.
    Added,
}

impl AddControl {
    /// Class list of the control element.
    pub const CLASSES: &'static str = "btn btn-primary btn-sm add-to-quote-btn";

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Add to Quote",
            Self::Added => "Added!",
        }
    }

    /// Icon class shown before the label.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Idle => "fas fa-plus",
            Self::Added => "fas fa-check",
        }
    }

    /// Inline background override, if any.
    #[must_use]
    pub const fn background(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Added => Some("#10b981"),
        }
    }
}

/// Host view operations used by the quotation logic.
pub trait Page {
    /// Whether an anchor exists on this page.
    fn has_anchor(&self, anchor: Anchor) -> bool;

    /// Set an anchor's display mode.
    fn set_display(&mut self, anchor: Anchor, display: Display) -> bool;

    /// Replace an anchor's markup. Callers must pass escaped markup.
    fn set_inner_html(&mut self, anchor: Anchor, html: &str) -> bool;

    /// Scroll an anchor into view.
    fn scroll_into_view(&mut self, anchor: Anchor) -> bool;

    /// Update every badge element: text and count attribute, then display.
    ///
    /// Returns the number of badges updated.
    fn set_badges(&mut self, count: u64, display: Display) -> usize;

    /// All product cards currently on the page, in document order.
    fn product_cards(&self) -> Vec<CardKey>;

    /// Read a product card, or `None` if it is no longer on the page.
    fn product_card(&self, card: CardKey) -> Option<ProductCard>;

    /// Replace a card's default quote-request link with an add control.
    fn replace_quote_link(&mut self, card: CardKey, control: AddControl) -> bool;

    /// Set the processed marker on a card.
    fn mark_bound(&mut self, card: CardKey) -> bool;

    /// Restyle a card's add control. Returns `false` if the control is gone.
    fn set_add_control(&mut self, card: CardKey, control: AddControl) -> bool;

    /// Show a blocking notice to the user.
    fn alert(&mut self, message: &str);

    /// Open a URL in a new browsing context.
    fn open_in_new_context(&mut self, url: &str);
}
