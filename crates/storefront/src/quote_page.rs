//! Event dispatch for the quotation page.
//!
//! The host translates UI events into [`PageEvent`]s; [`QuotePage`] turns them
//! into repository commands and re-derives the views from the resulting
//! snapshot. Badges are resynced whenever storage reports a persisted change.

use std::time::Duration;

use quotecart_core::{CartRepository, CartStorage, ProductId};

use crate::badge::sync_badges;
use crate::checkout::{CheckoutError, ContactForm, DeepLink, EMPTY_CART_NOTICE};
use crate::page::{AddControl, Anchor, CardKey, Display, Page};
use crate::scanner::{self, ADD_QUANTITY, ScanReport};
use crate::scheduler::{DeferredTask, Scheduler};
use crate::table::{TableRender, render_quotation_table};

/// UI events the quotation logic reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// A row's quantity input changed.
    QuantityChanged { id: ProductId, raw: String },
    /// A row's delete button was clicked.
    DeleteClicked { id: ProductId },
    /// A card's add control was activated.
    AddToQuote { card: CardKey },
    /// The direct checkout button was clicked.
    CheckoutDirect,
    /// The "checkout with form" button was clicked.
    ShowCheckoutForm,
    /// The checkout form was submitted.
    FormSubmitted(ContactForm),
}

/// What the host must do with the originating UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disposition {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl Disposition {
    /// Let the event continue normally.
    pub const PROCEED: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };

    /// Suppress the browser's default navigation.
    pub const PREVENT_DEFAULT: Self = Self {
        prevent_default: true,
        stop_propagation: false,
    };

    /// Suppress navigation and bubbling.
    pub const CONSUME: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };
}

/// Settings for a [`QuotePage`].
#[derive(Debug, Clone)]
pub struct PageSettings {
    /// Outbound deep link for checkout messages.
    pub deep_link: DeepLink,
    /// How long the "Added!" confirmation stays before reverting.
    pub confirm_delay: Duration,
}

/// The quotation cart wired to a page.
#[derive(Debug)]
pub struct QuotePage<S, P, T> {
    repo: CartRepository<S>,
    page: P,
    scheduler: T,
    settings: PageSettings,
    synced_revision: u64,
}

impl<S, P, T> QuotePage<S, P, T>
where
    S: CartStorage,
    P: Page,
    T: Scheduler,
{
    /// Attach a repository to a page. Nothing is rendered until [`Self::init`].
    pub fn new(repo: CartRepository<S>, page: P, scheduler: T, settings: PageSettings) -> Self {
        let synced_revision = repo.revision();
        Self {
            repo,
            page,
            scheduler,
            settings,
            synced_revision,
        }
    }

    /// Page-load pass: sync badges, render the table, wire product cards.
    pub fn init(&mut self) -> ScanReport {
        self.sync_badges();
        self.render_table();
        scanner::scan(&mut self.page)
    }

    /// Re-run the scanner, e.g. after the host inserted new cards.
    pub fn rescan(&mut self) -> ScanReport {
        scanner::scan(&mut self.page)
    }

    /// Handle one UI event.
    pub fn handle(&mut self, event: PageEvent) -> Disposition {
        let disposition = match event {
            PageEvent::QuantityChanged { id, raw } => {
                self.repo.update_qty(&id, &raw);
                self.render_table();
                Disposition::PROCEED
            }
            PageEvent::DeleteClicked { id } => {
                self.repo.remove(&id);
                self.render_table();
                Disposition::PROCEED
            }
            PageEvent::AddToQuote { card } => {
                self.add_from_card(card);
                Disposition::CONSUME
            }
            PageEvent::CheckoutDirect => {
                self.checkout_direct();
                Disposition::PREVENT_DEFAULT
            }
            PageEvent::ShowCheckoutForm => {
                self.show_checkout_form();
                Disposition::PREVENT_DEFAULT
            }
            PageEvent::FormSubmitted(form) => {
                self.submit_form(&form);
                Disposition::PREVENT_DEFAULT
            }
        };

        if self.repo.revision() != self.synced_revision {
            self.sync_badges();
        }
        disposition
    }

    /// Run a task the scheduler handed back.
    pub fn run_deferred(&mut self, task: DeferredTask) {
        match task {
            DeferredTask::RestoreAddControl(card) => {
                if !self.page.set_add_control(card, AddControl::Idle) {
                    tracing::debug!(card = card.index(), "Add control gone before revert");
                }
            }
        }
    }

    /// Rebuild the table from the current cart.
    pub fn render_table(&mut self) -> TableRender {
        render_quotation_table(&mut self.page, &self.repo.get_all())
    }

    /// Mirror the current unit count onto the badges.
    pub fn sync_badges(&mut self) {
        sync_badges(&mut self.page, self.repo.count());
        self.synced_revision = self.repo.revision();
    }

    /// The repository.
    #[must_use]
    pub const fn repository(&self) -> &CartRepository<S> {
        &self.repo
    }

    /// The page.
    #[must_use]
    pub const fn page(&self) -> &P {
        &self.page
    }

    /// The page, mutably (for host-side edits such as inserting cards).
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    /// The scheduler, mutably (to drain fired tasks).
    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }

    fn add_from_card(&mut self, card: CardKey) {
        let Some(snapshot) = self.page.product_card(card) else {
            tracing::debug!(card = card.index(), "Activated card is gone");
            return;
        };
        if !snapshot.bound {
            tracing::debug!(card = card.index(), "Activated card was never wired");
            return;
        }
        let Some(product) = scanner::product_ref(&snapshot) else {
            tracing::debug!(card = card.index(), "Activated card has no heading");
            return;
        };

        self.repo.add(product, ADD_QUANTITY);

        if self.page.set_add_control(card, AddControl::Added) {
            self.scheduler.schedule(
                self.settings.confirm_delay,
                DeferredTask::RestoreAddControl(card),
            );
        }
    }

    fn checkout_direct(&mut self) {
        match self.settings.deep_link.direct(&self.repo.get_all()) {
            Ok(url) => self.page.open_in_new_context(&url),
            Err(CheckoutError::EmptyCart) => {
                tracing::info!("Direct checkout on empty cart ignored");
            }
        }
    }

    fn show_checkout_form(&mut self) {
        if self
            .page
            .set_display(Anchor::CheckoutFormSection, Display::Block)
        {
            self.page.scroll_into_view(Anchor::CheckoutFormSection);
        } else {
            tracing::debug!("No checkout form section on page");
        }
    }

    fn submit_form(&mut self, form: &ContactForm) {
        match self.settings.deep_link.with_form(&self.repo.get_all(), form) {
            Ok(url) => self.page.open_in_new_context(&url),
            Err(CheckoutError::EmptyCart) => {
                tracing::info!("Form checkout on empty cart rejected");
                self.page.alert(EMPTY_CART_NOTICE);
            }
        }
    }
}
