use crate::{
    contact::{ContactSession, Field, Mode},
    content::ItemId,
    disclosure::{Disclosure, DisclosureChange},
    overlay::{Modal, ModalKind, Presence, ResetTicket, SettleTicket},
};

/// Which product folder is shown and which project in it is drilled into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSession {
    pub folder: Disclosure<ItemId>,
    pub project: Disclosure<ItemId>,
}

impl FolderSession {
    pub fn show_folder(&mut self, product: ItemId) {
        if self.folder.select(product) == DisclosureChange::Switched {
            self.project.clear();
        }
    }

    pub fn open_project(&mut self, project: ItemId) -> DisclosureChange {
        self.project.select(project)
    }

    pub fn back(&mut self) -> DisclosureChange {
        self.project.clear()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingSession {
    pub tier: Disclosure<ItemId>,
}

/// Root-owned overlay state. Every modal is independent; opening one leaves the
/// others alone and z-order comes from `ModalKind::z_class`.
#[derive(Debug, Clone)]
pub struct ModalStack {
    pub contact: Modal<ContactSession>,
    pub pricing: Modal<PricingSession>,
    pub portfolio: Modal<FolderSession>,
}

impl Default for ModalStack {
    fn default() -> Self {
        Self {
            contact: Modal::new(ModalKind::Contact),
            pricing: Modal::new(ModalKind::Pricing),
            portfolio: Modal::new(ModalKind::Portfolio),
        }
    }
}

impl ModalStack {
    pub fn open(&mut self, kind: ModalKind) -> bool {
        let opened = match kind {
            ModalKind::Contact => self.contact.open(),
            ModalKind::Pricing => self.pricing.open(),
            ModalKind::Portfolio => self.portfolio.open(),
        };
        if opened {
            log::debug!("opened {kind:?}");
        }
        opened
    }

    pub fn close(&mut self, kind: ModalKind) -> Option<ResetTicket> {
        let ticket = match kind {
            ModalKind::Contact => self.contact.close(),
            ModalKind::Pricing => self.pricing.close(),
            ModalKind::Portfolio => self.portfolio.close(),
        };
        if ticket.is_some() {
            log::debug!("closed {kind:?}");
        }
        ticket
    }

    pub fn settle_ticket(&self, kind: ModalKind) -> SettleTicket {
        match kind {
            ModalKind::Contact => self.contact.settle_ticket(),
            ModalKind::Pricing => self.pricing.settle_ticket(),
            ModalKind::Portfolio => self.portfolio.settle_ticket(),
        }
    }

    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        match ticket.kind() {
            ModalKind::Contact => self.contact.settle(ticket),
            ModalKind::Pricing => self.pricing.settle(ticket),
            ModalKind::Portfolio => self.portfolio.settle(ticket),
        }
    }

    pub fn finish_reset(&mut self, ticket: ResetTicket) -> bool {
        match ticket.kind() {
            ModalKind::Contact => self.contact.finish_reset(ticket),
            ModalKind::Pricing => self.pricing.finish_reset(ticket),
            ModalKind::Portfolio => self.portfolio.finish_reset(ticket),
        }
    }

    pub fn presence(&self, kind: ModalKind) -> Presence {
        match kind {
            ModalKind::Contact => self.contact.presence(),
            ModalKind::Pricing => self.pricing.presence(),
            ModalKind::Portfolio => self.portfolio.presence(),
        }
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.presence(kind).is_shown()
    }

    /// Opens the portfolio overlay on a product's nested items. Opening first so a
    /// pending reset can't wipe the selection.
    pub fn open_folder(&mut self, product: ItemId) -> bool {
        let opened = self.open(ModalKind::Portfolio);
        self.portfolio.state_mut().show_folder(product);
        opened
    }

    /// Moves from a pricing tier to the contact dialog with the subject filled in.
    /// A subject already typed into an open dialog is kept.
    pub fn inquire(&mut self, tier: ItemId, tier_title: &str) -> Option<ResetTicket> {
        self.pricing.state_mut().tier.select(tier);
        let ticket = self.close(ModalKind::Pricing);
        let opened = self.open(ModalKind::Contact);
        let session = self.contact.state_mut();
        if opened || session.form.value(Field::Subject).trim().is_empty() {
            session.prefill_subject(format!("Inquiry: {tier_title}"));
        }
        ticket
    }

    /// Leaves pricing for the contact dialog already in strategist mode.
    pub fn start_brief(&mut self) -> Option<ResetTicket> {
        let ticket = self.close(ModalKind::Pricing);
        self.open(ModalKind::Contact);
        self.contact.state_mut().form.set_mode(Mode::Strategist);
        ticket
    }

    /// The open overlay drawn above the others, which is what Escape dismisses.
    pub fn topmost_open(&self) -> Option<ModalKind> {
        [ModalKind::Portfolio, ModalKind::Pricing, ModalKind::Contact]
            .into_iter()
            .find(|kind| self.is_open(*kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modals_are_independent() {
        let mut stack = ModalStack::default();
        assert!(stack.open(ModalKind::Portfolio));
        assert!(stack.open(ModalKind::Contact));
        assert!(stack.is_open(ModalKind::Portfolio));
        assert!(stack.is_open(ModalKind::Contact));
        assert!(!stack.is_open(ModalKind::Pricing));

        stack.close(ModalKind::Contact);
        assert!(stack.is_open(ModalKind::Portfolio));
        assert!(!stack.is_open(ModalKind::Contact));
    }

    #[test]
    fn test_reset_ticket_routes_to_its_modal() {
        let mut stack = ModalStack::default();
        stack.open_folder(ItemId::new("web-development"));
        stack.portfolio.state_mut().open_project(ItemId::new("zaidi"));
        let ticket = stack.close(ModalKind::Portfolio).unwrap();
        let exit = stack.settle_ticket(ModalKind::Portfolio);
        assert!(stack.settle(exit));
        assert_eq!(stack.presence(ModalKind::Portfolio), Presence::Hidden);

        assert!(stack.finish_reset(ticket));
        assert_eq!(stack.portfolio.state(), &FolderSession::default());
    }

    #[test]
    fn test_reopened_folder_keeps_new_selection() {
        let mut stack = ModalStack::default();
        stack.open_folder(ItemId::new("first"));
        stack.portfolio.state_mut().open_project(ItemId::new("project"));
        stack.close(ModalKind::Portfolio);

        stack.open_folder(ItemId::new("second"));
        let session = stack.portfolio.state();
        assert!(session.folder.is_active(&ItemId::new("second")));
        assert!(!session.project.is_open());
    }

    #[test]
    fn test_folder_drill_down_and_back() {
        let mut session = FolderSession::default();
        session.show_folder(ItemId::new("web"));
        assert_eq!(
            session.open_project(ItemId::new("zaidi")),
            DisclosureChange::Opened
        );
        assert_eq!(
            session.open_project(ItemId::new("zaidi")),
            DisclosureChange::Unchanged
        );
        assert_eq!(session.back(), DisclosureChange::Closed);
        assert!(session.folder.is_open());

        session.open_project(ItemId::new("susan"));
        session.show_folder(ItemId::new("other"));
        assert!(!session.project.is_open());
    }

    #[test]
    fn test_inquire_hands_over_to_contact() {
        let mut stack = ModalStack::default();
        stack.open(ModalKind::Pricing);
        let ticket = stack.inquire(ItemId::new("the-core"), "The Core");
        assert!(ticket.is_some());
        assert!(!stack.is_open(ModalKind::Pricing));
        assert!(stack.is_open(ModalKind::Contact));
        assert_eq!(
            stack.contact.state().form.value(Field::Subject),
            "Inquiry: The Core"
        );
    }

    #[test]
    fn test_start_brief_opens_strategist_mode() {
        let mut stack = ModalStack::default();
        stack.open(ModalKind::Pricing);
        assert!(stack.start_brief().is_some());
        assert!(stack.is_open(ModalKind::Contact));
        assert!(!stack.is_open(ModalKind::Pricing));
        assert_eq!(stack.contact.state().form.mode(), Mode::Strategist);
    }

    #[test]
    fn test_escape_targets_topmost() {
        let mut stack = ModalStack::default();
        assert_eq!(stack.topmost_open(), None);
        stack.open(ModalKind::Contact);
        stack.open(ModalKind::Portfolio);
        assert_eq!(stack.topmost_open(), Some(ModalKind::Portfolio));
        stack.close(ModalKind::Portfolio);
        assert_eq!(stack.topmost_open(), Some(ModalKind::Contact));
    }

    #[test]
    fn test_inquire_keeps_typed_subject() {
        let mut stack = ModalStack::default();
        stack.open(ModalKind::Contact);
        stack
            .contact
            .state_mut()
            .form
            .set_value(Field::Subject, "Partnership");
        stack.open(ModalKind::Pricing);

        stack.inquire(ItemId::new("production"), "Production");
        assert_eq!(
            stack.contact.state().form.value(Field::Subject),
            "Partnership"
        );
        assert!(stack.pricing.state().tier.is_active(&ItemId::new("production")));
    }

    #[test]
    fn test_inquire_fills_blank_subject_of_open_dialog() {
        let mut stack = ModalStack::default();
        stack.open(ModalKind::Contact);
        stack.open(ModalKind::Pricing);
        stack.inquire(ItemId::new("the-brief"), "The Brief");
        assert_eq!(
            stack.contact.state().form.value(Field::Subject),
            "Inquiry: The Brief"
        );
    }
}
