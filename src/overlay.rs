use serde::Deserialize;

/// Mount/animation phase of an overlay. The subtree stays mounted until the exit
/// animation has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Hidden,
    Entering,
    Visible,
    Exiting,
}

impl Presence {
    pub fn is_mounted(self) -> bool {
        self != Presence::Hidden
    }

    pub fn is_shown(self) -> bool {
        matches!(self, Presence::Entering | Presence::Visible)
    }

    fn show(self) -> Self {
        match self {
            Presence::Hidden | Presence::Exiting => Presence::Entering,
            shown => shown,
        }
    }

    fn hide(self) -> Self {
        match self {
            Presence::Entering | Presence::Visible => Presence::Exiting,
            hidden => hidden,
        }
    }

    fn settle(self) -> Self {
        match self {
            Presence::Entering => Presence::Visible,
            Presence::Exiting => Presence::Hidden,
            settled => settled,
        }
    }

    /// Classes for the fading backdrop.
    pub fn fade_class(self) -> &'static str {
        match self {
            Presence::Visible => "opacity-100",
            _ => "opacity-0",
        }
    }

    /// Classes for the window popping in.
    pub fn pop_class(self) -> &'static str {
        match self {
            Presence::Visible => "opacity-100 scale-100 translate-y-0",
            _ => "opacity-0 scale-95 translate-y-5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModalKind {
    Contact,
    Pricing,
    Portfolio,
}

impl ModalKind {
    pub fn label(self) -> &'static str {
        match self {
            ModalKind::Contact => "Contact",
            ModalKind::Pricing => "Studio Pricing",
            ModalKind::Portfolio => "Web Development Portfolio",
        }
    }

    pub fn z_class(self) -> &'static str {
        match self {
            ModalKind::Contact => "z-[60]",
            ModalKind::Pricing | ModalKind::Portfolio => "z-[100]",
        }
    }
}

/// Proof that a reset was scheduled by a particular close. Stale tickets are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    kind: ModalKind,
    session: u64,
}

impl ResetTicket {
    pub fn kind(&self) -> ModalKind {
        self.kind
    }
}

/// Issued when an animation phase starts. Settling with it is a no-op once the
/// modal has moved to another session or phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    kind: ModalKind,
    session: u64,
    phase: Presence,
}

impl SettleTicket {
    pub fn kind(&self) -> ModalKind {
        self.kind
    }
}

#[derive(Debug, Clone)]
pub struct Modal<S> {
    kind: ModalKind,
    presence: Presence,
    session: u64,
    pending_reset: Option<u64>,
    state: S,
}

impl<S: Default> Modal<S> {
    pub fn new(kind: ModalKind) -> Self {
        Self {
            kind,
            presence: Presence::Hidden,
            session: 0,
            pending_reset: None,
            state: S::default(),
        }
    }

    /// Returns false if the modal was already open.
    pub fn open(&mut self) -> bool {
        if self.presence.is_shown() {
            return false;
        }
        if self.pending_reset.take().is_some() {
            log::debug!("{:?} reopened before reset, resetting now", self.kind);
            self.state = S::default();
        }
        self.session += 1;
        self.presence = self.presence.show();
        true
    }

    /// Starts the exit animation and hands back the ticket for the deferred reset.
    pub fn close(&mut self) -> Option<ResetTicket> {
        if !self.presence.is_shown() {
            return None;
        }
        self.presence = self.presence.hide();
        self.pending_reset = Some(self.session);
        Some(ResetTicket {
            kind: self.kind,
            session: self.session,
        })
    }

    pub fn settle_ticket(&self) -> SettleTicket {
        SettleTicket {
            kind: self.kind,
            session: self.session,
            phase: self.presence,
        }
    }

    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        if ticket != self.settle_ticket() {
            return false;
        }
        let settled = self.presence.settle();
        let changed = settled != self.presence;
        self.presence = settled;
        changed
    }

    pub fn finish_reset(&mut self, ticket: ResetTicket) -> bool {
        if ticket.kind != self.kind || self.pending_reset != Some(ticket.session) {
            return false;
        }
        self.pending_reset = None;
        self.state = S::default();
        true
    }
}

impl<S> Modal<S> {
    pub fn kind(&self) -> ModalKind {
        self.kind
    }

    pub fn is_open(&self) -> bool {
        self.presence.is_shown()
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Draft {
        text: String,
    }

    fn typed(modal: &mut Modal<Draft>, text: &str) {
        modal.state_mut().text = text.to_string();
    }

    fn settle_now(modal: &mut Modal<Draft>) -> bool {
        let ticket = modal.settle_ticket();
        modal.settle(ticket)
    }

    #[test]
    fn test_presence_cycle() {
        let mut m = Modal::<Draft>::new(ModalKind::Contact);
        assert_eq!(m.presence(), Presence::Hidden);
        assert!(m.open());
        assert_eq!(m.presence(), Presence::Entering);
        assert!(m.is_open());
        settle_now(&mut m);
        assert_eq!(m.presence(), Presence::Visible);
        assert!(!m.open());

        m.close();
        assert_eq!(m.presence(), Presence::Exiting);
        assert!(!m.is_open());
        assert!(m.presence().is_mounted());
        settle_now(&mut m);
        assert_eq!(m.presence(), Presence::Hidden);
        assert!(m.close().is_none());
    }

    #[test]
    fn test_reset_after_delay() {
        let mut m = Modal::<Draft>::new(ModalKind::Contact);
        m.open();
        typed(&mut m, "hello");
        let ticket = m.close().unwrap();
        assert_eq!(m.state().text, "hello");
        assert!(m.finish_reset(ticket));
        assert_eq!(m.state(), &Draft::default());
        assert!(!m.finish_reset(ticket));
    }

    #[test]
    fn test_reopen_forces_pending_reset() {
        let mut m = Modal::<Draft>::new(ModalKind::Contact);
        m.open();
        typed(&mut m, "stale");
        let ticket = m.close().unwrap();
        m.open();
        assert_eq!(m.state(), &Draft::default());

        typed(&mut m, "fresh");
        // the timer from the previous session fires late
        assert!(!m.finish_reset(ticket));
        assert_eq!(m.state().text, "fresh");
    }

    #[test]
    fn test_reopen_during_exit() {
        let mut m = Modal::<Draft>::new(ModalKind::Pricing);
        m.open();
        settle_now(&mut m);
        m.close();
        assert!(m.open());
        assert_eq!(m.presence(), Presence::Entering);
    }

    #[test]
    fn test_ticket_for_other_kind_is_ignored() {
        let mut contact = Modal::<Draft>::new(ModalKind::Contact);
        let mut pricing = Modal::<Draft>::new(ModalKind::Pricing);
        contact.open();
        pricing.open();
        typed(&mut pricing, "keep");
        let ticket = contact.close().unwrap();
        pricing.close();
        assert!(!pricing.finish_reset(ticket));
        assert_eq!(pricing.state().text, "keep");
    }

    #[test]
    fn test_stale_exit_settle_is_ignored() {
        let mut m = Modal::<Draft>::new(ModalKind::Contact);
        m.open();
        settle_now(&mut m);
        m.close();
        let first_exit = m.settle_ticket();

        m.open();
        settle_now(&mut m);
        m.close();
        // the exit timer from the first close fires during the second exit
        assert!(!m.settle(first_exit));
        assert_eq!(m.presence(), Presence::Exiting);

        assert!(settle_now(&mut m));
        assert_eq!(m.presence(), Presence::Hidden);
    }

    #[test]
    fn test_enter_settle_after_quick_close_is_ignored() {
        let mut m = Modal::<Draft>::new(ModalKind::Pricing);
        m.open();
        let enter = m.settle_ticket();
        m.close();
        assert!(!m.settle(enter));
        assert_eq!(m.presence(), Presence::Exiting);
    }
}
