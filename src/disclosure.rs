/// How a disclosure mutation changed the active item. `Opened` and `Closed` are the
/// transitions that animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureChange {
    Unchanged,
    Opened,
    Switched,
    Closed,
}

/// Single-level drill-down: at most one item of a group is expanded at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure<Id> {
    active: Option<Id>,
}

impl<Id> Default for Disclosure<Id> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<Id: PartialEq> Disclosure<Id> {
    /// Re-selecting the active id is a no-op; closing is always explicit.
    pub fn select(&mut self, id: Id) -> DisclosureChange {
        match &self.active {
            Some(active) if *active == id => DisclosureChange::Unchanged,
            Some(_) => {
                self.active = Some(id);
                DisclosureChange::Switched
            }
            None => {
                self.active = Some(id);
                DisclosureChange::Opened
            }
        }
    }

    pub fn clear(&mut self) -> DisclosureChange {
        match self.active.take() {
            Some(_) => DisclosureChange::Closed,
            None => DisclosureChange::Unchanged,
        }
    }

    pub fn is_active(&self, id: &Id) -> bool {
        self.active.as_ref() == Some(id)
    }

    pub fn active(&self) -> Option<&Id> {
        self.active.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ItemId;

    #[test]
    fn test_select_is_idempotent() {
        let mut d = Disclosure::default();
        assert_eq!(d.select(ItemId::new("zaidi")), DisclosureChange::Opened);
        assert_eq!(d.select(ItemId::new("zaidi")), DisclosureChange::Unchanged);
        assert_eq!(d.active(), Some(&ItemId::new("zaidi")));
        assert!(d.is_active(&ItemId::new("zaidi")));
    }

    #[test]
    fn test_single_active_item() {
        let mut d = Disclosure::default();
        d.select("brief");
        assert_eq!(d.select("core"), DisclosureChange::Switched);
        assert!(d.is_active(&"core"));
        assert!(!d.is_active(&"brief"));
    }

    #[test]
    fn test_clear_always_empties() {
        let mut d: Disclosure<&str> = Disclosure::default();
        assert_eq!(d.clear(), DisclosureChange::Unchanged);
        assert!(!d.is_open());

        d.select("a");
        d.select("b");
        assert_eq!(d.clear(), DisclosureChange::Closed);
        assert_eq!(d.active(), None);
        assert_eq!(d.clear(), DisclosureChange::Unchanged);
    }
}
