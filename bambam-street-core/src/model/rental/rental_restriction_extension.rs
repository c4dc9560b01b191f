use super::{RentalRestriction, RentalStatus};
use indexmap::IndexSet;
use std::collections::BTreeSet;
use std::sync::Arc;

/// the set of rental rules in effect at a vertex.
///
/// vertices almost never carry more than one rule, so a single rule is stored
/// inline and only the rare multi-rule case allocates a shared set. values are
/// immutable: [`RentalRestrictionExtension::add`] and
/// [`RentalRestrictionExtension::remove`] return new values.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RentalRestrictionExtension {
    #[default]
    None,
    Restriction(RentalRestriction),
    Composite(Arc<IndexSet<RentalRestriction>>),
}

impl RentalRestrictionExtension {
    /// combines two extensions. adding a restriction that is already present
    /// yields the unchanged value; for composites the same shared set is returned.
    pub fn add(&self, other: &RentalRestrictionExtension) -> RentalRestrictionExtension {
        other
            .restrictions()
            .fold(self.clone(), |acc, r| acc.add_restriction(r))
    }

    fn add_restriction(self, restriction: &RentalRestriction) -> RentalRestrictionExtension {
        use RentalRestrictionExtension as X;
        match self {
            X::None => X::Restriction(restriction.clone()),
            X::Restriction(existing) if &existing == restriction => X::Restriction(existing),
            X::Restriction(existing) => {
                let set = IndexSet::from([existing, restriction.clone()]);
                X::Composite(Arc::new(set))
            }
            X::Composite(set) if set.contains(restriction) => X::Composite(set),
            X::Composite(set) => {
                let mut next = set.as_ref().clone();
                next.insert(restriction.clone());
                X::Composite(Arc::new(next))
            }
        }
    }

    /// removes every restriction of `other` from this extension. a composite
    /// left with a single member collapses to that member.
    pub fn remove(&self, other: &RentalRestrictionExtension) -> RentalRestrictionExtension {
        let removals: Vec<&RentalRestriction> = other.restrictions().collect();
        if !self.restrictions().any(|r| removals.contains(&r)) {
            return self.clone();
        }
        let remaining: Vec<RentalRestriction> = self
            .restrictions()
            .filter(|r| !removals.contains(r))
            .cloned()
            .collect();
        RentalRestrictionExtension::from_restrictions(remaining)
    }

    pub fn from_restrictions(
        restrictions: impl IntoIterator<Item = RentalRestriction>,
    ) -> RentalRestrictionExtension {
        let set: IndexSet<RentalRestriction> = restrictions.into_iter().collect();
        match set.len() {
            0 => RentalRestrictionExtension::None,
            1 => set
                .into_iter()
                .next()
                .map(RentalRestrictionExtension::Restriction)
                .unwrap_or_default(),
            _ => RentalRestrictionExtension::Composite(Arc::new(set)),
        }
    }

    pub fn restrictions(&self) -> Box<dyn Iterator<Item = &RentalRestriction> + '_> {
        match self {
            RentalRestrictionExtension::None => Box::new(std::iter::empty()),
            RentalRestrictionExtension::Restriction(r) => Box::new(std::iter::once(r)),
            RentalRestrictionExtension::Composite(set) => Box::new(set.iter()),
        }
    }

    pub fn traversal_banned(&self, state: &dyn RentalStatus) -> bool {
        self.restrictions().any(|r| r.traversal_banned(state))
    }

    pub fn drop_off_banned(&self, state: &dyn RentalStatus) -> bool {
        self.restrictions().any(|r| r.drop_off_banned(state))
    }

    pub fn has_restrictions(&self) -> bool {
        !matches!(self, RentalRestrictionExtension::None)
    }

    /// networks whose vehicles cannot be dropped off here.
    pub fn no_drop_off_networks(&self) -> BTreeSet<String> {
        self.restrictions()
            .flat_map(|r| r.no_drop_off_networks())
            .collect()
    }

    /// true if both values are the same composite allocation. non-composite
    /// values compare by value.
    pub fn is_same(&self, other: &RentalRestrictionExtension) -> bool {
        match (self, other) {
            (
                RentalRestrictionExtension::Composite(a),
                RentalRestrictionExtension::Composite(b),
            ) => Arc::ptr_eq(a, b),
            (a, b) => a == b,
        }
    }
}

impl From<RentalRestriction> for RentalRestrictionExtension {
    fn from(value: RentalRestriction) -> Self {
        RentalRestrictionExtension::Restriction(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::rental::GeofencingZone;

    struct Status(bool, Option<&'static str>);

    impl RentalStatus for Status {
        fn is_renting_vehicle(&self) -> bool {
            self.0
        }
        fn rental_network(&self) -> Option<&str> {
            self.1
        }
    }

    fn zone(id: &str, drop_off: bool, traversal: bool) -> RentalRestrictionExtension {
        RentalRestriction::from(GeofencingZone::new(id, "tier", drop_off, traversal)).into()
    }

    fn border() -> RentalRestrictionExtension {
        RentalRestriction::business_area_border("tier").into()
    }

    #[test]
    fn test_add_none_is_identity() {
        let a = zone("a", true, false);
        assert_eq!(RentalRestrictionExtension::None.add(&a), a);
        assert_eq!(a.add(&RentalRestrictionExtension::None), a);
    }

    #[test]
    fn test_add_and_remove() {
        let a = zone("a", true, false);
        let b = border();
        let composite = a.add(&b);
        assert!(matches!(composite, RentalRestrictionExtension::Composite(_)));
        assert_eq!(composite.restrictions().count(), 2);
        assert_eq!(composite.remove(&b), a);
        assert_eq!(composite.remove(&a), b);
        assert_eq!(
            composite.remove(&a).remove(&b),
            RentalRestrictionExtension::None
        );
    }

    #[test]
    fn test_add_existing_keeps_identity() {
        let a = zone("a", true, false);
        let b = border();
        let composite = a.add(&b);
        let again = composite.add(&a);
        assert!(composite.is_same(&again));
        assert_eq!(a.add(&a), a);
    }

    #[test]
    fn test_composite_equality_ignores_order() {
        let a = zone("a", true, false);
        let b = border();
        assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn test_composite_evaluation() {
        let composite = zone("a", true, false).add(&zone("b", false, true));
        let renting = Status(true, Some("tier"));
        let other_network = Status(true, Some("bird"));
        let not_renting = Status(false, None);
        assert!(composite.traversal_banned(&renting));
        assert!(composite.drop_off_banned(&renting));
        assert!(!composite.traversal_banned(&other_network));
        assert!(!composite.drop_off_banned(&not_renting));
        assert!(composite.has_restrictions());
        assert_eq!(
            composite.no_drop_off_networks(),
            BTreeSet::from(["tier".to_string()])
        );
    }

    #[test]
    fn test_border_never_bans_drop_off() {
        let b = border();
        let renting = Status(true, Some("tier"));
        assert!(b.traversal_banned(&renting));
        assert!(!b.drop_off_banned(&renting));
        assert!(b.no_drop_off_networks().is_empty());
        assert!(!b.traversal_banned(&Status(true, None)));
    }
}
