//! Disjoint-set forest with explicit component membership.
//!
//! Elements live in an arena and are addressed by slot. Each slot records the
//! slot of its component's representative, and each representative owns the
//! full list of member slots. Keeping the member lists (rather than only a
//! size) lets callers rank and inspect components directly.
//!
//! Unions relabel the smaller component to the larger component's
//! representative. When both components have the same size the component of
//! the second argument is folded into the component of the first, which keeps
//! runs reproducible for a fixed edge order.

use std::{
    collections::{BTreeMap, HashMap},
    fmt::Debug,
    hash::Hash,
};

use crate::error::ForestError;

/// A partition of elements into disjoint, non-empty components.
///
/// # Examples
/// ```
/// use linkage_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new();
/// for item in ["a", "b", "c"] {
///     forest.make_set(item)?;
/// }
/// assert!(forest.union(&"a", &"b")?);
/// assert_eq!(forest.component_count(), 2);
/// assert_eq!(forest.find(&"b")?, &"a");
/// # Ok::<(), linkage_core::ForestError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest<T> {
    slots: HashMap<T, usize>,
    elements: Vec<T>,
    representatives: Vec<usize>,
    members: BTreeMap<usize, Vec<usize>>,
}

impl<T> Default for DisjointSetForest<T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            elements: Vec::new(),
            representatives: Vec::new(),
            members: BTreeMap::new(),
        }
    }
}

impl<T> DisjointSetForest<T>
where
    T: Clone + Debug + Eq + Hash,
{
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(capacity),
            elements: Vec::with_capacity(capacity),
            representatives: Vec::with_capacity(capacity),
            members: BTreeMap::new(),
        }
    }

    /// Builds a forest holding one singleton component per element.
    ///
    /// # Errors
    /// Returns [`ForestError::DuplicateElement`] when `elements` repeats a
    /// value.
    pub fn from_elements<I>(elements: I) -> Result<Self, ForestError>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = elements.into_iter();
        let mut forest = Self::with_capacity(iter.size_hint().0);
        for element in iter {
            forest.make_set(element)?;
        }
        Ok(forest)
    }

    /// Inserts `element` as a new singleton component.
    ///
    /// # Errors
    /// Returns [`ForestError::DuplicateElement`] when `element` is already
    /// present; the forest is left unchanged.
    pub fn make_set(&mut self, element: T) -> Result<(), ForestError> {
        if self.slots.contains_key(&element) {
            return Err(ForestError::DuplicateElement {
                element: format!("{element:?}"),
            });
        }
        let slot = self.elements.len();
        self.slots.insert(element.clone(), slot);
        self.elements.push(element);
        self.representatives.push(slot);
        self.members.insert(slot, vec![slot]);
        Ok(())
    }

    /// Returns the representative of the component containing `element`.
    ///
    /// # Errors
    /// Returns [`ForestError::UnknownElement`] when `element` was never
    /// inserted.
    pub fn find(&self, element: &T) -> Result<&T, ForestError> {
        let root = self.root_of(element)?;
        self.element_at(root)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `Ok(false)` without touching the forest when both elements
    /// already share a representative.
    ///
    /// # Errors
    /// Returns [`ForestError::UnknownElement`] when either element was never
    /// inserted.
    pub fn union(&mut self, left: &T, right: &T) -> Result<bool, ForestError> {
        let left_root = self.root_of(left)?;
        let right_root = self.root_of(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_len = self.members_of(left_root)?.len();
        let right_len = self.members_of(right_root)?.len();
        let (survivor, absorbed) = if left_len < right_len {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        let moved = self
            .members
            .remove(&absorbed)
            .ok_or(ForestError::InvariantViolation {
                invariant: "absorbed representative must own a member list",
                slot: absorbed,
            })?;
        for &slot in &moved {
            let link = self
                .representatives
                .get_mut(slot)
                .ok_or(ForestError::InvariantViolation {
                    invariant: "member slot must be inside the arena",
                    slot,
                })?;
            *link = survivor;
        }
        self.members
            .get_mut(&survivor)
            .ok_or(ForestError::InvariantViolation {
                invariant: "surviving representative must own a member list",
                slot: survivor,
            })?
            .extend(moved);
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`ForestError::UnknownElement`] when either element was never
    /// inserted.
    pub fn same_component(&self, left: &T, right: &T) -> Result<bool, ForestError> {
        Ok(self.root_of(left)? == self.root_of(right)?)
    }

    /// Returns `true` when `element` has been inserted.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.slots.contains_key(element)
    }

    /// Returns the number of elements in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when no element has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.members.len()
    }

    /// Iterates over every component, ordered by representative insertion.
    pub fn components(&self) -> impl Iterator<Item = Component<'_, T>> + '_ {
        self.members
            .iter()
            .filter_map(move |(&root, members)| self.component(root, members))
    }

    /// Returns the component containing `element`.
    ///
    /// # Errors
    /// Returns [`ForestError::UnknownElement`] when `element` was never
    /// inserted.
    pub fn component_of(&self, element: &T) -> Result<Component<'_, T>, ForestError> {
        let root = self.root_of(element)?;
        let members = self.members_of(root)?;
        self.component(root, members)
            .ok_or(ForestError::InvariantViolation {
                invariant: "representative slot must be inside the arena",
                slot: root,
            })
    }

    /// Returns every component size, largest first.
    #[must_use]
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.members.values().map(Vec::len).collect();
        sizes.sort_unstable_by(|left, right| right.cmp(left));
        sizes
    }

    fn root_of(&self, element: &T) -> Result<usize, ForestError> {
        let slot = *self
            .slots
            .get(element)
            .ok_or_else(|| ForestError::UnknownElement {
                element: format!("{element:?}"),
            })?;
        self.representatives
            .get(slot)
            .copied()
            .ok_or(ForestError::InvariantViolation {
                invariant: "element slot must be inside the arena",
                slot,
            })
    }

    fn members_of(&self, root: usize) -> Result<&[usize], ForestError> {
        self.members
            .get(&root)
            .map(Vec::as_slice)
            .ok_or(ForestError::InvariantViolation {
                invariant: "representative must own a member list",
                slot: root,
            })
    }

    fn element_at(&self, slot: usize) -> Result<&T, ForestError> {
        self.elements
            .get(slot)
            .ok_or(ForestError::InvariantViolation {
                invariant: "slot must be inside the arena",
                slot,
            })
    }

    fn component<'a>(&'a self, root: usize, members: &'a [usize]) -> Option<Component<'a, T>> {
        Some(Component {
            representative: self.elements.get(root)?,
            members,
            elements: &self.elements,
        })
    }
}

/// A read-only view of one component of a [`DisjointSetForest`].
#[derive(Clone, Copy, Debug)]
pub struct Component<'a, T> {
    representative: &'a T,
    members: &'a [usize],
    elements: &'a [T],
}

impl<'a, T> Component<'a, T> {
    /// Returns the component's representative.
    #[must_use]
    #[rustfmt::skip]
    pub fn representative(&self) -> &'a T { self.representative }

    /// Returns the number of members.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.members.len() }

    /// Components are never empty; provided for API symmetry.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.members.is_empty() }

    /// Iterates over the members in the order they joined the component.
    pub fn members(&self) -> impl Iterator<Item = &'a T> + use<'a, T> {
        let elements = self.elements;
        let members = self.members;
        members.iter().filter_map(move |&slot| elements.get(slot))
    }
}
