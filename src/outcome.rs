//! The ordered return vector a callback produces.
//!
//! A callback answers an event with a sequence of present/absent slots. An
//! absent slot means "no opinion at this position" and leaves the position
//! open for later callbacks or the caller's default. A callback result is
//! always a sequence: returning a single value constructs a one-element
//! sequence explicitly at the call boundary rather than through any implicit
//! coercion.

/// The full ordered list of values a single callback invocation produced.
///
/// Each position holds either a value or a gap. Gaps contribute nothing
/// during the merge; they are how a callback claims some positions of the
/// result while staying silent on the rest.
///
/// # Examples
///
/// ```rust
/// use event_mediator::Outcome;
///
/// // A callback with no opinion at all.
/// let silent: Outcome<i32> = Outcome::nothing();
/// assert!(silent.is_empty());
///
/// // A callback answering with a single value (a length-1 vector).
/// let scalar = Outcome::single(42);
/// assert_eq!(scalar.len(), 1);
/// assert_eq!(scalar.get(0), Some(&42));
///
/// // A callback answering only the second position.
/// let partial = Outcome::from_slots([None, Some(7)]);
/// assert_eq!(partial.get(0), None);
/// assert_eq!(partial.get(1), Some(&7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<V> {
    slots: Vec<Option<V>>,
}

impl<V> Outcome<V> {
    /// The empty return vector: the callback contributes no values at any
    /// position.
    pub fn nothing() -> Self {
        Self { slots: Vec::new() }
    }

    /// A length-1 return vector holding one value.
    ///
    /// This is the explicit spelling of "the callback returned a scalar".
    pub fn single(value: V) -> Self {
        Self {
            slots: vec![Some(value)],
        }
    }

    /// A return vector where every position holds a value, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use event_mediator::Outcome;
    ///
    /// let outcome = Outcome::values([1, 2, 3]);
    /// assert_eq!(outcome.len(), 3);
    /// assert_eq!(outcome.get(2), Some(&3));
    /// ```
    pub fn values(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }

    /// A return vector built from explicit present/absent slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use event_mediator::Outcome;
    ///
    /// let outcome = Outcome::from_slots([Some(100), None, None]);
    /// assert_eq!(outcome.len(), 3);
    /// assert_eq!(outcome.get(0), Some(&100));
    /// assert_eq!(outcome.get(1), None);
    /// ```
    pub fn from_slots(slots: impl IntoIterator<Item = Option<V>>) -> Self {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// Number of slots, counting gaps.
    ///
    /// This is the vector's contribution to the merge width, not the number
    /// of present values.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the callback contributed no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Value at a position, or `None` for a gap or a position past the end.
    ///
    /// The merge treats both absences identically, so callers never need to
    /// distinguish them.
    pub fn get(&self, position: usize) -> Option<&V> {
        self.slots.get(position).and_then(Option::as_ref)
    }

    /// The raw slots, in order.
    pub fn slots(&self) -> &[Option<V>] {
        &self.slots
    }
}

impl<V> Default for Outcome<V> {
    fn default() -> Self {
        Self::nothing()
    }
}

impl<V> FromIterator<Option<V>> for Outcome<V> {
    fn from_iter<I: IntoIterator<Item = Option<V>>>(iter: I) -> Self {
        Self::from_slots(iter)
    }
}
