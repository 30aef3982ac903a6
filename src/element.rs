//! Score element shared by the aggregate and ranking components.

/// A single scored item with an optional caller-owned payload.
///
/// The payload handle `P` is opaque to the engine: it is stored on insert,
/// carried through set algebra and filtering, and handed back on query, but
/// never mutated or interpreted. The `P: Copy` bound keeps the handle a
/// bitwise copy, so attach a reference (`&T`) when the payload object itself
/// must not be duplicated.
///
/// The deviation of an element is not stored: it depends on the mean of
/// whichever set is asking, so it is computed per query via
/// [`deviation_from`](Element::deviation_from).
///
/// # Example
///
/// ```
/// use rankstats::Element;
///
/// let elm = Element::with_attached(80.0, "alice");
/// assert_eq!(elm.value(), 80.0);
/// assert_eq!(elm.attached(), Some("alice"));
/// assert_eq!(elm.deviation_from(50.0), 30.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Element<P: Copy = ()> {
    value: f64,
    attached: Option<P>,
}

impl<P: Copy> Element<P> {
    /// Create an element with no payload.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            attached: None,
        }
    }

    /// Create an element carrying a payload handle.
    pub fn with_attached(value: f64, attached: P) -> Self {
        Self {
            value,
            attached: Some(attached),
        }
    }

    /// The scored value. Immutable once inserted.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The payload handle, if one was attached.
    pub fn attached(&self) -> Option<P> {
        self.attached
    }

    /// Deviation of this element's value from the given mean.
    pub fn deviation_from(&self, mean: f64) -> f64 {
        self.value - mean
    }

    /// Squared deviation from the given mean.
    pub fn squared_deviation(&self, mean: f64) -> f64 {
        let deviation = self.value - mean;
        deviation * deviation
    }
}
