//! Tracker data model: named, continuously-updating value sources.
//!
//! The host game loop owns a set of trackers and mutates them between frames;
//! the HUD holds read-only shared references and re-reads the current values
//! on every [`crate::HudPanel::refresh`]. Everything here is single-threaded
//! by contract, so sharing is `Rc` with interior mutability rather than a
//! channel.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to a [`DataTracker`]. Clone freely; all clones observe the
/// same current value.
pub type TrackerRef = Rc<DataTracker>;

// ─────────────────────────────────────────────────────────────────────────────
// TrackerValue
// ─────────────────────────────────────────────────────────────────────────────

/// The current value of a tracker.
///
/// Numeric trackers can additionally feed the embedded plot; text trackers
/// only appear as HUD rows. The tag decides plot eligibility, not a runtime
/// type test on the payload.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerValue {
    /// A plottable numeric value.
    Numeric(f64),
    /// Any other displayable value, kept as its display text.
    Text(String),
}

impl TrackerValue {
    /// The numeric payload, or `None` for text values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TrackerValue::Numeric(v) => Some(*v),
            TrackerValue::Text(_) => None,
        }
    }

    /// Whether this value carries the `Numeric` tag.
    pub fn is_numeric(&self) -> bool {
        matches!(self, TrackerValue::Numeric(_))
    }
}

impl fmt::Display for TrackerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerValue::Numeric(v) => write!(f, "{}", v),
            TrackerValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for TrackerValue {
    fn from(v: f64) -> Self {
        TrackerValue::Numeric(v)
    }
}

impl From<f32> for TrackerValue {
    fn from(v: f32) -> Self {
        TrackerValue::Numeric(v as f64)
    }
}

impl From<i32> for TrackerValue {
    fn from(v: i32) -> Self {
        TrackerValue::Numeric(v as f64)
    }
}

impl From<u32> for TrackerValue {
    fn from(v: u32) -> Self {
        TrackerValue::Numeric(v as f64)
    }
}

impl From<&str> for TrackerValue {
    fn from(s: &str) -> Self {
        TrackerValue::Text(s.to_string())
    }
}

impl From<String> for TrackerValue {
    fn from(s: String) -> Self {
        TrackerValue::Text(s)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DataTracker
// ─────────────────────────────────────────────────────────────────────────────

/// A named source of a single current value.
///
/// The tracker never pushes updates anywhere; consumers pull the current
/// value whenever they render. `name` is fixed at creation, the value is
/// mutable through the shared handle.
#[derive(Debug)]
pub struct DataTracker {
    name: String,
    value: RefCell<TrackerValue>,
}

impl DataTracker {
    /// Create a tracker with an arbitrary initial value.
    pub fn new<S: Into<String>, V: Into<TrackerValue>>(name: S, initial: V) -> TrackerRef {
        Rc::new(Self {
            name: name.into(),
            value: RefCell::new(initial.into()),
        })
    }

    /// Create a numeric (plottable) tracker.
    pub fn numeric<S: Into<String>>(name: S, initial: f64) -> TrackerRef {
        Self::new(name, TrackerValue::Numeric(initial))
    }

    /// Create a text-only tracker.
    pub fn text<S: Into<String>, V: Into<String>>(name: S, initial: V) -> TrackerRef {
        Self::new(name, TrackerValue::Text(initial.into()))
    }

    /// The tracker's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A clone of the current value.
    pub fn value(&self) -> TrackerValue {
        self.value.borrow().clone()
    }

    /// Replace the current value.
    pub fn set_value<V: Into<TrackerValue>>(&self, value: V) {
        *self.value.borrow_mut() = value.into();
    }

    /// Replace the current value with a numeric one.
    pub fn set_numeric(&self, v: f64) {
        self.set_value(TrackerValue::Numeric(v));
    }

    /// Replace the current value with a text one.
    pub fn set_text<S: Into<String>>(&self, s: S) {
        self.set_value(TrackerValue::Text(s.into()));
    }

    /// The current numeric payload, or `None` for text values.
    pub fn as_f64(&self) -> Option<f64> {
        self.value.borrow().as_f64()
    }

    /// Whether the current value carries the `Numeric` tag.
    pub fn is_numeric(&self) -> bool {
        self.value.borrow().is_numeric()
    }

    /// The HUD row form: `"<name>: <value>"`.
    pub fn display_text(&self) -> String {
        format!("{}: {}", self.name, self.value.borrow())
    }
}

/// Filter a tracker sequence down to the numeric (plottable) subset,
/// preserving order. The HUD computes this once at construction; later tag
/// changes do not alter plot membership.
pub fn numeric_trackers(trackers: &[TrackerRef]) -> Vec<TrackerRef> {
    trackers
        .iter()
        .filter(|t| t.is_numeric())
        .cloned()
        .collect()
}
