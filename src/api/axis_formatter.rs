use std::fmt;
use std::sync::Arc;

use crate::core::AxisValue;

pub type AxisFormatterFn = Arc<dyn Fn(&AxisValue) -> String + Send + Sync + 'static>;

/// Pure value-to-label function for one axis slot.
///
/// Cloning shares the underlying function; equality is identity of that
/// function, so descriptors built from the same formatter compare equal.
#[derive(Clone)]
pub struct AxisFormatter(AxisFormatterFn);

impl AxisFormatter {
    pub fn new(format: impl Fn(&AxisValue) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(format))
    }

    /// Formats every value with its `Display` text.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(AxisValue::to_string)
    }

    #[must_use]
    pub fn format(&self, value: &AxisValue) -> String {
        (self.0)(value)
    }
}

impl From<AxisFormatterFn> for AxisFormatter {
    fn from(format: AxisFormatterFn) -> Self {
        Self(format)
    }
}

impl PartialEq for AxisFormatter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AxisFormatter(..)")
    }
}

/// Formatters for each axis slot. An absent metric formatter marks that slot unused.
#[derive(Debug, Clone, PartialEq)]
pub struct AxesFormatters {
    pub bottom: AxisFormatter,
    pub left: Option<AxisFormatter>,
    pub right: Option<AxisFormatter>,
}

impl AxesFormatters {
    #[must_use]
    pub fn new(bottom: AxisFormatter) -> Self {
        Self {
            bottom,
            left: None,
            right: None,
        }
    }

    #[must_use]
    pub fn with_left(mut self, formatter: AxisFormatter) -> Self {
        self.left = Some(formatter);
        self
    }

    #[must_use]
    pub fn with_right(mut self, formatter: AxisFormatter) -> Self {
        self.right = Some(formatter);
        self
    }
}
