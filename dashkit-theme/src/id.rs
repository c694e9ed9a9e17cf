// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Widget Identifiers
//!
//! Widget IDs name a widget type within a namespace, e.g.
//! `WidgetId::new("dashkit-widgets", "TabManager")`. They are used in log
//! output and to key per-widget styling.

use std::fmt;

/// Unique identifier of a widget type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId {
    namespace: String,
    id: String,
}

impl WidgetId {
    /// Create a new widget id.
    pub fn new(namespace: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            id: id.into(),
        }
    }

    /// The namespace (usually the crate name).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The widget name within the namespace.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}
