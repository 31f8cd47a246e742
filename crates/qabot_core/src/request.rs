//! Request identity for outbound `/ask` calls.

use serde::{Deserialize, Serialize};

/// Monotonic id of one send action. Displayed as `#n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl RequestId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Allocates [RequestId]s starting at 1; never reuses one.
#[derive(Debug, Default)]
pub struct RequestIds {
    last: u64,
}

impl RequestIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> RequestId {
        self.last += 1;
        RequestId(self.last)
    }

    /// Most recently allocated id, if any.
    pub fn latest(&self) -> Option<RequestId> {
        (self.last > 0).then_some(RequestId(self.last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let mut ids = RequestIds::new();
        assert_eq!(ids.latest(), None);
        let a = ids.allocate();
        let b = ids.allocate();
        assert!(a < b);
        assert_eq!(ids.latest(), Some(b));
    }

    #[test]
    fn display_has_hash_prefix() {
        assert_eq!(RequestId(7).to_string(), "#7");
    }
}
