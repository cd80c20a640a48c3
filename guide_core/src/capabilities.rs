//! Static help grid shown when a search matches nothing.

use serde::Serialize;

/// One category of the capabilities overview: a title plus three bullets.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CapabilityGroup {
    pub title: &'static str,
    pub items: [&'static str; 3],
}

/// The four-category overview. Static content, independent of the catalog.
pub fn overview() -> &'static [CapabilityGroup] {
    OVERVIEW
}

static OVERVIEW: &[CapabilityGroup] = &[
    CapabilityGroup {
        title: "System Management",
        items: [
            "System information",
            "Disk space and memory",
            "CPU and battery status",
        ],
    },
    CapabilityGroup {
        title: "Development Tools",
        items: [
            "Installing programming languages",
            "Setting up development environments",
            "Version control systems",
        ],
    },
    CapabilityGroup {
        title: "Network Operations",
        items: [
            "Network diagnostics",
            "WiFi management",
            "IP configuration",
        ],
    },
    CapabilityGroup {
        title: "File Operations",
        items: [
            "File management",
            "Directory operations",
            "Search and navigation",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_groups_of_three() {
        assert_eq!(overview().len(), 4);
        for group in overview() {
            assert!(!group.title.is_empty());
            assert!(group.items.iter().all(|item| !item.is_empty()));
        }
    }
}
