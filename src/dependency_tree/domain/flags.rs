use bitflags::bitflags;

bitflags! {
    /// Tree-display flags attached to dependency nodes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DependencyTreeFlags: u32 {
        /// Node is a dependency (as opposed to a root or target node)
        const DEPENDENCY = 0x0000_0001;
        /// Dependency was resolved by the design-time build
        const RESOLVED = 0x0000_0002;
        /// Dependency was declared but could not be resolved
        const UNRESOLVED = 0x0000_0004;
        /// Dependency can be removed from the project by the user
        const SUPPORTS_REMOVE = 0x0000_0008;
        /// Properties are shown through the rule schema
        const SUPPORTS_RULE_PROPERTIES = 0x0000_0010;
        /// Browse object is available
        const SUPPORTS_BROWSE = 0x0000_0020;
        /// Dependency participates in the generic (non-custom) tree handling
        const GENERIC_DEPENDENCY = 0x0000_0040;
        const PROJECT_DEPENDENCY = 0x0000_0100;
        const SHARED_PROJECT_DEPENDENCY = 0x0000_0200;
        const PACKAGE_DEPENDENCY = 0x0000_0400;
        const ASSEMBLY_DEPENDENCY = 0x0000_0800;
        const ANALYZER_DEPENDENCY = 0x0000_1000;
        const SDK_DEPENDENCY = 0x0000_2000;
        /// Root node of a provider's sub-tree
        const SUB_TREE_ROOT = 0x0001_0000;
        /// Target-framework grouping node
        const TARGET_NODE = 0x0002_0000;
        /// The top-level "Dependencies" node
        const DEPENDENCIES_ROOT = 0x0004_0000;
    }
}

impl DependencyTreeFlags {
    /// Base flags of a resolved generic dependency
    pub const GENERIC_RESOLVED: Self = Self::DEPENDENCY
        .union(Self::RESOLVED)
        .union(Self::GENERIC_DEPENDENCY)
        .union(Self::SUPPORTS_REMOVE)
        .union(Self::SUPPORTS_RULE_PROPERTIES)
        .union(Self::SUPPORTS_BROWSE);

    /// Base flags of an unresolved generic dependency
    pub const GENERIC_UNRESOLVED: Self = Self::DEPENDENCY
        .union(Self::UNRESOLVED)
        .union(Self::GENERIC_DEPENDENCY)
        .union(Self::SUPPORTS_REMOVE)
        .union(Self::SUPPORTS_RULE_PROPERTIES)
        .union(Self::SUPPORTS_BROWSE);

    /// Swaps the resolution bits for the given state
    pub fn with_resolution(self, resolved: bool) -> Self {
        let cleared = self.difference(Self::RESOLVED | Self::UNRESOLVED);
        if resolved {
            cleared | Self::RESOLVED
        } else {
            cleared | Self::UNRESOLVED
        }
    }

    /// Flag names, in declaration order, for display
    pub fn names(&self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

/// Precomputed flags for the four resolved × implicit combinations of a provider
///
/// Models look their flags up here instead of building a new set per instance.
/// Implicit dependencies cannot be removed by the user.
#[derive(Debug, Clone, Copy)]
pub struct DependencyFlagCache {
    lookup: [DependencyTreeFlags; 4],
}

impl DependencyFlagCache {
    pub const fn new(add: DependencyTreeFlags, remove: DependencyTreeFlags) -> Self {
        let resolved = DependencyTreeFlags::GENERIC_RESOLVED
            .union(add)
            .difference(remove);
        let unresolved = DependencyTreeFlags::GENERIC_UNRESOLVED
            .union(add)
            .difference(remove);

        Self {
            lookup: [
                resolved,
                resolved.difference(DependencyTreeFlags::SUPPORTS_REMOVE),
                unresolved,
                unresolved.difference(DependencyTreeFlags::SUPPORTS_REMOVE),
            ],
        }
    }

    pub const fn get(&self, is_resolved: bool, is_implicit: bool) -> DependencyTreeFlags {
        let index = match (is_resolved, is_implicit) {
            (true, false) => 0,
            (true, true) => 1,
            (false, false) => 2,
            (false, true) => 3,
        };
        self.lookup[index]
    }
}
