use std::fmt;
use std::sync::Arc;

/// Short name reported for frameworks the project system cannot model.
const UNSUPPORTED_NAME: &str = "Unsupported,Version=v0.0";

/// Short name of the framework-agnostic token.
const ANY_NAME: &str = "any";

/// Opaque, comparable identifier of one compilation target
///
/// Cloning is cheap: named frameworks share their name through an `Arc`.
/// The `Empty` and `Unsupported` sentinels are the only values a
/// `DependenciesSnapshot` accepts as active framework without a matching entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TargetFramework {
    /// No framework is known yet
    #[default]
    Empty,
    /// The project targets something the project system cannot model
    Unsupported,
    /// Framework-agnostic token, used where any target applies
    Any,
    /// A concrete framework such as `net8.0`
    Named(Arc<str>),
}

impl TargetFramework {
    /// Creates a named framework, mapping the reserved names onto their sentinels
    pub fn new(short_name: &str) -> Self {
        let trimmed = short_name.trim();
        if trimmed.is_empty() {
            TargetFramework::Empty
        } else if trimmed.eq_ignore_ascii_case(UNSUPPORTED_NAME) {
            TargetFramework::Unsupported
        } else if trimmed.eq_ignore_ascii_case(ANY_NAME) {
            TargetFramework::Any
        } else {
            TargetFramework::Named(Arc::from(trimmed))
        }
    }

    pub fn short_name(&self) -> &str {
        match self {
            TargetFramework::Empty => "",
            TargetFramework::Unsupported => UNSUPPORTED_NAME,
            TargetFramework::Any => ANY_NAME,
            TargetFramework::Named(name) => name,
        }
    }

    /// True for the two sentinels allowed to be active without a snapshot entry
    pub fn is_empty_or_unsupported(&self) -> bool {
        matches!(self, TargetFramework::Empty | TargetFramework::Unsupported)
    }
}

impl fmt::Display for TargetFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl From<&str> for TargetFramework {
    fn from(value: &str) -> Self {
        TargetFramework::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_framework() {
        let tfm = TargetFramework::new("net8.0");
        assert_eq!(tfm.short_name(), "net8.0");
        assert_eq!(tfm, TargetFramework::from("net8.0"));
        assert!(!tfm.is_empty_or_unsupported());
    }

    #[test]
    fn test_reserved_names_map_to_sentinels() {
        assert_eq!(TargetFramework::new(""), TargetFramework::Empty);
        assert_eq!(TargetFramework::new("  "), TargetFramework::Empty);
        assert_eq!(
            TargetFramework::new("Unsupported,Version=v0.0"),
            TargetFramework::Unsupported
        );
        assert_eq!(TargetFramework::new("ANY"), TargetFramework::Any);
    }

    #[test]
    fn test_sentinels() {
        assert!(TargetFramework::Empty.is_empty_or_unsupported());
        assert!(TargetFramework::Unsupported.is_empty_or_unsupported());
        assert!(!TargetFramework::Any.is_empty_or_unsupported());
        assert_eq!(TargetFramework::default(), TargetFramework::Empty);
    }

    #[test]
    fn test_display() {
        assert_eq!(TargetFramework::new("tfm1").to_string(), "tfm1");
        assert_eq!(TargetFramework::Empty.to_string(), "");
    }
}
