//! Provider-specific dependency models
//!
//! Each variant is a pure constructor from evaluation data to immutable
//! display and identity data.
mod analyzer;
mod assembly;
mod package;
mod project;
mod sdk;
mod shared_project;

pub use analyzer::AnalyzerDependencyModel;
pub use assembly::AssemblyDependencyModel;
pub use package::PackageDependencyModel;
pub use project::ProjectDependencyModel;
pub use sdk::SdkDependencyModel;
pub use shared_project::SharedProjectDependencyModel;

/// Provider type strings, one per sub-tree provider
pub mod provider_types {
    pub const PROJECT: &str = "ProjectDependency";
    pub const PACKAGE: &str = "NuGetDependency";
    pub const ASSEMBLY: &str = "AssemblyDependency";
    pub const ANALYZER: &str = "AnalyzerDependency";
    pub const SDK: &str = "SdkDependency";
}

/// Rule schema names for the resolved and unresolved forms of each dependency kind
pub mod schema_names {
    pub const PROJECT_REFERENCE: &str = "ProjectReference";
    pub const RESOLVED_PROJECT_REFERENCE: &str = "ResolvedProjectReference";
    pub const PACKAGE_REFERENCE: &str = "PackageReference";
    pub const RESOLVED_PACKAGE_REFERENCE: &str = "ResolvedPackageReference";
    pub const ASSEMBLY_REFERENCE: &str = "AssemblyReference";
    pub const RESOLVED_ASSEMBLY_REFERENCE: &str = "ResolvedAssemblyReference";
    pub const ANALYZER_REFERENCE: &str = "AnalyzerReference";
    pub const RESOLVED_ANALYZER_REFERENCE: &str = "ResolvedAnalyzerReference";
    pub const SDK_REFERENCE: &str = "SdkReference";
    pub const RESOLVED_SDK_REFERENCE: &str = "ResolvedSdkReference";
}

/// Primary data-source item types of the unresolved rules
pub mod item_types {
    pub const PROJECT_REFERENCE: &str = "ProjectReference";
    pub const PACKAGE_REFERENCE: &str = "PackageReference";
    pub const REFERENCE: &str = "Reference";
    pub const ANALYZER: &str = "Analyzer";
    pub const SDK_REFERENCE: &str = "SdkReference";
}
