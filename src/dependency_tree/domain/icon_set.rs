use serde::Serialize;
use std::fmt;

/// Image monikers the tree can display
///
/// Only the identity of the image matters to this crate; rendering is done by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ImageMoniker {
    Application,
    ApplicationPrivate,
    ApplicationWarning,
    SharedProject,
    SharedProjectPrivate,
    SharedProjectWarning,
    NuGetNoColor,
    NuGetNoColorPrivate,
    NuGetNoColorWarning,
    Reference,
    ReferencePrivate,
    ReferenceWarning,
    CodeInformation,
    CodeInformationPrivate,
    CodeInformationWarning,
    Sdk,
    SdkPrivate,
    SdkWarning,
    ReferenceGroup,
    Library,
}

impl ImageMoniker {
    pub fn name(&self) -> &'static str {
        match self {
            ImageMoniker::Application => "Application",
            ImageMoniker::ApplicationPrivate => "ApplicationPrivate",
            ImageMoniker::ApplicationWarning => "ApplicationWarning",
            ImageMoniker::SharedProject => "SharedProject",
            ImageMoniker::SharedProjectPrivate => "SharedProjectPrivate",
            ImageMoniker::SharedProjectWarning => "SharedProjectWarning",
            ImageMoniker::NuGetNoColor => "NuGetNoColor",
            ImageMoniker::NuGetNoColorPrivate => "NuGetNoColorPrivate",
            ImageMoniker::NuGetNoColorWarning => "NuGetNoColorWarning",
            ImageMoniker::Reference => "Reference",
            ImageMoniker::ReferencePrivate => "ReferencePrivate",
            ImageMoniker::ReferenceWarning => "ReferenceWarning",
            ImageMoniker::CodeInformation => "CodeInformation",
            ImageMoniker::CodeInformationPrivate => "CodeInformationPrivate",
            ImageMoniker::CodeInformationWarning => "CodeInformationWarning",
            ImageMoniker::Sdk => "Sdk",
            ImageMoniker::SdkPrivate => "SdkPrivate",
            ImageMoniker::SdkWarning => "SdkWarning",
            ImageMoniker::ReferenceGroup => "ReferenceGroup",
            ImageMoniker::Library => "Library",
        }
    }
}

impl fmt::Display for ImageMoniker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four images a dependency node can show, depending on resolution and expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DependencyIconSet {
    pub icon: ImageMoniker,
    pub expanded_icon: ImageMoniker,
    pub unresolved_icon: ImageMoniker,
    pub unresolved_expanded_icon: ImageMoniker,
}

impl DependencyIconSet {
    pub const fn new(
        icon: ImageMoniker,
        expanded_icon: ImageMoniker,
        unresolved_icon: ImageMoniker,
        unresolved_expanded_icon: ImageMoniker,
    ) -> Self {
        Self {
            icon,
            expanded_icon,
            unresolved_icon,
            unresolved_expanded_icon,
        }
    }

    /// Replaces the resolved images, keeping the unresolved ones
    pub const fn with_resolved_icons(self, icon: ImageMoniker, expanded_icon: ImageMoniker) -> Self {
        Self {
            icon,
            expanded_icon,
            ..self
        }
    }

    pub fn icon_for(&self, resolved: bool) -> ImageMoniker {
        if resolved {
            self.icon
        } else {
            self.unresolved_icon
        }
    }

    pub fn expanded_icon_for(&self, resolved: bool) -> ImageMoniker {
        if resolved {
            self.expanded_icon
        } else {
            self.unresolved_expanded_icon
        }
    }
}
