//! Domain logic - version values and bump kinds, independent of manifests and git

pub mod bump;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use bump::BumpKind;
pub use prerelease::{PreRelease, PreReleaseTag};
pub use tag::TagPattern;
pub use version::Version;
