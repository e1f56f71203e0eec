//! Package assembly: staging, archiving, and cleanup

mod assemble;

pub use assemble::{build_package, PackageOutcome, SkippedTemplate};
