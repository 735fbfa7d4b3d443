//! The shell manifest: resources preloaded at installation.

use serde::{Deserialize, Serialize};

/// A fixed ordered sequence of shell resource paths, resolved against the
/// application origin and preloaded into the current generation during
/// installation.
///
/// Defined at build/config time and never mutated at runtime. An empty
/// manifest makes preload a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    paths: Vec<String>,
}

impl Manifest {
    /// Build a manifest from an ordered sequence of paths.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of shell resources.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the manifest lists no resources.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the paths in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Manifest {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
