//! Math rendering strategies

use sha2::{Digest, Sha256};
use std::path::Path;
use url::Url;

/// How one math source expression becomes displayable: a packaged image
/// under `images/`, or an absolute URL on a rendering service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathRef {
    /// Archive-relative path, e.g. `images/eq_1a2b3c4d5e6f.png`.
    Asset(String),
    /// Absolute URL for a remote rendering service.
    Url(String),
}

impl MathRef {
    /// The reference as it appears in an `src` attribute.
    pub fn href(&self) -> &str {
        match self {
            MathRef::Asset(path) => path,
            MathRef::Url(url) => url,
        }
    }

    pub fn is_asset(&self) -> bool {
        matches!(self, MathRef::Asset(_))
    }
}

/// Strategy turning math source expressions into rendering references.
///
/// One strategy is active per run; extraction and splicing never branch
/// on which one.
pub trait MathRenderer {
    /// Reference for `source`. Must be deterministic: equal sources get
    /// equal references, within a run and across runs.
    fn render(&self, source: &str) -> MathRef;

    /// Materialize the image behind an `Asset` reference at `target`.
    /// Strategies that never hand out assets have nothing to write.
    fn write_asset(&self, source: &str, target: &Path) -> std::io::Result<()> {
        let _ = (source, target);
        Ok(())
    }
}

/// Remote strategy: pure URL construction, no outbound traffic.
#[derive(Debug, Clone)]
pub struct RemoteMathRenderer {
    base: Url,
}

impl RemoteMathRenderer {
    /// Default public equation rendering endpoint.
    pub const DEFAULT_BASE: &'static str = "https://latex.codecogs.com/png.image";

    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn from_base(base: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: Url::parse(base)?,
        })
    }
}

impl MathRenderer for RemoteMathRenderer {
    fn render(&self, source: &str) -> MathRef {
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair("math", source);
        MathRef::Url(String::from(url))
    }
}

/// Callback that rasterizes one expression into an image file. The
/// rendering backend itself lives outside this crate.
pub type AssetWriter = Box<dyn Fn(&str, &Path) -> std::io::Result<()>>;

/// Local strategy: content-addressed filenames under `images/`, bytes
/// produced by an injected writer.
pub struct LocalMathRenderer {
    writer: AssetWriter,
    extension: String,
}

impl LocalMathRenderer {
    pub fn new(writer: AssetWriter) -> Self {
        Self::with_extension(writer, "png")
    }

    /// Same strategy with a different image file extension.
    pub fn with_extension(writer: AssetWriter, extension: &str) -> Self {
        Self {
            writer,
            extension: extension.to_string(),
        }
    }

    /// Content-addressed asset path: the first 12 hex digits of the
    /// source expression's SHA-256, so equal sources share one file.
    fn asset_path(&self, source: &str) -> String {
        let digest = Sha256::digest(source.as_bytes());
        let hex: String = digest
            .iter()
            .take(6)
            .map(|byte| format!("{:02x}", byte))
            .collect();
        format!("images/eq_{}.{}", hex, self.extension)
    }
}

impl MathRenderer for LocalMathRenderer {
    fn render(&self, source: &str) -> MathRef {
        MathRef::Asset(self.asset_path(source))
    }

    fn write_asset(&self, source: &str, target: &Path) -> std::io::Result<()> {
        (self.writer)(source, target)
    }
}
