//! A loaded document and its round-trip metadata

use std::path::{Path, PathBuf};

use crate::checksum::Fingerprint;
use crate::encoding::TextEncoding;
use crate::io::{self, RobustnessConfig};
use crate::Result;

/// The full text of a stored resource, plus what is needed to write it back
/// faithfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    location: PathBuf,
    text: String,
    encoding: TextEncoding,
    fingerprint: Fingerprint,
}

impl Document {
    /// Load a resource, detecting its encoding from the byte order mark.
    ///
    /// # Errors
    ///
    /// [`Error::ResourceUnavailable`](crate::Error::ResourceUnavailable) if
    /// the file cannot be read, [`Error::EncodingMismatch`](crate::Error::EncodingMismatch)
    /// if its bytes are not valid in the detected encoding.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = io::read_bytes(path)?;
        let encoding = TextEncoding::detect(&bytes);
        let text = encoding.decode(path, &bytes)?;

        tracing::debug!(
            path = %path.display(),
            %encoding,
            bytes = bytes.len(),
            "Loaded document"
        );

        Ok(Self {
            location: path.to_path_buf(),
            text,
            encoding,
            fingerprint: Fingerprint::of_bytes(&bytes),
        })
    }

    /// Build a document from in-memory text that will be stored as `encoding`.
    pub fn from_text(
        location: impl Into<PathBuf>,
        text: impl Into<String>,
        encoding: TextEncoding,
    ) -> Self {
        let text = text.into();
        let fingerprint = Fingerprint::of_bytes(&encoding.encode(&text));
        Self {
            location: location.into(),
            text,
            encoding,
            fingerprint,
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Fingerprint of the bytes this document was loaded from.
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Write `new_text` back to this document's location in its original
    /// encoding and return the number of bytes written.
    ///
    /// With `verify_unchanged` set, the commit fails with
    /// [`Error::ConcurrentModification`](crate::Error::ConcurrentModification)
    /// if the resource no longer matches what was loaded.
    pub fn commit(
        &self,
        new_text: &str,
        verify_unchanged: bool,
        config: RobustnessConfig,
    ) -> Result<usize> {
        let bytes = self.encoding.encode(new_text);
        let expected = verify_unchanged.then_some(&self.fingerprint);
        io::write_atomic(&self.location, &bytes, expected, config)?;
        Ok(bytes.len())
    }
}
