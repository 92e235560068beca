//! Destinations a read copies into.

use alloc::vec::Vec;

use crate::error::TransferFault;

/// The caller's side of a read.
pub trait Destination {
    /// Copies `bytes` in, returning how many were accepted.
    ///
    /// A destination may accept fewer bytes than offered.
    ///
    /// # Errors
    ///
    /// Returns [`TransferFault`] if the destination became unusable
    /// mid-copy; its `delivered` count covers only bytes that landed.
    fn copy_out(&mut self, bytes: &[u8]) -> Result<usize, TransferFault>;
}

impl Destination for [u8] {
    fn copy_out(&mut self, bytes: &[u8]) -> Result<usize, TransferFault> {
        let len = self.len().min(bytes.len());
        self[..len].copy_from_slice(&bytes[..len]);
        Ok(len)
    }
}

impl Destination for Vec<u8> {
    fn copy_out(&mut self, bytes: &[u8]) -> Result<usize, TransferFault> {
        self.extend_from_slice(bytes);
        Ok(bytes.len())
    }
}

/// Adapts a [`std::io::Write`] into a [`Destination`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug)]
pub struct IoDestination<W>(W);

#[cfg(feature = "std")]
impl<W> IoDestination<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self(writer)
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Destination for IoDestination<W> {
    fn copy_out(&mut self, mut bytes: &[u8]) -> Result<usize, TransferFault> {
        let mut delivered = 0;
        while !bytes.is_empty() {
            match self.0.write(bytes) {
                Ok(0) => break,
                Ok(n) => {
                    delivered += n;
                    bytes = &bytes[n..];
                }
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
                Err(err) => {
                    log::warn!(target: "tarot", "writer failed after {delivered} bytes: {err}");
                    return Err(TransferFault { delivered });
                }
            }
        }
        Ok(delivered)
    }
}
