//! Mount bookkeeping. Mounting awaits GPU setup, so an `unmount` (or a newer
//! mount) can land while an older mount is still in flight; the generation
//! counter lets that older mount notice and back out.

/// Issued when a mount begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountTicket(u64);

#[derive(Debug, Default)]
pub struct MountGeneration {
    current: u64,
}

impl MountGeneration {
    /// Start a new mount. Every ticket issued before this one goes stale.
    pub fn begin(&mut self) -> MountTicket {
        self.current += 1;
        MountTicket(self.current)
    }

    /// Invalidate the outstanding ticket without issuing a new one.
    pub fn cancel(&mut self) {
        self.current += 1;
    }

    #[inline]
    pub fn is_current(&self, ticket: MountTicket) -> bool {
        ticket.0 == self.current
    }
}
