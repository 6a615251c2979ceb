use crate::shared::format::ticket_label;

/// Preview of the next ticket number.
///
/// Seeded from the server when the page loads and bumped locally after each
/// successful sale. Purely cosmetic: other terminals selling at the same
/// time make it drift, and the server assigns the real sale id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketCounter {
    next: u64,
}

impl TicketCounter {
    pub fn new(seed: u64) -> Self {
        Self { next: seed.max(1) }
    }

    pub fn next(&self) -> u64 {
        self.next
    }

    pub fn advance(&mut self) -> u64 {
        self.next = self.next.saturating_add(1);
        self.next
    }

    pub fn label(&self) -> String {
        ticket_label(self.next)
    }
}

impl Default for TicketCounter {
    fn default() -> Self {
        Self::new(1)
    }
}
