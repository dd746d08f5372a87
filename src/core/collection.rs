use crate::domain::model::{Ticket, TicketId};

/// Insertion-ordered collection of built tickets, keyed by generated id.
///
/// Any cap on concurrent tickets belongs to the caller; `add` itself never
/// rejects. Removing an unknown id is a no-op, like every other delete in
/// this system.
#[derive(Debug, Clone, Default)]
pub struct TicketCollection {
    tickets: Vec<(TicketId, Ticket)>,
}

impl TicketCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, ticket: Ticket) -> TicketId {
        let id = TicketId::generate();
        self.tickets.push((id, ticket));
        id
    }

    pub fn remove(&mut self, id: TicketId) {
        self.tickets.retain(|(existing, _)| *existing != id);
    }

    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, ticket)| ticket)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TicketId, &Ticket)> {
        self.tickets.iter().map(|(id, ticket)| (*id, ticket))
    }

    pub fn as_slice(&self) -> &[(TicketId, Ticket)] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
