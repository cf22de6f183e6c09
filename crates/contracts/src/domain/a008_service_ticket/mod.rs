pub mod aggregate;

pub use aggregate::{ServiceTicket, ServiceTicketDto, TicketPriority, TicketStatus};
