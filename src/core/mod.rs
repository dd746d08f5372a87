pub mod blurb;
pub mod collection;
pub mod date_range;
pub mod engine;
pub mod reducer;
pub mod selection;
pub mod ticket;

pub use crate::domain::model::{Paper, RawYearRange, SelectionMode, Ticket, TicketId};
pub use crate::domain::ports::{Catalog, ConfigProvider, SearchApi};
pub use crate::utils::error::Result;
