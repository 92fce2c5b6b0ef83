//! Value Objects - Immutable, identity-less domain primitives

mod calendar_date;
mod category;
mod item_id;

pub use calendar_date::CalendarDate;
pub use category::Category;
pub use item_id::ItemId;
