mod item;
mod page;

pub use self::item::{Item, ItemDraft, ItemID, Status};
pub use self::page::{next_page_after, Page};
