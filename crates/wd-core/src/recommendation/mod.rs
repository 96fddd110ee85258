//! Rule-based outfit suggestions: hard filters over the garment pool, then one
//! weighted random pick per slot.

mod engine;
mod request;

pub use engine::{
    recommend, Recommendation, Slot, SlotPick, ACCESSORY_THRESHOLD, DRESS_THRESHOLD,
    FAVORITE_THRESHOLD,
};
pub use request::OutfitRequest;

#[cfg(test)]
mod tests;
