pub mod editor;
pub mod list;
pub mod staff_lookup;
