pub mod editor;
pub mod entities;
