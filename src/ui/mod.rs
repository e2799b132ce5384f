pub mod cards;
pub mod events;
pub mod mvi;
pub mod selection;
pub mod theme;
