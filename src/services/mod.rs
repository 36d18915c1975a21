pub mod api;
pub mod assets;
pub mod catalog;
pub mod decorate;
pub mod matching;
pub mod stats;
