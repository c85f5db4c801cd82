//! Plassets domain logic: the asset model, its validation rules and the
//! read filters. No database or HTTP dependencies.

pub mod assets;
pub mod error;
