//! Records returned by the public API
//!
//! Fields the upstream service may omit are `Option` rather than defaulted,
//! so a missing value is never mistaken for a zero.

mod capital;
mod clan;
mod common;
mod league;
mod player;
mod ranking;
mod war;

pub use capital::*;
pub use clan::*;
pub use common::*;
pub use league::*;
pub use player::*;
pub use ranking::*;
pub use war::*;
