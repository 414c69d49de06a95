#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
pub mod driver;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod presenter;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use driver::{GameLoop, SessionSummary};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use presenter::{CliPresenter, ColumnInput, Notice, Presenter};
