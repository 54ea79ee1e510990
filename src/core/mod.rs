//! Core modules for the FLAMES game

pub mod canceller;
pub mod eliminator;
pub mod mapper;
pub mod normalizer;
pub mod pipeline;
pub mod share_card;

pub use canceller::{cancel_common, CancelOutcome};
pub use eliminator::{eliminate, Elimination};
pub use mapper::map_letter;
pub use normalizer::{soft_check, Normalizer};
pub use pipeline::FlamesEngine;
pub use share_card::{render_share_card, save_share_card};
