//! Core types and traits for lead remark classification
//!
//! This crate provides the types shared by every consumer of the
//! disposition engine:
//! - `Temperature`: the closed Hot/Warm/Cold/Dead tier
//! - `Classification`: disposition, sub-disposition and temperature
//! - `Lead`: the minimal lead view (contacts, assignee, remarks)
//! - `RemarkClassifier`: the classification trait
//! - Presentation helpers mapping labels to styling tokens

pub mod classification;
pub mod lead;
pub mod style;
pub mod temperature;
pub mod traits;

pub use classification::{Classification, REMARK_NOT_CLEAR};
pub use lead::{Channel, Lead};
pub use style::{disposition_color, disposition_style_key, temperature_style_key};
pub use temperature::{ParseTemperatureError, Temperature};
pub use traits::RemarkClassifier;
