//! Prompt construction.
//!
//! Turns form input (a described specimen, or a picked category) into the
//! user-role text sent to the completion service. Everything here is pure.

pub mod formatter;
pub mod router;

pub use formatter::{
    build_category_prompt, build_category_prompt_in, build_specimen_prompt,
    build_specimen_prompt_in, SpecimenDescription,
};
pub use router::{CategoryChoice, Locale, NO_IMAGE_LABEL};
