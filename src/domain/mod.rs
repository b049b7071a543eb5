//! Domain value objects and types.
//!
//! This module contains the text-valued fields a contact record is built
//! from. `Field` is the generic holder; `Name` and `Phone` wrap it, and
//! `Phone` runs `validate_phone` on every path that can change its value,
//! so an invalid number can never be represented.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::{validate_phone, Phone};
