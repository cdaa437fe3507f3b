//! Repository layer — entity-scoped operations over the generic collection
//! surface. All public functions are re-exported here.

mod account;
mod appointment;
mod medical_record;
mod notification;
mod staff;

pub use account::*;
pub use appointment::*;
pub use lab_test::*;
pub use medical_record::*;
pub use notification::*;
pub use staff::*;
