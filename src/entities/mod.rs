//! Record type definitions

pub mod mechanic;
pub mod repair_job;
pub mod repair_type;

pub use mechanic::Mechanic;
pub use repair_job::RepairJob;
pub use repair_type::RepairType;
