pub mod pump;
pub mod telemetry;
pub mod vessel;
