//! Attendance tracking core of the HRM system: one present/absent mark per employee per day,
//! with history, point, summary and rate queries over an external employee directory.

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod directory;
pub mod docs;
pub mod error;
pub mod model;
pub mod routes;
pub mod service;
pub mod store;

pub use error::{AttendanceError, AttendanceResult};
pub use service::{AttendanceService, compute_attendance_rate, parse_attendance_date};
pub use store::AttendanceStore;
