pub mod attendance;
pub mod employee;
pub mod role;

pub use attendance::{
    AttendanceOverview, AttendanceRecord, AttendanceStatus, AttendanceSummary, EmployeeAttendance,
};
pub use employee::{Employee, EmployeeId};
pub use role::Role;
