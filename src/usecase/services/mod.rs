pub mod import_service;
pub mod report_service;
pub mod session_service;
