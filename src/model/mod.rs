//! Data model - wire payloads and entity schemas shared by every client

pub mod dtos;
pub mod structs;

pub use dtos::{
    ApiRequest, AssignmentParams, BulkAssignmentParams, CourseQuery, Filter, Method, Page,
    RawResponse,
};
pub use structs::{Assignment, Course, Student};
