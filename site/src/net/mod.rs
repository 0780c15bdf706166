//! Network edge of the site: the third-party forms client.

pub mod forms;
