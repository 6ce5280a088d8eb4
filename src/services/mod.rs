// Service layer module exports

pub mod scheduler;
pub mod timeline;
