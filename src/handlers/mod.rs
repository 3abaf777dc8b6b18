//! HTTP handlers, one module per resource.

pub mod company;
pub mod industry;
pub mod invoice;
