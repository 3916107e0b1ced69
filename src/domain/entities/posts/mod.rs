//! Posts Entity Module

pub mod post;
pub mod comment;
pub mod like;

pub use post::*;
pub use comment::*;
pub use like::*;
