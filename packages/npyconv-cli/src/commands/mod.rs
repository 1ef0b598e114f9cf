pub mod batch;
pub mod csv;
pub mod info;
pub mod mat;
pub mod validate;
