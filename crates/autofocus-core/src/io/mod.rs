pub mod image_io;
pub mod naming;
pub mod results;
