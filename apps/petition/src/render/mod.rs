// Document rendering: DOCX packaging and output destinations.

pub mod destination;
pub mod docx;

pub use destination::{ascii_file_name, output_file_name, persist, DestinationResolver, OutputDirs};
pub use docx::{render, to_bytes, DOCX_MIME};
