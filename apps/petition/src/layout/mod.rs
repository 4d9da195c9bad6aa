// Layout: markup interpretation and page style.
// Pure functions; rendering to DOCX lives in `render`.

pub mod markup;
pub mod page;

pub use markup::{parse_document, PARAGRAPH_SEPARATOR};
pub use page::{default_page_style, PageStyle};
