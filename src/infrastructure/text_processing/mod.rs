mod format_dispatch_loader;
mod pdf_adapter;
mod plain_text_adapter;

pub use format_dispatch_loader::FormatDispatchLoader;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
