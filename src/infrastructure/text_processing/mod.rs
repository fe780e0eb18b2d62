mod composite_file_loader;
mod docx_adapter;
mod pdf_adapter;
mod plain_text_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::DocxAdapter;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;

/// Joins extracted blocks (pages, paragraphs) one per line. Empty blocks are
/// dropped; every kept block is followed by a newline.
pub fn join_lines<I>(blocks: I) -> String
where
    I: IntoIterator<Item = String>,
{
    blocks
        .into_iter()
        .filter(|block| !block.is_empty())
        .fold(String::new(), |mut text, block| {
            text.push_str(&block);
            text.push('\n');
            text
        })
}
