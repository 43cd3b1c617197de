pub mod html;
pub mod rich_text;
pub mod terminal;
