// GUI components module
pub mod toolbar;

pub use toolbar::EditorToolbar;
