pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod skeleton;

// Re-exports for convenience
pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use skeleton::*;
