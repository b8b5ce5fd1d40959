pub mod badge;
pub mod button;
pub mod checkbox;
pub mod field;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use field::{FieldError, FormField};
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
