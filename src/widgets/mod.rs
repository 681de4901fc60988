// ABOUTME: Reusable value-controlled input widgets
// Each widget keeps only ephemeral UI state and hands back typed values

pub mod availability_picker;
pub mod button;
pub mod document_upload;
pub mod file_prompt;
pub mod overlay;
pub mod photo_upload;
pub mod select;
pub mod slider;
pub mod text_input;
pub mod time_picker;

pub use availability_picker::{AvailabilityPickerState, GridColumn};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use document_upload::DocumentUploadState;
pub use file_prompt::FilePromptState;
pub use overlay::DismissibleOverlay;
pub use photo_upload::PhotoUploadState;
pub use select::{SelectOption, SelectState};
pub use slider::Slider;
pub use text_input::{InputKind, TextInput};
pub use time_picker::{ClockTime, TimeParseError, TimeParts, TimePickerState};
