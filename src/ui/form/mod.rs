mod intent;
mod reducer;
mod state;
mod validate;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, FormMode, FormState, ValidationErrors};
pub use validate::validate;
