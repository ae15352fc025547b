mod health;
mod transcribe;
mod upload_form;

pub use health::health_handler;
pub use transcribe::transcribe_handler;
pub use upload_form::upload_form_handler;
