pub mod artifact;
pub mod layout;
pub mod render_input;
