pub mod date;
pub mod html;
pub mod logging;
pub mod text;
