pub mod history;
pub mod template;
