pub mod config;
pub mod console_interface;
pub mod core;
pub mod layout_export;
pub mod models;

#[cfg(test)]
mod test;
