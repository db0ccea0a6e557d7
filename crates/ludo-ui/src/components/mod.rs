pub mod nav;
pub mod panel;
