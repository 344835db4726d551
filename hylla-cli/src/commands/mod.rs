pub mod docs;
pub mod edit;
pub mod home;
pub mod list;
pub mod new;
pub mod open;
pub mod remove;
