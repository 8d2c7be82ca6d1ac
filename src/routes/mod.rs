pub mod health;
pub mod info;
pub mod root;
pub mod users;
