pub mod auth;

pub use auth::{dashboard, home, login, signup};
