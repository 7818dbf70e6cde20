mod core;
pub mod interpret;
pub mod models;
pub mod request;
pub use self::core::*;
pub use interpret::*;
pub use models::*;
pub use request::*;
