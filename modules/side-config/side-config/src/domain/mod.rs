pub mod collector;
pub mod credentials;
pub mod editor;
pub mod error;
pub mod notices;
pub mod ports;
pub mod tabs;


pub use credentials::{NodeCredentials, SideConfigReloader};
pub use editor::{FieldUpdate, SideConfigEditor};
pub use error::DomainError;
pub use ports::HostServices;
