mod alarm;
mod notification;
mod profile;
mod session;
mod stats;
mod status;

pub mod dtos {
    pub use crate::alarm::dtos::*;
    pub use crate::profile::dtos::*;
    pub use crate::session::dtos::*;
}

pub use crate::alarm::api::*;
pub use crate::notification::api::*;
pub use crate::profile::api::*;
pub use crate::session::api::*;
pub use crate::stats::api::*;
pub use crate::status::api::*;
