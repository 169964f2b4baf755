#[macro_use]
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate async_trait;
#[macro_use]
extern crate nanoid;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;

mod result;
pub use result::*;

#[cfg(test)]
mod test;

pub mod config;
pub mod controller;
pub mod database;
pub mod events;
pub mod r#impl;
pub mod models;
pub mod remote;
pub mod util;

pub use config::Config;
pub use controller::SessionController;
pub use database::{Database, TokenStore};
pub use events::EdufluxEvent;

use async_std::channel::Sender;

/// Eduflux state
#[derive(Default, Clone)]
pub struct Eduflux {
    pub config: Config,
    pub database: Database,
    pub event_channel: Option<Sender<EdufluxEvent>>,
}

impl Eduflux {
    pub async fn publish_event(&self, event: EdufluxEvent) {
        if let Some(sender) = &self.event_channel {
            if let Err(err) = sender.send(event).await {
                error!("Failed to publish an Eduflux event: {:?}", err);
            }
        }
    }
}
