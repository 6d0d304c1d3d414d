//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and routes it to the player model. It is organized into submodules by
//! responsibility:
//!
//! - `input`: Key event handling
//! - `playback`: Player button presses
//! - `script`: Parsing and replaying textual action scripts

mod input;
mod playback;
pub mod script;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::AppModel;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self { model }
    }
}
