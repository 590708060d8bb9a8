pub mod canned_responder;
pub mod prompt;
pub mod remote_responder;
pub mod responder;
pub mod turn_controller;
