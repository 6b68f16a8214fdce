//! Command parsing and dispatch.
//!
//! [`dispatch::Dispatcher`] is the boundary between chat messages and the services: it filters
//! messages, runs the matching command and turns both results and errors into [`Reply`]s.
//!
//! [`Reply`]: crate::bot::model::message::Reply

pub mod command;
pub mod dispatch;
