//! # Contactz Architecture
//!
//! Contactz is an address book library with a small interactive prompt on top.
//! Type `add Alice 1234567890`, `phones Alice`, `show all`, `save friends`; the
//! library turns each line into a command and a reply.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, logging setup, config file, the prompt loop       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns contacts, registry, config and the store            │
//! │  - execute(line): parser → dispatcher → CmdResult           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser + Dispatcher (parser.rs, dispatch.rs)               │
//! │  - Free text → keyword + arguments                          │
//! │  - Keyword → handler; operator errors → fixed replies       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over AddressBook + RecordRegistry    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs, record.rs, book.rs) + Storage (store/)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Record Per Name
//!
//! Records are never built directly. [`record::RecordRegistry::get_or_create`]
//! returns the existing record for a name or registers a new one, so two
//! commands naming `Alice` always work on the same record.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`parser`]: Free text to command + arguments
//! - [`dispatch`]: Keyword to handler, error translation
//! - [`commands`]: Business logic for each command
//! - [`book`]: The address book and its JSON document
//! - [`record`]: Records and the registry
//! - [`model`]: `Name`, `Phone`, `Birthday`
//! - [`store`]: Persistence abstraction and implementations
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod parser;
pub mod record;
pub mod store;
