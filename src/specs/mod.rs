// src/specs/mod.rs
//! # Response "specs"
//!
//! One module per remote document the tool reads. Each spec knows **where the
//! ground truth lives** in that document and how to pull it out:
//!
//! - `axl` – the `getCCMVersion` and `listProcessNode` SOAP responses.
//! - `services` – the service selector on `serviceParamEdit.do?service=-1`.
//! - `params` – the parameter rows of one service's `serviceParamEdit.do` page.
//!
//! Every spec exposes a `fetch*` function (transport + parse) and a pure parse
//! function that tests and benches drive with captured markup.
//!
//! ## Conventions
//! - XML goes through `core::xml` (quick-xml), HTML through `core::html` (scraper).
//!   No full-document regexes.
//! - First match wins. Nothing is de-duplicated.
//! - A missing structure is an `Error`, never a silently empty result, except
//!   where the page legitimately has nothing (a service with no settable rows).
//!
//! ## Typical call chain
//! ```text
//! runner::collect → specs::axl::fetch_version / fetch_node_uuid   (AxlClient)
//!                 → AdminSession::login
//!                 → specs::services::fetch → specs::params::fetch  (AdminSession)
//! ```
pub mod axl;
pub mod params;
pub mod services;
