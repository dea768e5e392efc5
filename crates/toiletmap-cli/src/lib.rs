//! toiletmap-cli
//! =============
//!
//! Command-line interface for the `toiletmap-core` Copenhagen toilet map.
//!
//! This crate primarily provides a binary (`toiletmap`). The library
//! target only carries this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! toiletmap --help
//! toiletmap stats
//! toiletmap list
//! toiletmap render --location ask-grant
//! toiletmap --data-dir ./data --asset toilet_cph.json.gz popup "kongens"
//! ```
//!
//! For programmatic access to the records, popups and the map screen,
//! use the [`toiletmap-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
