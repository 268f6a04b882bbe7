//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use tonomi_nav::prelude::*;
//! ```

pub use crate::{
    AdminPage, MemoryRouter, NavConfig, NavContext, NavError, NavigationPatch, NavigationState,
    NavigationStore, PageKey, Router, StorePage, SyncEvent, SyncOutcome, Synchronizer, UrlCodec,
    UrlQuery, View,
};
