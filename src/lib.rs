//! # Stockroom
//!
//! > **A stock list, a stock page and a point-of-sale demo, driven from a terminal.**
//!
//! The stock list is a reducer-driven state machine: every change is an action dispatched to a
//! [`Store`](store_framework::Store), which applies the pure
//! [`StockReducer`](stock_reducer::StockReducer) and notifies subscribers. The POS screen is a
//! separate, self-contained demo with its own catalog and cart.
//!
//! ## 🏗️ Design
//!
//! ### Pure transitions, owned state
//! The reducer never mutates; it returns the next list or a typed
//! [`StockRejection`](stock_reducer::StockRejection). The store owns the list and is the only
//! place state changes.
//!
//! ### Injected interaction
//! Confirmations and notices go through an
//! [`Interaction`](store_framework::Interaction) handed in at call time. The binary uses a
//! terminal; tests use [`MockInteraction`](store_framework::mock::MockInteraction).
//!
//! ### Observability
//! `tracing` everywhere with structured fields; set `RUST_LOG` to choose the level.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: `Stock`, `Product`, `CartItem` and integer-cent `Money`.
//! - [`stock_reducer`]: ADD / UPDATE / DELETE transitions and their validation.
//! - [`forms`]: the stock form and its field rules.
//! - [`views`]: table, dialog and navigation bar renderers.
//! - [`pages`]: the stock page workflow (add, edit, delete).
//! - [`pos`]: catalog, cart and checkout.
//! - [`lifecycle`]: configuration and wiring of the whole app.
//! - [`console`]: command parsing and the terminal session.
//!
//! ### Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! STOCKROOM_TAX_PERCENT=8 STOCKROOM_EMPTY=1 cargo run
//! ```

pub mod console;
pub mod forms;
pub mod lifecycle;
pub mod model;
pub mod pages;
pub mod pos;
pub mod stock_reducer;
pub mod views;
