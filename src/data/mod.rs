//! Data layer: raw play-by-play rows in, chart records out.
//!
//! Architecture:
//! ```text
//!  play-by-play .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse rows → PlayRow (header name → raw text)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  week + win-probability predicates → ChartPlay
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  export   │  serialize survivors → pretty JSON array
//!   └──────────┘
//! ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
