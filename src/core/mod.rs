//! Pure computation engine: no persistence, no ambient state.
//! Every function takes the person/date/record set it needs explicitly.

pub mod aggregator;
pub mod dcr;
pub mod kpi;
pub mod lifecycle;
pub mod normalizer;
pub mod report;
pub mod sales;
