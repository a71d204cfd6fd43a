//! Application use cases. Orchestrate domain logic via ports.

pub mod agenda_renderer;
pub mod agenda_service;
pub mod issue_aggregator;
pub mod meeting_resolver;

pub use agenda_service::AgendaService;
pub use issue_aggregator::IssueAggregator;
