// HireDesk: recruiter-assistant queries. Prompting and the provider call go
// through the shared model gateway; this module owns the cross-field rule.

pub mod handlers;
pub mod service;
pub mod validation;
