// Request-scoped value types exchanged between the HTTP layer and the gateway.
// Wire names are camelCase to match the JobPsych and HireDesk clients.

pub mod analysis;
pub mod chat;
pub mod hiredesk;
pub mod status;

pub use analysis::{AnalysisResult, JobAnalysisRequest, JobAnalysisType, TextAnalysisType};
pub use chat::{ChatRequest, ChatResponse, SessionType};
pub use hiredesk::{HireDeskQuery, HireDeskResponse, QueryType};
pub use status::{ConnectionStatus, ServiceStatus};
