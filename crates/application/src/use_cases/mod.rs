pub mod dns;
pub mod ioc;

pub use dns::AnswerQueryUseCase;
pub use ioc::{GenerateIocRulesUseCase, RuleGenerationSummary};
