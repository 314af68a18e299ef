mod generate_rules;

pub use generate_rules::{GenerateIocRulesUseCase, RuleGenerationSummary};
